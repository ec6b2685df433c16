use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error(
        "Unknown strategy id '{0}' (expected one of: fixed_amount, fixed_price, fixed_value, weighted_price)"
    )]
    UnknownStrategy(String),
}
