use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error(
        "Ledger series for '{label}' has {actual} entries but {expected} periods were recorded"
    )]
    SeriesLengthMismatch {
        label: String,
        expected: usize,
        actual: usize,
    },
}
