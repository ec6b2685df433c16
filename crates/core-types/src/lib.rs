pub mod enums;
pub mod error;
pub mod ledger;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::StrategyId;
pub use error::CoreError;
pub use ledger::{Ledger, ratio_or_zero};
pub use structs::{StrategySnapshot, Trade};
