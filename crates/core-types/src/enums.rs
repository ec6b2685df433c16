use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies one of the recurring-investment policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyId {
    FixedAmount,
    FixedPrice,
    FixedValue,
    WeightedPrice,
}

impl StrategyId {
    /// Every policy, in reporting order.
    pub const ALL: [StrategyId; 4] = [
        StrategyId::FixedAmount,
        StrategyId::FixedPrice,
        StrategyId::FixedValue,
        StrategyId::WeightedPrice,
    ];

    /// The canonical identifier used in configuration files and on the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyId::FixedAmount => "fixed_amount",
            StrategyId::FixedPrice => "fixed_price",
            StrategyId::FixedValue => "fixed_value",
            StrategyId::WeightedPrice => "weighted_price",
        }
    }
}

impl fmt::Display for StrategyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fixed_amount" | "fixed-amount" => Ok(StrategyId::FixedAmount),
            "fixed_price" | "fixed-price" => Ok(StrategyId::FixedPrice),
            "fixed_value" | "fixed-value" => Ok(StrategyId::FixedValue),
            "weighted_price" | "weighted-price" => Ok(StrategyId::WeightedPrice),
            other => Err(CoreError::UnknownStrategy(other.to_string())),
        }
    }
}
