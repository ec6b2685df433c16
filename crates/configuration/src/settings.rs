use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub simulation: Simulation,
    pub strategies: Strategies,
    pub prices: PriceFeedSettings,
}

/// Parameters shared by every simulation run.
#[derive(Debug, Clone, Deserialize)]
pub struct Simulation {
    /// Number of monthly periods to simulate.
    pub periods: usize,
    /// Spending cap for accumulation runs: net cash out (payment minus
    /// income) may never exceed this.
    pub max_cash: Decimal,
    /// Lump-sum position, in units, established before a decumulation run.
    pub spot_units: Decimal,
}

/// Contains the parameter sets for all available strategies.
#[derive(Debug, Clone, Deserialize)]
pub struct Strategies {
    pub fixed_amount: FixedAmountParams,
    pub fixed_price: FixedPriceParams,
    pub fixed_value: FixedValueParams,
    pub weighted_price: WeightedPriceParams,
}

/// Parameters for the constant-unit policy.
#[derive(Debug, Clone, Deserialize)]
pub struct FixedAmountParams {
    /// Units traded every period, whatever the price.
    pub units: Decimal,
}

/// Parameters for the dollar-cost-averaging policy.
#[derive(Debug, Clone, Deserialize)]
pub struct FixedPriceParams {
    /// Cash committed every period, whatever the price.
    pub spend: Decimal,
}

/// Parameters for the value-averaging policy.
#[derive(Debug, Clone, Deserialize)]
pub struct FixedValueParams {
    /// Target growth of net asset value per period.
    pub value: Decimal,
}

/// Parameters for the weighted dollar-cost-averaging policy.
#[derive(Debug, Clone, Deserialize)]
pub struct WeightedPriceParams {
    /// Cash committed every period before the contrarian adjustment.
    pub spend: Decimal,
    /// Strength of the contrarian adjustment; 0 behaves exactly like
    /// `fixed_price`.
    pub weight: Decimal,
}

/// Selects and parameterizes the price source for a run.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PriceFeedSettings {
    /// Endlessly cycles a fixed list of prices.
    Cycle { prices: Vec<Decimal> },
    /// Seeded uniform draws around a base price; reproducible per seed.
    Random {
        seed: u64,
        base: Decimal,
        spread: Decimal,
    },
    /// Monthly closes read from a text file, oldest first.
    History {
        path: PathBuf,
        /// Leading periods to skip before the simulation starts.
        #[serde(default)]
        skip: usize,
    },
}
