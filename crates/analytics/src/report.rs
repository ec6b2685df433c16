use chrono::{DateTime, Utc};
use core_types::StrategySnapshot;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Scalar performance summary for a single strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategySummary {
    pub label: String,

    // I. Cumulative Accounting Totals
    pub total_payment: Decimal,
    pub total_income: Decimal,
    pub buy_units: Decimal,
    pub sell_units: Decimal,
    pub units_held: Decimal,

    // II. Derived Metrics
    /// The final cost-per-unit entry; 0 when nothing was ever bought.
    pub average_cost: Decimal,
    /// The final total-value entry; 0 when no period was recorded.
    pub final_value: Decimal,
    /// The highest total-value entry seen during the run.
    pub peak_value: Decimal,
    /// The deepest peak-to-trough decline of the total-value series.
    pub max_drawdown: Decimal,
    pub max_drawdown_pct: Option<Decimal>, // Option<> because the peak can be non-positive

    pub periods: usize,
}

/// The standardized output of a simulation run.
///
/// Carries both the scalar summaries (for tables) and the full per-period
/// snapshots (cost-per-unit, income-per-unit, total-value series) plus the
/// recorded price list, so downstream consumers can chart or re-derive
/// anything without re-running the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub periods: usize,
    pub prices: Vec<Decimal>,
    pub summaries: Vec<StrategySummary>,
    pub snapshots: Vec<StrategySnapshot>,
}
