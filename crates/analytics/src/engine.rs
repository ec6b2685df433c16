use crate::error::AnalyticsError;
use crate::report::{SimulationReport, StrategySummary};
use chrono::Utc;
use core_types::StrategySnapshot;
use rust_decimal::Decimal;
use uuid::Uuid;

/// A stateless calculator for deriving summary metrics from ledger
/// snapshots.
#[derive(Debug, Default)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for turning a finished run into a report.
    ///
    /// # Arguments
    ///
    /// * `run_id` - The unique ID of the simulation run.
    /// * `snapshots` - One ledger snapshot per strategy that was stepped.
    /// * `prices` - The prices the driver recorded, one per period.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `SimulationReport` or an `AnalyticsError`
    /// when a ledger's series length disagrees with the recorded periods.
    pub fn calculate(
        &self,
        run_id: Uuid,
        snapshots: &[StrategySnapshot],
        prices: &[Decimal],
    ) -> Result<SimulationReport, AnalyticsError> {
        let periods = prices.len();

        let mut summaries = Vec::with_capacity(snapshots.len());
        for snapshot in snapshots {
            if snapshot.ledger.periods_recorded() != periods {
                return Err(AnalyticsError::SeriesLengthMismatch {
                    label: snapshot.label.clone(),
                    expected: periods,
                    actual: snapshot.ledger.periods_recorded(),
                });
            }
            summaries.push(self.summarize(snapshot));
        }

        Ok(SimulationReport {
            run_id,
            generated_at: Utc::now(),
            periods,
            prices: prices.to_vec(),
            summaries,
            snapshots: snapshots.to_vec(),
        })
    }

    /// Collapses one ledger into its scalar summary.
    fn summarize(&self, snapshot: &StrategySnapshot) -> StrategySummary {
        let ledger = &snapshot.ledger;
        let (peak_value, max_drawdown) = self.drawdown(&ledger.total_value);

        let max_drawdown_pct = if peak_value > Decimal::ZERO {
            Some((max_drawdown / peak_value) * Decimal::ONE_HUNDRED)
        } else {
            None
        };

        StrategySummary {
            label: snapshot.label.clone(),
            total_payment: ledger.payment,
            total_income: ledger.income,
            buy_units: ledger.buy_units,
            sell_units: ledger.sell_units,
            units_held: ledger.units_held(),
            average_cost: ledger.last_cost_per_unit().unwrap_or_default(),
            final_value: ledger.total_value.last().copied().unwrap_or_default(),
            peak_value,
            max_drawdown,
            max_drawdown_pct,
            periods: ledger.periods_recorded(),
        }
    }

    /// Peak value and maximum peak-to-trough decline of a value series.
    fn drawdown(&self, values: &[Decimal]) -> (Decimal, Decimal) {
        let mut max_drawdown = Decimal::ZERO;

        if values.is_empty() {
            return (Decimal::ZERO, Decimal::ZERO);
        }

        let mut peak = values[0];
        for &value in values {
            if value > peak {
                peak = value;
            }
            let drawdown = peak - value;
            if drawdown > max_drawdown {
                max_drawdown = drawdown;
            }
        }

        (peak, max_drawdown)
    }
}
