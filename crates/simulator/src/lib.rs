use crate::error::SimulatorError;
use analytics::{AnalyticsEngine, SimulationReport};
use core_types::StrategySnapshot;
use indicatif::{ProgressBar, ProgressStyle};
use rust_decimal::Decimal;
use strategies::Strategy;
use uuid::Uuid;

pub mod error;

/// The simulation driver.
///
/// Steps a fixed list of strategies through a lazy price sequence, one
/// period at a time, then hands the collected state to the analytics
/// engine. Each strategy owns its ledger exclusively; the driver never
/// lets one strategy observe another's state.
///
/// The driver pulls exactly one price per period and stops at the
/// configured period count or at sequence exhaustion, whichever comes
/// first.
pub struct Simulator {
    run_id: Uuid,
    strategies: Vec<Box<dyn Strategy>>,
    analytics_engine: AnalyticsEngine,
}

impl Simulator {
    /// Constructs a new `Simulator` over the given strategies, tagging the
    /// run with a fresh id.
    pub fn new(strategies: Vec<Box<dyn Strategy>>) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            strategies,
            analytics_engine: AnalyticsEngine::new(),
        }
    }

    /// The unique id reports from this simulator will carry.
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Runs an accumulation (periodic buying) simulation.
    ///
    /// Every period, each strategy computes and records its purchase at the
    /// pulled price, subject to the shared `max_cash` spending gate.
    pub fn run_accumulation<P>(
        &mut self,
        mut prices: P,
        periods: usize,
        max_cash: Decimal,
    ) -> Result<SimulationReport, SimulatorError>
    where
        P: Iterator<Item = Decimal>,
    {
        tracing::info!(run_id = %self.run_id, periods, %max_cash, "starting accumulation run");
        let progress_bar = Self::progress_bar(periods)?;
        let mut recorded_prices = Vec::with_capacity(periods);

        for period in 1..=periods {
            let Some(price) = prices.next() else {
                tracing::info!(period, "price sequence exhausted, stopping early");
                break;
            };

            for strategy in self.strategies.iter_mut() {
                strategy.buy(price, max_cash);
            }

            recorded_prices.push(price);
            progress_bar.inc(1);
        }

        progress_bar.finish_with_message("Simulation complete. Analyzing results...");
        self.finish(recorded_prices)
    }

    /// Runs a decumulation (periodic selling) simulation.
    ///
    /// The opening period first establishes the lump-sum position the
    /// strategies will unwind and flips them into selling mode; every
    /// period, the opening one included, then records each strategy's sale.
    pub fn run_decumulation<P>(
        &mut self,
        mut prices: P,
        periods: usize,
        spot_units: Decimal,
    ) -> Result<SimulationReport, SimulatorError>
    where
        P: Iterator<Item = Decimal>,
    {
        tracing::info!(run_id = %self.run_id, periods, %spot_units, "starting decumulation run");
        let progress_bar = Self::progress_bar(periods)?;
        let mut recorded_prices = Vec::with_capacity(periods);

        for period in 1..=periods {
            let Some(price) = prices.next() else {
                tracing::info!(period, "price sequence exhausted, stopping early");
                break;
            };

            if period == 1 {
                for strategy in self.strategies.iter_mut() {
                    strategy.seed_position(price, spot_units);
                    strategy.begin_sell_phase();
                }
            }

            for strategy in self.strategies.iter_mut() {
                strategy.sell(price);
            }

            recorded_prices.push(price);
            progress_bar.inc(1);
        }

        progress_bar.finish_with_message("Simulation complete. Analyzing results...");
        self.finish(recorded_prices)
    }

    /// Snapshots every ledger and delegates the report to analytics.
    fn finish(&self, recorded_prices: Vec<Decimal>) -> Result<SimulationReport, SimulatorError> {
        if recorded_prices.is_empty() {
            return Err(SimulatorError::PricesUnavailable);
        }

        let snapshots: Vec<StrategySnapshot> = self
            .strategies
            .iter()
            .map(|strategy| StrategySnapshot {
                label: strategy.label().to_string(),
                ledger: strategy.ledger().clone(),
            })
            .collect();

        let report =
            self.analytics_engine
                .calculate(self.run_id, &snapshots, &recorded_prices)?;
        tracing::info!(run_id = %self.run_id, periods = report.periods, "run complete");
        Ok(report)
    }

    fn progress_bar(periods: usize) -> Result<ProgressBar, SimulatorError> {
        let progress_bar = ProgressBar::new(periods as u64);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
                .progress_chars("=>-"),
        );
        Ok(progress_bar)
    }
}
