use crate::ledger::Ledger;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The outcome of a single period's policy decision.
///
/// All four fields are non-negative deltas; a trade is produced once per
/// strategy per period and folded into the owning [`Ledger`] immediately.
/// It is never persisted on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub payment: Decimal,
    pub income: Decimal,
    pub buy_units: Decimal,
    pub sell_units: Decimal,
}

impl Trade {
    /// A no-op trade. Recording it still advances the period series.
    pub fn zero() -> Self {
        Self::default()
    }

    /// A pure purchase.
    pub fn buy(payment: Decimal, buy_units: Decimal) -> Self {
        Self {
            payment,
            buy_units,
            ..Self::default()
        }
    }

    /// A pure sale.
    pub fn sell(income: Decimal, sell_units: Decimal) -> Self {
        Self {
            income,
            sell_units,
            ..Self::default()
        }
    }
}

/// A strategy's identity and final accounting state, as collected by the
/// simulation driver and consumed by the analytics engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategySnapshot {
    pub label: String,
    pub ledger: Ledger,
}
