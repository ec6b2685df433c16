use crate::error::StrategyError;
use crate::{Strategy, covered_by_holdings, within_spending_cap};
use configuration::FixedValueParams;
use core_types::{Ledger, Trade, ratio_or_zero};
use rust_decimal::Decimal;

/// The value-averaging policy: trade whatever it takes to keep net asset
/// value on a linear target path, `month x value` while accumulating and
/// `init_value - month x value` while decumulating.
///
/// Unlike the fixed policies this one can trade in either direction on any
/// period; being ahead of the accumulation path triggers a sale even in buy
/// mode.
pub struct FixedValue {
    value: Decimal,
    month: u32,
    /// Snapshot of cumulative payment taken by `begin_sell_phase`; anchors
    /// the decumulation target path.
    init_value: Decimal,
    ledger: Ledger,
}

impl FixedValue {
    pub fn new(params: FixedValueParams) -> Result<Self, StrategyError> {
        if params.value.is_sign_negative() {
            return Err(StrategyError::InvalidParameters(
                "fixed_value.value must not be negative".to_string(),
            ));
        }
        Ok(Self {
            value: params.value,
            month: 0,
            init_value: Decimal::ZERO,
            ledger: Ledger::new(),
        })
    }

    /// The value gap between the target path and current holdings.
    fn gap_to(&self, target_assets: Decimal, current_price: Decimal) -> Decimal {
        let current_assets = current_price * self.ledger.units_held();
        target_assets - current_assets
    }
}

impl Strategy for FixedValue {
    fn label(&self) -> &'static str {
        "FixedValue"
    }

    fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    fn buy(&mut self, current_price: Decimal, max_cash: Decimal) {
        self.month += 1;
        let target_assets = Decimal::from(self.month) * self.value;
        let gap = self.gap_to(target_assets, current_price);

        let trade = if gap > Decimal::ZERO {
            // Behind the target path: buy the shortfall, subject to the
            // spending cap.
            if within_spending_cap(&self.ledger, gap, max_cash) {
                Trade::buy(gap, ratio_or_zero(gap, current_price))
            } else {
                tracing::debug!(payment = %gap, %max_cash, "purchase exceeds the spending cap, recording a zero trade");
                Trade::zero()
            }
        } else if gap < Decimal::ZERO {
            // Ahead of the target path: sell the overshoot. Trimming back
            // to target is not a spend, so the cap does not apply here.
            let income = -gap;
            Trade::sell(income, ratio_or_zero(income, current_price))
        } else {
            Trade::zero()
        };
        self.ledger.update_with_trade(&trade, current_price);
    }

    fn sell(&mut self, current_price: Decimal) {
        self.month += 1;
        let target_assets = self.init_value - Decimal::from(self.month) * self.value;
        let gap = self.gap_to(target_assets, current_price);

        let trade = if gap > Decimal::ZERO {
            // Below the drawdown path: buy back up to it, uncapped.
            Trade::buy(gap, ratio_or_zero(gap, current_price))
        } else if gap < Decimal::ZERO {
            let income = -gap;
            let sell_units = ratio_or_zero(income, current_price);
            if covered_by_holdings(&self.ledger, sell_units) {
                Trade::sell(income, sell_units)
            } else {
                tracing::debug!(units = %sell_units, held = %self.ledger.units_held(), "sale exceeds holdings, recording a zero trade");
                Trade::zero()
            }
        } else {
            Trade::zero()
        };
        self.ledger.update_with_trade(&trade, current_price);
    }

    fn begin_sell_phase(&mut self) {
        self.init_value = self.ledger.payment;
    }
}
