use crate::error::StrategyError;
use crate::{Strategy, covered_by_holdings, within_spending_cap};
use configuration::FixedAmountParams;
use core_types::{Ledger, Trade};
use rust_decimal::Decimal;

/// The constant-unit policy: trade the same number of units every period,
/// whatever the price. The simplest baseline the other policies are
/// compared against.
pub struct FixedAmount {
    units: Decimal,
    ledger: Ledger,
}

impl FixedAmount {
    pub fn new(params: FixedAmountParams) -> Result<Self, StrategyError> {
        if params.units.is_sign_negative() {
            return Err(StrategyError::InvalidParameters(
                "fixed_amount.units must not be negative".to_string(),
            ));
        }
        Ok(Self {
            units: params.units,
            ledger: Ledger::new(),
        })
    }
}

impl Strategy for FixedAmount {
    fn label(&self) -> &'static str {
        "FixedAmount"
    }

    fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    fn buy(&mut self, current_price: Decimal, max_cash: Decimal) {
        let payment = current_price * self.units;
        let trade = if within_spending_cap(&self.ledger, payment, max_cash) {
            Trade::buy(payment, self.units)
        } else {
            tracing::debug!(%payment, %max_cash, "purchase exceeds the spending cap, recording a zero trade");
            Trade::zero()
        };
        self.ledger.update_with_trade(&trade, current_price);
    }

    fn sell(&mut self, current_price: Decimal) {
        let trade = if covered_by_holdings(&self.ledger, self.units) {
            Trade::sell(current_price * self.units, self.units)
        } else {
            tracing::debug!(units = %self.units, held = %self.ledger.units_held(), "sale exceeds holdings, recording a zero trade");
            Trade::zero()
        };
        self.ledger.update_with_trade(&trade, current_price);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn strategy(units: Decimal) -> FixedAmount {
        FixedAmount::new(FixedAmountParams { units }).unwrap()
    }

    #[test]
    fn buys_a_constant_quantity_each_period() {
        let mut fixed = strategy(dec!(5));
        for _ in 0..3 {
            fixed.buy(dec!(100), dec!(10000));
        }

        let ledger = fixed.ledger();
        assert_eq!(ledger.buy_units, dec!(15));
        assert_eq!(ledger.payment, dec!(1500));
        assert_eq!(ledger.cost_per_unit, vec![dec!(100); 3]);
    }

    #[test]
    fn a_purchase_over_the_cap_is_zeroed_but_still_recorded() {
        let mut fixed = strategy(dec!(100));
        fixed.buy(dec!(100), dec!(50));

        let ledger = fixed.ledger();
        assert_eq!(ledger.buy_units, Decimal::ZERO);
        assert_eq!(ledger.payment, Decimal::ZERO);
        assert_eq!(ledger.periods_recorded(), 1);
        assert_eq!(ledger.cost_per_unit, vec![Decimal::ZERO]);
    }

    #[test]
    fn selling_a_seeded_position_down_to_zero() {
        let mut fixed = strategy(dec!(10));
        fixed.seed_position(dec!(100), dec!(10));
        fixed.begin_sell_phase();
        fixed.sell(dec!(100));

        let ledger = fixed.ledger();
        assert_eq!(ledger.units_held(), Decimal::ZERO);
        assert_eq!(ledger.income, dec!(1000));
        assert_eq!(ledger.income_per_unit, vec![dec!(100)]);
    }

    #[test]
    fn an_over_sell_is_zeroed_and_the_ledger_left_unchanged_that_period() {
        let mut fixed = strategy(dec!(10));
        fixed.seed_position(dec!(100), dec!(5));
        fixed.sell(dec!(100));

        let ledger = fixed.ledger();
        assert_eq!(ledger.sell_units, Decimal::ZERO);
        assert_eq!(ledger.income, Decimal::ZERO);
        assert_eq!(ledger.units_held(), dec!(5));
        assert_eq!(ledger.periods_recorded(), 1);
    }

    #[test]
    fn negative_units_are_rejected() {
        assert!(FixedAmount::new(FixedAmountParams { units: dec!(-1) }).is_err());
    }
}
