use crate::error::StrategyError;
use crate::fixed_price::units_for_spend;
use crate::{Strategy, covered_by_holdings, within_spending_cap};
use configuration::WeightedPriceParams;
use core_types::{Ledger, Trade};
use rust_decimal::Decimal;

/// Weighted dollar-cost averaging: the fixed-spend sizing of
/// [`FixedPrice`](crate::FixedPrice), scaled by how far the current price
/// sits from this strategy's own trailing cost-per-unit.
///
/// A price below the trailing cost scales the purchase up, a price above
/// scales it down, and the factor never goes below zero. With a weight of
/// zero the policy degenerates to plain dollar-cost averaging.
pub struct WeightedPrice {
    spend: Decimal,
    weight: Decimal,
    ledger: Ledger,
}

impl WeightedPrice {
    pub fn new(params: WeightedPriceParams) -> Result<Self, StrategyError> {
        if params.spend.is_sign_negative() {
            return Err(StrategyError::InvalidParameters(
                "weighted_price.spend must not be negative".to_string(),
            ));
        }
        if params.weight.is_sign_negative() {
            return Err(StrategyError::InvalidParameters(
                "weighted_price.weight must not be negative".to_string(),
            ));
        }
        Ok(Self {
            spend: params.spend,
            weight: params.weight,
            ledger: Ledger::new(),
        })
    }

    /// Contrarian adjustment factor for the current period.
    ///
    /// Until the ledger has a usable trailing cost there is nothing to
    /// deviate from, so the factor is 1.
    fn adjustment_rate(&self, current_price: Decimal) -> Decimal {
        match self.ledger.last_cost_per_unit() {
            Some(cost) if !cost.is_zero() => {
                let rate = Decimal::ONE + self.weight * (Decimal::ONE - current_price / cost);
                rate.max(Decimal::ZERO)
            }
            _ => Decimal::ONE,
        }
    }
}

impl Strategy for WeightedPrice {
    fn label(&self) -> &'static str {
        "WeightedPrice"
    }

    fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    fn buy(&mut self, current_price: Decimal, max_cash: Decimal) {
        let rate = self.adjustment_rate(current_price);
        let buy_units = units_for_spend(self.spend, current_price) * rate;
        let payment = current_price * buy_units;
        let trade = if within_spending_cap(&self.ledger, payment, max_cash) {
            Trade::buy(payment, buy_units)
        } else {
            tracing::debug!(%payment, %max_cash, %rate, "purchase exceeds the spending cap, recording a zero trade");
            Trade::zero()
        };
        self.ledger.update_with_trade(&trade, current_price);
    }

    fn sell(&mut self, current_price: Decimal) {
        // Selling is unweighted; the contrarian adjustment only shapes
        // accumulation.
        let sell_units = units_for_spend(self.spend, current_price);
        let trade = if covered_by_holdings(&self.ledger, sell_units) {
            Trade::sell(current_price * sell_units, sell_units)
        } else {
            tracing::debug!(units = %sell_units, held = %self.ledger.units_held(), "sale exceeds holdings, recording a zero trade");
            Trade::zero()
        };
        self.ledger.update_with_trade(&trade, current_price);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn strategy(spend: Decimal, weight: Decimal) -> WeightedPrice {
        WeightedPrice::new(WeightedPriceParams { spend, weight }).unwrap()
    }

    #[test]
    fn the_first_period_buys_at_the_unadjusted_rate() {
        let mut weighted = strategy(dec!(750), dec!(1));
        weighted.buy(dec!(100), dec!(40000));

        let ledger = weighted.ledger();
        assert_eq!(ledger.buy_units, dec!(7.5));
        assert_eq!(ledger.payment, dec!(750));
        assert_eq!(ledger.cost_per_unit, vec![dec!(100)]);
    }

    #[test]
    fn a_price_at_double_the_trailing_cost_clamps_the_rate_to_zero() {
        let mut weighted = strategy(dec!(750), dec!(1));
        weighted.buy(dec!(100), dec!(40000));
        // Trailing cost is 100; at 200 the raw rate is 1 + (1 - 2) = 0.
        weighted.buy(dec!(200), dec!(40000));

        let ledger = weighted.ledger();
        assert_eq!(ledger.buy_units, dec!(7.5));
        assert_eq!(ledger.payment, dec!(750));
        assert_eq!(ledger.periods_recorded(), 2);
    }

    #[test]
    fn a_price_below_the_trailing_cost_scales_the_purchase_up() {
        let mut weighted = strategy(dec!(750), dec!(1));
        weighted.buy(dec!(100), dec!(40000));
        // Trailing cost is 100; at 50 the rate is 1 + (1 - 0.5) = 1.5, so
        // the 15 units a plain fixed spend would buy become 22.5.
        weighted.buy(dec!(50), dec!(40000));

        let ledger = weighted.ledger();
        assert_eq!(ledger.buy_units, dec!(30));
        assert_eq!(ledger.payment, dec!(1875));
    }

    #[test]
    fn a_zero_weight_degenerates_to_plain_dollar_cost_averaging() {
        let mut weighted = strategy(dec!(750), dec!(0));
        weighted.buy(dec!(100), dec!(40000));
        weighted.buy(dec!(200), dec!(40000));

        let ledger = weighted.ledger();
        assert_eq!(ledger.payment, dec!(1500));
        assert_eq!(ledger.buy_units, dec!(11.25));
    }
}
