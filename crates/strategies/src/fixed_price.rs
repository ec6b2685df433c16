use crate::error::StrategyError;
use crate::{Strategy, covered_by_holdings, within_spending_cap};
use configuration::FixedPriceParams;
use core_types::{Ledger, Trade, ratio_or_zero};
use rust_decimal::Decimal;

/// The dollar-cost-averaging policy: commit the same amount of cash every
/// period, so more units are bought when the price is low and fewer when it
/// is high.
pub struct FixedPrice {
    spend: Decimal,
    ledger: Ledger,
}

/// Units tradeable for a fixed cash commitment at the given price.
///
/// Shared by the plain and weighted dollar-cost-averaging policies; a zero
/// price sizes the trade to zero rather than failing.
pub(crate) fn units_for_spend(spend: Decimal, price: Decimal) -> Decimal {
    ratio_or_zero(spend, price)
}

impl FixedPrice {
    pub fn new(params: FixedPriceParams) -> Result<Self, StrategyError> {
        if params.spend.is_sign_negative() {
            return Err(StrategyError::InvalidParameters(
                "fixed_price.spend must not be negative".to_string(),
            ));
        }
        Ok(Self {
            spend: params.spend,
            ledger: Ledger::new(),
        })
    }
}

impl Strategy for FixedPrice {
    fn label(&self) -> &'static str {
        "FixedPrice"
    }

    fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    fn buy(&mut self, current_price: Decimal, max_cash: Decimal) {
        let buy_units = units_for_spend(self.spend, current_price);
        // Recompute the payment from the sized units so a zero-priced
        // period nets out to a zero trade.
        let payment = current_price * buy_units;
        let trade = if within_spending_cap(&self.ledger, payment, max_cash) {
            Trade::buy(payment, buy_units)
        } else {
            tracing::debug!(%payment, %max_cash, "purchase exceeds the spending cap, recording a zero trade");
            Trade::zero()
        };
        self.ledger.update_with_trade(&trade, current_price);
    }

    fn sell(&mut self, current_price: Decimal) {
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

    fn strategy(spend: Decimal) -> FixedPrice {
        FixedPrice::new(FixedPriceParams { spend }).unwrap()
    }

    #[test]
    fn commits_the_same_cash_at_any_price() {
        let mut dca = strategy(dec!(750));
        dca.buy(dec!(100), dec!(40000));
        dca.buy(dec!(200), dec!(40000));

        let ledger = dca.ledger();
        assert_eq!(ledger.payment, dec!(1500));
        assert_eq!(ledger.buy_units, dec!(11.25));
        // 7.5 units at 100, 3.75 units at 200.
        assert_eq!(
            *ledger.cost_per_unit.last().unwrap(),
            dec!(1500) / dec!(11.25)
        );
    }

    #[test]
    fn a_zero_price_sizes_the_trade_to_zero() {
        let mut dca = strategy(dec!(750));
        dca.buy(Decimal::ZERO, dec!(40000));

        let ledger = dca.ledger();
        assert_eq!(ledger.buy_units, Decimal::ZERO);
        assert_eq!(ledger.payment, Decimal::ZERO);
        assert_eq!(ledger.periods_recorded(), 1);
    }

    #[test]
    fn stops_buying_once_the_cap_is_reached() {
        let mut dca = strategy(dec!(750));
        dca.buy(dec!(100), dec!(1000));
        dca.buy(dec!(100), dec!(1000));

        let ledger = dca.ledger();
        // The second 750 would push net spend to 1500, past the 1000 cap.
        assert_eq!(ledger.payment, dec!(750));
        assert_eq!(ledger.periods_recorded(), 2);
    }

    #[test]
    fn sells_a_fixed_value_of_units_while_covered() {
        let mut dca = strategy(dec!(750));
        dca.seed_position(dec!(100), dec!(10));
        dca.sell(dec!(100));
        dca.sell(dec!(100));

        let ledger = dca.ledger();
        // First sale of 7.5 units is covered; the second would overdraw the
        // remaining 2.5 and is zeroed.
        assert_eq!(ledger.sell_units, dec!(7.5));
        assert_eq!(ledger.income, dec!(750));
        assert_eq!(ledger.periods_recorded(), 2);
    }
}
