use crate::structs::Trade;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Running account of a single strategy's trading activity.
///
/// The ledger is pure accounting. It accumulates per-period trade deltas
/// into four monotonically non-decreasing totals and appends one entry per
/// period to each derived series. It holds no policy logic and is owned
/// exclusively by its strategy, so no two strategies ever observe each
/// other's state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    /// Cumulative cash paid for purchases.
    pub payment: Decimal,
    /// Cumulative cash received from sales.
    pub income: Decimal,
    /// Cumulative units bought.
    pub buy_units: Decimal,
    /// Cumulative units sold.
    pub sell_units: Decimal,
    /// Average acquisition cost per unit, one entry per period.
    pub cost_per_unit: Vec<Decimal>,
    /// Average sale proceeds per unit, one entry per period.
    pub income_per_unit: Vec<Decimal>,
    /// Mark-to-market value of the account, one entry per period.
    pub total_value: Vec<Decimal>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one period's trade into the running totals, then appends the
    /// derived entries computed from the post-update totals and the given
    /// price.
    ///
    /// Ratios with a zero denominator record `0` instead of failing, and an
    /// all-zero trade still advances every series by one entry, so the three
    /// series always share the same length.
    pub fn update_with_trade(&mut self, trade: &Trade, current_price: Decimal) {
        self.payment += trade.payment;
        self.income += trade.income;
        self.buy_units += trade.buy_units;
        self.sell_units += trade.sell_units;

        self.cost_per_unit
            .push(ratio_or_zero(self.payment, self.buy_units));
        self.income_per_unit
            .push(ratio_or_zero(self.income, self.sell_units));
        self.total_value
            .push(self.units_held() * current_price + self.income - self.payment);
    }

    /// Establishes a lump-sum position ahead of a decumulation run.
    ///
    /// Overwrites `buy_units` and `payment` rather than accumulating. The
    /// derived series are left untouched, so the first recorded period of
    /// the run is the first sale.
    pub fn seed_lump_sum(&mut self, price: Decimal, units: Decimal) {
        self.buy_units = units;
        self.payment = price * units;
    }

    /// Units currently held (bought minus sold).
    pub fn units_held(&self) -> Decimal {
        self.buy_units - self.sell_units
    }

    /// The most recent cost-per-unit entry, if any period has been recorded.
    pub fn last_cost_per_unit(&self) -> Option<Decimal> {
        self.cost_per_unit.last().copied()
    }

    /// Number of periods folded into this ledger so far.
    pub fn periods_recorded(&self) -> usize {
        self.total_value.len()
    }
}

/// `numerator / denominator`, with a zero denominator yielding zero.
///
/// This is the single division rule of the accounting core: a ratio that
/// cannot be formed yet (nothing bought, nothing sold, price of zero) is
/// reported as zero, never as an error.
pub fn ratio_or_zero(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        Decimal::ZERO
    } else {
        numerator / denominator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn update_appends_one_entry_per_series_per_period() {
        let mut ledger = Ledger::new();
        ledger.update_with_trade(&Trade::buy(dec!(500), dec!(5)), dec!(100));
        ledger.update_with_trade(&Trade::zero(), dec!(200));
        ledger.update_with_trade(&Trade::sell(dec!(200), dec!(1)), dec!(200));

        assert_eq!(ledger.cost_per_unit.len(), 3);
        assert_eq!(ledger.income_per_unit.len(), 3);
        assert_eq!(ledger.total_value.len(), 3);
        assert_eq!(ledger.periods_recorded(), 3);
    }

    #[test]
    fn totals_are_non_decreasing_across_updates() {
        let mut ledger = Ledger::new();
        let mut previous = (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO, Decimal::ZERO);

        let trades = [
            Trade::buy(dec!(750), dec!(7.5)),
            Trade::zero(),
            Trade::sell(dec!(400), dec!(2)),
            Trade::buy(dec!(100), dec!(1)),
        ];
        for trade in &trades {
            ledger.update_with_trade(trade, dec!(100));
            let current = (
                ledger.payment,
                ledger.income,
                ledger.buy_units,
                ledger.sell_units,
            );
            assert!(current.0 >= previous.0);
            assert!(current.1 >= previous.1);
            assert!(current.2 >= previous.2);
            assert!(current.3 >= previous.3);
            previous = current;
        }
    }

    #[test]
    fn empty_ledger_reports_zero_ratios_not_errors() {
        let mut ledger = Ledger::new();
        ledger.update_with_trade(&Trade::zero(), dec!(100));

        assert_eq!(ledger.cost_per_unit, vec![Decimal::ZERO]);
        assert_eq!(ledger.income_per_unit, vec![Decimal::ZERO]);
        assert_eq!(ledger.total_value, vec![Decimal::ZERO]);
    }

    #[test]
    fn derived_entries_use_post_update_totals() {
        let mut ledger = Ledger::new();
        ledger.update_with_trade(&Trade::buy(dec!(500), dec!(5)), dec!(100));
        ledger.update_with_trade(&Trade::buy(dec!(1000), dec!(5)), dec!(200));

        // 1500 paid for 10 units.
        assert_eq!(ledger.cost_per_unit, vec![dec!(100), dec!(150)]);
        // 10 units marked at 200, minus 1500 paid.
        assert_eq!(*ledger.total_value.last().unwrap(), dec!(500));
    }

    #[test]
    fn seeding_a_lump_sum_overwrites_instead_of_accumulating() {
        let mut ledger = Ledger::new();
        ledger.seed_lump_sum(dec!(100), dec!(10));
        ledger.seed_lump_sum(dec!(100), dec!(10));

        assert_eq!(ledger.buy_units, dec!(10));
        assert_eq!(ledger.payment, dec!(1000));
        assert_eq!(ledger.periods_recorded(), 0);
    }

    #[test]
    fn ratio_with_zero_denominator_is_zero() {
        assert_eq!(ratio_or_zero(dec!(750), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(ratio_or_zero(dec!(750), dec!(100)), dec!(7.5));
    }
}
