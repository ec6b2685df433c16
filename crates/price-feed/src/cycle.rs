use rust_decimal::Decimal;

/// Endlessly cycles a fixed list of prices.
///
/// The two-element case reproduces the classic alternating teaching series
/// (100, 200, 100, ...). An empty list behaves as a feed that is exhausted
/// from the start.
#[derive(Debug, Clone)]
pub struct CyclePrices {
    prices: Vec<Decimal>,
    next_index: usize,
}

impl CyclePrices {
    pub fn new(prices: Vec<Decimal>) -> Self {
        Self {
            prices,
            next_index: 0,
        }
    }
}

impl Iterator for CyclePrices {
    type Item = Decimal;

    fn next(&mut self) -> Option<Decimal> {
        let price = self.prices.get(self.next_index).copied()?;
        self.next_index = (self.next_index + 1) % self.prices.len();
        Some(price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn alternates_through_the_list_forever() {
        let feed = CyclePrices::new(vec![dec!(100), dec!(200)]);
        let prices: Vec<Decimal> = feed.take(5).collect();
        assert_eq!(
            prices,
            vec![dec!(100), dec!(200), dec!(100), dec!(200), dec!(100)]
        );
    }

    #[test]
    fn an_empty_list_is_immediately_exhausted() {
        let mut feed = CyclePrices::new(Vec::new());
        assert_eq!(feed.next(), None);
    }
}
