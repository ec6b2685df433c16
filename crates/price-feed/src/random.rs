use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Seeded pseudorandom prices drawn uniformly from
/// `[base - spread, base + spread]`, in whole cents.
///
/// The same seed always reproduces the same sequence, which keeps "random"
/// scenarios comparable across runs. The lower bound is clamped to one
/// cent so every drawn price stays positive.
#[derive(Debug, Clone)]
pub struct RandomPrices {
    rng: ChaCha8Rng,
    low_cents: i64,
    high_cents: i64,
}

impl RandomPrices {
    pub fn new(seed: u64, base: Decimal, spread: Decimal) -> Self {
        let base_cents = to_cents(base);
        let spread_cents = to_cents(spread).abs();
        let low_cents = (base_cents - spread_cents).max(1);
        let high_cents = (base_cents + spread_cents).max(low_cents);
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            low_cents,
            high_cents,
        }
    }
}

impl Iterator for RandomPrices {
    type Item = Decimal;

    fn next(&mut self) -> Option<Decimal> {
        let cents = self.rng.gen_range(self.low_cents..=self.high_cents);
        Some(Decimal::new(cents, 2))
    }
}

/// Whole cents in `value`, saturating on overflow.
fn to_cents(value: Decimal) -> i64 {
    (value * Decimal::ONE_HUNDRED)
        .trunc()
        .to_i64()
        .unwrap_or(i64::MAX)
}
