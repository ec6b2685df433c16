//! # Drip Price Feeds
//!
//! Lazy, pull-based price sequences for the simulator. Every feed is an
//! `Iterator<Item = Decimal>`: returning `None` is the end-of-sequence
//! signal, and the driver pulls exactly one price per period without
//! buffering ahead. Feeds may be infinite (cycle, random) or finite
//! (file-backed history); the simulator's period count bounds every run.

// Declare all the modules that constitute this crate.
pub mod cycle;
pub mod error;
pub mod history;
pub mod random;

// Re-export the key components to create a clean, public-facing API.
pub use cycle::CyclePrices;
pub use error::FeedError;
pub use history::HistoryPrices;
pub use random::RandomPrices;

use configuration::PriceFeedSettings;
use rust_decimal::Decimal;

/// A boxed lazy price sequence, ready for the simulator to pull from.
pub type BoxedPriceFeed = Box<dyn Iterator<Item = Decimal> + Send>;

/// Builds the price feed described by the configuration.
///
/// Mirrors the strategy factory: the driver stays source-agnostic, and a
/// new feed kind only touches this match.
pub fn build_feed(settings: &PriceFeedSettings) -> Result<BoxedPriceFeed, FeedError> {
    match settings {
        PriceFeedSettings::Cycle { prices } => Ok(Box::new(CyclePrices::new(prices.clone()))),
        PriceFeedSettings::Random { seed, base, spread } => {
            Ok(Box::new(RandomPrices::new(*seed, *base, *spread)))
        }
        PriceFeedSettings::History { path, skip } => {
            Ok(Box::new(HistoryPrices::from_file(path, *skip)?))
        }
    }
}
