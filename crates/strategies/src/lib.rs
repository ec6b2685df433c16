//! # Drip Strategy Library
//!
//! This crate contains the policy logic of the drip simulator. It defines a
//! universal `Strategy` trait and provides the four concrete
//! recurring-investment policies.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   price sources, progress bars, or reporting. It depends only on
//!   `core-types` and `configuration`.
//! - **Policy-Agnostic Driver:** By using the `Strategy` trait, the
//!   `simulator` crate can step any policy through a run without knowing its
//!   internal details.
//! - **Extensibility:** Adding a new policy involves creating a new module,
//!   implementing the `Strategy` trait, and adding it to the `StrategyId`
//!   enum and `factory`.
//!
//! ## Public API
//!
//! The primary public components are:
//! - `Strategy`: The core trait all policies implement.
//! - `StrategyId`: A simple enum to identify which policy to create.
//! - `create_strategy`: The factory function to construct a policy instance.
//! - The concrete policy structs themselves (e.g., `FixedPrice`).

// Declare all the modules that constitute this crate.
pub mod error;
pub mod factory;
pub mod fixed_amount;
pub mod fixed_price;
pub mod fixed_value;
pub mod weighted_price;

// Re-export the key components to create a clean, public-facing API.
pub use error::StrategyError;
pub use factory::create_strategy;
pub use fixed_amount::FixedAmount;
pub use fixed_price::FixedPrice;
pub use fixed_value::FixedValue;
pub use weighted_price::WeightedPrice;

// Re-export StrategyId from core_types
pub use core_types::StrategyId;

use core_types::Ledger;
use rust_decimal::Decimal;

/// The core trait that all recurring-investment policies must implement.
///
/// `buy` and `sell` are infallible on purpose: a trade that violates a gate
/// is replaced by a zero trade and still recorded, so every policy's ledger
/// advances by exactly one series entry per period no matter what happened.
///
/// The `&mut self` is crucial, as several policies maintain internal state
/// between periods (a month counter, a trailing cost-per-unit). The
/// `Send + Sync` bounds allow boxed strategies to be moved across threads.
pub trait Strategy: Send + Sync {
    /// Human-readable policy name used in reports.
    fn label(&self) -> &'static str;

    /// Read access to the policy's private ledger.
    fn ledger(&self) -> &Ledger;

    /// Mutable access to the ledger, for the provided trait methods.
    fn ledger_mut(&mut self) -> &mut Ledger;

    /// Computes and records this period's purchase at `current_price`,
    /// subject to the `max_cash` spending gate.
    fn buy(&mut self, current_price: Decimal, max_cash: Decimal);

    /// Computes and records this period's sale at `current_price`, subject
    /// to the holdings gate.
    fn sell(&mut self, current_price: Decimal);

    /// One-time hook invoked after seeding and before the first `sell` of a
    /// decumulation run. Most policies need no preparation.
    fn begin_sell_phase(&mut self) {}

    /// Establishes a lump-sum position ahead of a decumulation run.
    fn seed_position(&mut self, current_price: Decimal, units: Decimal) {
        self.ledger_mut().seed_lump_sum(current_price, units);
    }
}

/// Spending gate: a purchase may not push net cash out (payment minus
/// income) beyond `max_cash`.
pub(crate) fn within_spending_cap(ledger: &Ledger, payment: Decimal, max_cash: Decimal) -> bool {
    payment + ledger.payment - ledger.income <= max_cash
}

/// Holdings gate: a sale may not exceed the units currently held.
pub(crate) fn covered_by_holdings(ledger: &Ledger, units: Decimal) -> bool {
    units + ledger.sell_units - ledger.buy_units <= Decimal::ZERO
}
