//! # Drip Analytics Engine
//!
//! This crate turns the raw accounting state of a finished simulation run
//! into a standardized report.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   price sources or rendering. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `AnalyticsEngine` is a stateless
//!   calculator. It takes ledger snapshots and the recorded price list as
//!   input and produces a `SimulationReport` as output, which makes it
//!   highly reliable and easy to test.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: The main struct that contains the calculation logic.
//! - `SimulationReport` / `StrategySummary`: The standardized output structs.
//! - `AnalyticsError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::AnalyticsEngine;
pub use error::AnalyticsError;
pub use report::{SimulationReport, StrategySummary};
