//! # Meridian Risk Engine
//!
//! Volatility, Sharpe and Sortino ratios, downside deviation and maximum
//! drawdown of the portfolio share value.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** a pure logic crate depending only on `core-types`
//!   and the `stats` primitives.
//! - **Total Semantics:** the engine never fails. Fewer than two records is
//!   a defined degenerate case returning the all-zero [`RiskMetrics`], and
//!   zero denominators substitute zero by contract.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::RiskEngine;
pub use report::RiskMetrics;
