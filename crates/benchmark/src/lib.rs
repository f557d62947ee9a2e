//! # Meridian Benchmark Comparator
//!
//! Whole-period comparison statistics of the portfolio against each of the
//! three market indices: total returns, OLS beta, CAPM alpha, tracking
//! error, active return and information ratio.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** a pure logic crate depending only on `core-types`
//!   and the `stats` primitives.
//! - **Total Semantics:** the comparator never fails. Fewer than two
//!   records yields an empty result set, and zero denominators substitute
//!   zero by contract.

// Declare the modules that constitute this crate.
pub mod comparator;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use comparator::BenchmarkComparator;
pub use report::BenchmarkComparison;
