//! # Meridian Metrics Engine
//!
//! This crate derives the descriptive return metrics of a portfolio — the
//! whole-period summary, the per-calendar-year return table and the
//! correlation of the share value against each market index.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems. It depends only on `core-types` and the `stats`
//!   primitives.
//! - **Stateless Calculation:** The `MetricsEngine` is a stateless
//!   calculator. It takes a validated record sequence as input and produces
//!   plain report values as output, recomputing from scratch on every call.
//!
//! ## Public API
//!
//! - `MetricsEngine`: the struct that contains the calculation logic.
//! - `PerformanceSummary`, `AnnualReturn`, `CorrelationSet`: the report
//!   value objects.
//! - `AnalyticsError`: the specific error types that can be returned from
//!   this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::MetricsEngine;
pub use error::AnalyticsError;
pub use report::{AnnualReturn, CorrelationSet, PerformanceSummary};
