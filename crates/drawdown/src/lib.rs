//! # Meridian Drawdown Extractor
//!
//! Segments the share-value series into discrete peak-to-trough-to-recovery
//! episodes, tracks the currently open episode, and produces aggregate
//! drawdown statistics.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** a pure logic crate depending only on `core-types`.
//! - **Single Forward Pass:** the extractor is an explicit little state
//!   machine (running peak, open-episode flag, deepest point) updated once
//!   per record; no recursion, no hidden iterator state.
//! - **Total Semantics:** fewer than two records yields the empty analysis,
//!   never an error.

// Declare the modules that constitute this crate.
pub mod extractor;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use extractor::DrawdownExtractor;
pub use report::{DrawdownAnalysis, DrawdownPeriod};
