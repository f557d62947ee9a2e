//! # Meridian Ingestion
//!
//! Turns the raw valuation CSV export into an ordered sequence of typed
//! [`core_types::PortfolioRecord`]s, collecting fatal errors and
//! recoverable warnings separately so one bad row never discards the rest
//! of the batch.
//!
//! ## Architectural Principles
//!
//! - **Data Contract Only:** this crate owns the shape, units and
//!   error/warning taxonomy of the input. It performs no analysis.
//! - **Row Isolation:** parsing errors are aggregated per batch and never
//!   raised per row; the all-or-nothing [`load_records`] entry point folds
//!   a non-empty error list into a single combined failure.

// Declare the modules that constitute this crate.
pub mod date;
pub mod error;
pub mod parser;

// Re-export the key components to create a clean, public-facing API.
pub use date::parse_portfolio_date;
pub use error::IngestError;
pub use parser::{ParseOutcome, load_records, parse_portfolio_csv};
