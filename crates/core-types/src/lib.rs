pub mod enums;
pub mod records;

// Re-export the core types to provide a clean public API.
pub use enums::Benchmark;
pub use records::{PortfolioRecord, benchmark_series, share_value_series};
