use core_types::Benchmark;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whole-period comparison of the portfolio against one market index.
///
/// Returns, alpha, tracking error and active return carry 2 decimals; beta
/// and the information ratio carry 3. Every percentage is already scaled
/// by 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkComparison {
    /// The market index this comparison is against.
    pub benchmark: Benchmark,
    pub portfolio_return_pct: Decimal,
    pub benchmark_return_pct: Decimal,
    /// CAPM excess return, expressed in whole-period terms.
    pub alpha: Decimal,
    /// OLS slope of portfolio returns on benchmark returns.
    pub beta: Decimal,
    /// Annualized deviation of the per-period return differences.
    pub tracking_error_pct: Decimal,
    /// Portfolio total return minus benchmark total return.
    pub active_return_pct: Decimal,
    /// Active return divided by tracking error; zero when the tracking
    /// error is zero.
    pub information_ratio: Decimal,
}
