use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The risk profile of the share-value series.
///
/// Percentages are already scaled by 100: volatility, drawdown and downside
/// deviation carry 2 decimals, the ratios 3. The all-zero object doubles as
/// the defined degenerate result for sequences of fewer than two records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskMetrics {
    /// Annualized standard deviation of daily returns, in percent.
    pub volatility_pct: Decimal,
    /// Annualized excess return divided by volatility.
    pub sharpe_ratio: Decimal,
    /// Largest peak-to-trough decline observed, in percent.
    pub max_drawdown_pct: Decimal,
    /// Annualized deviation of the strictly negative daily returns.
    pub downside_deviation_pct: Decimal,
    /// Annualized excess return divided by downside deviation.
    pub sortino_ratio: Decimal,
}

impl RiskMetrics {
    /// Creates the all-zero metrics object.
    pub fn zeroed() -> Self {
        Self {
            volatility_pct: Decimal::ZERO,
            sharpe_ratio: Decimal::ZERO,
            max_drawdown_pct: Decimal::ZERO,
            downside_deviation_pct: Decimal::ZERO,
            sortino_ratio: Decimal::ZERO,
        }
    }
}

impl Default for RiskMetrics {
    fn default() -> Self {
        Self::zeroed()
    }
}
