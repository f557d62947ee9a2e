use crate::report::RiskMetrics;
use core_types::{PortfolioRecord, share_value_series};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

/// Derives volatility, drawdown and risk-adjusted return ratios from the
/// share-value series, against a fixed annual risk-free rate.
#[derive(Debug, Clone)]
pub struct RiskEngine {
    risk_free_rate: Decimal,
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self {
            risk_free_rate: dec!(0.03),
        }
    }
}

impl RiskEngine {
    /// Creates an engine with the given annual risk-free rate (a fraction,
    /// 0.03 = 3%).
    pub fn new(risk_free_rate: Decimal) -> Self {
        Self { risk_free_rate }
    }

    /// Computes the risk profile of a record sequence.
    ///
    /// Fewer than two records is a defined degenerate case and yields the
    /// all-zero metrics object; numeric edge cases inside the calculation
    /// (zero volatility, no negative returns) substitute zero rather than
    /// failing, so the result is always displayable.
    pub fn calculate(&self, records: &[PortfolioRecord]) -> RiskMetrics {
        if records.len() < 2 {
            return RiskMetrics::zeroed();
        }

        let daily_returns = stats::simple_returns(&share_value_series(records));

        let volatility = stats::annualized_volatility_pct(&daily_returns);
        let annualized_return =
            stats::mean(&daily_returns) * stats::TRADING_DAYS_PER_YEAR * dec!(100);
        let excess_return = annualized_return - self.risk_free_rate * dec!(100);

        let negative_returns: Vec<Decimal> = daily_returns
            .iter()
            .copied()
            .filter(|r| *r < Decimal::ZERO)
            .collect();
        let downside_deviation = stats::annualized_volatility_pct(&negative_returns);

        debug!(
            returns = daily_returns.len(),
            negative = negative_returns.len(),
            "computed risk profile"
        );

        RiskMetrics {
            volatility_pct: volatility.round_dp(2),
            sharpe_ratio: ratio_or_zero(excess_return, volatility).round_dp(3),
            max_drawdown_pct: max_drawdown_pct(records).round_dp(2),
            downside_deviation_pct: downside_deviation.round_dp(2),
            sortino_ratio: ratio_or_zero(excess_return, downside_deviation).round_dp(3),
        }
    }
}

/// Largest percentage decline from a running peak of the share value.
fn max_drawdown_pct(records: &[PortfolioRecord]) -> Decimal {
    let mut peak = records[0].share_value;
    let mut max_drawdown = Decimal::ZERO;

    for record in records {
        if record.share_value > peak {
            peak = record.share_value;
        }
        // peak inherits the record invariant share_value > 0.
        let drawdown = (peak - record.share_value) / peak * dec!(100);
        if drawdown > max_drawdown {
            max_drawdown = drawdown;
        }
    }

    max_drawdown
}

fn ratio_or_zero(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        Decimal::ZERO
    } else {
        numerator / denominator
    }
}
