use crate::report::BenchmarkComparison;
use core_types::{Benchmark, PortfolioRecord, benchmark_series, share_value_series};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

/// Compares the portfolio against each market index over the whole period.
#[derive(Debug, Clone)]
pub struct BenchmarkComparator {
    risk_free_rate: Decimal,
}

impl Default for BenchmarkComparator {
    fn default() -> Self {
        Self {
            risk_free_rate: dec!(0.03),
        }
    }
}

impl BenchmarkComparator {
    /// Creates a comparator with the given annual risk-free rate (a
    /// fraction, 0.03 = 3%).
    pub fn new(risk_free_rate: Decimal) -> Self {
        Self { risk_free_rate }
    }

    /// Runs the comparison for every index, in [`Benchmark::ALL`] order.
    ///
    /// Requires at least two records; anything less returns an empty result
    /// set rather than an error.
    pub fn compare(&self, records: &[PortfolioRecord]) -> Vec<BenchmarkComparison> {
        if records.len() < 2 {
            return Vec::new();
        }

        let shares = share_value_series(records);
        let portfolio_returns = stats::simple_returns(&shares);
        let portfolio_total = total_return_pct(&shares);

        // The risk-free rate enters the CAPM term in percentage points,
        // whole-period — not annualized.
        let risk_free_pct = self.risk_free_rate * dec!(100);

        Benchmark::ALL
            .iter()
            .map(|&index| {
                let levels = benchmark_series(records, index);
                let benchmark_returns = stats::simple_returns(&levels);
                let benchmark_total = total_return_pct(&levels);

                let beta = stats::beta(&portfolio_returns, &benchmark_returns);
                let alpha =
                    portfolio_total - (risk_free_pct + beta * (benchmark_total - risk_free_pct));

                let common = portfolio_returns.len().min(benchmark_returns.len());
                let differences: Vec<Decimal> = (0..common)
                    .map(|i| portfolio_returns[i] - benchmark_returns[i])
                    .collect();
                let tracking_error = stats::annualized_volatility_pct(&differences);

                let active_return = portfolio_total - benchmark_total;
                let information_ratio = if tracking_error.is_zero() {
                    Decimal::ZERO
                } else {
                    active_return / tracking_error
                };

                debug!(?index, %beta, "compared portfolio against benchmark");

                BenchmarkComparison {
                    benchmark: index,
                    portfolio_return_pct: portfolio_total.round_dp(2),
                    benchmark_return_pct: benchmark_total.round_dp(2),
                    alpha: alpha.round_dp(2),
                    beta: beta.round_dp(3),
                    tracking_error_pct: tracking_error.round_dp(2),
                    active_return_pct: active_return.round_dp(2),
                    information_ratio: information_ratio.round_dp(3),
                }
            })
            .collect()
    }
}

/// Whole-period simple return of a level series, in percent (unrounded).
/// Zero when the series opens at zero (a defaulted benchmark field).
fn total_return_pct(levels: &[Decimal]) -> Decimal {
    match (levels.first(), levels.last()) {
        (Some(first), Some(last)) if !first.is_zero() => (*last - *first) / *first * dec!(100),
        _ => Decimal::ZERO,
    }
}
