//! # Meridian Statistics Primitives
//!
//! Pure numeric building blocks shared by the metrics, risk, and benchmark
//! engines.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems and no dependency on the record types; everything
//!   operates on plain `Decimal` slices.
//! - **Total Functions:** every edge case (empty input, zero variance, zero
//!   denominators) has a documented zero-default instead of an error or a
//!   NaN, so downstream reports always have a displayable number.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

/// Trading days used to annualize daily variance figures.
pub const TRADING_DAYS_PER_YEAR: Decimal = dec!(252);

/// Calendar days per year used to convert elapsed time into years.
pub const DAYS_PER_YEAR: Decimal = dec!(365.25);

/// Arithmetic mean. Zero for an empty slice.
pub fn mean(values: &[Decimal]) -> Decimal {
    if values.is_empty() {
        return Decimal::ZERO;
    }
    values.iter().sum::<Decimal>() / Decimal::from(values.len())
}

/// Population variance (divisor n). Zero for an empty slice.
pub fn variance(values: &[Decimal]) -> Decimal {
    if values.is_empty() {
        return Decimal::ZERO;
    }
    let m = mean(values);
    values
        .iter()
        .map(|v| {
            let d = *v - m;
            d * d
        })
        .sum::<Decimal>()
        / Decimal::from(values.len())
}

/// Covariance of two sequences truncated to their common length (divisor n).
/// Zero when that length is zero.
pub fn covariance(x: &[Decimal], y: &[Decimal]) -> Decimal {
    let n = x.len().min(y.len());
    if n == 0 {
        return Decimal::ZERO;
    }
    let mx = mean(&x[..n]);
    let my = mean(&y[..n]);
    let mut acc = Decimal::ZERO;
    for i in 0..n {
        acc += (x[i] - mx) * (y[i] - my);
    }
    acc / Decimal::from(n)
}

/// Pearson correlation coefficient of two sequences, truncated to the
/// shorter length. Zero when that length is zero, or when either standard
/// deviation is zero.
pub fn pearson_correlation(x: &[Decimal], y: &[Decimal]) -> Decimal {
    let n = x.len().min(y.len());
    if n == 0 {
        return Decimal::ZERO;
    }
    let sd_x = variance(&x[..n]).sqrt().unwrap_or(Decimal::ZERO);
    let sd_y = variance(&y[..n]).sqrt().unwrap_or(Decimal::ZERO);
    if sd_x.is_zero() || sd_y.is_zero() {
        return Decimal::ZERO;
    }
    covariance(&x[..n], &y[..n]) / (sd_x * sd_y)
}

/// Period-over-period simple returns of a level series. Produces one fewer
/// return than the input length; an index whose denominator level is exactly
/// zero is silently skipped rather than producing an infinity.
pub fn simple_returns(levels: &[Decimal]) -> Vec<Decimal> {
    levels
        .windows(2)
        .filter_map(|w| {
            if w[0].is_zero() {
                None
            } else {
                Some((w[1] - w[0]) / w[0])
            }
        })
        .collect()
}

/// Ordinary-least-squares slope of portfolio returns on benchmark returns:
/// covariance / benchmark variance, over the common length. Zero when the
/// benchmark variance is zero.
pub fn beta(portfolio: &[Decimal], benchmark: &[Decimal]) -> Decimal {
    let n = portfolio.len().min(benchmark.len());
    if n == 0 {
        return Decimal::ZERO;
    }
    let benchmark_variance = variance(&benchmark[..n]);
    if benchmark_variance.is_zero() {
        return Decimal::ZERO;
    }
    covariance(&portfolio[..n], &benchmark[..n]) / benchmark_variance
}

/// Annualized volatility of a daily-return series, in percentage points:
/// sqrt(daily variance × 252) × 100. The 252-trading-day convention is used
/// uniformly across the repository.
pub fn annualized_volatility_pct(daily_returns: &[Decimal]) -> Decimal {
    (variance(daily_returns) * TRADING_DAYS_PER_YEAR)
        .sqrt()
        .unwrap_or(Decimal::ZERO)
        * dec!(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Decimal, b: Decimal) -> bool {
        (a - b).abs() < dec!(0.0000001)
    }

    #[test]
    fn mean_and_variance_default_to_zero_on_empty_input() {
        assert_eq!(mean(&[]), Decimal::ZERO);
        assert_eq!(variance(&[]), Decimal::ZERO);
    }

    #[test]
    fn variance_uses_the_population_divisor() {
        let values = vec![dec!(2), dec!(4), dec!(4), dec!(4), dec!(5), dec!(5), dec!(7), dec!(9)];
        assert_eq!(variance(&values), dec!(4));
    }

    #[test]
    fn correlation_of_a_series_with_itself_is_one() {
        let x = vec![dec!(1.0), dec!(1.1), dec!(0.9), dec!(1.4), dec!(1.2)];
        assert!(close(pearson_correlation(&x, &x), dec!(1)));
    }

    #[test]
    fn correlation_of_constant_sequences_is_zero_not_nan() {
        let x = vec![dec!(3), dec!(3), dec!(3)];
        let y = vec![dec!(7), dec!(7), dec!(7)];
        assert_eq!(pearson_correlation(&x, &y), Decimal::ZERO);
        assert_eq!(pearson_correlation(&[], &[]), Decimal::ZERO);
    }

    #[test]
    fn correlation_truncates_to_the_shorter_sequence() {
        let x = vec![dec!(1), dec!(2), dec!(3), dec!(4)];
        let y = vec![dec!(2), dec!(4), dec!(6)];
        assert!(close(pearson_correlation(&x, &y), dec!(1)));
    }

    #[test]
    fn simple_returns_skip_zero_denominators() {
        let levels = vec![dec!(100), dec!(0), dec!(50), dec!(75)];
        let returns = simple_returns(&levels);
        // The 0 -> 50 step is dropped; 100 -> 0 and 50 -> 75 survive.
        assert_eq!(returns, vec![dec!(-1), dec!(0.5)]);
    }

    #[test]
    fn beta_of_a_scaled_series_is_the_scale_factor() {
        let benchmark = vec![dec!(0.01), dec!(-0.02), dec!(0.03), dec!(0.00)];
        let portfolio: Vec<Decimal> = benchmark.iter().map(|r| *r * dec!(2)).collect();
        assert!(close(beta(&portfolio, &benchmark), dec!(2)));
    }

    #[test]
    fn beta_is_zero_when_the_benchmark_never_moves() {
        let portfolio = vec![dec!(0.01), dec!(-0.02), dec!(0.03)];
        let benchmark = vec![dec!(0.01), dec!(0.01), dec!(0.01)];
        assert_eq!(beta(&portfolio, &benchmark), Decimal::ZERO);
    }

    #[test]
    fn annualized_volatility_of_a_flat_series_is_zero() {
        let returns = vec![dec!(0.01), dec!(0.01), dec!(0.01)];
        assert_eq!(annualized_volatility_pct(&returns), Decimal::ZERO);
    }
}
