use core_types::Benchmark;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whole-period return summary of the portfolio share value.
///
/// Both figures are percentages already scaled by 100 and pre-rounded, so
/// display layers need no further precision handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    /// Simple return over the full period, 2 decimals.
    pub total_return_pct: Decimal,
    /// Geometric annualized return over the full period, 2 decimals.
    pub annualized_return_pct: Decimal,
}

/// Percentage change of every series within one calendar year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualReturn {
    pub year: i32,
    pub portfolio_pct: Decimal,
    pub benchmark_a_pct: Decimal,
    pub benchmark_b_pct: Decimal,
    pub benchmark_c_pct: Decimal,
}

impl AnnualReturn {
    /// Returns this year's percentage change of the given market index.
    pub fn benchmark_pct(&self, index: Benchmark) -> Decimal {
        match index {
            Benchmark::IndexA => self.benchmark_a_pct,
            Benchmark::IndexB => self.benchmark_b_pct,
            Benchmark::IndexC => self.benchmark_c_pct,
        }
    }
}

/// Pearson correlation of the share-value series against each market index
/// over the full available history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationSet {
    pub benchmark_a: Decimal,
    pub benchmark_b: Decimal,
    pub benchmark_c: Decimal,
}

impl CorrelationSet {
    /// Returns the correlation coefficient for the given market index.
    pub fn correlation(&self, index: Benchmark) -> Decimal {
        match index {
            Benchmark::IndexA => self.benchmark_a,
            Benchmark::IndexB => self.benchmark_b,
            Benchmark::IndexC => self.benchmark_c,
        }
    }
}
