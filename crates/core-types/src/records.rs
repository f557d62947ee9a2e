use crate::enums::Benchmark;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single validated trading-day observation of the portfolio and the
/// three market indices it is measured against.
///
/// Records are immutable once constructed. Every analysis engine consumes a
/// shared `&[PortfolioRecord]` in input order; none of them mutates or
/// re-sorts it. The parser warns when a sequence is not in ascending date
/// order but still hands it over unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioRecord {
    /// Trading day; also the ordering key of a record sequence.
    pub date: NaiveDate,
    /// Per-share value of the portfolio. Strictly positive; the parser
    /// skips any row that violates this.
    pub share_value: Decimal,
    pub benchmark_a: Decimal,
    pub benchmark_b: Decimal,
    pub benchmark_c: Decimal,
    /// Number of shares held. Negative counts appear in some exports; the
    /// parser keeps such rows and records a warning.
    pub shares: Decimal,
    pub gain_loss: Decimal,
    pub daily_gain: Decimal,
    pub market_value: Decimal,
    pub principal: Decimal,
}

impl PortfolioRecord {
    /// Returns the level of the requested market index on this day.
    pub fn benchmark(&self, index: Benchmark) -> Decimal {
        match index {
            Benchmark::IndexA => self.benchmark_a,
            Benchmark::IndexB => self.benchmark_b,
            Benchmark::IndexC => self.benchmark_c,
        }
    }
}

/// Extracts the share-value series from a record sequence, in input order.
pub fn share_value_series(records: &[PortfolioRecord]) -> Vec<Decimal> {
    records.iter().map(|r| r.share_value).collect()
}

/// Extracts one market-index series from a record sequence, in input order.
pub fn benchmark_series(records: &[PortfolioRecord], index: Benchmark) -> Vec<Decimal> {
    records.iter().map(|r| r.benchmark(index)).collect()
}
