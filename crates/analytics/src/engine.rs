use crate::error::AnalyticsError;
use crate::report::{AnnualReturn, CorrelationSet, PerformanceSummary};
use chrono::Datelike;
use core_types::{Benchmark, PortfolioRecord, benchmark_series, share_value_series};
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;
use tracing::debug;

/// A stateless calculator for deriving descriptive return metrics from a
/// validated record sequence.
#[derive(Debug, Default)]
pub struct MetricsEngine {}

impl MetricsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the whole-period return summary.
    ///
    /// Total return is the simple percentage change of the share value
    /// between the first and last record. The annualized figure is the
    /// geometric equivalent over `elapsed_days / 365.25` years; when the
    /// two boundary records share a date it degenerates to the total
    /// return.
    ///
    /// # Errors
    ///
    /// Returns `NotEnoughData` for an empty record sequence — the summary
    /// is undefined there, not zero.
    pub fn summary(
        &self,
        records: &[PortfolioRecord],
    ) -> Result<PerformanceSummary, AnalyticsError> {
        let (first, last) = match (records.first(), records.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => {
                return Err(AnalyticsError::NotEnoughData(
                    "a summary over an empty record sequence".to_string(),
                ));
            }
        };

        let total = (last.share_value - first.share_value) / first.share_value * dec!(100);

        let elapsed_days = (last.date - first.date).num_days();
        let annualized = if elapsed_days <= 0 {
            total
        } else {
            let years = Decimal::from(elapsed_days) / stats::DAYS_PER_YEAR;
            let ratio = last.share_value / first.share_value;
            (ratio.powd(Decimal::ONE / years) - Decimal::ONE) * dec!(100)
        };

        debug!(%total, elapsed_days, "computed whole-period summary");

        Ok(PerformanceSummary {
            total_return_pct: total.round_dp(2),
            annualized_return_pct: annualized.round_dp(2),
        })
    }

    /// Builds the per-calendar-year return table.
    ///
    /// For each year the first and last record observed *in input order*
    /// are retained — the sequence is trusted to be ascending (the parser
    /// warns on disorder but nothing re-sorts) — and each series'
    /// percentage change between those two records is reported. Years are
    /// emitted ascending. A year with a single record yields zero returns
    /// for every series.
    pub fn annual_returns(&self, records: &[PortfolioRecord]) -> Vec<AnnualReturn> {
        let mut by_year: BTreeMap<i32, (&PortfolioRecord, &PortfolioRecord)> = BTreeMap::new();
        for record in records {
            by_year
                .entry(record.date.year())
                .and_modify(|(_, last)| *last = record)
                .or_insert((record, record));
        }

        by_year
            .into_iter()
            .map(|(year, (first, last))| AnnualReturn {
                year,
                portfolio_pct: pct_change(first.share_value, last.share_value),
                benchmark_a_pct: pct_change(first.benchmark_a, last.benchmark_a),
                benchmark_b_pct: pct_change(first.benchmark_b, last.benchmark_b),
                benchmark_c_pct: pct_change(first.benchmark_c, last.benchmark_c),
            })
            .collect()
    }

    /// Correlates the share-value series against each market index over the
    /// full available history (no windowing).
    pub fn correlations(&self, records: &[PortfolioRecord]) -> CorrelationSet {
        let shares = share_value_series(records);
        let corr = |index: Benchmark| {
            stats::pearson_correlation(&shares, &benchmark_series(records, index)).round_dp(3)
        };
        CorrelationSet {
            benchmark_a: corr(Benchmark::IndexA),
            benchmark_b: corr(Benchmark::IndexB),
            benchmark_c: corr(Benchmark::IndexC),
        }
    }
}

/// Simple percentage change between two levels, 2 decimals. Zero when the
/// starting level is zero (a defaulted benchmark field, for instance).
fn pct_change(first: Decimal, last: Decimal) -> Decimal {
    if first.is_zero() {
        return Decimal::ZERO;
    }
    ((last - first) / first * dec!(100)).round_dp(2)
}
