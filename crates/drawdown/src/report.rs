use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One peak-to-trough-to-recovery episode of the share value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawdownPeriod {
    /// Date of the peak the decline started from.
    pub start_date: NaiveDate,
    /// Date of the deepest point reached.
    pub end_date: NaiveDate,
    /// Date the share value first exceeded the pre-drawdown peak; `None`
    /// while the episode is still open.
    pub recovery_date: Option<NaiveDate>,
    pub peak_value: Decimal,
    pub trough_value: Decimal,
    /// Depth of the episode in percent, 2 decimals.
    pub drawdown_pct: Decimal,
    /// Calendar days from peak to trough.
    pub duration_days: i64,
    /// Calendar days from trough to recovery, when recovered.
    pub recovery_days: Option<i64>,
}

/// Aggregate drawdown statistics over the full record sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawdownAnalysis {
    /// Every episode observed, in chronological order. An episode still
    /// open at the end of the series is included here as well.
    pub periods: Vec<DrawdownPeriod>,
    /// The deepest episode; the earliest wins ties. `None` when no episode
    /// was observed.
    pub max_drawdown: Option<DrawdownPeriod>,
    /// The episode still open at the end of the series, if any.
    pub current_drawdown: Option<DrawdownPeriod>,
    /// Mean depth across all episodes (open included), 2 decimals; zero
    /// when no episode was observed.
    pub average_drawdown_pct: Decimal,
    /// Mean recovery time across recovered episodes only; open episodes
    /// are excluded from the mean, not counted as zero.
    pub average_recovery_days: Decimal,
}

impl DrawdownAnalysis {
    /// The empty analysis: no episodes, zeroed averages. This is the
    /// defined degenerate result for sequences of fewer than two records.
    pub fn empty() -> Self {
        Self {
            periods: Vec::new(),
            max_drawdown: None,
            current_drawdown: None,
            average_drawdown_pct: Decimal::ZERO,
            average_recovery_days: Decimal::ZERO,
        }
    }
}

impl Default for DrawdownAnalysis {
    fn default() -> Self {
        Self::empty()
    }
}
