use crate::report::{DrawdownAnalysis, DrawdownPeriod};
use chrono::NaiveDate;
use core_types::PortfolioRecord;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

/// Declines of at most this much from the running peak are noise and never
/// open an episode.
const NOISE_THRESHOLD_PCT: Decimal = dec!(0.1);

/// Segments the share-value series into discrete peak-to-trough-to-recovery
/// episodes in one forward pass.
#[derive(Debug, Default)]
pub struct DrawdownExtractor {}

impl DrawdownExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the episode state machine over the record sequence.
    ///
    /// Fewer than two records is a defined degenerate case and yields the
    /// empty analysis, not an error.
    pub fn analyze(&self, records: &[PortfolioRecord]) -> DrawdownAnalysis {
        if records.len() < 2 {
            return DrawdownAnalysis::empty();
        }

        let mut tracker = Tracker::start(&records[0]);
        let mut periods: Vec<DrawdownPeriod> = Vec::new();

        for record in &records[1..] {
            if let Some(completed) = tracker.observe(record) {
                periods.push(completed);
            }
        }

        // An episode with no recovery observed is the "current" drawdown;
        // it belongs in the full list as well.
        let current_drawdown = tracker.into_open_period();
        if let Some(open) = current_drawdown.clone() {
            periods.push(open);
        }

        debug!(episodes = periods.len(), "extracted drawdown episodes");

        let max_drawdown = deepest(&periods);
        let average_drawdown_pct = average(periods.iter().map(|p| p.drawdown_pct));
        let average_recovery_days = average(
            periods
                .iter()
                .filter_map(|p| p.recovery_days)
                .map(Decimal::from),
        );

        DrawdownAnalysis {
            periods,
            max_drawdown,
            current_drawdown,
            average_drawdown_pct,
            average_recovery_days,
        }
    }
}

/// The episode with the largest drawdown percent; the earliest wins ties.
fn deepest(periods: &[DrawdownPeriod]) -> Option<DrawdownPeriod> {
    let mut deepest: Option<&DrawdownPeriod> = None;
    for period in periods {
        let deeper = deepest
            .map(|d| period.drawdown_pct > d.drawdown_pct)
            .unwrap_or(true);
        if deeper {
            deepest = Some(period);
        }
    }
    deepest.cloned()
}

/// Mean of a decimal sequence, 2 decimals; zero for an empty sequence.
fn average(values: impl Iterator<Item = Decimal>) -> Decimal {
    let mut sum = Decimal::ZERO;
    let mut count = 0u32;
    for value in values {
        sum += value;
        count += 1;
    }
    if count == 0 {
        Decimal::ZERO
    } else {
        (sum / Decimal::from(count)).round_dp(2)
    }
}

/// Running state of the forward pass: the current peak, and the open
/// episode (if any) with the deepest point seen so far.
struct Tracker {
    peak_value: Decimal,
    peak_date: NaiveDate,
    in_drawdown: bool,
    start_date: NaiveDate,
    trough_value: Decimal,
    trough_date: NaiveDate,
    deepest_pct: Decimal,
}

impl Tracker {
    fn start(first: &PortfolioRecord) -> Self {
        Self {
            peak_value: first.share_value,
            peak_date: first.date,
            in_drawdown: false,
            start_date: first.date,
            trough_value: first.share_value,
            trough_date: first.date,
            deepest_pct: Decimal::ZERO,
        }
    }

    /// Feeds one record through the state machine. Returns the completed
    /// episode when this record establishes a new peak that closes one.
    fn observe(&mut self, record: &PortfolioRecord) -> Option<DrawdownPeriod> {
        if record.share_value > self.peak_value {
            let completed = self
                .in_drawdown
                .then(|| self.period(Some(record.date)));
            self.peak_value = record.share_value;
            self.peak_date = record.date;
            self.in_drawdown = false;
            self.deepest_pct = Decimal::ZERO;
            return completed;
        }

        let decline_pct = (self.peak_value - record.share_value) / self.peak_value * dec!(100);

        if !self.in_drawdown {
            if decline_pct > NOISE_THRESHOLD_PCT {
                self.in_drawdown = true;
                self.start_date = self.peak_date;
                self.trough_value = record.share_value;
                self.trough_date = record.date;
                self.deepest_pct = decline_pct;
            }
        } else if decline_pct > self.deepest_pct {
            self.trough_value = record.share_value;
            self.trough_date = record.date;
            self.deepest_pct = decline_pct;
        }

        None
    }

    fn into_open_period(self) -> Option<DrawdownPeriod> {
        self.in_drawdown.then(|| self.period(None))
    }

    fn period(&self, recovery_date: Option<NaiveDate>) -> DrawdownPeriod {
        DrawdownPeriod {
            start_date: self.start_date,
            end_date: self.trough_date,
            recovery_date,
            peak_value: self.peak_value,
            trough_value: self.trough_value,
            drawdown_pct: self.deepest_pct.round_dp(2),
            duration_days: (self.trough_date - self.start_date).num_days(),
            recovery_days: recovery_date.map(|date| (date - self.trough_date).num_days()),
        }
    }
}
