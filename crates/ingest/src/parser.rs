use crate::date::parse_portfolio_date;
use crate::error::IngestError;
use core_types::PortfolioRecord;
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;
use tracing::warn;

/// Minimum number of comma-separated fields a data row must carry.
const MIN_FIELDS: usize = 10;

/// The tri-partite result of one ingestion call.
///
/// `errors` are fatal: any non-empty list means the batch is unusable.
/// `warnings` are informational and never block the batch. Both carry
/// 1-based file line numbers where they concern a specific row. The outcome
/// is constructed once per call and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct ParseOutcome {
    pub records: Vec<PortfolioRecord>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Parses a raw comma-delimited valuation export into typed records.
///
/// The first line is a report title and the second the column header;
/// both are skipped without validation. Every following line is a data row
/// with at least [`MIN_FIELDS`] fields in the fixed order: date,
/// benchmark A, benchmark B, benchmark C, shares, share value, gain/loss,
/// daily gain, market value, principal.
///
/// Row-level failures never abort the batch. Fatal problems (too few
/// fields, unparseable date) are collected into `errors`; recoverable
/// anomalies (blank rows, non-numeric fields defaulted to zero, skipped
/// non-positive share values, negative share counts, non-chronological
/// input) are collected into `warnings`, and processing continues with the
/// next row.
pub fn parse_portfolio_csv(text: &str) -> ParseOutcome {
    let mut records: Vec<PortfolioRecord> = Vec::new();
    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    let lines: Vec<&str> = text.lines().collect();
    if lines.len() < 3 {
        errors.push(
            "file must contain a title line, a header line, and at least one data row"
                .to_string(),
        );
        return seal(records, errors, warnings);
    }

    for (index, line) in lines.iter().enumerate().skip(2) {
        let line_no = index + 1;

        if line.trim().is_empty() {
            warnings.push(format!("line {line_no}: empty row skipped"));
            continue;
        }

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < MIN_FIELDS {
            errors.push(format!(
                "line {line_no}: expected at least {MIN_FIELDS} fields, found {}",
                fields.len()
            ));
            continue;
        }

        if fields.iter().all(|f| f.trim().is_empty()) {
            warnings.push(format!("line {line_no}: empty row skipped"));
            continue;
        }

        let date = match parse_portfolio_date(fields[0]) {
            Ok(date) => date,
            Err(e) => {
                errors.push(format!("line {line_no}: {e}"));
                continue;
            }
        };

        let benchmark_a = numeric_field(&mut warnings, line_no, "benchmark A", fields[1]);
        let benchmark_b = numeric_field(&mut warnings, line_no, "benchmark B", fields[2]);
        let benchmark_c = numeric_field(&mut warnings, line_no, "benchmark C", fields[3]);
        let shares = numeric_field(&mut warnings, line_no, "shares", fields[4]);
        let share_value = numeric_field(&mut warnings, line_no, "share value", fields[5]);
        let gain_loss = numeric_field(&mut warnings, line_no, "gain/loss", fields[6]);
        let daily_gain = numeric_field(&mut warnings, line_no, "daily gain", fields[7]);
        let market_value = numeric_field(&mut warnings, line_no, "market value", fields[8]);
        let principal = numeric_field(&mut warnings, line_no, "principal", fields[9]);

        // A share value that is not strictly positive invalidates the whole
        // row; this is a skip, not a default-to-zero.
        if share_value <= Decimal::ZERO {
            warnings.push(format!(
                "line {line_no}: share value {share_value} is not positive, row skipped"
            ));
            continue;
        }

        if shares < Decimal::ZERO {
            warnings.push(format!("line {line_no}: negative share count {shares}"));
        }

        records.push(PortfolioRecord {
            date,
            share_value,
            benchmark_a,
            benchmark_b,
            benchmark_c,
            shares,
            gain_loss,
            daily_gain,
            market_value,
            principal,
        });
    }

    if records.is_empty() && errors.is_empty() {
        errors.push("no valid data rows found in file".to_string());
    }

    // One global warning, not per-row: downstream engines assume ascending
    // order and do not re-sort.
    if records.windows(2).any(|w| w[1].date < w[0].date) {
        warnings.push("records are not in chronological order".to_string());
    }

    seal(records, errors, warnings)
}

/// The all-or-nothing convenience entry point.
///
/// Surfaces records only when no fatal errors were collected; warnings
/// never block. On failure every collected error message is concatenated
/// into one combined description.
pub fn load_records(text: &str) -> Result<Vec<PortfolioRecord>, IngestError> {
    let outcome = parse_portfolio_csv(text);
    if !outcome.errors.is_empty() {
        return Err(IngestError::InvalidData(outcome.errors.join("; ")));
    }
    Ok(outcome.records)
}

fn seal(records: Vec<PortfolioRecord>, errors: Vec<String>, warnings: Vec<String>) -> ParseOutcome {
    for warning in &warnings {
        warn!("{warning}");
    }
    ParseOutcome {
        records,
        errors,
        warnings,
    }
}

/// Parses one numeric field, defaulting to zero (with a warning) when the
/// field is not a number.
fn numeric_field(warnings: &mut Vec<String>, line_no: usize, name: &str, raw: &str) -> Decimal {
    match parse_accounting_number(raw) {
        Some(value) => value,
        None => {
            warnings.push(format!(
                "line {line_no}: field '{name}' is not numeric ('{}'), defaulting to 0",
                raw.trim()
            ));
            Decimal::ZERO
        }
    }
}

/// Parses a numeric token using the accounting conventions of the source
/// export: surrounding whitespace and embedded thousands separators are
/// stripped, and a value wrapped in parentheses denotes a negative number.
fn parse_accounting_number(raw: &str) -> Option<Decimal> {
    let mut cleaned = raw.trim().replace(',', "");

    let negative = cleaned.len() >= 2 && cleaned.starts_with('(') && cleaned.ends_with(')');
    if negative {
        cleaned = cleaned[1..cleaned.len() - 1].trim().to_string();
    }
    if cleaned.is_empty() {
        return None;
    }

    let value = Decimal::from_str(&cleaned).ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const TITLE_AND_HEADER: &str = "Portfolio Valuation Export\n\
        Date,Index A,Index B,Index C,Shares,Share Value,Gain/Loss,Daily Gain,Market Value,Principal";

    fn csv(rows: &[&str]) -> String {
        let mut text = TITLE_AND_HEADER.to_string();
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text
    }

    #[test]
    fn a_file_without_data_rows_is_a_fatal_error() {
        let outcome = parse_portfolio_csv(TITLE_AND_HEADER);
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].contains("at least one data row"));

        assert!(parse_portfolio_csv("").records.is_empty());
    }

    #[test]
    fn well_formed_rows_parse_cleanly() {
        let text = csv(&[
            "01/03/2021,4500.12,34000.55,14000.77,100,1.2345,50.25,(12.50),1234.50,1000",
            "2021-03-02,4510.00,34100.00,14100.00,100,1.2401,55.85,5.60,1240.10,1000",
        ]);
        let outcome = parse_portfolio_csv(&text);

        assert!(outcome.errors.is_empty());
        assert!(outcome.warnings.is_empty());
        assert_eq!(outcome.records.len(), 2);

        let first = &outcome.records[0];
        assert_eq!(first.date.to_string(), "2021-03-01");
        assert_eq!(first.share_value, dec!(1.2345));
        assert_eq!(first.daily_gain, dec!(-12.50));
        assert_eq!(first.benchmark_b, dec!(34000.55));
    }

    #[test]
    fn accounting_parentheses_denote_negatives() {
        assert_eq!(parse_accounting_number("(123.45)"), Some(dec!(-123.45)));
        assert_eq!(parse_accounting_number(" ( 7 ) "), Some(dec!(-7)));
        assert_eq!(parse_accounting_number("1,234.56"), Some(dec!(1234.56)));
        assert_eq!(parse_accounting_number("  42 "), Some(dec!(42)));
        assert_eq!(parse_accounting_number("n/a"), None);
        assert_eq!(parse_accounting_number(""), None);
        assert_eq!(parse_accounting_number("()"), None);
    }

    #[test]
    fn non_numeric_fields_default_to_zero_with_a_warning() {
        let text = csv(&[
            "01/03/2021,4500.12,34000.55,14000.77,100,1.2345,50.25,3.10,1234.50,pending",
        ]);
        let outcome = parse_portfolio_csv(&text);

        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].principal, Decimal::ZERO);
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].contains("'principal'"));
        assert!(outcome.warnings[0].contains("line 3"));
    }

    #[test]
    fn a_short_row_is_an_error_that_does_not_abort_the_batch() {
        let text = csv(&[
            "01/03/2021,4500.12,34000.55",
            "02/03/2021,4510.00,34100.00,14100.00,100,1.2401,55.85,5.60,1240.10,1000",
        ]);
        let outcome = parse_portfolio_csv(&text);

        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].contains("line 3"));
        assert!(outcome.errors[0].contains("found 3"));
        assert_eq!(outcome.records.len(), 1);
    }

    #[test]
    fn blank_and_all_empty_rows_are_skipped_with_warnings() {
        let text = csv(&[
            "",
            ",,,,,,,,,",
            "03/03/2021,4500.12,34000.55,14000.77,100,1.2345,50.25,3.10,1234.50,1000",
        ]);
        let outcome = parse_portfolio_csv(&text);

        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(
            outcome
                .warnings
                .iter()
                .filter(|w| w.contains("empty row"))
                .count(),
            2
        );
    }

    #[test]
    fn a_non_positive_share_value_skips_the_row() {
        let text = csv(&[
            "01/03/2021,4500.12,34000.55,14000.77,100,0,50.25,3.10,1234.50,1000",
            "02/03/2021,4500.12,34000.55,14000.77,100,(1.05),50.25,3.10,1234.50,1000",
            "03/03/2021,4500.12,34000.55,14000.77,100,1.05,50.25,3.10,1234.50,1000",
        ]);
        let outcome = parse_portfolio_csv(&text);

        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(
            outcome
                .warnings
                .iter()
                .filter(|w| w.contains("not positive"))
                .count(),
            2
        );
    }

    #[test]
    fn negative_share_counts_warn_but_keep_the_row() {
        let text = csv(&[
            "01/03/2021,4500.12,34000.55,14000.77,(100),1.2345,50.25,3.10,1234.50,1000",
        ]);
        let outcome = parse_portfolio_csv(&text);

        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].shares, dec!(-100));
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].contains("negative share count"));
    }

    #[test]
    fn an_unparseable_date_is_fatal_for_that_row() {
        let text = csv(&[
            "30/02/2021,4500.12,34000.55,14000.77,100,1.2345,50.25,3.10,1234.50,1000",
            "02/03/2021,4510.00,34100.00,14100.00,100,1.2401,55.85,5.60,1240.10,1000",
        ]);
        let outcome = parse_portfolio_csv(&text);

        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].contains("invalid date format"));
        assert_eq!(outcome.records.len(), 1);
    }

    #[test]
    fn zero_surviving_records_without_errors_synthesizes_one() {
        let text = csv(&[
            "01/03/2021,4500.12,34000.55,14000.77,100,0,50.25,3.10,1234.50,1000",
        ]);
        let outcome = parse_portfolio_csv(&text);

        assert!(outcome.records.is_empty());
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].contains("no valid data"));
    }

    #[test]
    fn out_of_order_dates_produce_one_global_warning() {
        let text = csv(&[
            "03/03/2021,4500.12,34000.55,14000.77,100,1.2345,50.25,3.10,1234.50,1000",
            "01/03/2021,4500.12,34000.55,14000.77,100,1.2301,50.25,3.10,1234.50,1000",
            "02/03/2021,4500.12,34000.55,14000.77,100,1.2322,50.25,3.10,1234.50,1000",
        ]);
        let outcome = parse_portfolio_csv(&text);

        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.records.len(), 3);
        assert_eq!(
            outcome
                .warnings
                .iter()
                .filter(|w| w.contains("chronological"))
                .count(),
            1
        );
        // The parser never repairs the order.
        assert_eq!(outcome.records[0].date.to_string(), "2021-03-03");
    }

    #[test]
    fn load_records_concatenates_every_error_into_one_failure() {
        let text = csv(&[
            "01/03/2021,4500.12",
            "bad-date,4500.12,34000.55,14000.77,100,1.2345,50.25,3.10,1234.50,1000",
        ]);
        let err = load_records(&text).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("line 3"));
        assert!(message.contains("line 4"));
    }

    #[test]
    fn load_records_succeeds_when_only_warnings_were_collected() {
        let text = csv(&[
            "01/03/2021,4500.12,34000.55,14000.77,(100),1.2345,50.25,3.10,1234.50,1000",
        ]);
        let records = load_records(&text).unwrap();
        assert_eq!(records.len(), 1);
    }
}
