use crate::error::IngestError;
use chrono::NaiveDate;

/// Parses a date token into a canonical calendar date.
///
/// Exactly two shapes are accepted:
///
/// - `DD/MM/YYYY` — three slash-separated integer groups with day 1–31,
///   month 1–12 and year 1900–2100. The combination must also denote a real
///   calendar date: re-deriving the date through `from_ymd_opt` is the
///   round-trip check, so 30/02 is rejected even though every group is in
///   range, while 29/02 passes in leap years.
/// - `YYYY-MM-DD` — passed through after being validated by construction.
///
/// Any other shape fails with [`IngestError::InvalidDateFormat`]. Dates are
/// naive calendar dates; no timezone conversion is performed.
pub fn parse_portfolio_date(token: &str) -> Result<NaiveDate, IngestError> {
    let token = token.trim();

    let groups: Vec<&str> = token.split('/').collect();
    if groups.len() == 3 {
        let day: u32 = groups[0].parse().map_err(|_| invalid(token))?;
        let month: u32 = groups[1].parse().map_err(|_| invalid(token))?;
        let year: i32 = groups[2].parse().map_err(|_| invalid(token))?;

        if !(1..=31).contains(&day) || !(1..=12).contains(&month) || !(1900..=2100).contains(&year)
        {
            return Err(invalid(token));
        }

        return NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| invalid(token));
    }

    NaiveDate::parse_from_str(token, "%Y-%m-%d").map_err(|_| invalid(token))
}

fn invalid(token: &str) -> IngestError {
    IngestError::InvalidDateFormat(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slash_dates_normalize_to_iso() {
        let date = parse_portfolio_date("07/03/1995").unwrap();
        assert_eq!(date.to_string(), "1995-03-07");
    }

    #[test]
    fn leap_day_is_accepted_only_in_leap_years() {
        assert!(parse_portfolio_date("29/02/2020").is_ok());
        assert!(parse_portfolio_date("29/02/2019").is_err());
    }

    #[test]
    fn impossible_calendar_combinations_are_rejected() {
        // Groups are in range but the dates do not exist.
        assert!(parse_portfolio_date("30/02/2021").is_err());
        assert!(parse_portfolio_date("31/04/2021").is_err());
    }

    #[test]
    fn group_ranges_are_enforced() {
        assert!(parse_portfolio_date("00/01/2021").is_err());
        assert!(parse_portfolio_date("01/13/2021").is_err());
        assert!(parse_portfolio_date("01/01/1899").is_err());
        assert!(parse_portfolio_date("01/01/2101").is_err());
    }

    #[test]
    fn iso_dates_pass_through_after_validation() {
        let date = parse_portfolio_date("2021-03-05").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2021, 3, 5).unwrap());
        assert!(parse_portfolio_date("2021-02-30").is_err());
    }

    #[test]
    fn other_shapes_fail() {
        assert!(parse_portfolio_date("03-07-1995").is_err());
        assert!(parse_portfolio_date("1995/03/07/1").is_err());
        assert!(parse_portfolio_date("yesterday").is_err());
        assert!(parse_portfolio_date("").is_err());
    }
}
