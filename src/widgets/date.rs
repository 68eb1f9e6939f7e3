//! Date display
//!
//! Dates are shown in one fixed locale (en-US, `M/D/YYYY`) so the same
//! input always renders the same way. The calendar date is taken as
//! written; timestamps are not shifted into the viewer's zone.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Shown in place of a date that could not be parsed
pub const INVALID_DATE: &str = "Invalid Date";

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid date: {0:?}")]
pub struct DateParseError(pub String);

/// Parse the date formats the backend emits
pub fn parse_date(input: &str) -> Result<NaiveDate, DateParseError> {
    let input = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.date_naive());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .map(|dt| dt.date())
        .ok_or_else(|| DateParseError(input.to_string()))
}

/// Format for display, or [`INVALID_DATE`] when unparseable
pub fn format_date(input: &str) -> String {
    match parse_date(input) {
        Ok(date) => format!("{}/{}/{}", date.month(), date.day(), date.year()),
        Err(_) => INVALID_DATE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_plain_date() {
        assert_eq!(format_date("2024-01-01"), "1/1/2024");
        assert_eq!(format_date("2023-12-25"), "12/25/2023");
    }

    #[test]
    fn test_format_timestamps() {
        assert_eq!(format_date("2024-03-05T14:30:00"), "3/5/2024");
        assert_eq!(format_date("2024-03-05T14:30"), "3/5/2024");
        assert_eq!(format_date("2024-03-05T23:30:00-05:00"), "3/5/2024");
        assert_eq!(format_date("2024-03-05 08:00:00"), "3/5/2024");
    }

    #[test]
    fn test_format_is_deterministic() {
        let inputs = ["2024-01-01", "2024-02-29T12:00:00Z", "not a date"];
        for input in inputs {
            assert_eq!(format_date(input), format_date(input));
        }
    }

    #[test]
    fn test_invalid_dates() {
        assert_eq!(format_date(""), INVALID_DATE);
        assert_eq!(format_date("yesterday"), INVALID_DATE);
        assert_eq!(format_date("2023-02-30"), INVALID_DATE);
        assert_eq!(
            parse_date("13/45/2020"),
            Err(DateParseError("13/45/2020".to_string()))
        );
    }
}
