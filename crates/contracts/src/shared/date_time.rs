//! Date/time helpers shared by reservation views
//!
//! The backend sends dates and times of day as separate strings
//! (`"2025-03-15"`, `"14:30"`); views work with one `NaiveDateTime`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateTimeError {
    #[error("fecha no válida: {0}")]
    InvalidDate(String),
    #[error("hora no válida: {0}")]
    InvalidTime(String),
}

pub fn parse_date(date: &str) -> Result<NaiveDate, DateTimeError> {
    let date = date.trim();
    // Accept a full timestamp and keep only the date part
    let date_part = date.split('T').next().unwrap_or(date);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| DateTimeError::InvalidDate(date.to_string()))
}

/// Parse `HH:MM` or `HH:MM:SS`. Blank input means midnight.
pub fn parse_time(time: &str) -> Result<NaiveTime, DateTimeError> {
    let time = time.trim();
    if time.is_empty() {
        return Ok(NaiveTime::MIN);
    }
    NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .map_err(|_| DateTimeError::InvalidTime(time.to_string()))
}

/// Combine a `YYYY-MM-DD` date with an optional time of day.
pub fn combine_date_time(date: &str, time: Option<&str>) -> Result<NaiveDateTime, DateTimeError> {
    let date = parse_date(date)?;
    let time = parse_time(time.unwrap_or(""))?;
    Ok(date.and_time(time))
}

/// Inverse of [`combine_date_time`]: `("YYYY-MM-DD", "HH:MM")`.
pub fn split_date_time(value: &NaiveDateTime) -> (String, String) {
    (
        value.format("%Y-%m-%d").to_string(),
        value.format("%H:%M").to_string(),
    )
}

/// `DD/MM/YYYY HH:MM`
pub fn format_date_time(value: &NaiveDateTime) -> String {
    value.format("%d/%m/%Y %H:%M").to_string()
}

/// `DD/MM/YYYY`
pub fn format_date(value: &NaiveDate) -> String {
    value.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combines_date_and_time() {
        let dt = combine_date_time("2025-03-15", Some("14:30")).unwrap();
        assert_eq!(format_date_time(&dt), "15/03/2025 14:30");

        let dt = combine_date_time("2025-03-15", Some("09:05:59")).unwrap();
        assert_eq!(dt.format("%H:%M:%S").to_string(), "09:05:59");
    }

    #[test]
    fn test_missing_time_is_midnight() {
        let dt = combine_date_time("2025-12-31", None).unwrap();
        assert_eq!(format_date_time(&dt), "31/12/2025 00:00");
        let dt = combine_date_time("2025-12-31", Some("  ")).unwrap();
        assert_eq!(split_date_time(&dt), ("2025-12-31".to_string(), "00:00".to_string()));
    }

    #[test]
    fn test_timestamp_dates_are_truncated() {
        let date = parse_date("2024-03-15T14:02:26.123Z").unwrap();
        assert_eq!(format_date(&date), "15/03/2024");
    }

    #[test]
    fn test_malformed_parts_are_reported() {
        assert_eq!(
            combine_date_time("15/03/2025", Some("10:00")),
            Err(DateTimeError::InvalidDate("15/03/2025".into()))
        );
        assert_eq!(
            combine_date_time("2025-02-30", None),
            Err(DateTimeError::InvalidDate("2025-02-30".into()))
        );
        assert_eq!(
            combine_date_time("2025-03-15", Some("25:00")),
            Err(DateTimeError::InvalidTime("25:00".into()))
        );
    }

    #[test]
    fn test_split_round_trips() {
        let dt = combine_date_time("2025-07-01", Some("16:45")).unwrap();
        let (d, t) = split_date_time(&dt);
        assert_eq!(combine_date_time(&d, Some(&t)).unwrap(), dt);
    }
}
