//! Clock-in / clock-out parsing.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Parse a full timestamp, or a bare `HH:MM` resolved against `day`.
pub fn parse_datetime(s: &str, day: NaiveDate) -> Option<NaiveDateTime> {
    let s = s.trim();

    DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
        .or_else(|| {
            TIME_FORMATS
                .iter()
                .find_map(|f| NaiveTime::parse_from_str(s, f).ok())
                .map(|t| day.and_time(t))
        })
}

pub fn parse_optional_datetime(
    input: Option<&String>,
    day: NaiveDate,
) -> AppResult<Option<NaiveDateTime>> {
    if let Some(s) = input {
        let ts = parse_datetime(s, day).ok_or_else(|| AppError::InvalidDateTime(s.to_string()))?;
        Ok(Some(ts))
    } else {
        Ok(None)
    }
}
