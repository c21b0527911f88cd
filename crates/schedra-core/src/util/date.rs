//! Date-only and time-of-day parsing for document-store records.
//!
//! ## Summary
//! The store keeps dates as `YYYY-MM-DD` strings and times as `HH:MM` (some
//! legacy records carry seconds). All arithmetic is done on naive dates and
//! combined with UTC directly, so day boundaries never drift with the host
//! timezone.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc, Weekday};

use crate::error::{CoreError, CoreResult};

/// Parse a `YYYY-MM-DD` date string.
///
/// ## Errors
/// Returns `CoreError::ParseError` if the string is not a valid calendar date.
pub fn parse_date(s: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| CoreError::ParseError(format!("invalid date '{s}': {e}")))
}

/// Parse an `HH:MM` or `HH:MM:SS` time-of-day string.
///
/// ## Errors
/// Returns `CoreError::ParseError` if the string is not a valid time.
pub fn parse_time(s: &str) -> CoreResult<NaiveTime> {
    let trimmed = s.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|e| CoreError::ParseError(format!("invalid time '{s}': {e}")))
}

/// Parse an English weekday name ("Monday") or abbreviation ("Mon"),
/// case-insensitively.
///
/// ## Errors
/// Returns `CoreError::ParseError` if the string names no weekday.
pub fn parse_weekday(s: &str) -> CoreResult<Weekday> {
    s.trim()
        .parse::<Weekday>()
        .map_err(|_| CoreError::ParseError(format!("invalid weekday '{s}'")))
}

/// The calendar day after `date`.
///
/// Saturates at `NaiveDate::MAX`, which no stored semester reaches.
#[must_use]
pub fn day_after(date: NaiveDate) -> NaiveDate {
    date.succ_opt().unwrap_or(date)
}

/// Midnight UTC on `date`.
#[must_use]
pub fn at_midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// `date` at `time`, anchored to UTC.
#[must_use]
pub fn at_time_utc(date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
    date.and_time(time).and_utc()
}
