//! Deterministic meeting-instance identity.
//!
//! ## Summary
//! A meeting id is derived purely from the course code, the date, and the
//! slot's start time, so re-expanding an unchanged course reproduces the
//! exact same id set and writes become idempotent overwrites instead of
//! appends. Time separators are stripped to keep the id key-safe.

use chrono::{NaiveDate, NaiveTime};

/// Derive the id for one meeting instance, e.g. `CS101_2025-04-14_0900`.
#[must_use]
pub fn meeting_id(course_code: &str, date: NaiveDate, start: NaiveTime) -> String {
    format!(
        "{}_{}_{}",
        course_code.trim(),
        date.format("%Y-%m-%d"),
        start.format("%H%M")
    )
}
