//! Normalization of heterogeneous entity kinds into one calendar-event shape.
//!
//! ## Summary
//! Each entity kind has exactly one transform, `(record) -> Option<CalendarEvent>`;
//! a record missing a required field is dropped, never an error. All
//! transforms share the same two date-interval laws:
//!
//! - all-day spanning multiple days: `end` is the day *after* the declared
//!   end date (exclusive-end convention); all-day single-day: `end` absent;
//! - timed with a missing or unusable end: `end` is `start` plus a
//!   configured fallback duration, so rendering stays well-defined.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use serde::Serialize;
use serde_json::Value;

use schedra_core::kind::EventKind;
use schedra_core::util::date::{at_midnight_utc, day_after};

mod blocked;
mod directory;
mod event;
mod marker;
mod meeting;
mod personal;
mod task;

pub use blocked::{normalize_holiday, normalize_vacation};
pub use directory::LecturerDirectory;
pub use event::normalize_event;
pub use marker::term_markers;
pub use meeting::normalize_meeting;
pub use personal::normalize_personal_event;
pub use task::normalize_task;

/// A point on the calendar: either a bare date (all-day entities) or a full
/// UTC date-time. Serializes as `YYYY-MM-DD` or RFC 3339 respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EventStamp {
    Date(NaiveDate),
    Timed(DateTime<Utc>),
}

impl EventStamp {
    /// The stamp as a UTC instant, for ordering. Bare dates sort at
    /// midnight.
    #[must_use]
    pub fn instant(self) -> DateTime<Utc> {
        match self {
            Self::Date(date) => at_midnight_utc(date),
            Self::Timed(at) => at,
        }
    }
}

/// The canonical read-only view model every kind normalizes into.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start: EventStamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<EventStamp>,
    pub all_day: bool,
    #[serde(rename = "type")]
    pub kind: EventKind,
    #[serde(skip_serializing_if = "serde_json::Map::is_empty")]
    pub extended_props: serde_json::Map<String, Value>,
}

impl CalendarEvent {
    /// An all-day event over an inclusive date range.
    ///
    /// Multi-day ranges get the exclusive-end representation (`end` = day
    /// after the declared end); single-day ranges carry no `end` at all. An
    /// inverted range is treated as single-day.
    #[must_use]
    pub fn all_day(
        id: String,
        title: String,
        kind: EventKind,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Self {
        let end_stamp = (end > start).then(|| EventStamp::Date(day_after(end)));
        Self {
            id,
            title,
            start: EventStamp::Date(start),
            end: end_stamp,
            all_day: true,
            kind,
            extended_props: serde_json::Map::new(),
        }
    }

    /// A timed event. When `end` is absent or not after `start`, the end
    /// becomes `start + fallback`.
    #[must_use]
    pub fn timed(
        id: String,
        title: String,
        kind: EventKind,
        start: DateTime<Utc>,
        end: Option<DateTime<Utc>>,
        fallback: TimeDelta,
    ) -> Self {
        let end = match end {
            Some(at) if at > start => at,
            _ => start + fallback,
        };
        Self {
            id,
            title,
            start: EventStamp::Timed(start),
            end: Some(EventStamp::Timed(end)),
            all_day: false,
            kind,
            extended_props: serde_json::Map::new(),
        }
    }

    #[must_use]
    pub fn with_prop(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.extended_props.insert(key.to_string(), value.into());
        self
    }

    /// Insert a pass-through prop only when the source field is present.
    #[must_use]
    pub fn with_opt_prop(mut self, key: &str, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.extended_props.insert(key.to_string(), value.into());
        }
        self
    }
}

/// Stable chronological sort by start, the per-kind order callers expect.
pub fn sort_chronologically(events: &mut [CalendarEvent]) {
    events.sort_by_key(|event| event.start.instant());
}
