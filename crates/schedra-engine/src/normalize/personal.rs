//! Personal (student-owned) event normalization.
//!
//! The store scopes these to their owner before they ever reach the
//! transform; shape-wise they follow the general-event rules.

use chrono::TimeDelta;

use schedra_core::kind::EventKind;
use schedra_store::records::PersonalEventRecord;

use super::event::{Eventish, normalize_eventish};
use super::CalendarEvent;

/// Normalize a personal event record; `None` drops it.
#[must_use]
pub fn normalize_personal_event(
    record: &PersonalEventRecord,
    fallback: TimeDelta,
) -> Option<CalendarEvent> {
    normalize_eventish(
        EventKind::StudentEvent,
        "personal",
        &Eventish {
            code: record.code.as_deref(),
            name: record.name.as_deref(),
            date: record.date.as_deref(),
            end_date: record.end_date.as_deref(),
            start_hour: record.start_hour.as_deref(),
            end_hour: record.end_hour.as_deref(),
            all_day: record.all_day.unwrap_or(false),
            notes: record.notes.as_deref(),
        },
        fallback,
    )
}
