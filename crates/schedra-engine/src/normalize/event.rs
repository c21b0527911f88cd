//! General-event normalization, plus the shared shape rules reused by
//! personal events (the two kinds differ only in ownership and type tag).

use chrono::TimeDelta;

use schedra_core::kind::EventKind;
use schedra_core::util::date::{at_time_utc, parse_date, parse_time};
use schedra_store::records::EventRecord;

use super::CalendarEvent;

/// The event-shaped fields shared by general and personal events.
pub(super) struct Eventish<'a> {
    pub code: Option<&'a str>,
    pub name: Option<&'a str>,
    pub date: Option<&'a str>,
    pub end_date: Option<&'a str>,
    pub start_hour: Option<&'a str>,
    pub end_hour: Option<&'a str>,
    pub all_day: bool,
    pub notes: Option<&'a str>,
}

/// Shared transform for event-shaped records.
///
/// Requires code, name and a parseable date. All-day when flagged as such
/// or when no usable start time exists; otherwise timed on the record's
/// date, with the fallback duration covering a missing or inverted end.
pub(super) fn normalize_eventish(
    kind: EventKind,
    id_prefix: &str,
    fields: &Eventish<'_>,
    fallback: TimeDelta,
) -> Option<CalendarEvent> {
    let code = fields.code?;
    let name = fields.name?;
    let Ok(date) = parse_date(fields.date?) else {
        tracing::trace!(%kind, code, "Dropping record with unparseable date");
        return None;
    };

    let id = format!("{id_prefix}-{code}");
    let start_time = fields.start_hour.and_then(|s| parse_time(s).ok());

    let event = match start_time {
        Some(start_time) if !fields.all_day => {
            let start = at_time_utc(date, start_time);
            let end = fields
                .end_hour
                .and_then(|s| parse_time(s).ok())
                .map(|t| at_time_utc(date, t));
            CalendarEvent::timed(id, name.to_string(), kind, start, end, fallback)
        }
        _ => {
            let end = fields
                .end_date
                .and_then(|s| parse_date(s).ok())
                .unwrap_or(date);
            CalendarEvent::all_day(id, name.to_string(), kind, date, end)
        }
    };

    Some(event.with_opt_prop("notes", fields.notes.map(String::from)))
}

/// Normalize a general event record; `None` drops it.
#[must_use]
pub fn normalize_event(record: &EventRecord, fallback: TimeDelta) -> Option<CalendarEvent> {
    normalize_eventish(
        EventKind::Event,
        "event",
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
