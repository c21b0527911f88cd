//! Holiday and vacation normalization: all-day range events.

use schedra_core::kind::EventKind;
use schedra_core::util::date::parse_date;
use schedra_store::records::BlockedRangeRecord;

use super::CalendarEvent;

/// Normalize a holiday record; `None` drops it.
#[must_use]
pub fn normalize_holiday(record: &BlockedRangeRecord) -> Option<CalendarEvent> {
    normalize_blocked(EventKind::Holiday, "holiday", record)
}

/// Normalize a vacation record; `None` drops it.
#[must_use]
pub fn normalize_vacation(record: &BlockedRangeRecord) -> Option<CalendarEvent> {
    normalize_blocked(EventKind::Vacation, "vacation", record)
}

fn normalize_blocked(
    kind: EventKind,
    id_prefix: &str,
    record: &BlockedRangeRecord,
) -> Option<CalendarEvent> {
    let code = record.code.as_deref()?;
    let name = record.name.as_deref()?;
    let Ok(start) = parse_date(record.start_date.as_deref()?) else {
        tracing::trace!(%kind, code, "Dropping blocked range with bad start date");
        return None;
    };
    // A range with no usable end renders as a single day.
    let end = record
        .end_date
        .as_deref()
        .and_then(|s| parse_date(s).ok())
        .unwrap_or(start);

    Some(CalendarEvent::all_day(
        format!("{id_prefix}-{code}"),
        name.to_string(),
        kind,
        start,
        end,
    ))
}
