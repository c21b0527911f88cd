//! Task normalization: a deadline renders as a due marker anchored on the
//! submission date and time, not as a duration.

use chrono::{NaiveTime, TimeDelta};

use schedra_core::kind::EventKind;
use schedra_core::util::date::{at_time_utc, parse_date, parse_time};
use schedra_store::records::TaskRecord;

use super::CalendarEvent;

/// Normalize a task record; `None` drops it.
///
/// A task missing only its submission hour anchors at midnight UTC so the
/// marker stays on the right day; a task missing the date is dropped. The
/// fallback duration keeps the rendered end defined.
#[must_use]
pub fn normalize_task(record: &TaskRecord, fallback: TimeDelta) -> Option<CalendarEvent> {
    let code = record.code.as_deref()?;
    let name = record.name.as_deref()?;
    let Ok(date) = parse_date(record.submission_date.as_deref()?) else {
        tracing::trace!(code, "Dropping task with bad submission date");
        return None;
    };
    let time = record
        .submission_hour
        .as_deref()
        .and_then(|s| parse_time(s).ok())
        .unwrap_or(NaiveTime::MIN);

    let due = at_time_utc(date, time);

    Some(
        CalendarEvent::timed(
            format!("task-{code}"),
            format!("Due: {name}"),
            EventKind::Task,
            due,
            None,
            fallback,
        )
        .with_prop("dueMarker", true)
        .with_opt_prop("courseCode", record.course_code.clone())
        .with_opt_prop("notes", record.notes.clone()),
    )
}
