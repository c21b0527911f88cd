//! Course-meeting normalization.

use chrono::TimeDelta;

use schedra_core::kind::EventKind;
use schedra_core::util::date::{at_time_utc, parse_date, parse_time};
use schedra_store::records::MeetingRecord;

use super::directory::LecturerDirectory;
use super::CalendarEvent;

/// ## Summary
/// Normalizes a generated meeting instance into a timed calendar event.
///
/// The lecturer display name is resolved through the injected directory; a
/// miss leaves the field absent, never fails. Room, notes, link and the
/// semester code pass through as extended props.
///
/// Returns `None` when the date or start time cannot be parsed; that record
/// alone is dropped.
#[must_use]
pub fn normalize_meeting(
    record: &MeetingRecord,
    lecturers: &LecturerDirectory,
    fallback: TimeDelta,
) -> Option<CalendarEvent> {
    let Ok(date) = parse_date(&record.date) else {
        tracing::trace!(id = %record.id, date = %record.date, "Dropping meeting with bad date");
        return None;
    };
    let Ok(start_time) = parse_time(&record.start_hour) else {
        tracing::trace!(id = %record.id, start = %record.start_hour, "Dropping meeting with bad start time");
        return None;
    };

    let start = at_time_utc(date, start_time);
    let end = record
        .end_hour
        .as_deref()
        .and_then(|s| parse_time(s).ok())
        .map(|t| at_time_utc(date, t));

    let lecturer_name = record
        .lecturer_id
        .as_deref()
        .and_then(|id| lecturers.name(id))
        .map(String::from);

    Some(
        CalendarEvent::timed(
            record.id.clone(),
            record.title.clone(),
            EventKind::Meeting,
            start,
            end,
            fallback,
        )
        .with_prop("courseCode", record.course_code.clone())
        .with_prop("semesterCode", record.semester_code.clone())
        .with_opt_prop("lecturerId", record.lecturer_id.clone())
        .with_opt_prop("lecturerName", lecturer_name)
        .with_opt_prop("roomCode", record.room_code.clone())
        .with_opt_prop("notes", record.notes.clone())
        .with_opt_prop("link", record.link.clone()),
    )
}
