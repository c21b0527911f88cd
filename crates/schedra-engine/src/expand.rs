//! Expansion of a course's weekly pattern into dated meeting instances.

use chrono::{Datelike, NaiveDate};

use schedra_core::config::SlotOverlapPolicy;
use schedra_core::util::date::parse_date;
use schedra_store::records::{CourseRecord, MeetingRecord, SemesterRecord};

use crate::blackout::{BlackoutRange, is_blocked};
use crate::identity::meeting_id;
use crate::pattern::{WeeklySlot, parse_slots};

/// A semester's validated date window, inclusive on both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemesterWindow {
    pub code: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl SemesterWindow {
    /// `None` when either bound is missing/unparseable or start > end;
    /// expansion over such a semester produces no meetings.
    #[must_use]
    pub fn from_record(record: &SemesterRecord) -> Option<Self> {
        let start = parse_date(record.start_date.as_deref()?).ok()?;
        let end = parse_date(record.end_date.as_deref()?).ok()?;
        if start > end {
            tracing::debug!(
                semester = %record.semester_code,
                %start,
                %end,
                "Semester window is inverted"
            );
            return None;
        }
        Some(Self {
            code: record.semester_code.clone(),
            start,
            end,
        })
    }
}

/// ## Summary
/// Expands a course's weekly pattern over a semester window, skipping
/// blacked-out dates entirely, and emits one meeting instance per matching
/// slot per date. The instances snapshot the course's lecturer, room, notes
/// and link as they are right now.
///
/// A course with no well-formed slots yields an empty vec rather than an
/// error; malformed slots never abort the iteration.
pub fn expand(
    course: &CourseRecord,
    semester: &SemesterWindow,
    blackouts: &[BlackoutRange],
    policy: SlotOverlapPolicy,
) -> Vec<MeetingRecord> {
    let slots = parse_slots(&course.hours, policy);
    if slots.is_empty() {
        tracing::debug!(course = %course.course_code, "Course has no usable weekly slots");
        return Vec::new();
    }

    let mut meetings = Vec::new();

    for date in semester.start.iter_days() {
        if date > semester.end {
            break;
        }
        if is_blocked(date, blackouts) {
            tracing::trace!(%date, "Date is blacked out");
            continue;
        }
        for slot in slots.iter().filter(|s| s.weekday == date.weekday()) {
            meetings.push(instance(course, semester, date, slot));
        }
    }

    tracing::debug!(
        course = %course.course_code,
        semester = %semester.code,
        count = meetings.len(),
        "Expanded weekly pattern"
    );
    meetings
}

fn instance(
    course: &CourseRecord,
    semester: &SemesterWindow,
    date: NaiveDate,
    slot: &WeeklySlot,
) -> MeetingRecord {
    MeetingRecord {
        id: meeting_id(&course.course_code, date, slot.start),
        course_code: course.course_code.clone(),
        date: date.format("%Y-%m-%d").to_string(),
        start_hour: slot.start.format("%H:%M").to_string(),
        end_hour: Some(slot.end.format("%H:%M").to_string()),
        title: course.course_name.clone(),
        room_code: course.room_code.clone(),
        lecturer_id: course.lecturer_id.clone(),
        semester_code: semester.code.clone(),
        notes: course.notes.clone(),
        link: course.link.clone(),
    }
}
