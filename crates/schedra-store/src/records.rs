//! Raw document shapes as they live in the hosted store.
//!
//! Field names follow the store's camelCase convention. Everything that can
//! be absent or malformed in legacy documents is kept optional here; the
//! engine's parse-or-reject step is where a record earns a typed shape or
//! gets dropped.

use serde::{Deserialize, Serialize};

/// One weekly time-slot entry on a course (`{day, start, end}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotRecord {
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

/// A course definition as saved by an administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
    pub course_code: String,
    pub course_name: String,
    #[serde(default)]
    pub lecturer_id: Option<String>,
    #[serde(default)]
    pub room_code: Option<String>,
    pub semester_code: String,
    #[serde(default)]
    pub hours: Vec<SlotRecord>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// A semester embedded in its parent year document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemesterRecord {
    pub semester_code: String,
    #[serde(default)]
    pub semester_number: Option<i32>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// An academic year with its embedded semesters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRecord {
    pub year_code: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub semesters: Vec<SemesterRecord>,
}

/// A holiday or vacation date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockedRangeRecord {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LecturerRecord {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRecord {
    pub room_code: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// A site with its embedded rooms. Rooms are carried as pass-through codes;
/// the engine never joins against them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteRecord {
    pub site_code: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rooms: Vec<RoomRecord>,
}

/// A general (institution-wide) event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub start_hour: Option<String>,
    #[serde(default)]
    pub end_hour: Option<String>,
    #[serde(default)]
    pub all_day: Option<bool>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A task with a submission deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub course_code: Option<String>,
    #[serde(default)]
    pub submission_date: Option<String>,
    #[serde(default)]
    pub submission_hour: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A personal event owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalEventRecord {
    #[serde(default)]
    pub code: Option<String>,
    pub owner_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub start_hour: Option<String>,
    #[serde(default)]
    pub end_hour: Option<String>,
    #[serde(default)]
    pub all_day: Option<bool>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A generated course meeting instance.
///
/// Lecturer, room, notes and link are snapshots taken from the course at
/// generation time, not live joins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingRecord {
    pub id: String,
    pub course_code: String,
    pub date: String,
    pub start_hour: String,
    #[serde(default)]
    pub end_hour: Option<String>,
    pub title: String,
    #[serde(default)]
    pub room_code: Option<String>,
    #[serde(default)]
    pub lecturer_id: Option<String>,
    pub semester_code: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}
