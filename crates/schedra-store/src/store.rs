//! The document-store contract consumed by the engine.

use crate::error::StoreResult;
use crate::records::{
    BlockedRangeRecord, CourseRecord, EventRecord, LecturerRecord, MeetingRecord,
    PersonalEventRecord, SiteRecord, TaskRecord, YearRecord,
};

/// Collection names as they appear in the hosted store.
pub mod kind {
    pub const YEARS: &str = "years";
    pub const LECTURERS: &str = "lecturers";
    pub const SITES: &str = "sites";
    pub const COURSES: &str = "courses";
    pub const HOLIDAYS: &str = "holidays";
    pub const VACATIONS: &str = "vacations";
    pub const EVENTS: &str = "events";
    pub const TASKS: &str = "tasks";
    pub const PERSONAL_EVENTS: &str = "personalEvents";
    pub const MEETINGS: &str = "meetings";
}

/// ## Summary
/// The four capabilities the engine consumes from the surrounding
/// application's data layer: fetch-all per collection, fetch-by-id for
/// courses, overwrite-style bulk writes keyed by id, and filtered bulk
/// deletes. Personal events are fetched pre-scoped to their owner.
///
/// Services are generic over the implementation; [`crate::memory::MemoryStore`]
/// backs the test suites.
#[allow(async_fn_in_trait)]
pub trait DataStore: Send + Sync {
    /// Every academic year, with embedded semesters.
    async fn years(&self) -> StoreResult<Vec<YearRecord>>;

    async fn lecturers(&self) -> StoreResult<Vec<LecturerRecord>>;

    async fn sites(&self) -> StoreResult<Vec<SiteRecord>>;

    async fn courses(&self) -> StoreResult<Vec<CourseRecord>>;

    /// Fetch a single course by its unique code.
    async fn course_by_code(&self, course_code: &str) -> StoreResult<Option<CourseRecord>>;

    async fn holidays(&self) -> StoreResult<Vec<BlockedRangeRecord>>;

    async fn vacations(&self) -> StoreResult<Vec<BlockedRangeRecord>>;

    async fn events(&self) -> StoreResult<Vec<EventRecord>>;

    async fn tasks(&self) -> StoreResult<Vec<TaskRecord>>;

    /// Personal events belonging to `owner_id` only.
    async fn personal_events(&self, owner_id: &str) -> StoreResult<Vec<PersonalEventRecord>>;

    async fn meetings(&self) -> StoreResult<Vec<MeetingRecord>>;

    async fn meetings_for_course(&self, course_code: &str) -> StoreResult<Vec<MeetingRecord>>;

    /// Overwrite-or-create every meeting, keyed by its id. Not a merge.
    async fn put_meetings(&self, meetings: &[MeetingRecord]) -> StoreResult<()>;

    /// Delete the meetings with exactly these ids. Unknown ids are ignored.
    async fn delete_meetings(&self, ids: &[String]) -> StoreResult<()>;

    /// Delete every meeting belonging to a course (course removal path).
    async fn delete_meetings_for_course(&self, course_code: &str) -> StoreResult<usize>;
}
