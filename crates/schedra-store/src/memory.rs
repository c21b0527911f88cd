//! In-process `DataStore` backed by maps behind an async lock.
//!
//! Used by the test suites and by embedders that want the engine without a
//! hosted document store. Collections can be marked as failing to exercise
//! partial-fetch isolation in callers.

use std::collections::{HashMap, HashSet};

use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::records::{
    BlockedRangeRecord, CourseRecord, EventRecord, LecturerRecord, MeetingRecord,
    PersonalEventRecord, SiteRecord, TaskRecord, YearRecord,
};
use crate::store::{DataStore, kind};

#[derive(Debug, Default)]
struct Inner {
    years: Vec<YearRecord>,
    lecturers: Vec<LecturerRecord>,
    sites: Vec<SiteRecord>,
    courses: HashMap<String, CourseRecord>,
    holidays: Vec<BlockedRangeRecord>,
    vacations: Vec<BlockedRangeRecord>,
    events: Vec<EventRecord>,
    tasks: Vec<TaskRecord>,
    personal_events: Vec<PersonalEventRecord>,
    meetings: HashMap<String, MeetingRecord>,
    failing: HashSet<&'static str>,
}

impl Inner {
    fn check(&self, collection: &'static str) -> StoreResult<()> {
        if self.failing.contains(collection) {
            return Err(StoreError::Fetch {
                kind: collection,
                reason: "collection marked as failing".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn put_year(&self, year: YearRecord) {
        self.inner.write().await.years.push(year);
    }

    pub async fn put_lecturer(&self, lecturer: LecturerRecord) {
        self.inner.write().await.lecturers.push(lecturer);
    }

    pub async fn put_site(&self, site: SiteRecord) {
        self.inner.write().await.sites.push(site);
    }

    /// Insert or replace a course, keyed by its code.
    pub async fn put_course(&self, course: CourseRecord) {
        self.inner
            .write()
            .await
            .courses
            .insert(course.course_code.clone(), course);
    }

    pub async fn put_holiday(&self, range: BlockedRangeRecord) {
        self.inner.write().await.holidays.push(range);
    }

    pub async fn put_vacation(&self, range: BlockedRangeRecord) {
        self.inner.write().await.vacations.push(range);
    }

    pub async fn put_event(&self, event: EventRecord) {
        self.inner.write().await.events.push(event);
    }

    pub async fn put_task(&self, task: TaskRecord) {
        self.inner.write().await.tasks.push(task);
    }

    pub async fn put_personal_event(&self, event: PersonalEventRecord) {
        self.inner.write().await.personal_events.push(event);
    }

    /// Mark a collection (by its [`kind`] name) as failing; every fetch
    /// against it returns an error until [`Self::clear_failures`].
    pub async fn fail_collection(&self, collection: &'static str) {
        self.inner.write().await.failing.insert(collection);
    }

    pub async fn clear_failures(&self) {
        self.inner.write().await.failing.clear();
    }

    /// Snapshot of all stored meeting ids, for assertions.
    pub async fn meeting_ids(&self) -> Vec<String> {
        let inner = self.inner.read().await;
        let mut ids: Vec<String> = inner.meetings.keys().cloned().collect();
        ids.sort();
        ids
    }
}

impl DataStore for MemoryStore {
    async fn years(&self) -> StoreResult<Vec<YearRecord>> {
        let inner = self.inner.read().await;
        inner.check(kind::YEARS)?;
        Ok(inner.years.clone())
    }

    async fn lecturers(&self) -> StoreResult<Vec<LecturerRecord>> {
        let inner = self.inner.read().await;
        inner.check(kind::LECTURERS)?;
        Ok(inner.lecturers.clone())
    }

    async fn sites(&self) -> StoreResult<Vec<SiteRecord>> {
        let inner = self.inner.read().await;
        inner.check(kind::SITES)?;
        Ok(inner.sites.clone())
    }

    async fn courses(&self) -> StoreResult<Vec<CourseRecord>> {
        let inner = self.inner.read().await;
        inner.check(kind::COURSES)?;
        Ok(inner.courses.values().cloned().collect())
    }

    async fn course_by_code(&self, course_code: &str) -> StoreResult<Option<CourseRecord>> {
        let inner = self.inner.read().await;
        inner.check(kind::COURSES)?;
        Ok(inner.courses.get(course_code).cloned())
    }

    async fn holidays(&self) -> StoreResult<Vec<BlockedRangeRecord>> {
        let inner = self.inner.read().await;
        inner.check(kind::HOLIDAYS)?;
        Ok(inner.holidays.clone())
    }

    async fn vacations(&self) -> StoreResult<Vec<BlockedRangeRecord>> {
        let inner = self.inner.read().await;
        inner.check(kind::VACATIONS)?;
        Ok(inner.vacations.clone())
    }

    async fn events(&self) -> StoreResult<Vec<EventRecord>> {
        let inner = self.inner.read().await;
        inner.check(kind::EVENTS)?;
        Ok(inner.events.clone())
    }

    async fn tasks(&self) -> StoreResult<Vec<TaskRecord>> {
        let inner = self.inner.read().await;
        inner.check(kind::TASKS)?;
        Ok(inner.tasks.clone())
    }

    async fn personal_events(&self, owner_id: &str) -> StoreResult<Vec<PersonalEventRecord>> {
        let inner = self.inner.read().await;
        inner.check(kind::PERSONAL_EVENTS)?;
        Ok(inner
            .personal_events
            .iter()
            .filter(|e| e.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn meetings(&self) -> StoreResult<Vec<MeetingRecord>> {
        let inner = self.inner.read().await;
        inner.check(kind::MEETINGS)?;
        Ok(inner.meetings.values().cloned().collect())
    }

    async fn meetings_for_course(&self, course_code: &str) -> StoreResult<Vec<MeetingRecord>> {
        let inner = self.inner.read().await;
        inner.check(kind::MEETINGS)?;
        Ok(inner
            .meetings
            .values()
            .filter(|m| m.course_code == course_code)
            .cloned()
            .collect())
    }

    async fn put_meetings(&self, meetings: &[MeetingRecord]) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        if inner.failing.contains(kind::MEETINGS) {
            return Err(StoreError::Write {
                kind: kind::MEETINGS,
                reason: "collection marked as failing".to_string(),
            });
        }
        for meeting in meetings {
            inner.meetings.insert(meeting.id.clone(), meeting.clone());
        }
        Ok(())
    }

    async fn delete_meetings(&self, ids: &[String]) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        if inner.failing.contains(kind::MEETINGS) {
            return Err(StoreError::Delete {
                kind: kind::MEETINGS,
                reason: "collection marked as failing".to_string(),
            });
        }
        for id in ids {
            inner.meetings.remove(id);
        }
        Ok(())
    }

    async fn delete_meetings_for_course(&self, course_code: &str) -> StoreResult<usize> {
        let mut inner = self.inner.write().await;
        if inner.failing.contains(kind::MEETINGS) {
            return Err(StoreError::Delete {
                kind: kind::MEETINGS,
                reason: "collection marked as failing".to_string(),
            });
        }
        let before = inner.meetings.len();
        inner.meetings.retain(|_, m| m.course_code != course_code);
        Ok(before - inner.meetings.len())
    }
}
