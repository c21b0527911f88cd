//! Regeneration of a course's meeting set after its definition or semester
//! changes.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tokio::sync::Mutex;

use schedra_core::config::GenerationConfig;
use schedra_engine::blackout::{BlackoutRange, parse_ranges};
use schedra_engine::expand::{SemesterWindow, expand};
use schedra_store::records::SemesterRecord;
use schedra_store::store::DataStore;

use crate::error::{ServiceError, ServiceResult};

/// Outcome of one regeneration, for the admin UI's success state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegenerationSummary {
    /// Instances written (new or overwritten in place).
    pub written: usize,
    /// Stale instances removed because they are no longer in the pattern.
    pub removed: usize,
}

/// ## Summary
/// Recomputes a course's meeting instances: fetch the course and its
/// semester, expand the weekly pattern against the current blackout ranges,
/// then reconcile the stored set against the desired one.
///
/// Writes are diff-and-reconcile rather than delete-all-then-insert-all:
/// the new set is upserted first (deterministic ids make this an overwrite),
/// and only ids present before but absent now are deleted afterwards, so a
/// reader never observes an empty meeting set for a course that has one.
///
/// Regenerations of the same course are serialized internally through a
/// keyed mutex; unrelated courses run in parallel. Blackout-range edits do
/// not regenerate anything by themselves — regeneration stays an explicit
/// administrative action per course.
pub struct RegenerationCoordinator<S> {
    store: Arc<S>,
    config: GenerationConfig,
    course_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl<S: DataStore> RegenerationCoordinator<S> {
    #[must_use]
    pub fn new(store: Arc<S>, config: GenerationConfig) -> Self {
        Self {
            store,
            config,
            course_locks: Mutex::new(HashMap::new()),
        }
    }

    async fn course_lock(&self, course_code: &str) -> Arc<Mutex<()>> {
        let mut locks = self.course_locks.lock().await;
        Arc::clone(
            locks
                .entry(course_code.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(()))),
        )
    }

    /// ## Summary
    /// Regenerates every meeting instance for one course.
    ///
    /// A course whose semester has no valid date window ends up with zero
    /// meetings (the desired set is empty), which reconciliation applies
    /// like any other diff.
    ///
    /// ## Errors
    /// - `ServiceError::NotFound` if the course or its semester is missing;
    ///   nothing is written.
    /// - `ServiceError::StoreError` if a fetch, upsert or delete fails; a
    ///   failed regeneration must be retried by the caller.
    #[tracing::instrument(skip(self))]
    pub async fn regenerate(&self, course_code: &str) -> ServiceResult<RegenerationSummary> {
        let lock = self.course_lock(course_code).await;
        let _guard = lock.lock().await;

        let course = self
            .store
            .course_by_code(course_code)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("course '{course_code}'")))?;

        let semester = self.resolve_semester(&course.semester_code).await?;
        let blackouts = self.fetch_blackouts().await?;

        let desired = match SemesterWindow::from_record(&semester) {
            Some(window) => expand(&course, &window, &blackouts, self.config.overlap_policy),
            None => {
                tracing::warn!(
                    semester = %course.semester_code,
                    "Semester has no valid date window; course gets zero meetings"
                );
                Vec::new()
            }
        };

        let existing = self.store.meetings_for_course(course_code).await?;
        let desired_ids: HashSet<&str> = desired.iter().map(|m| m.id.as_str()).collect();
        let stale: Vec<String> = existing
            .into_iter()
            .map(|m| m.id)
            .filter(|id| !desired_ids.contains(id.as_str()))
            .collect();

        // Upsert before delete: the overlap of old and new ids stays
        // readable the whole way through.
        self.store.put_meetings(&desired).await?;
        self.store.delete_meetings(&stale).await?;

        let summary = RegenerationSummary {
            written: desired.len(),
            removed: stale.len(),
        };
        tracing::info!(
            written = summary.written,
            removed = summary.removed,
            "Regenerated course meetings"
        );
        Ok(summary)
    }

    /// ## Summary
    /// Removes every meeting for a course (the course-deletion path).
    ///
    /// ## Errors
    /// Returns `ServiceError::StoreError` if the bulk delete fails.
    #[tracing::instrument(skip(self))]
    pub async fn remove_course_meetings(&self, course_code: &str) -> ServiceResult<usize> {
        let lock = self.course_lock(course_code).await;
        let _guard = lock.lock().await;

        let removed = self.store.delete_meetings_for_course(course_code).await?;
        tracing::info!(removed, "Removed course meetings");
        Ok(removed)
    }

    async fn resolve_semester(&self, semester_code: &str) -> ServiceResult<SemesterRecord> {
        let years = self.store.years().await?;
        years
            .into_iter()
            .flat_map(|year| year.semesters)
            .find(|s| s.semester_code == semester_code)
            .ok_or_else(|| ServiceError::NotFound(format!("semester '{semester_code}'")))
    }

    async fn fetch_blackouts(&self) -> ServiceResult<Vec<BlackoutRange>> {
        let mut records = self.store.holidays().await?;
        records.extend(self.store.vacations().await?);
        Ok(parse_ranges(&records))
    }
}
