//! Assembly of the visible calendar timeline for one principal.

use std::sync::Arc;

use chrono::TimeDelta;
use tokio::sync::{Mutex, MutexGuard};

use schedra_core::config::{GenerationConfig, LecturerCacheConfig};
use schedra_engine::normalize::{
    CalendarEvent, LecturerDirectory, normalize_event, normalize_holiday, normalize_meeting,
    normalize_personal_event, normalize_task, normalize_vacation, sort_chronologically,
    term_markers,
};
use schedra_store::error::StoreResult;
use schedra_store::store::DataStore;

/// ## Summary
/// Fans out one fetch per entity kind (personal events scoped to the
/// caller), normalizes each kind independently, and concatenates the
/// survivors into one timeline.
///
/// Partial-failure isolation is a hard requirement here: a failed fetch is
/// logged and contributes zero events; one broken collection must never
/// blank the whole calendar. Within each kind, events come back in stable
/// chronological order; no cross-kind ordering is guaranteed.
pub struct VisibilityAggregator<S> {
    store: Arc<S>,
    directory: Mutex<LecturerDirectory>,
    fallback: TimeDelta,
}

impl<S: DataStore> VisibilityAggregator<S> {
    #[must_use]
    pub fn new(store: Arc<S>, generation: GenerationConfig, cache: LecturerCacheConfig) -> Self {
        Self {
            store,
            directory: Mutex::new(LecturerDirectory::new(std::time::Duration::from_secs(
                cache.ttl_seconds,
            ))),
            fallback: TimeDelta::minutes(i64::from(generation.default_duration_minutes)),
        }
    }

    /// ## Summary
    /// Fetches and normalizes everything visible to `principal_id`.
    ///
    /// Infallible by design: every failure degrades to a partial calendar.
    #[tracing::instrument(skip(self))]
    pub async fn visible_events(&self, principal_id: &str) -> Vec<CalendarEvent> {
        let (meetings, events, holidays, vacations, tasks, years, personal) = futures::join!(
            self.store.meetings(),
            self.store.events(),
            self.store.holidays(),
            self.store.vacations(),
            self.store.tasks(),
            self.store.years(),
            self.store.personal_events(principal_id),
        );

        let directory = self.directory().await;
        let fallback = self.fallback;

        let mut timeline = Vec::new();
        collect_kind(&mut timeline, "meetings", meetings, |records| {
            records
                .iter()
                .filter_map(|r| normalize_meeting(r, &directory, fallback))
                .collect()
        });
        collect_kind(&mut timeline, "events", events, |records| {
            records
                .iter()
                .filter_map(|r| normalize_event(r, fallback))
                .collect()
        });
        collect_kind(&mut timeline, "holidays", holidays, |records| {
            records.iter().filter_map(normalize_holiday).collect()
        });
        collect_kind(&mut timeline, "vacations", vacations, |records| {
            records.iter().filter_map(normalize_vacation).collect()
        });
        collect_kind(&mut timeline, "tasks", tasks, |records| {
            records
                .iter()
                .filter_map(|r| normalize_task(r, fallback))
                .collect()
        });
        collect_kind(&mut timeline, "termMarkers", years, term_markers);
        collect_kind(&mut timeline, "personalEvents", personal, |records| {
            records
                .iter()
                .filter_map(|r| normalize_personal_event(r, fallback))
                .collect()
        });

        tracing::debug!(total = timeline.len(), "Assembled visible timeline");
        timeline
    }

    /// Force the next aggregation to reload lecturer names.
    pub async fn invalidate_lecturers(&self) {
        self.directory.lock().await.invalidate();
    }

    /// The lecturer directory, refreshed when stale. A failed refresh keeps
    /// whatever is loaded; meeting events then simply omit lecturer names.
    async fn directory(&self) -> MutexGuard<'_, LecturerDirectory> {
        let mut directory = self.directory.lock().await;
        if directory.is_stale() {
            match self.store.lecturers().await {
                Ok(lecturers) => directory.load(&lecturers),
                Err(error) => {
                    tracing::warn!(%error, "Lecturer directory refresh failed");
                }
            }
        }
        directory
    }
}

/// Normalize one kind's fetch result onto the timeline, in chronological
/// order; a fetch error drops the kind, nothing else.
fn collect_kind<R>(
    timeline: &mut Vec<CalendarEvent>,
    kind: &'static str,
    fetched: StoreResult<Vec<R>>,
    normalize: impl FnOnce(&[R]) -> Vec<CalendarEvent>,
) {
    match fetched {
        Ok(records) => {
            let mut events = normalize(&records);
            tracing::trace!(kind, fetched = records.len(), kept = events.len(), "Normalized kind");
            sort_chronologically(&mut events);
            timeline.append(&mut events);
        }
        Err(error) => {
            tracing::warn!(kind, %error, "Skipping kind after fetch failure");
        }
    }
}
