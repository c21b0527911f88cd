//! Integration tests for `RegenerationCoordinator`.
//!
//! Tests:
//! - Idempotent regeneration (same inputs twice, same id set)
//! - Diff-and-reconcile after a course edit
//! - Fail-fast on missing course/semester with no writes
//! - Serialization of concurrent same-course regenerations

use std::sync::Arc;

use schedra_service::error::ServiceError;
use schedra_service::regenerate::RegenerationCoordinator;
use schedra_store::store::{DataStore, kind};

use super::helpers::*;

#[test_log::test(tokio::test)]
async fn regenerating_twice_yields_the_same_id_set() {
    let store = seeded_store().await;
    store
        .put_course(course("CS101", vec![slot("Monday", "09:00", "10:30")]))
        .await;
    store.put_holiday(holiday("pes", "2025-04-07", "2025-04-07")).await;

    let coordinator = RegenerationCoordinator::new(Arc::clone(&store), generation_config());

    let first = coordinator.regenerate("CS101").await.expect("first run");
    let ids_after_first = store.meeting_ids().await;

    let second = coordinator.regenerate("CS101").await.expect("second run");
    let ids_after_second = store.meeting_ids().await;

    assert_eq!(ids_after_first, ids_after_second);
    assert_eq!(first.written, second.written);
    assert_eq!(second.removed, 0);
}

#[test_log::test(tokio::test)]
async fn holiday_dates_are_excluded() {
    let store = seeded_store().await;
    store
        .put_course(course("CS101", vec![slot("Monday", "09:00", "10:30")]))
        .await;
    store.put_holiday(holiday("pes", "2025-04-07", "2025-04-07")).await;

    let coordinator = RegenerationCoordinator::new(Arc::clone(&store), generation_config());
    coordinator.regenerate("CS101").await.expect("regenerate");

    let meetings = store.meetings_for_course("CS101").await.expect("fetch");
    assert!(!meetings.is_empty());
    assert!(meetings.iter().all(|m| m.date != "2025-04-07"));
}

#[test_log::test(tokio::test)]
async fn course_edit_reconciles_away_stale_instances() {
    let store = seeded_store().await;
    store
        .put_course(course("CS101", vec![slot("Monday", "09:00", "10:30")]))
        .await;

    let coordinator = RegenerationCoordinator::new(Arc::clone(&store), generation_config());
    coordinator.regenerate("CS101").await.expect("initial run");
    let monday_ids = store.meeting_ids().await;
    assert!(monday_ids.iter().all(|id| id.ends_with("_0900")));

    // Move the course to Wednesday afternoons.
    store
        .put_course(course("CS101", vec![slot("Wednesday", "14:00", "16:00")]))
        .await;
    let summary = coordinator.regenerate("CS101").await.expect("second run");

    assert_eq!(summary.removed, monday_ids.len());
    let ids = store.meeting_ids().await;
    assert!(!ids.is_empty());
    assert!(ids.iter().all(|id| id.ends_with("_1400")));
}

#[test_log::test(tokio::test)]
async fn missing_course_fails_fast_without_writes() {
    let store = seeded_store().await;
    let coordinator = RegenerationCoordinator::new(Arc::clone(&store), generation_config());

    let result = coordinator.regenerate("GHOST").await;
    assert!(matches!(result, Err(ServiceError::NotFound(_))));
    assert!(store.meeting_ids().await.is_empty());
}

#[test_log::test(tokio::test)]
async fn missing_semester_fails_fast_without_writes() {
    let store = seeded_store().await;
    let mut orphan = course("CS101", vec![slot("Monday", "09:00", "10:30")]);
    orphan.semester_code = "Z".to_string();
    store.put_course(orphan).await;

    let coordinator = RegenerationCoordinator::new(Arc::clone(&store), generation_config());
    let result = coordinator.regenerate("CS101").await;
    assert!(matches!(result, Err(ServiceError::NotFound(_))));
    assert!(store.meeting_ids().await.is_empty());
}

#[test_log::test(tokio::test)]
async fn failed_write_surfaces_as_store_error() {
    let store = seeded_store().await;
    store
        .put_course(course("CS101", vec![slot("Monday", "09:00", "10:30")]))
        .await;
    store.fail_collection(kind::MEETINGS).await;

    let coordinator = RegenerationCoordinator::new(Arc::clone(&store), generation_config());
    let result = coordinator.regenerate("CS101").await;
    assert!(matches!(result, Err(ServiceError::StoreError(_))));

    // Retry after the store recovers.
    store.clear_failures().await;
    coordinator.regenerate("CS101").await.expect("retry succeeds");
    assert!(!store.meeting_ids().await.is_empty());
}

#[test_log::test(tokio::test)]
async fn concurrent_same_course_regenerations_serialize() {
    let store = seeded_store().await;
    store
        .put_course(course("CS101", vec![slot("Monday", "09:00", "10:30")]))
        .await;

    let coordinator = Arc::new(RegenerationCoordinator::new(
        Arc::clone(&store),
        generation_config(),
    ));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let coordinator = Arc::clone(&coordinator);
        handles.push(tokio::spawn(async move {
            coordinator.regenerate("CS101").await
        }));
    }
    for handle in handles {
        handle.await.expect("task").expect("regenerate");
    }

    // Mondays in April-June 2025: 7 (blocked by nothing here), 14, 21, 28,
    // 5, 12, 19, 26 (May), 2, 9, 16, 23, 30 (June) = 13 instances.
    assert_eq!(store.meeting_ids().await.len(), 13);
}

#[test_log::test(tokio::test)]
async fn remove_course_meetings_clears_only_that_course() {
    let store = seeded_store().await;
    store
        .put_course(course("CS101", vec![slot("Monday", "09:00", "10:30")]))
        .await;
    store
        .put_course(course("MA201", vec![slot("Tuesday", "12:00", "14:00")]))
        .await;

    let coordinator = RegenerationCoordinator::new(Arc::clone(&store), generation_config());
    coordinator.regenerate("CS101").await.expect("cs101");
    coordinator.regenerate("MA201").await.expect("ma201");

    let removed = coordinator
        .remove_course_meetings("CS101")
        .await
        .expect("remove");
    assert!(removed > 0);

    let remaining = store.meeting_ids().await;
    assert!(!remaining.is_empty());
    assert!(remaining.iter().all(|id| id.starts_with("MA201_")));
}
