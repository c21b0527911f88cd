//! Integration tests for `VisibilityAggregator`.
//!
//! Tests:
//! - Every kind lands on the timeline with its tag
//! - Partial-failure isolation when one collection's fetch fails
//! - Personal-event scoping to the calling principal
//! - Chronological order within a kind

use std::sync::Arc;

use schedra_core::kind::EventKind;
use schedra_service::regenerate::RegenerationCoordinator;
use schedra_service::visibility::VisibilityAggregator;
use schedra_store::store::kind;

use super::helpers::*;

#[test_log::test(tokio::test)]
async fn all_kinds_appear_on_the_timeline() {
    let store = seeded_store().await;
    store
        .put_course(course("CS101", vec![slot("Monday", "09:00", "10:30")]))
        .await;
    store.put_holiday(holiday("pes", "2025-04-07", "2025-04-09")).await;
    store.put_event(general_event("e1", "2025-05-01")).await;
    store.put_task(task("t1", "2025-04-20")).await;
    store.put_personal_event(personal_event("p1", "alice", "2025-04-14")).await;

    let coordinator = RegenerationCoordinator::new(Arc::clone(&store), generation_config());
    coordinator.regenerate("CS101").await.expect("regenerate");

    let aggregator =
        VisibilityAggregator::new(Arc::clone(&store), generation_config(), cache_config());
    let timeline = aggregator.visible_events("alice").await;

    for kind in [
        EventKind::Meeting,
        EventKind::Holiday,
        EventKind::Event,
        EventKind::Task,
        EventKind::StudentEvent,
        EventKind::TermMarker,
    ] {
        assert!(
            timeline.iter().any(|e| e.kind == kind),
            "expected at least one {kind} event"
        );
    }
}

#[test_log::test(tokio::test)]
async fn one_failing_collection_never_blanks_the_calendar() {
    let store = seeded_store().await;
    store.put_event(general_event("e1", "2025-05-01")).await;
    store.put_holiday(holiday("pes", "2025-04-07", "2025-04-09")).await;
    store.fail_collection(kind::HOLIDAYS).await;

    let aggregator =
        VisibilityAggregator::new(Arc::clone(&store), generation_config(), cache_config());
    let timeline = aggregator.visible_events("alice").await;

    assert!(timeline.iter().any(|e| e.kind == EventKind::Event));
    assert!(timeline.iter().any(|e| e.kind == EventKind::TermMarker));
    assert!(timeline.iter().all(|e| e.kind != EventKind::Holiday));
}

#[test_log::test(tokio::test)]
async fn personal_events_are_scoped_to_the_principal() {
    let store = seeded_store().await;
    store.put_personal_event(personal_event("p1", "alice", "2025-04-14")).await;
    store.put_personal_event(personal_event("p2", "bob", "2025-04-15")).await;

    let aggregator =
        VisibilityAggregator::new(Arc::clone(&store), generation_config(), cache_config());
    let timeline = aggregator.visible_events("alice").await;

    let personal: Vec<&str> = timeline
        .iter()
        .filter(|e| e.kind == EventKind::StudentEvent)
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(personal, vec!["personal-p1"]);
}

#[test_log::test(tokio::test)]
async fn meetings_resolve_lecturer_names() {
    let store = seeded_store().await;
    store
        .put_course(course("CS101", vec![slot("Monday", "09:00", "10:30")]))
        .await;

    let coordinator = RegenerationCoordinator::new(Arc::clone(&store), generation_config());
    coordinator.regenerate("CS101").await.expect("regenerate");

    let aggregator =
        VisibilityAggregator::new(Arc::clone(&store), generation_config(), cache_config());
    let timeline = aggregator.visible_events("alice").await;

    let meeting = timeline
        .iter()
        .find(|e| e.kind == EventKind::Meeting)
        .expect("at least one meeting");
    assert_eq!(
        meeting
            .extended_props
            .get("lecturerName")
            .and_then(serde_json::Value::as_str),
        Some("Prof. Adler")
    );
}

#[test_log::test(tokio::test)]
async fn a_failed_lecturer_fetch_degrades_to_nameless_meetings() {
    let store = seeded_store().await;
    store
        .put_course(course("CS101", vec![slot("Monday", "09:00", "10:30")]))
        .await;

    let coordinator = RegenerationCoordinator::new(Arc::clone(&store), generation_config());
    coordinator.regenerate("CS101").await.expect("regenerate");
    store.fail_collection(kind::LECTURERS).await;

    let aggregator =
        VisibilityAggregator::new(Arc::clone(&store), generation_config(), cache_config());
    let timeline = aggregator.visible_events("alice").await;

    let meeting = timeline
        .iter()
        .find(|e| e.kind == EventKind::Meeting)
        .expect("meetings still present");
    assert!(!meeting.extended_props.contains_key("lecturerName"));
}

#[test_log::test(tokio::test)]
async fn events_within_a_kind_are_chronological() {
    let store = seeded_store().await;
    store.put_event(general_event("late", "2025-06-01")).await;
    store.put_event(general_event("early", "2025-04-02")).await;
    store.put_event(general_event("mid", "2025-05-01")).await;

    let aggregator =
        VisibilityAggregator::new(Arc::clone(&store), generation_config(), cache_config());
    let timeline = aggregator.visible_events("alice").await;

    let events: Vec<&str> = timeline
        .iter()
        .filter(|e| e.kind == EventKind::Event)
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(events, vec!["event-early", "event-mid", "event-late"]);
}
