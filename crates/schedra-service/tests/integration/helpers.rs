#![allow(clippy::expect_used, dead_code)]
//! Fixture builders shared by the integration tests.
//!
//! Every test seeds its own `MemoryStore`, so tests run in parallel without
//! contention. The default fixture is one academic year with semester "A"
//! covering April–June 2025.

use std::sync::Arc;

use schedra_core::config::{GenerationConfig, LecturerCacheConfig, SlotOverlapPolicy};
use schedra_store::memory::MemoryStore;
use schedra_store::records::{
    BlockedRangeRecord, CourseRecord, EventRecord, LecturerRecord, PersonalEventRecord,
    SemesterRecord, SlotRecord, TaskRecord, YearRecord,
};

pub fn generation_config() -> GenerationConfig {
    GenerationConfig {
        default_duration_minutes: 60,
        overlap_policy: SlotOverlapPolicy::Allow,
    }
}

pub fn cache_config() -> LecturerCacheConfig {
    LecturerCacheConfig { ttl_seconds: 3600 }
}

pub fn slot(day: &str, start: &str, end: &str) -> SlotRecord {
    SlotRecord {
        day: day.to_string(),
        start: start.to_string(),
        end: end.to_string(),
    }
}

pub fn course(code: &str, hours: Vec<SlotRecord>) -> CourseRecord {
    CourseRecord {
        course_code: code.to_string(),
        course_name: format!("Course {code}"),
        lecturer_id: Some("lect-7".to_string()),
        room_code: Some("B204".to_string()),
        semester_code: "A".to_string(),
        hours,
        notes: None,
        link: None,
    }
}

pub fn year_with_semester_a() -> YearRecord {
    YearRecord {
        year_code: "2025".to_string(),
        name: Some("2024/25".to_string()),
        start_date: Some("2024-10-01".to_string()),
        end_date: Some("2025-07-31".to_string()),
        semesters: vec![SemesterRecord {
            semester_code: "A".to_string(),
            semester_number: Some(1),
            start_date: Some("2025-04-01".to_string()),
            end_date: Some("2025-06-30".to_string()),
        }],
    }
}

pub fn holiday(code: &str, start: &str, end: &str) -> BlockedRangeRecord {
    BlockedRangeRecord {
        code: Some(code.to_string()),
        name: Some(format!("Holiday {code}")),
        start_date: Some(start.to_string()),
        end_date: Some(end.to_string()),
    }
}

pub fn lecturer() -> LecturerRecord {
    LecturerRecord {
        id: "lect-7".to_string(),
        name: "Prof. Adler".to_string(),
    }
}

pub fn general_event(code: &str, date: &str) -> EventRecord {
    EventRecord {
        code: Some(code.to_string()),
        name: Some(format!("Event {code}")),
        date: Some(date.to_string()),
        end_date: None,
        start_hour: Some("10:00".to_string()),
        end_hour: Some("11:00".to_string()),
        all_day: None,
        notes: None,
    }
}

pub fn task(code: &str, date: &str) -> TaskRecord {
    TaskRecord {
        code: Some(code.to_string()),
        name: Some(format!("Task {code}")),
        course_code: Some("CS101".to_string()),
        submission_date: Some(date.to_string()),
        submission_hour: Some("23:59".to_string()),
        notes: None,
    }
}

pub fn personal_event(code: &str, owner: &str, date: &str) -> PersonalEventRecord {
    PersonalEventRecord {
        code: Some(code.to_string()),
        owner_id: owner.to_string(),
        name: Some(format!("Personal {code}")),
        date: Some(date.to_string()),
        end_date: None,
        start_hour: Some("08:00".to_string()),
        end_hour: None,
        all_day: None,
        notes: None,
    }
}

/// A store seeded with the default year/semester and lecturer.
pub async fn seeded_store() -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    store.put_year(year_with_semester_a()).await;
    store.put_lecturer(lecturer()).await;
    store
}
