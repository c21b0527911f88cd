//! Weekly-pattern slots: the `(weekday, start, end)` triples on a course.

use chrono::{NaiveTime, Weekday};

use schedra_core::config::SlotOverlapPolicy;
use schedra_core::util::date::{parse_time, parse_weekday};
use schedra_store::records::SlotRecord;

/// A parsed weekly slot. Construction is the single parse-or-reject point
/// for the raw `{day, start, end}` shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklySlot {
    pub weekday: Weekday,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl WeeklySlot {
    /// `None` when the day name or either time string is malformed. The
    /// record is skipped, never a pipeline failure.
    #[must_use]
    pub fn from_record(record: &SlotRecord) -> Option<Self> {
        let weekday = parse_weekday(&record.day).ok()?;
        let start = parse_time(&record.start).ok()?;
        let end = parse_time(&record.end).ok()?;
        Some(Self {
            weekday,
            start,
            end,
        })
    }

    /// Two slots overlap when they share a weekday and their half-open time
    /// intervals intersect. Back-to-back slots do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.weekday == other.weekday && self.start < other.end && other.start < self.end
    }
}

/// Parse a course's slot records, applying the configured overlap policy.
///
/// Malformed slots are dropped individually. Under
/// [`SlotOverlapPolicy::Reject`], a slot overlapping an earlier accepted
/// slot on the same weekday is dropped with a warning; under `Allow` every
/// well-formed slot survives, duplicates included (legacy double sessions).
#[must_use]
pub fn parse_slots(records: &[SlotRecord], policy: SlotOverlapPolicy) -> Vec<WeeklySlot> {
    let mut accepted: Vec<WeeklySlot> = Vec::with_capacity(records.len());

    for record in records {
        let Some(slot) = WeeklySlot::from_record(record) else {
            tracing::debug!(?record, "Skipping malformed weekly slot");
            continue;
        };

        if policy == SlotOverlapPolicy::Reject
            && let Some(existing) = accepted.iter().find(|s| s.overlaps(&slot))
        {
            tracing::warn!(?slot, ?existing, "Rejecting overlapping weekly slot");
            continue;
        }

        accepted.push(slot);
    }

    accepted
}
