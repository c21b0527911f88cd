//! Blackout ranges: holiday and vacation date intervals during which no
//! meeting may be generated.

use chrono::NaiveDate;

use schedra_core::util::date::parse_date;
use schedra_store::records::BlockedRangeRecord;

/// A parsed holiday/vacation interval, inclusive on both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlackoutRange {
    pub name: Option<String>,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl BlackoutRange {
    /// Parse-or-reject: a record with a missing or unparseable date yields
    /// `None` and can never block anything.
    #[must_use]
    pub fn from_record(record: &BlockedRangeRecord) -> Option<Self> {
        let start = parse_date(record.start_date.as_deref()?).ok()?;
        let end = parse_date(record.end_date.as_deref()?).ok()?;
        Some(Self {
            name: record.name.clone(),
            start,
            end,
        })
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Parse every well-formed range out of a batch of raw records.
#[must_use]
pub fn parse_ranges(records: &[BlockedRangeRecord]) -> Vec<BlackoutRange> {
    records
        .iter()
        .filter_map(|record| {
            let range = BlackoutRange::from_record(record);
            if range.is_none() {
                tracing::trace!(?record, "Skipping blocked range with missing dates");
            }
            range
        })
        .collect()
}

/// True iff `date` lies inside any of the given ranges.
#[must_use]
pub fn is_blocked(date: NaiveDate, ranges: &[BlackoutRange]) -> bool {
    ranges.iter().any(|range| range.contains(date))
}
