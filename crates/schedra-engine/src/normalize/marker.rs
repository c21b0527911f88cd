//! Year and semester boundary markers.
//!
//! Each term range emits two zero-duration all-day events (one at its start,
//! one at its end) instead of a single spanning event; the calendar UI
//! highlights term boundaries, not term interiors.

use schedra_core::kind::EventKind;
use schedra_core::util::date::parse_date;
use schedra_store::records::YearRecord;

use super::CalendarEvent;

/// Emit boundary markers for every year and its embedded semesters.
///
/// A bound whose date is missing or unparseable contributes no marker;
/// nothing is dropped wholesale.
#[must_use]
pub fn term_markers(years: &[YearRecord]) -> Vec<CalendarEvent> {
    let mut markers = Vec::new();

    for year in years {
        let year_label = year.name.as_deref().unwrap_or(&year.year_code);
        push_boundary_pair(
            &mut markers,
            &format!("year-{}", year.year_code),
            year_label,
            year.start_date.as_deref(),
            year.end_date.as_deref(),
        );

        for semester in &year.semesters {
            let label = format!("{year_label} Semester {}", semester.semester_code);
            push_boundary_pair(
                &mut markers,
                &format!("sem-{}-{}", year.year_code, semester.semester_code),
                &label,
                semester.start_date.as_deref(),
                semester.end_date.as_deref(),
            );
        }
    }

    markers
}

fn push_boundary_pair(
    markers: &mut Vec<CalendarEvent>,
    id_base: &str,
    label: &str,
    start_date: Option<&str>,
    end_date: Option<&str>,
) {
    if let Some(start) = start_date.and_then(|s| parse_date(s).ok()) {
        markers.push(CalendarEvent::all_day(
            format!("{id_base}-start"),
            format!("{label} begins"),
            EventKind::TermMarker,
            start,
            start,
        ));
    }
    if let Some(end) = end_date.and_then(|s| parse_date(s).ok()) {
        markers.push(CalendarEvent::all_day(
            format!("{id_base}-end"),
            format!("{label} ends"),
            EventKind::TermMarker,
            end,
            end,
        ));
    }
}
