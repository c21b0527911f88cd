//! Shared leaf crate for the schedra workspace: configuration, the core
//! error taxonomy, the calendar-event kind vocabulary, and date utilities.

pub mod config;
pub mod error;
pub mod kind;
pub mod util;
