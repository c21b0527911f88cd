//! Orchestration layer: regeneration of course meetings and assembly of the
//! visible calendar timeline, on top of the pure engine and the data-store
//! boundary.

pub mod error;
pub mod regenerate;
pub mod visibility;
