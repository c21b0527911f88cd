//! The pure core of schedra: weekly-pattern expansion into dated meeting
//! instances, deterministic meeting identity, blackout filtering, and the
//! normalization of every entity kind into one calendar-event shape.
//!
//! Nothing in this crate performs I/O or suspends; orchestration lives in
//! `schedra-service`.

pub mod blackout;
pub mod expand;
pub mod identity;
pub mod normalize;
pub mod pattern;
