//! Integration tests for the schedra service layer, run against the
//! in-process `MemoryStore`.

mod helpers;
mod regeneration;
mod visibility;
