//! Data-store collaborator boundary for schedra.
//!
//! The engine never talks to a hosted backend directly: everything goes
//! through the [`store::DataStore`] trait, with raw document shapes defined
//! in [`records`]. [`memory::MemoryStore`] is the in-process implementation
//! used by tests and by embedders without a hosted document store.

pub mod error;
pub mod memory;
pub mod records;
pub mod store;
