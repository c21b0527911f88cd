//! Lecturer-id to display-name lookups for the meeting transform.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use schedra_store::records::LecturerRecord;

/// An explicit read-through cache of lecturer display names.
///
/// Callers load it from the lecturers collection, consult [`Self::is_stale`]
/// before reuse, and can force a refresh with [`Self::invalidate`]. It is
/// passed into normalization rather than captured as ambient state, so every
/// consumer controls its own staleness window.
#[derive(Debug)]
pub struct LecturerDirectory {
    names: HashMap<String, String>,
    loaded_at: Option<Instant>,
    ttl: Duration,
}

impl LecturerDirectory {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            names: HashMap::new(),
            loaded_at: None,
            ttl,
        }
    }

    /// Replace the directory contents with a fresh lecturer snapshot.
    pub fn load(&mut self, lecturers: &[LecturerRecord]) {
        self.names = lecturers
            .iter()
            .map(|l| (l.id.clone(), l.name.clone()))
            .collect();
        self.loaded_at = Some(Instant::now());
        tracing::debug!(count = self.names.len(), "Loaded lecturer directory");
    }

    /// Drop the loaded snapshot; the next staleness check forces a reload.
    pub fn invalidate(&mut self) {
        self.names.clear();
        self.loaded_at = None;
    }

    /// True when never loaded or older than the configured TTL.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.loaded_at
            .is_none_or(|at| at.elapsed() > self.ttl)
    }

    /// The display name for a lecturer id; a miss is not an error.
    #[must_use]
    pub fn name(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }
}
