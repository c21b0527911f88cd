use thiserror::Error;

/// Store layer errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Fetch failed for {kind}: {reason}")]
    Fetch { kind: &'static str, reason: String },

    #[error("Write failed for {kind}: {reason}")]
    Write { kind: &'static str, reason: String },

    #[error("Delete failed for {kind}: {reason}")]
    Delete { kind: &'static str, reason: String },

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
