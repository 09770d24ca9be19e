use std::path::PathBuf;
use thiserror::Error;

/// Result type for snapshot storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors raised while reading or writing the count snapshot.
///
/// None of these are fatal: read errors fall back to an all-zero table and
/// write errors are reported while the in-memory counts stay authoritative.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("snapshot file {path:?} does not exist")]
    NotFound { path: PathBuf },

    #[error("failed to read snapshot {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot {path:?} is malformed: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write snapshot {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize counts: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// A label that is not one of the fixed tally categories
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tally category: {0:?}")]
pub struct InvalidCategory(pub String);
