//! Error types for roster core.

use crate::validate::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in roster core operations.
///
/// Every variant is terminal to a single operation only. None of them leave
/// the in-memory dataset partially modified.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Storage backend error (permissions, I/O).
    #[error("storage error: {0}")]
    Storage(#[from] roster_storage::StorageError),

    /// A persisted file exists but its content is not a record list.
    #[error("malformed data in {}: {source}", .path.display())]
    Malformed {
        /// The file that failed to parse.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The dataset could not be serialized.
    #[error("encoding failed: {0}")]
    Encode(#[source] serde_json::Error),

    /// A field value was rejected by the input validation boundary.
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// No record carries the requested id.
    #[error("record not found: id {id:?}")]
    RecordNotFound {
        /// The id that was looked up.
        id: String,
    },
}

impl CoreError {
    /// Creates a malformed data error.
    pub fn malformed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Malformed {
            path: path.into(),
            source,
        }
    }

    /// Creates a record not found error.
    pub fn record_not_found(id: impl Into<String>) -> Self {
        Self::RecordNotFound { id: id.into() }
    }

    /// Returns true if this is a not-found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RecordNotFound { .. })
    }
}
