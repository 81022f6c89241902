//! Store error types.

use thiserror::Error;

/// Errors reading the persisted speed record.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to read the record file from disk.
    #[error("failed to read speed record: {0}")]
    Io(#[from] std::io::Error),
    /// The record file held something other than JSON.
    #[error("failed to parse speed record: {0}")]
    Json(#[from] serde_json::Error),
}
