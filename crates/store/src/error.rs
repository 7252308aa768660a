//! Storage error type.

use std::path::PathBuf;

use thiserror::Error;

use crate::storage::Document;

/// Errors that can occur while reading or writing a document.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The document has never been written (in-memory store).
    #[error("{0} document does not exist")]
    Missing(Document),

    /// Reading the backing file failed (including "file not found").
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the backing file failed.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not a JSON array of the expected records, or a
    /// collection could not be serialized.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
