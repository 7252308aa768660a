//! Documents as files on disk.

use std::fs;

use tracing::debug;

use super::{Document, DocumentStore};
use crate::config::StoreConfig;
use crate::error::StoreError;

/// Stores each document as a plain UTF-8 file under the configured data
/// directory. Writes replace the file contents; there is no locking.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    config: StoreConfig,
}

impl JsonFileStore {
    #[must_use]
    pub const fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }
}

impl DocumentStore for JsonFileStore {
    fn read(&self, document: Document) -> Result<String, StoreError> {
        let path = self.config.path_for(document);
        debug!(path = %path.display(), "Reading document");
        fs::read_to_string(&path).map_err(|source| StoreError::Read { path, source })
    }

    fn write(&mut self, document: Document, contents: &str) -> Result<(), StoreError> {
        let path = self.config.path_for(document);
        debug!(path = %path.display(), bytes = contents.len(), "Writing document");
        fs::write(&path, contents).map_err(|source| StoreError::Write { path, source })
    }
}
