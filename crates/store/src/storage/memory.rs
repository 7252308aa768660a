//! In-memory documents, used in tests in place of the filesystem.

use std::collections::HashMap;

use super::{Document, DocumentStore};
use crate::error::StoreError;

/// Keeps document text in a map and records every write.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: HashMap<Document, String>,
    writes: Vec<Document>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `document` with raw text. Does not count as a write.
    #[must_use]
    pub fn with_document(mut self, document: Document, contents: impl Into<String>) -> Self {
        self.documents.insert(document, contents.into());
        self
    }

    /// Current text of `document`, if it has been seeded or written.
    #[must_use]
    pub fn contents(&self, document: Document) -> Option<&str> {
        self.documents.get(&document).map(String::as_str)
    }

    /// Number of writes made to `document`.
    #[must_use]
    pub fn write_count(&self, document: Document) -> usize {
        self.writes.iter().filter(|d| **d == document).count()
    }

    /// Total number of writes across all documents.
    #[must_use]
    pub fn total_writes(&self) -> usize {
        self.writes.len()
    }
}

impl DocumentStore for MemoryStore {
    fn read(&self, document: Document) -> Result<String, StoreError> {
        self.documents
            .get(&document)
            .cloned()
            .ok_or(StoreError::Missing(document))
    }

    fn write(&mut self, document: Document, contents: &str) -> Result<(), StoreError> {
        self.documents.insert(document, contents.to_owned());
        self.writes.push(document);
        Ok(())
    }
}
