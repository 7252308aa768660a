//! Integration tests for Stockroom.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p stockroom-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `inventory_workflow` - Inventory services end to end
//! - `cart_workflow` - Cart services against a seeded inventory
//! - `file_store` - The same services against real files in a temp directory
//!
//! This crate only exposes fixtures shared by the test files.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;

use serde::de::DeserializeOwned;
use stockroom_store::{Document, JsonFileStore, MemoryStore, StoreConfig};

/// Two items, the first in stock, the second not.
pub const TWO_ITEMS: &str = r#"[
  {
    "id": "1",
    "name": "Item 1",
    "priceInCents": 1200,
    "inStock": true,
    "category": "Category A"
  },
  {
    "id": "2",
    "name": "Item 2",
    "priceInCents": 800,
    "inStock": false,
    "category": "Category B"
  }
]"#;

/// An in-memory store seeded with [`TWO_ITEMS`] and an empty cart.
#[must_use]
pub fn seeded_memory_store() -> MemoryStore {
    MemoryStore::new()
        .with_document(Document::Inventory, TWO_ITEMS)
        .with_document(Document::Cart, "[]")
}

/// A file store rooted at `dir`.
#[must_use]
pub fn file_store(dir: &Path) -> JsonFileStore {
    JsonFileStore::new(StoreConfig::default().with_data_dir(dir))
}

/// Parse the current contents of `document` in a memory store.
///
/// # Panics
///
/// Panics if the document is missing or is not valid JSON for `T`.
#[must_use]
#[allow(clippy::expect_used)]
pub fn stored<T: DeserializeOwned>(store: &MemoryStore, document: Document) -> Vec<T> {
    let text = store.contents(document).expect("document should exist");
    serde_json::from_str(text).expect("document should be valid JSON")
}
