//! Document storage.
//!
//! # Documents
//!
//! - `inventory` - JSON array of [`InventoryItem`](stockroom_core::InventoryItem)
//! - `cart` - JSON array of [`CartEntry`](stockroom_core::CartEntry)
//!
//! A [`DocumentStore`] only moves raw text. [`load`] and [`save`] layer the
//! JSON handling on top: reads never fail (a missing or corrupt document is an
//! empty collection, a bad record is skipped), writes replace the whole document with pretty-printed
//! JSON.

mod file;
mod memory;

use core::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::error::StoreError;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// The two named documents the application persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Document {
    Inventory,
    Cart,
}

impl Document {
    /// File name used when no override is configured.
    #[must_use]
    pub const fn default_file_name(self) -> &'static str {
        match self {
            Self::Inventory => "inventory.json",
            Self::Cart => "cart.json",
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inventory => f.write_str("inventory"),
            Self::Cart => f.write_str("cart"),
        }
    }
}

/// Raw text storage for named documents.
pub trait DocumentStore {
    /// Read the full text of `document`.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not exist or cannot be read.
    fn read(&self, document: Document) -> Result<String, StoreError>;

    /// Replace the full text of `document`.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be written.
    fn write(&mut self, document: Document, contents: &str) -> Result<(), StoreError>;
}

/// Load `document` as a collection of `T`.
///
/// A missing or unparsable document is logged and treated as an empty
/// collection, so a missing document and an empty one are indistinguishable to
/// callers. Within a well-formed array each record is decoded on its own and
/// records that do not fit `T` are logged and skipped.
pub fn load<T, S>(store: &S, document: Document) -> Vec<T>
where
    T: DeserializeOwned,
    S: DocumentStore + ?Sized,
{
    let parsed = store
        .read(document)
        .and_then(|text| serde_json::from_str::<Vec<Value>>(&text).map_err(StoreError::from));

    let records = match parsed {
        Ok(records) => records,
        Err(e) => {
            warn!(%document, error = %e, "Could not load document, using an empty collection");
            return Vec::new();
        }
    };

    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(%document, index, error = %e, "Skipping unreadable record");
                None
            }
        })
        .collect()
}

/// Overwrite `document` with `collection` as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization or the write fails. Nothing is retried.
pub fn save<T, S>(store: &mut S, document: Document, collection: &[T]) -> Result<(), StoreError>
where
    T: Serialize,
    S: DocumentStore + ?Sized,
{
    let text = serde_json::to_string_pretty(collection).map_err(|e| {
        error!(%document, error = %e, "Failed to serialize document");
        StoreError::from(e)
    })?;

    if let Err(e) = store.write(document, &text) {
        error!(%document, error = %e, "Failed to save document");
        return Err(e);
    }

    info!(%document, records = collection.len(), "Document saved");
    Ok(())
}
