//! Read-only inventory queries.

use stockroom_core::{FilterQuery, InventoryItem};
use tracing::debug;

use crate::storage::{self, Document, DocumentStore};

/// Items matching `query`, in storage order.
pub fn filter<S: DocumentStore + ?Sized>(store: &S, query: &FilterQuery) -> Vec<InventoryItem> {
    match query {
        FilterQuery::Unrecognized(property) => debug!(%property, "Unrecognized filter property"),
        FilterQuery::InvalidThreshold { property, value } => {
            debug!(%property, %value, "Price threshold is not an integer");
        }
        _ => {}
    }

    let mut inventory: Vec<InventoryItem> = storage::load(store, Document::Inventory);
    inventory.retain(|item| query.matches(item));
    inventory
}
