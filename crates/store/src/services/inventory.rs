//! Inventory operations.
//!
//! Names are unique by exact, case-sensitive match: adding a second item
//! called "Apple" is refused, while "apple" is accepted.

use stockroom_core::{InventoryItem, ItemDraft, ItemId};
use tracing::{debug, info};

use crate::error::StoreError;
use crate::storage::{self, Document, DocumentStore};

/// Result of [`add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The item was appended and the inventory saved.
    Added(InventoryItem),
    /// An item with this name already exists; nothing was written.
    DuplicateName(String),
}

/// Add a new item with a freshly generated ID.
///
/// # Errors
///
/// Returns an error if the inventory cannot be saved.
pub fn add<S: DocumentStore + ?Sized>(
    store: &mut S,
    draft: ItemDraft,
) -> Result<AddOutcome, StoreError> {
    let mut inventory: Vec<InventoryItem> = storage::load(&*store, Document::Inventory);

    if inventory.iter().any(|item| item.name == draft.name) {
        debug!(name = %draft.name, "Refusing to add duplicate item name");
        return Ok(AddOutcome::DuplicateName(draft.name));
    }

    let item = InventoryItem::create(draft);
    inventory.push(item.clone());
    storage::save(store, Document::Inventory, &inventory)?;

    info!(id = %item.id, name = %item.name, "Item added");
    Ok(AddOutcome::Added(item))
}

/// All items, in storage order.
pub fn list<S: DocumentStore + ?Sized>(store: &S) -> Vec<InventoryItem> {
    storage::load(store, Document::Inventory)
}

/// The first item with the given ID.
pub fn view<S: DocumentStore + ?Sized>(store: &S, id: &ItemId) -> Option<InventoryItem> {
    let inventory: Vec<InventoryItem> = storage::load(store, Document::Inventory);
    inventory.into_iter().find(|item| item.id == *id)
}

/// Overwrite the name, price, stock flag and category of an item.
///
/// Returns the updated item, or `None` without writing if no item has `id`.
///
/// # Errors
///
/// Returns an error if the inventory cannot be saved.
pub fn update<S: DocumentStore + ?Sized>(
    store: &mut S,
    id: &ItemId,
    draft: ItemDraft,
) -> Result<Option<InventoryItem>, StoreError> {
    let mut inventory: Vec<InventoryItem> = storage::load(&*store, Document::Inventory);

    let Some(item) = inventory.iter_mut().find(|item| item.id == *id) else {
        debug!(%id, "Update target not found");
        return Ok(None);
    };
    item.apply(draft);
    let updated = item.clone();

    storage::save(store, Document::Inventory, &inventory)?;
    info!(%id, "Item updated");
    Ok(Some(updated))
}

/// Remove the item with `id`.
///
/// Returns the removed item, or `None` without writing if no item has `id`.
///
/// # Errors
///
/// Returns an error if the inventory cannot be saved.
pub fn remove<S: DocumentStore + ?Sized>(
    store: &mut S,
    id: &ItemId,
) -> Result<Option<InventoryItem>, StoreError> {
    let mut inventory: Vec<InventoryItem> = storage::load(&*store, Document::Inventory);

    let Some(position) = inventory.iter().position(|item| item.id == *id) else {
        debug!(%id, "Remove target not found");
        return Ok(None);
    };
    let removed = inventory.remove(position);

    storage::save(store, Document::Inventory, &inventory)?;
    info!(%id, "Item removed");
    Ok(Some(removed))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    const TWO_ITEMS: &str = r#"[
        {"id": "1", "name": "Item 1", "priceInCents": 1200, "inStock": true, "category": "Category A"},
        {"id": "2", "name": "Item 2", "priceInCents": 800, "inStock": false, "category": "Category B"}
    ]"#;

    fn draft(name: &str) -> ItemDraft {
        ItemDraft::parse(name, "1500", "false", "Category B").unwrap()
    }

    fn stored(store: &MemoryStore) -> Vec<InventoryItem> {
        serde_json::from_str(store.contents(Document::Inventory).unwrap()).unwrap()
    }

    #[test]
    fn test_add_to_empty_inventory() {
        let mut store = MemoryStore::new().with_document(Document::Inventory, "[]");

        let outcome = add(&mut store, ItemDraft::parse("Apple", "100", "true", "fruit").unwrap())
            .unwrap();

        let AddOutcome::Added(item) = outcome else {
            panic!("expected item to be added");
        };
        let items = stored(&store);
        assert_eq!(items, vec![item.clone()]);
        assert_eq!(item.name, "Apple");
        assert_eq!(item.price_in_cents.cents(), 100);
        assert!(item.in_stock);
        assert_eq!(item.category, "fruit");
        assert!(!item.id.as_str().is_empty());
    }

    #[test]
    fn test_add_without_document() {
        let mut store = MemoryStore::new();
        add(&mut store, draft("First")).unwrap();
        assert_eq!(stored(&store).len(), 1);
    }

    #[test]
    fn test_add_keeps_records_next_to_a_bad_one() {
        let mut store = MemoryStore::new().with_document(
            Document::Inventory,
            r#"[
                {"id": "1", "name": "Keep me", "priceInCents": 1200, "inStock": true, "category": "A"},
                {"id": "2", "name": "Broken", "priceInCents": null, "inStock": true, "category": "A"},
                {"id": "3", "name": "Me too", "priceInCents": 800, "inStock": false, "category": "B"}
            ]"#,
        );

        add(&mut store, draft("New")).unwrap();

        let names: Vec<String> = stored(&store).into_iter().map(|item| item.name).collect();
        assert_eq!(names, ["Keep me", "Me too", "New"]);
    }

    #[test]
    fn test_add_duplicate_name_does_not_write() {
        let mut store = MemoryStore::new().with_document(Document::Inventory, TWO_ITEMS);

        let outcome = add(&mut store, draft("Item 1")).unwrap();

        assert_eq!(outcome, AddOutcome::DuplicateName("Item 1".to_owned()));
        assert_eq!(store.total_writes(), 0);
        assert_eq!(store.contents(Document::Inventory), Some(TWO_ITEMS));
    }

    #[test]
    fn test_add_name_check_is_case_sensitive() {
        let mut store = MemoryStore::new().with_document(Document::Inventory, TWO_ITEMS);
        let outcome = add(&mut store, draft("item 1")).unwrap();
        assert!(matches!(outcome, AddOutcome::Added(_)));
        assert_eq!(stored(&store).len(), 3);
    }

    #[test]
    fn test_list_in_storage_order() {
        let store = MemoryStore::new().with_document(Document::Inventory, TWO_ITEMS);
        let names: Vec<String> = list(&store).into_iter().map(|i| i.name).collect();
        assert_eq!(names, ["Item 1", "Item 2"]);
    }

    #[test]
    fn test_view() {
        let store = MemoryStore::new().with_document(Document::Inventory, TWO_ITEMS);
        let item = view(&store, &ItemId::new("2")).unwrap();
        assert_eq!(item.name, "Item 2");
        assert_eq!(item.category, "Category B");
        assert!(view(&store, &ItemId::new("nonexistentid")).is_none());
    }

    #[test]
    fn test_update() {
        let mut store = MemoryStore::new().with_document(Document::Inventory, TWO_ITEMS);

        let updated = update(&mut store, &ItemId::new("1"), draft("Updated Item"))
            .unwrap()
            .unwrap();

        assert_eq!(updated.id.as_str(), "1");
        let items = stored(&store);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], updated);
        assert_eq!(items[0].name, "Updated Item");
        assert_eq!(items[0].price_in_cents.cents(), 1500);
        assert!(!items[0].in_stock);
        assert_eq!(items[0].category, "Category B");
    }

    #[test]
    fn test_update_not_found_does_not_write() {
        let mut store = MemoryStore::new().with_document(Document::Inventory, "[]");
        let result = update(&mut store, &ItemId::new("nonexistentid"), draft("Updated Item"));
        assert!(result.unwrap().is_none());
        assert_eq!(store.total_writes(), 0);
    }

    #[test]
    fn test_remove() {
        let mut store = MemoryStore::new().with_document(Document::Inventory, TWO_ITEMS);

        let removed = remove(&mut store, &ItemId::new("1")).unwrap().unwrap();

        assert_eq!(removed.name, "Item 1");
        let items = stored(&store);
        assert_eq!(items.len(), 1);
        assert!(items.iter().all(|item| item.id.as_str() != "1"));
    }

    #[test]
    fn test_remove_not_found_does_not_write() {
        let mut store = MemoryStore::new().with_document(Document::Inventory, TWO_ITEMS);
        assert!(remove(&mut store, &ItemId::new("3")).unwrap().is_none());
        assert_eq!(store.total_writes(), 0);
    }
}
