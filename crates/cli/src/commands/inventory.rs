//! Inventory commands: `add`, `list`, `view`, `update`, `remove`, `filter`.

use stockroom_core::{FilterQuery, ItemDraft, ItemId};
use stockroom_store::DocumentStore;
use stockroom_store::services::{self, AddOutcome};

use super::CommandError;
use crate::render::{self, Line};

/// Add a new item.
///
/// # Errors
///
/// Returns an error if the price is invalid or the inventory cannot be saved.
pub fn add<S: DocumentStore>(
    store: &mut S,
    name: &str,
    price_in_cents: &str,
    in_stock: &str,
    category: &str,
) -> Result<Vec<Line>, CommandError> {
    let draft = ItemDraft::parse(name, price_in_cents, in_stock, category)?;

    Ok(match services::add(store, draft)? {
        AddOutcome::Added(item) => vec![Line::success(format!(
            "Added {} (id: {})",
            item.name, item.id
        ))],
        AddOutcome::DuplicateName(name) => vec![render::duplicate_name(&name)],
    })
}

pub fn list<S: DocumentStore>(store: &S) -> Vec<Line> {
    render::item_list(&services::list(store), render::NO_ITEMS)
}

pub fn view<S: DocumentStore>(store: &S, id: &str) -> Vec<Line> {
    services::view(store, &ItemId::from(id)).map_or_else(
        || vec![Line::notice(render::NOT_FOUND)],
        |item| render::item_details(&item),
    )
}

/// Replace every field of an item.
///
/// # Errors
///
/// Returns an error if the price is invalid or the inventory cannot be saved.
pub fn update<S: DocumentStore>(
    store: &mut S,
    id: &str,
    name: &str,
    price_in_cents: &str,
    in_stock: &str,
    category: &str,
) -> Result<Vec<Line>, CommandError> {
    let draft = ItemDraft::parse(name, price_in_cents, in_stock, category)?;

    Ok(match services::update(store, &ItemId::from(id), draft)? {
        Some(item) => vec![Line::success(format!("Updated {} (id: {})", item.name, item.id))],
        None => vec![Line::notice(render::NOT_FOUND)],
    })
}

/// Remove an item.
///
/// # Errors
///
/// Returns an error if the inventory cannot be saved.
pub fn remove<S: DocumentStore>(store: &mut S, id: &str) -> Result<Vec<Line>, CommandError> {
    Ok(match services::remove(store, &ItemId::from(id))? {
        Some(item) => vec![Line::success(format!("Removed {} (id: {})", item.name, item.id))],
        None => vec![Line::notice(render::NOT_FOUND)],
    })
}

/// List items matching `property` and `value`.
pub fn filter<S: DocumentStore>(store: &S, property: &str, value: &str) -> Vec<Line> {
    let query = FilterQuery::parse(property, value);
    render::item_list(&services::filter(store, &query), render::NO_MATCHES)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use stockroom_store::{Document, MemoryStore};

    use super::*;
    use crate::render::Tone;

    const INVENTORY: &str = r#"[
        {"id": "1", "name": "Item 1", "priceInCents": 1200, "inStock": true, "category": "Category A"},
        {"id": "2", "name": "Item 2", "priceInCents": 800, "inStock": false, "category": "Category B"}
    ]"#;

    fn store() -> MemoryStore {
        MemoryStore::new().with_document(Document::Inventory, INVENTORY)
    }

    fn texts(lines: Vec<Line>) -> Vec<String> {
        lines.into_iter().map(|line| line.text).collect()
    }

    #[test]
    fn test_add_reports_new_id() {
        let mut store = MemoryStore::new();
        let lines = add(&mut store, "Apple", "100", "true", "fruit").unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].tone, Tone::Success);
        assert!(lines[0].text.starts_with("Added Apple (id: "));
    }

    #[test]
    fn test_add_duplicate_notice() {
        let mut store = store();
        let lines = add(&mut store, "Item 1", "1500", "true", "Duplicate").unwrap();
        assert_eq!(
            texts(lines),
            ["Item with name \"Item 1\" already exists in the inventory."]
        );
        assert_eq!(store.total_writes(), 0);
    }

    #[test]
    fn test_add_invalid_price_touches_nothing() {
        let mut store = store();
        let err = add(&mut store, "Pear", "abc", "true", "fruit").unwrap_err();
        assert!(matches!(err, CommandError::Argument(_)));
        assert_eq!(store.total_writes(), 0);
    }

    #[test]
    fn test_list() {
        let lines = texts(list(&store()));
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Item 1"));
        assert!(lines[1].contains("Item 2"));
    }

    #[test]
    fn test_list_empty() {
        let store = MemoryStore::new().with_document(Document::Inventory, "[]");
        assert_eq!(texts(list(&store)), [render::NO_ITEMS]);
    }

    #[test]
    fn test_view_not_found() {
        assert_eq!(texts(view(&store(), "nonexistentid")), [render::NOT_FOUND]);
    }

    #[test]
    fn test_update_and_remove_not_found() {
        let mut store = store();
        let lines = update(&mut store, "9", "Updated Item", "1500", "false", "B").unwrap();
        assert_eq!(texts(lines), [render::NOT_FOUND]);
        let lines = remove(&mut store, "9").unwrap();
        assert_eq!(texts(lines), [render::NOT_FOUND]);
        assert_eq!(store.total_writes(), 0);
    }

    #[test]
    fn test_filter_in_stock() {
        let lines = texts(filter(&store(), "inStock", "true"));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Item 1"));
    }

    #[test]
    fn test_filter_no_matches() {
        let lines = texts(filter(&store(), "color", "red"));
        assert_eq!(lines, [render::NO_MATCHES]);
    }

    #[test]
    fn test_filter_negative_threshold_lists_everything() {
        let lines = texts(filter(&store(), "priceGreaterThan", "-5"));
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_filter_non_numeric_threshold_is_no_matches() {
        let lines = texts(filter(&store(), "priceLessThan", "abc"));
        assert_eq!(lines, [render::NO_MATCHES]);
    }
}
