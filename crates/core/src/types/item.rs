//! Inventory item records.

use serde::{Deserialize, Serialize};

use crate::{ArgumentError, ItemId, Price, parse_flag, parse_price};

/// A single item in the inventory document.
///
/// Field names match the on-disk JSON (`priceInCents`, `inStock`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// Unique within the inventory; never changes after creation.
    pub id: ItemId,
    pub name: String,
    pub price_in_cents: Price,
    #[serde(default)]
    pub in_stock: bool,
    #[serde(default)]
    pub category: String,
}

impl InventoryItem {
    /// Create a new item with a freshly generated ID.
    #[must_use]
    pub fn create(draft: ItemDraft) -> Self {
        Self::with_id(ItemId::generate(), draft)
    }

    /// Build an item from an existing ID and the given fields.
    #[must_use]
    pub fn with_id(id: ItemId, draft: ItemDraft) -> Self {
        Self {
            id,
            name: draft.name,
            price_in_cents: draft.price,
            in_stock: draft.in_stock,
            category: draft.category,
        }
    }

    /// Overwrite every mutable field, keeping the ID.
    pub fn apply(&mut self, draft: ItemDraft) {
        self.name = draft.name;
        self.price_in_cents = draft.price;
        self.in_stock = draft.in_stock;
        self.category = draft.category;
    }
}

/// The user-supplied fields of an item, validated.
///
/// Used for both creating and updating items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    pub price: Price,
    pub in_stock: bool,
    pub category: String,
}

impl ItemDraft {
    /// Build a draft from raw command arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if `price_in_cents` is not a non-negative integer.
    pub fn parse(
        name: &str,
        price_in_cents: &str,
        in_stock: &str,
        category: &str,
    ) -> Result<Self, ArgumentError> {
        Ok(Self {
            name: name.to_owned(),
            price: parse_price(price_in_cents)?,
            in_stock: parse_flag(in_stock),
            category: category.to_owned(),
        })
    }
}
