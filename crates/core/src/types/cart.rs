//! Cart entries and computed cart totals.

use serde::{Deserialize, Serialize};

use crate::{InventoryItem, Price};

/// An item in the cart document.
///
/// Holds a snapshot of the inventory item taken when it was first added;
/// later inventory edits are not reflected here. On disk the item fields are
/// flattened next to `quantity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    #[serde(flatten)]
    pub item: InventoryItem,
    pub quantity: u32,
}

impl CartEntry {
    /// Snapshot `item` into a new cart entry.
    #[must_use]
    pub fn snapshot(item: &InventoryItem, quantity: u32) -> Self {
        Self {
            item: item.clone(),
            quantity,
        }
    }

    /// Add more units of the same item.
    ///
    /// Returns `false` and leaves the quantity unchanged if the new quantity
    /// would not fit in a `u32`.
    #[must_use]
    pub const fn increment(&mut self, quantity: u32) -> bool {
        match self.quantity.checked_add(quantity) {
            Some(total) => {
                self.quantity = total;
                true
            }
            None => false,
        }
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.item.price_in_cents.times(self.quantity)
    }
}

/// One priced line of a cart summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub entry: CartEntry,
    pub line_total: Price,
}

/// The cart contents with line totals and the grand total.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CartSummary {
    pub lines: Vec<CartLine>,
    pub total: Price,
}

impl CartSummary {
    /// Price every entry and accumulate the grand total.
    #[must_use]
    pub fn from_entries(entries: Vec<CartEntry>) -> Self {
        let lines: Vec<CartLine> = entries
            .into_iter()
            .map(|entry| CartLine {
                line_total: entry.line_total(),
                entry,
            })
            .collect();
        let total = lines.iter().map(|line| line.line_total).sum();

        Self { lines, total }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
