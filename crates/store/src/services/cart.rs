//! Cart operations.
//!
//! Items are resolved by exact inventory ID. The cart keeps snapshots, so
//! editing or removing an inventory item does not touch existing entries.

use stockroom_core::{CartEntry, CartSummary, InventoryItem, ItemId};
use tracing::{debug, info, warn};

use crate::error::StoreError;
use crate::storage::{self, Document, DocumentStore};

/// Result of [`add_to_cart`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartOutcome {
    /// The cart was saved holding this entry.
    Added(CartEntry),
    /// No inventory item has the requested ID; nothing was written.
    NotFound,
    /// The entry already in the cart cannot hold that many more units;
    /// nothing was written.
    QuantityOverflow(CartEntry),
}

/// Add `quantity` units of the inventory item `id` to the cart.
///
/// If the item is already in the cart its quantity is increased; otherwise a
/// new snapshot entry is appended.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved.
pub fn add_to_cart<S: DocumentStore + ?Sized>(
    store: &mut S,
    id: &ItemId,
    quantity: u32,
) -> Result<CartOutcome, StoreError> {
    let inventory: Vec<InventoryItem> = storage::load(&*store, Document::Inventory);
    let Some(item) = inventory.iter().find(|item| item.id == *id) else {
        debug!(%id, "Item to add to cart not found");
        return Ok(CartOutcome::NotFound);
    };

    let mut cart: Vec<CartEntry> = storage::load(&*store, Document::Cart);
    let entry = if let Some(existing) = cart.iter_mut().find(|entry| entry.item.id == *id) {
        if !existing.increment(quantity) {
            warn!(%id, in_cart = existing.quantity, quantity, "Cart quantity would overflow");
            return Ok(CartOutcome::QuantityOverflow(existing.clone()));
        }
        existing.clone()
    } else {
        let entry = CartEntry::snapshot(item, quantity);
        cart.push(entry.clone());
        entry
    };

    storage::save(store, Document::Cart, &cart)?;
    info!(%id, quantity = entry.quantity, "Cart updated");
    Ok(CartOutcome::Added(entry))
}

/// The cart with line totals and grand total.
pub fn view_cart<S: DocumentStore + ?Sized>(store: &S) -> CartSummary {
    CartSummary::from_entries(storage::load(store, Document::Cart))
}

/// Empty the cart, regardless of its current contents.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved.
pub fn cancel_cart<S: DocumentStore + ?Sized>(store: &mut S) -> Result<(), StoreError> {
    storage::save::<CartEntry, _>(store, Document::Cart, &[])?;
    info!("Cart emptied");
    Ok(())
}
