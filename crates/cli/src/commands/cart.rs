//! Cart commands: `addToCart`, `viewCart`, `cancelCart`.

use stockroom_core::{ItemId, parse_quantity};
use stockroom_store::DocumentStore;
use stockroom_store::services::{self, CartOutcome};

use super::CommandError;
use crate::render::{self, Line};

/// Add `quantity` of the inventory item `id` to the cart.
///
/// # Errors
///
/// Returns an error if the quantity is invalid or the cart cannot be saved.
pub fn add_to_cart<S: DocumentStore>(
    store: &mut S,
    id: &str,
    quantity: &str,
) -> Result<Vec<Line>, CommandError> {
    let quantity = parse_quantity(quantity)?;

    Ok(match services::add_to_cart(store, &ItemId::from(id), quantity)? {
        CartOutcome::Added(entry) => vec![Line::success(format!(
            "Added {quantity} x {} to cart ({} in cart)",
            entry.item.name, entry.quantity
        ))],
        CartOutcome::NotFound => vec![Line::notice(render::NOT_FOUND)],
        CartOutcome::QuantityOverflow(entry) => vec![render::quantity_overflow(&entry, quantity)],
    })
}

pub fn view_cart<S: DocumentStore>(store: &S) -> Vec<Line> {
    render::cart(&services::view_cart(store))
}

/// Empty the cart.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved.
pub fn cancel_cart<S: DocumentStore>(store: &mut S) -> Result<Vec<Line>, CommandError> {
    services::cancel_cart(store)?;
    Ok(vec![Line::success(render::CART_EMPTIED)])
}
