//! Inventory, cart and filter operations.
//!
//! Each function takes the document store explicitly, loads what it needs,
//! and returns a structured result for the caller to present. Lookups that
//! find nothing are ordinary outcomes (`None` or a `NotFound` variant), not
//! errors, and never write.

pub mod cart;
pub mod filter;
pub mod inventory;

pub use cart::{CartOutcome, add_to_cart, cancel_cart, view_cart};
pub use filter::filter;
pub use inventory::{AddOutcome, add, list, remove, update, view};
