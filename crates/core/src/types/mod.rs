//! Core types for Stockroom.
//!
//! This module provides type-safe wrappers for the inventory and cart domain.

pub mod args;
pub mod cart;
pub mod filter;
pub mod id;
pub mod item;
pub mod price;

pub use args::{ArgumentError, parse_flag, parse_price, parse_quantity};
pub use cart::{CartEntry, CartLine, CartSummary};
pub use filter::FilterQuery;
pub use id::ItemId;
pub use item::{InventoryItem, ItemDraft};
pub use price::Price;
