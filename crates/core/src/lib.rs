//! Stockroom Core - Shared types library.
//!
//! This crate provides the types used across all Stockroom components:
//! - `store` - Persistence adapter and inventory/cart services
//! - `cli` - The `stockroom` command-line tool
//!
//! # Architecture
//!
//! The core crate contains only types and parsing - no I/O, no file access.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Item records, cart entries, prices, IDs and filter queries

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
