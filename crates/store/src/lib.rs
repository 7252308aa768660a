//! Stockroom Store library.
//!
//! Owns everything that touches the two JSON documents (`inventory.json`
//! and `cart.json`): configuration, the document storage adapter and the
//! inventory, cart and filter services built on top of it.
//!
//! Every service call re-reads the documents it needs; there is no cache.
//! Mutating calls rewrite the whole document.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod services;
pub mod storage;

pub use config::{ConfigError, StoreConfig};
pub use error::StoreError;
pub use storage::{Document, DocumentStore, JsonFileStore, MemoryStore};
