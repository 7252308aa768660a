//! Command implementations.
//!
//! Each command parses its raw string arguments into typed values, calls the
//! matching store service and turns the outcome into output lines.

pub mod cart;
pub mod inventory;

use stockroom_core::ArgumentError;
use stockroom_store::{ConfigError, StoreError};
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// An argument could not be parsed.
    #[error("Invalid argument: {0}")]
    Argument(#[from] ArgumentError),

    /// A document could not be saved.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
