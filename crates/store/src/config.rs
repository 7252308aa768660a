//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STOCKROOM_DATA_DIR` - Directory holding the documents (default: `.`)
//! - `STOCKROOM_INVENTORY_FILE` - Inventory document file name (default: `inventory.json`)
//! - `STOCKROOM_CART_FILE` - Cart document file name (default: `cart.json`)

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::storage::Document;

const DEFAULT_DATA_DIR: &str = ".";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Where the inventory and cart documents live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory containing both documents
    pub data_dir: PathBuf,
    /// File name of the inventory document
    pub inventory_file: String,
    /// File name of the cart document
    pub cart_file: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            inventory_file: Document::Inventory.default_file_name().to_owned(),
            cart_file: Document::Cart.default_file_name().to_owned(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a file name variable is empty or contains a path
    /// separator.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration using `lookup` to resolve variables.
    ///
    /// # Errors
    ///
    /// See [`StoreConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let data_dir = lookup("STOCKROOM_DATA_DIR").map_or(defaults.data_dir, PathBuf::from);
        let inventory_file = file_name(
            "STOCKROOM_INVENTORY_FILE",
            lookup("STOCKROOM_INVENTORY_FILE"),
            defaults.inventory_file,
        )?;
        let cart_file = file_name(
            "STOCKROOM_CART_FILE",
            lookup("STOCKROOM_CART_FILE"),
            defaults.cart_file,
        )?;

        Ok(Self {
            data_dir,
            inventory_file,
            cart_file,
        })
    }

    /// Replace the data directory, keeping the file names.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Full path of `document` on disk.
    #[must_use]
    pub fn path_for(&self, document: Document) -> PathBuf {
        let name = match document {
            Document::Inventory => &self.inventory_file,
            Document::Cart => &self.cart_file,
        };
        self.data_dir.join(name)
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

fn file_name(key: &str, value: Option<String>, default: String) -> Result<String, ConfigError> {
    let Some(value) = value else {
        return Ok(default);
    };

    if value.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_owned(),
            "file name cannot be empty".to_owned(),
        ));
    }

    if value.contains(['/', '\\']) {
        return Err(ConfigError::InvalidEnvVar(
            key.to_owned(),
            "must be a file name, not a path (use STOCKROOM_DATA_DIR for the directory)".to_owned(),
        ));
    }

    Ok(value)
}
