//! Parsing of raw command arguments.
//!
//! Commands receive prices, quantities and stock flags as strings. These
//! helpers turn them into typed values before any document is touched, so a
//! malformed price never reaches storage.

use crate::Price;

/// Errors that can occur when parsing a command argument.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// The price is not a non-negative base-10 integer.
    #[error("invalid price in cents: {0:?} (expected a non-negative whole number)")]
    InvalidPrice(String),
    /// The quantity is not a positive base-10 integer.
    #[error("invalid quantity: {0:?} (expected a positive whole number)")]
    InvalidQuantity(String),
}

/// Parse a stock flag.
///
/// Only the exact string `"true"` is truthy; every other input is `false`.
///
/// ```
/// use stockroom_core::parse_flag;
///
/// assert!(parse_flag("true"));
/// assert!(!parse_flag("TRUE"));
/// assert!(!parse_flag("yes"));
/// ```
#[must_use]
pub fn parse_flag(s: &str) -> bool {
    s == "true"
}

/// Parse a price given in cents.
///
/// # Errors
///
/// Returns [`ArgumentError::InvalidPrice`] if the input is empty, negative,
/// fractional or otherwise not a base-10 integer.
pub fn parse_price(s: &str) -> Result<Price, ArgumentError> {
    s.trim()
        .parse::<u64>()
        .map(Price::from_cents)
        .map_err(|_| ArgumentError::InvalidPrice(s.to_owned()))
}

/// Parse a cart quantity.
///
/// # Errors
///
/// Returns [`ArgumentError::InvalidQuantity`] if the input is zero or not a
/// base-10 integer.
pub fn parse_quantity(s: &str) -> Result<u32, ArgumentError> {
    match s.trim().parse::<u32>() {
        Ok(0) | Err(_) => Err(ArgumentError::InvalidQuantity(s.to_owned())),
        Ok(quantity) => Ok(quantity),
    }
}
