//! Prices in minor currency units.
//!
//! All arithmetic is done on whole cents. Conversion to a decimal amount only
//! happens for display, which follows US-locale currency formatting:
//! a `$` symbol, comma thousands separators and exactly two decimal places.

use core::fmt;
use core::iter::Sum;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A non-negative USD price stored as an integer number of cents.
///
/// Serialized transparently as the bare integer, so it maps directly to the
/// `priceInCents` field of stored documents.
///
/// ## Examples
///
/// ```
/// use stockroom_core::Price;
///
/// assert_eq!(Price::from_cents(500).to_string(), "$5.00");
/// assert_eq!(Price::from_cents(123_456_789).to_string(), "$1,234,567.89");
/// assert_eq!(Price::from_cents(1200).times(3), Price::from_cents(3600));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(0);

    /// Create a price from a number of cents.
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// The price in cents.
    #[must_use]
    pub const fn cents(self) -> u64 {
        self.0
    }

    /// The price in dollars, with a scale of two decimal places.
    #[must_use]
    pub fn amount(self) -> Decimal {
        Decimal::from_i128_with_scale(i128::from(self.0), 2)
    }

    /// The price of `quantity` units at this unit price.
    ///
    /// Saturates at the maximum representable price.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plain = format!("{:.2}", self.amount());
        let (whole, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        write!(f, "${grouped}.{fraction}")
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, price| Self(acc.0.saturating_add(price.0)))
    }
}

impl From<u64> for Price {
    fn from(cents: u64) -> Self {
        Self(cents)
    }
}

impl From<Price> for u64 {
    fn from(price: Price) -> Self {
        price.0
    }
}
