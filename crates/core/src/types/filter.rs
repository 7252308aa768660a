//! Predicates for querying the inventory.

use crate::{InventoryItem, parse_flag};

/// A parsed `filter <property> <value>` query.
///
/// Nothing here is rejected: unknown properties and price thresholds that are
/// not integers produce queries that match nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterQuery {
    /// `inStock`: items whose stock flag equals the value.
    InStock(bool),
    /// `priceGreaterThan`: items priced strictly above the value, in cents.
    PriceGreaterThan(i64),
    /// `priceLessThan`: items priced strictly below the value, in cents.
    PriceLessThan(i64),
    /// A price property whose value is not an integer.
    InvalidThreshold { property: String, value: String },
    /// Any other property name.
    Unrecognized(String),
}

impl FilterQuery {
    /// Parse a property name and its raw value.
    ///
    /// Price thresholds are signed, so `priceGreaterThan -5` matches every item.
    #[must_use]
    pub fn parse(property: &str, value: &str) -> Self {
        let threshold = || value.trim().parse::<i64>().ok();
        let invalid = || Self::InvalidThreshold {
            property: property.to_owned(),
            value: value.to_owned(),
        };

        match property {
            "inStock" => Self::InStock(parse_flag(value)),
            "priceGreaterThan" => threshold().map_or_else(invalid, Self::PriceGreaterThan),
            "priceLessThan" => threshold().map_or_else(invalid, Self::PriceLessThan),
            other => Self::Unrecognized(other.to_owned()),
        }
    }

    /// Whether `item` satisfies this query.
    #[must_use]
    pub fn matches(&self, item: &InventoryItem) -> bool {
        let cents = i128::from(item.price_in_cents.cents());
        match self {
            Self::InStock(in_stock) => item.in_stock == *in_stock,
            Self::PriceGreaterThan(threshold) => cents > i128::from(*threshold),
            Self::PriceLessThan(threshold) => cents < i128::from(*threshold),
            Self::InvalidThreshold { .. } | Self::Unrecognized(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ItemId, Price};

    fn item(cents: u64, in_stock: bool) -> InventoryItem {
        InventoryItem {
            id: ItemId::generate(),
            name: "Widget".to_owned(),
            price_in_cents: Price::from_cents(cents),
            in_stock,
            category: "Tools".to_owned(),
        }
    }

    #[test]
    fn test_parse_known_properties() {
        assert_eq!(FilterQuery::parse("inStock", "true"), FilterQuery::InStock(true));
        assert_eq!(FilterQuery::parse("inStock", "nope"), FilterQuery::InStock(false));
        assert_eq!(
            FilterQuery::parse("priceGreaterThan", "500"),
            FilterQuery::PriceGreaterThan(500)
        );
        assert_eq!(
            FilterQuery::parse("priceLessThan", " 500 "),
            FilterQuery::PriceLessThan(500)
        );
    }

    #[test]
    fn test_parse_unknown_property() {
        assert_eq!(
            FilterQuery::parse("color", "red"),
            FilterQuery::Unrecognized("color".to_owned())
        );
    }

    #[test]
    fn test_parse_negative_threshold() {
        assert_eq!(
            FilterQuery::parse("priceGreaterThan", "-5"),
            FilterQuery::PriceGreaterThan(-5)
        );
    }

    #[test]
    fn test_parse_non_numeric_threshold() {
        assert_eq!(
            FilterQuery::parse("priceLessThan", "abc"),
            FilterQuery::InvalidThreshold {
                property: "priceLessThan".to_owned(),
                value: "abc".to_owned(),
            }
        );
    }

    #[test]
    fn test_price_bounds_are_strict() {
        let at_500 = item(500, true);
        assert!(!FilterQuery::PriceGreaterThan(500).matches(&at_500));
        assert!(!FilterQuery::PriceLessThan(500).matches(&at_500));
        assert!(FilterQuery::PriceGreaterThan(499).matches(&at_500));
        assert!(FilterQuery::PriceLessThan(501).matches(&at_500));
    }

    #[test]
    fn test_negative_thresholds() {
        let free = item(0, true);
        assert!(FilterQuery::PriceGreaterThan(-5).matches(&free));
        assert!(!FilterQuery::PriceLessThan(-5).matches(&free));
    }

    #[test]
    fn test_prices_above_i64_range_compare_correctly() {
        let huge = item(u64::MAX, true);
        assert!(FilterQuery::PriceGreaterThan(i64::MAX).matches(&huge));
        assert!(!FilterQuery::PriceLessThan(i64::MAX).matches(&huge));
    }

    #[test]
    fn test_unmatchable_queries() {
        let unrecognized = FilterQuery::Unrecognized("color".to_owned());
        let invalid = FilterQuery::parse("priceGreaterThan", "lots");
        for in_stock in [true, false] {
            assert!(!unrecognized.matches(&item(100, in_stock)));
            assert!(!invalid.matches(&item(100, in_stock)));
        }
    }
}
