//! Terminal rendering of command results.
//!
//! Commands build plain [`Line`]s tagged with a [`Tone`]; only [`print`]
//! applies color. This keeps the text itself easy to assert on in tests.

use colored::Colorize;
use stockroom_core::{CartEntry, CartSummary, InventoryItem};

pub const NO_ITEMS: &str = "No items in inventory.";
pub const NO_MATCHES: &str = "No items match the filter.";
pub const NOT_FOUND: &str = "Item not found.";
pub const CART_EMPTY: &str = "Cart is empty.";
pub const CART_EMPTIED: &str = "Cart has been emptied.";

/// How a line should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Notice,
    Success,
    Total,
}

/// One line of command output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub tone: Tone,
    pub text: String,
}

impl Line {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            tone: Tone::Plain,
            text: text.into(),
        }
    }

    pub fn notice(text: impl Into<String>) -> Self {
        Self {
            tone: Tone::Notice,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            tone: Tone::Success,
            text: text.into(),
        }
    }

    pub fn total(text: impl Into<String>) -> Self {
        Self {
            tone: Tone::Total,
            text: text.into(),
        }
    }
}

/// Summary line used by `list` and `filter`.
pub fn item_line(item: &InventoryItem) -> String {
    format!(
        "{} -- Category: {} -- Price: {} -- {} -- id: {}",
        item.name,
        item.category,
        item.price_in_cents,
        if item.in_stock {
            "In stock"
        } else {
            "Not in stock"
        },
        item.id
    )
}

/// One line per item, or `empty_notice` if there are none.
pub fn item_list(items: &[InventoryItem], empty_notice: &str) -> Vec<Line> {
    if items.is_empty() {
        return vec![Line::notice(empty_notice)];
    }
    items.iter().map(|item| Line::plain(item_line(item))).collect()
}

/// Field-by-field view of a single item.
pub fn item_details(item: &InventoryItem) -> Vec<Line> {
    vec![
        Line::plain(format!("Name: {}", item.name)),
        Line::plain(format!("Price: {}", item.price_in_cents)),
        Line::plain(format!("In stock: {}", item.in_stock)),
        Line::plain(format!("Category: {}", item.category)),
    ]
}

pub fn duplicate_name(name: &str) -> Line {
    Line::notice(format!(
        "Item with name \"{name}\" already exists in the inventory."
    ))
}

pub fn quantity_overflow(entry: &CartEntry, requested: u32) -> Line {
    Line::notice(format!(
        "Cannot add {requested} more {}: the cart already holds {}.",
        entry.item.name, entry.quantity
    ))
}

/// Cart lines with per-line totals followed by the grand total.
pub fn cart(summary: &CartSummary) -> Vec<Line> {
    if summary.is_empty() {
        return vec![Line::notice(CART_EMPTY)];
    }

    let mut lines: Vec<Line> = summary
        .lines
        .iter()
        .map(|line| {
            Line::plain(format!(
                "{} -- {} x {} = {}",
                line.entry.item.name,
                line.entry.quantity,
                line.entry.item.price_in_cents,
                line.line_total
            ))
        })
        .collect();
    lines.push(Line::total(format!("Total: {}", summary.total)));
    lines
}

/// Write lines to stdout, colored by tone.
#[allow(clippy::print_stdout)]
pub fn print(lines: &[Line]) {
    for line in lines {
        match line.tone {
            Tone::Plain => println!("{}", line.text),
            Tone::Notice => println!("{}", line.text.yellow()),
            Tone::Success => println!("{}", line.text.green()),
            Tone::Total => println!("{}", line.text.bold()),
        }
    }
}
