//! # Receipts
//!
//! A receipt is an ordered collection of line items plus aggregate totals.
//!
//! ## Aggregation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt::new(items)                                 │
//! │                                                                         │
//! │  total_tax   = Σ item.total_tax      (each already 0.05-rounded)        │
//! │  total_price = Σ item.total_price                                       │
//! │                                                                         │
//! │  Pure functions of the item list. Computed once at construction,        │
//! │  cached on the instance only - never in process-global state.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rendering to a `String` is peripheral presentation glue; the receipt
//! never writes to stdout itself.

use std::fmt::Write as _;

use serde::Serialize;

use crate::item::LineItem;
use crate::money::Money;

/// An immutable receipt: line items in input order plus totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    line_items: Vec<LineItem>,
    total_tax: Money,
    total_price: Money,
}

impl Receipt {
    /// Builds a receipt over the given items (may be empty; empty yields
    /// zero totals). Totals are summed here and frozen.
    pub fn new(line_items: Vec<LineItem>) -> Self {
        let total_tax = line_items.iter().map(LineItem::total_tax).sum();
        let total_price = line_items.iter().map(LineItem::total_price).sum();
        Receipt {
            line_items,
            total_tax,
            total_price,
        }
    }

    /// The line items, in input order.
    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    /// Sum of every item's tax.
    pub fn total_tax(&self) -> Money {
        self.total_tax
    }

    /// Sum of every item's taxed total.
    pub fn total_price(&self) -> Money {
        self.total_price
    }

    /// Renders the receipt as plain text.
    ///
    /// One line per item (`<quantity> <name>: <total>`), then the tax and
    /// grand-total summary. All amounts show exactly two decimal digits
    /// using standard display rounding.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::parser::ReceiptParser;
    ///
    /// let receipt = ReceiptParser::parse(Some("1 music CD at 14.99")).unwrap();
    /// assert_eq!(
    ///     receipt.render(),
    ///     "1 music CD: 16.49\nSales Taxes: 1.50\nTotal: 16.49"
    /// );
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();
        for item in &self.line_items {
            // String formatting is infallible
            let _ = writeln!(
                out,
                "{} {}: {}",
                item.quantity(),
                item.name(),
                item.total_price()
            );
        }
        let _ = writeln!(out, "Sales Taxes: {}", self.total_tax);
        let _ = write!(out, "Total: {}", self.total_price);
        out
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
