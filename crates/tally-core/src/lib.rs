//! # tally-core: Pure Business Logic for Tally
//!
//! This crate is the **heart** of Tally. It turns line-oriented basket text
//! ("2 book at 12.49") into structured receipts with sales taxes, as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Tally Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                      apps/cli (driver)                          │    │
//! │  │    sample baskets ──► random baskets ──► bench loop             │    │
//! │  │    stdout • tracing • exit codes                                │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │                ★ tally-core (THIS CRATE) ★                      │    │
//! │  │                                                                 │    │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌────────────┐     │    │
//! │  │   │  parser  │─►│   item   │─►│ receipt  │  │   money    │     │    │
//! │  │   │ grammar  │  │ tax calc │  │  totals  │  │ TaxRate    │     │    │
//! │  │   └──────────┘  └────┬─────┘  └──────────┘  └────────────┘     │    │
//! │  │                      │                                          │    │
//! │  │                 ┌────▼─────┐  ┌────────────┐                    │    │
//! │  │                 │  exempt  │  │ validation │                    │    │
//! │  │                 │ keywords │  │   rules    │                    │    │
//! │  │                 └──────────┘  └────────────┘                    │    │
//! │  │                                                                 │    │
//! │  │   NO I/O • NO LOGGING • NO GLOBAL STATE • PURE FUNCTIONS        │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money and TaxRate with exact decimal arithmetic
//! - [`exempt`] - Basic-tax exemption vocabulary and import detection
//! - [`item`] - LineItem construction and tax computation
//! - [`parser`] - The line grammar and parsing policy
//! - [`receipt`] - Aggregation and plain-text rendering
//! - [`validation`] - Field validation rules
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: stdout, network, file system access is FORBIDDEN here
//! 3. **Exact Money**: All monetary values are `rust_decimal` decimals (no floats!)
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//! 5. **Instance-Local Caching**: Derived values live on the instance that
//!    owns them; a concurrent host can process many receipts at once
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::parser::ReceiptParser;
//!
//! let receipt = ReceiptParser::parse(Some(
//!     "1 imported box of chocolates at 10.00\n1 imported bottle of perfume at 47.50",
//! ))
//! .unwrap();
//!
//! assert_eq!(receipt.total_tax().to_string(), "7.65");
//! assert_eq!(receipt.total_price().to_string(), "65.15");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod exempt;
pub mod item;
pub mod money;
pub mod parser;
pub mod receipt;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::Receipt` instead of
// `use tally_core::receipt::Receipt`

pub use error::{CoreError, CoreResult, ParseError, ValidationError};
pub use exempt::ExemptCategory;
pub use item::LineItem;
pub use money::{Money, TaxRate};
pub use parser::ReceiptParser;
pub use receipt::Receipt;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Basic sales tax rate in basis points (10%).
///
/// Applies to every item whose name does not match the exemption
/// vocabulary in [`exempt`].
pub const BASIC_TAX_BPS: u32 = 1000;

/// Import duty rate in basis points (5%).
///
/// Applies to every item whose name contains "imported", independent of
/// basic-tax exemption.
pub const IMPORT_DUTY_BPS: u32 = 500;

// =============================================================================
// Property Tests
// =============================================================================
// Cross-module invariants that must hold for ALL inputs, not just the
// hand-picked cases in the per-module unit tests.

#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    use crate::item::LineItem;
    use crate::money::Money;
    use crate::parser::ReceiptParser;
    use crate::receipt::Receipt;

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: total_price == unit_price × quantity + total_tax,
        /// for every valid item.
        #[test]
        fn total_price_identity_holds(
            quantity in 1i64..10_000,
            cents in 1i64..10_000_000,
            imported in any::<bool>(),
            name_idx in 0usize..4,
        ) {
            let base = ["book", "music CD", "chocolate bar", "bottle of perfume"][name_idx];
            let name = if imported {
                format!("imported {base}")
            } else {
                base.to_string()
            };
            let unit_price = Money::from_cents(cents);
            let item = LineItem::new(quantity, name, unit_price).unwrap();
            prop_assert_eq!(
                item.total_price(),
                unit_price * quantity + item.total_tax()
            );
        }

        /// Property: nickel rounding never rounds down and never overshoots
        /// by a full increment (monotonic ceiling), and is idempotent.
        #[test]
        fn nickel_rounding_is_a_ceiling(cents_e4 in 0i64..100_000_000) {
            // Four decimal places of precision, the worst case a tax base has
            let amount = Money::new(Decimal::new(cents_e4, 4));
            let rounded = amount.round_up_to_nickel();
            let nickel = Money::from_cents(5);

            prop_assert!(rounded >= amount);
            prop_assert!(rounded - amount < nickel);
            prop_assert_eq!(rounded.round_up_to_nickel(), rounded);
        }

        /// Property: the lenient parser never fails on arbitrary text made
        /// of safe characters - malformed lines are skipped, not raised.
        #[test]
        fn lenient_parse_never_errors_on_priceless_garbage(
            lines in prop::collection::vec("[a-z ]{0,30}", 0..20)
        ) {
            // No digits, so no line can both match the grammar and fail
            // validation; the parse must always succeed.
            let input = lines.join("\n");
            let receipt = ReceiptParser::parse(Some(&input)).unwrap();
            prop_assert!(receipt.line_items().is_empty());
        }

        /// Property: receipt totals equal the sums over the item list.
        #[test]
        fn receipt_totals_are_sums(
            quantities in prop::collection::vec(1i64..100, 0..10)
        ) {
            let items: Vec<LineItem> = quantities
                .iter()
                .map(|&q| LineItem::new(q, "music CD", Money::from_cents(1499)).unwrap())
                .collect();
            let expected_tax: Money = items.iter().map(LineItem::total_tax).sum();
            let expected_price: Money = items.iter().map(LineItem::total_price).sum();

            let receipt = Receipt::new(items);
            prop_assert_eq!(receipt.total_tax(), expected_tax);
            prop_assert_eq!(receipt.total_price(), expected_price);
        }
    }
}
