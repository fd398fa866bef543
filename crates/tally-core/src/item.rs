//! # Line Items
//!
//! A line item is one parsed purchase entry: quantity, name, unit price,
//! plus the taxes derived from them.
//!
//! ## Tax Computation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                LineItem::new(3, "imported box of chocolates", 11.25)    │
//! │                                                                         │
//! │  name ──► exempt? (food: "chocolate") ──► basic tax (10%) waived       │
//! │  name ──► "imported"?                 ──► import duty (5%) applies     │
//! │                                                                         │
//! │  per-unit duty = round_up(11.25 × 5%) = round_up(0.5625) = 0.60        │
//! │  line duty     = 0.60 × 3            = 1.80                            │
//! │  total price   = 11.25 × 3 + 1.80    = 35.55                           │
//! │                                                                         │
//! │  ORDER MATTERS: round per unit FIRST, multiply by quantity AFTER.      │
//! │  round_up(11.25 × 5% × 3) = round_up(1.6875) = 1.70 would be WRONG.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Basic tax and import duty are rounded independently and then summed;
//! they are never folded into a single combined rate.

use serde::Serialize;

use crate::error::ValidationError;
use crate::exempt::{self, ExemptCategory};
use crate::money::{Money, TaxRate};
use crate::validation::{validate_name, validate_quantity, validate_unit_price};
use crate::{BASIC_TAX_BPS, IMPORT_DUTY_BPS};

/// One purchased line on a receipt, immutable after construction.
///
/// All derived values (taxes, totals, category flags) are computed once in
/// the constructor and stored on the instance. Nothing here is lazy or
/// process-global, so concurrent hosts can process receipts in parallel
/// without shared caches.
///
/// Serialize only: deserialization would bypass construction-time
/// validation, and an invalid `LineItem` must never exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    quantity: i64,
    name: String,
    unit_price: Money,
    exempt_category: Option<ExemptCategory>,
    imported: bool,
    total_tax: Money,
    total_price: Money,
}

impl LineItem {
    /// Constructs a validated line item and computes its taxes.
    ///
    /// ## Errors
    /// - quantity < 1 → "Quantity must be positive"
    /// - name empty after trimming → "Name cannot be empty"
    /// - unit price ≤ 0 → "Price must be positive"
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::item::LineItem;
    /// use tally_core::money::Money;
    ///
    /// let cd = LineItem::new(1, "music CD", Money::from_cents(1499)).unwrap();
    /// assert_eq!(cd.total_tax(), Money::from_cents(150));
    /// assert_eq!(cd.total_price(), Money::from_cents(1649));
    /// ```
    pub fn new(
        quantity: i64,
        name: impl Into<String>,
        unit_price: Money,
    ) -> Result<Self, ValidationError> {
        let quantity = validate_quantity(quantity)?;
        let name = validate_name(&name.into())?.to_string();
        let unit_price = validate_unit_price(unit_price)?;

        let exempt_category = exempt::exempt_category(&name);
        let imported = exempt::is_imported(&name);

        let basic_tax = if exempt_category.is_none() {
            Self::line_tax(unit_price, TaxRate::from_bps(BASIC_TAX_BPS), quantity)
        } else {
            Money::zero()
        };
        let import_duty = if imported {
            Self::line_tax(unit_price, TaxRate::from_bps(IMPORT_DUTY_BPS), quantity)
        } else {
            Money::zero()
        };

        let total_tax = import_duty + basic_tax;
        let total_price = unit_price * quantity + total_tax;

        Ok(LineItem {
            quantity,
            name,
            unit_price,
            exempt_category,
            imported,
            total_tax,
            total_price,
        })
    }

    /// Constructs a line item from raw textual captures (quantity, name,
    /// price), as produced by the line grammar.
    ///
    /// Quantity is parsed as a decimal and truncated toward zero
    /// ("1.5" → 1); price is parsed as a generic decimal, so more than two
    /// decimal digits are accepted here even though the grammar itself only
    /// admits exactly two. Unparseable numerics fail the same positivity
    /// checks as out-of-range values.
    pub fn from_parts(quantity: &str, name: &str, price: &str) -> Result<Self, ValidationError> {
        let quantity = quantity
            .parse::<rust_decimal::Decimal>()
            .ok()
            .and_then(|d| rust_decimal::prelude::ToPrimitive::to_i64(&d.trunc()))
            .ok_or(ValidationError::NonPositiveQuantity)?;
        let unit_price = price
            .parse::<Money>()
            .map_err(|_| ValidationError::NonPositivePrice)?;
        Self::new(quantity, name, unit_price)
    }

    // Per-unit tax rounded up to 0.05, THEN multiplied by quantity.
    fn line_tax(unit_price: Money, rate: TaxRate, quantity: i64) -> Money {
        unit_price.calculate_tax(rate) * quantity
    }

    /// Number of units purchased (always ≥ 1).
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Trimmed item label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price of a single unit, before tax.
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Basic-tax exemption category, if the name matched one.
    pub fn exempt_category(&self) -> Option<ExemptCategory> {
        self.exempt_category
    }

    /// Whether the 10% basic sales tax applies.
    pub fn is_basic_taxable(&self) -> bool {
        self.exempt_category.is_none()
    }

    /// Whether the 5% import duty applies.
    pub fn is_imported(&self) -> bool {
        self.imported
    }

    /// Total tax for the line: import duty + basic tax, each rounded
    /// per unit independently.
    pub fn total_tax(&self) -> Money {
        self.total_tax
    }

    /// Total for the line: unit price × quantity + total tax.
    pub fn total_price(&self) -> Money {
        self.total_price
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: i64, name: &str, price: &str) -> LineItem {
        LineItem::new(quantity, name, price.parse().unwrap()).unwrap()
    }

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    #[test]
    fn test_exempt_domestic_item_pays_no_tax() {
        let book = item(2, "book", "12.49");
        assert!(!book.is_basic_taxable());
        assert!(!book.is_imported());
        assert_eq!(book.total_tax(), Money::zero());
        assert_eq!(book.total_price(), money("24.98"));
    }

    #[test]
    fn test_taxable_domestic_item_pays_basic_tax() {
        let cd = item(1, "music CD", "14.99");
        assert!(cd.is_basic_taxable());
        assert_eq!(cd.total_tax(), money("1.50"));
        assert_eq!(cd.total_price(), money("16.49"));
    }

    #[test]
    fn test_cheap_exempt_item() {
        let bar = item(1, "chocolate bar", "0.85");
        assert_eq!(bar.exempt_category(), Some(ExemptCategory::Food));
        assert_eq!(bar.total_tax(), Money::zero());
        assert_eq!(bar.total_price(), money("0.85"));
    }

    #[test]
    fn test_imported_exempt_item_pays_import_duty_only() {
        let chocolates = item(1, "imported box of chocolates", "10.00");
        assert!(!chocolates.is_basic_taxable());
        assert!(chocolates.is_imported());
        assert_eq!(chocolates.total_tax(), money("0.50"));
        assert_eq!(chocolates.total_price(), money("10.50"));
    }

    #[test]
    fn test_imported_taxable_item_pays_both_taxes() {
        // 47.50 × 10% = 4.75, 47.50 × 5% = 2.375 → 2.40; taxes stack to 7.15
        let perfume = item(1, "imported bottle of perfume", "47.50");
        assert_eq!(perfume.total_tax(), money("7.15"));
        assert_eq!(perfume.total_price(), money("54.65"));
    }

    #[test]
    fn test_imported_book_pays_import_duty_only() {
        // Exemption and import duty are independent axes
        let book = item(1, "imported book", "12.49");
        assert!(!book.is_basic_taxable());
        assert!(book.is_imported());
        // 12.49 × 5% = 0.6245 → 0.65
        assert_eq!(book.total_tax(), money("0.65"));
    }

    #[test]
    fn test_per_unit_rounding_before_quantity() {
        // 11.25 × 5% = 0.5625 → 0.60 per unit, × 3 = 1.80.
        // Rounding the line total instead would give round_up(1.6875) = 1.70.
        let chocolates = item(3, "imported boxes of chocolates", "11.25");
        assert_eq!(chocolates.total_tax(), money("1.80"));
        assert_eq!(chocolates.total_price(), money("35.55"));
    }

    #[test]
    fn test_total_price_identity() {
        for (qty, name, price) in [
            (2, "book", "12.49"),
            (1, "music CD", "14.99"),
            (3, "imported boxes of chocolates", "11.25"),
            (7, "imported bottle of perfume", "47.50"),
        ] {
            let it = item(qty, name, price);
            assert_eq!(
                it.total_price(),
                it.unit_price() * it.quantity() + it.total_tax()
            );
        }
    }

    #[test]
    fn test_validation_failures() {
        let price = money("1.00");
        assert_eq!(
            LineItem::new(0, "book", price).unwrap_err(),
            ValidationError::NonPositiveQuantity
        );
        assert_eq!(
            LineItem::new(1, "   ", price).unwrap_err(),
            ValidationError::EmptyName
        );
        assert_eq!(
            LineItem::new(1, "book", Money::zero()).unwrap_err(),
            ValidationError::NonPositivePrice
        );
    }

    #[test]
    fn test_name_is_trimmed() {
        let it = item(1, "  music CD  ", "14.99");
        assert_eq!(it.name(), "music CD");
    }

    #[test]
    fn test_from_parts_truncates_fractional_quantity() {
        let it = LineItem::from_parts("1.5", "music CD", "14.99").unwrap();
        assert_eq!(it.quantity(), 1);
    }

    #[test]
    fn test_from_parts_rejects_garbage_numerics() {
        assert_eq!(
            LineItem::from_parts("abc", "book", "12.49").unwrap_err(),
            ValidationError::NonPositiveQuantity
        );
        assert_eq!(
            LineItem::from_parts("1", "book", "twelve").unwrap_err(),
            ValidationError::NonPositivePrice
        );
    }

    #[test]
    fn test_from_parts_accepts_generic_decimal_price() {
        // The grammar only admits two decimals, but construction is tolerant
        let it = LineItem::from_parts("1", "music CD", "14.995").unwrap();
        // 14.995 × 10% = 1.4995 → 1.50
        assert_eq!(it.total_tax(), money("1.50"));
    }
}
