//! # Tax Exemption Vocabulary
//!
//! Category keywords that exempt an item from the basic sales tax, plus
//! import detection.
//!
//! ## Matching Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Exemption Matching                                   │
//! │                                                                         │
//! │  "imported Chocolate Bar"                                               │
//! │        │ lowercase                                                      │
//! │        ▼                                                                │
//! │  "imported chocolate bar"                                               │
//! │        │ substring scan over the whole exempt-term set                  │
//! │        ▼                                                                │
//! │  contains "chocolate" ──► Food ──► basic tax does NOT apply            │
//! │  contains "imported"  ──────────► import duty DOES apply               │
//! │                                                                         │
//! │  The two checks are independent: imported exempt goods still pay       │
//! │  import duty.                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Known Limitation
//! Matching is substring containment, NOT word-boundary matching. A product
//! named "bookshelf" matches the "book" term and is treated as exempt.
//! This is preserved deliberately for compatibility with existing receipts;
//! do not "fix" it without a migration plan for downstream totals.

use serde::{Deserialize, Serialize};

/// Substring that marks an item as imported (case-insensitive).
pub const IMPORT_MARKER: &str = "imported";

/// A basic-tax exemption category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExemptCategory {
    Food,
    Book,
    Medical,
}

impl ExemptCategory {
    /// All categories, in matching order.
    pub const ALL: [ExemptCategory; 3] = [
        ExemptCategory::Food,
        ExemptCategory::Book,
        ExemptCategory::Medical,
    ];

    /// The exempt terms belonging to this category.
    pub const fn terms(&self) -> &'static [&'static str] {
        match self {
            ExemptCategory::Food => &[
                "chocolate",
                "bread",
                "milk",
                "potato",
                "tomato",
                "fruit",
                "vegetable",
                "rice",
                "meat",
                "egg",
                "cheese",
            ],
            ExemptCategory::Book => &["book", "novel", "magazine", "fiction", "literature"],
            ExemptCategory::Medical => &["headache pills", "medicine", "band-aid", "ointment"],
        }
    }

    /// Whether any of this category's terms appears in the (already
    /// lowercased) item name.
    fn matches_lowercase(&self, name_lower: &str) -> bool {
        self.terms().iter().any(|term| name_lower.contains(term))
    }
}

/// Returns the exemption category the item name falls under, if any.
///
/// Case-insensitive substring containment against the full term set;
/// categories are scanned in [`ExemptCategory::ALL`] order and the first
/// match wins.
pub fn exempt_category(name: &str) -> Option<ExemptCategory> {
    let name_lower = name.to_lowercase();
    ExemptCategory::ALL
        .into_iter()
        .find(|category| category.matches_lowercase(&name_lower))
}

/// Whether the item name is exempt from the basic sales tax.
pub fn is_tax_exempt(name: &str) -> bool {
    exempt_category(name).is_some()
}

/// Whether the item name signals an imported good.
///
/// Independent of exemption: an imported chocolate bar pays import duty
/// but no basic tax.
pub fn is_imported(name: &str) -> bool {
    name.to_lowercase().contains(IMPORT_MARKER)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exempt_matching_is_case_insensitive() {
        assert!(is_tax_exempt("CHOCOLATE bar"));
        assert!(is_tax_exempt("imported Chocolate Bar"));
        assert!(is_tax_exempt("Packet of Headache Pills"));
    }

    #[test]
    fn test_exempt_matching_is_substring_based() {
        // "chocolate bar" contains "chocolate"
        assert!(is_tax_exempt("chocolate bar"));
        // Known false positive, preserved on purpose: "bookshelf" contains "book"
        assert!(is_tax_exempt("bookshelf"));
    }

    #[test]
    fn test_non_exempt_items() {
        assert!(!is_tax_exempt("music CD"));
        assert!(!is_tax_exempt("bottle of perfume"));
        assert!(!is_tax_exempt("lamp"));
    }

    #[test]
    fn test_category_assignment() {
        assert_eq!(exempt_category("box of chocolates"), Some(ExemptCategory::Food));
        assert_eq!(exempt_category("science fiction novel"), Some(ExemptCategory::Book));
        assert_eq!(exempt_category("box of band-aids"), Some(ExemptCategory::Medical));
        assert_eq!(exempt_category("watch"), None);
    }

    #[test]
    fn test_import_detection() {
        assert!(is_imported("imported box of chocolates"));
        assert!(is_imported("IMPORTED bottle of perfume"));
        assert!(!is_imported("bottle of perfume"));
        // Import detection does not care about exemption
        assert!(is_imported("imported music CD"));
    }
}
