//! # Validation Module
//!
//! Field validation for line-item construction.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Line grammar (regex)                                          │
//! │  ├── Shape checks: digits, " at ", \d+\.\d{2} price                     │
//! │  └── Failures are SKIPPED (lenient line policy)                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - field validation                                │
//! │  ├── quantity ≥ 1, name non-empty, price > 0                            │
//! │  └── Failures PROPAGATE and abort the whole parse                       │
//! │                                                                         │
//! │  An invalid LineItem must never exist, so layer 2 runs inside the       │
//! │  constructor - there is no way around it.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::validation::{validate_quantity, validate_name};
//!
//! assert!(validate_quantity(3).is_ok());
//! assert!(validate_quantity(0).is_err());
//! assert_eq!(validate_name("  book  ").unwrap(), "book");
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates an item quantity.
///
/// ## Rules
/// - Must be at least 1
pub fn validate_quantity(quantity: i64) -> ValidationResult<i64> {
    if quantity < 1 {
        return Err(ValidationError::NonPositiveQuantity);
    }
    Ok(quantity)
}

/// Validates an item name, returning the trimmed form.
///
/// ## Rules
/// - Must not be empty after trimming
pub fn validate_name(name: &str) -> ValidationResult<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(name)
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be strictly positive (zero-priced goods are rejected)
pub fn validate_unit_price(price: Money) -> ValidationResult<Money> {
    if !price.is_positive() {
        return Err(ValidationError::NonPositivePrice);
    }
    Ok(price)
}

// =============================================================================
// Unit Tests
// =============================================================================
