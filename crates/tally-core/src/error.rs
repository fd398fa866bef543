//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tally-core errors (this file)                                          │
//! │  ├── CoreError        - Top-level domain errors                         │
//! │  ├── ValidationError  - Line-item field validation failures             │
//! │  └── ParseError       - Grammar-level failures (strict parsing only)    │
//! │                                                                         │
//! │  CLI errors (in app)                                                    │
//! │  └── exit code + error log line, derived from CoreError                 │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CLI → non-zero exit                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Validation messages are the exact reason strings callers display
//!    ("Quantity must be positive", etc.)

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Top-level errors surfaced by receipt processing.
///
/// Grammar mismatches on individual lines are NOT errors under the default
/// lenient policy (the line is skipped); they only appear here when the
/// caller opts into strict parsing.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No input was supplied at all.
    ///
    /// ## When This Occurs
    /// - The caller passes `None` to [`crate::parser::ReceiptParser::parse`]
    ///
    /// Deliberately distinct from an *empty* input, which is valid and
    /// yields an empty receipt with zero totals.
    #[error("input cannot be absent")]
    MissingInput,

    /// A parsed line produced invalid line-item fields.
    ///
    /// These abort the whole parse: a receipt is never built from a
    /// partially valid basket.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A line failed the item grammar under strict parsing.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Line-item field validation errors.
///
/// An invalid `LineItem` must never exist, so these fire at construction
/// time. The display strings are the caller-facing reason strings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Quantity was zero, negative, or not a number.
    #[error("Quantity must be positive")]
    NonPositiveQuantity,

    /// Name was empty after trimming.
    #[error("Name cannot be empty")]
    EmptyName,

    /// Unit price was zero, negative, or not a number.
    #[error("Price must be positive")]
    NonPositivePrice,
}

// =============================================================================
// Parse Error
// =============================================================================

/// Grammar-level parse errors.
///
/// The default parsing policy recovers from these locally (malformed lines
/// are dropped); they are raised only by
/// [`crate::parser::ReceiptParser::parse_strict`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A non-blank line did not match `<qty> <name> at <price>`.
    #[error("line {line} does not match the item grammar: {content:?}")]
    MalformedLine { line: usize, content: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
