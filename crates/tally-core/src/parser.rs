//! # Receipt Parser
//!
//! Converts raw multi-line basket text into a [`Receipt`] via a fixed
//! line grammar.
//!
//! ## Line Grammar
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              "2 imported boxes of chocolates at 11.25"                  │
//! │               │  │                            │   │                     │
//! │               │  └── name (non-greedy) ───────┘   └── price \d+\.\d{2}  │
//! │               └── quantity \d+                                          │
//! │                                                                         │
//! │  ^(\d+)\s+(.+?)\s+at\s+(\d+\.\d{2})$                                    │
//! │                                                                         │
//! │  "12.4"  rejected (one decimal digit)                                   │
//! │  "12.49" accepted (exactly two)                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Policy (two distinct layers)
//! - Lines that fail the GRAMMAR are silently skipped under [`ReceiptParser::parse`]:
//!   garbage input degrades gracefully instead of aborting the basket.
//!   [`ReceiptParser::parse_strict`] raises a [`ParseError`] instead.
//! - Lines that match the grammar but fail FIELD VALIDATION always
//!   propagate and abort the parse; a receipt is never built from a
//!   partially valid basket.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{CoreError, CoreResult, ParseError};
use crate::item::LineItem;
use crate::receipt::Receipt;

/// `<quantity> <name> at <price>` with exactly two price decimals.
static LINE_ITEM_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+)\s+(.+?)\s+at\s+(\d+\.\d{2})$").expect("line-item pattern is valid")
});

/// Stateless parser for basket text. All methods are pure functions; no
/// caches survive between calls, so concurrent hosts can parse freely.
pub struct ReceiptParser;

impl ReceiptParser {
    /// Parses raw basket text into a receipt (lenient line policy).
    ///
    /// - `None` input → [`CoreError::MissingInput`]. An absent basket is an
    ///   argument error; an *empty* one is a valid zero-total receipt.
    /// - Lines are trimmed; blank lines are discarded.
    /// - Malformed lines are skipped without error.
    /// - Grammar matches that fail line-item validation abort the parse.
    /// - Item order follows input line order.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::parser::ReceiptParser;
    ///
    /// let receipt = ReceiptParser::parse(Some("2 book at 12.49\n1 music CD at 14.99")).unwrap();
    /// assert_eq!(receipt.line_items().len(), 2);
    /// assert_eq!(receipt.total_tax().to_string(), "1.50");
    /// ```
    pub fn parse(input: Option<&str>) -> CoreResult<Receipt> {
        let input = input.ok_or(CoreError::MissingInput)?;

        let mut items = Vec::new();
        for line in input.lines() {
            if let Some(item) = Self::parse_line(line.trim())? {
                items.push(item);
            }
        }
        Ok(Receipt::new(items))
    }

    /// Parses raw basket text, raising on the first malformed line instead
    /// of skipping it.
    ///
    /// Blank lines are still discarded; only non-blank lines that fail the
    /// grammar produce a [`ParseError::MalformedLine`] carrying the 1-based
    /// line number and the offending text.
    pub fn parse_strict(input: Option<&str>) -> CoreResult<Receipt> {
        let input = input.ok_or(CoreError::MissingInput)?;

        let mut items = Vec::new();
        for (idx, raw_line) in input.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }
            match Self::parse_line(line)? {
                Some(item) => items.push(item),
                None => {
                    return Err(ParseError::MalformedLine {
                        line: idx + 1,
                        content: line.to_string(),
                    }
                    .into())
                }
            }
        }
        Ok(Receipt::new(items))
    }

    /// Parses a single trimmed line.
    ///
    /// Returns `Ok(None)` for blank or grammar-mismatched lines and
    /// `Err` only for validation failures on matched captures.
    fn parse_line(line: &str) -> CoreResult<Option<LineItem>> {
        if line.is_empty() {
            return Ok(None);
        }
        let Some(captures) = LINE_ITEM_PATTERN.captures(line) else {
            return Ok(None);
        };

        let item = LineItem::from_parts(&captures[1], &captures[2], &captures[3])?;
        Ok(Some(item))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    #[test]
    fn test_absent_input_is_an_error() {
        let err = ReceiptParser::parse(None).unwrap_err();
        assert!(matches!(err, CoreError::MissingInput));
    }

    #[test]
    fn test_empty_input_yields_empty_receipt() {
        // Empty is valid; only absent input errors
        let receipt = ReceiptParser::parse(Some("")).unwrap();
        assert!(receipt.line_items().is_empty());
        assert_eq!(receipt.total_tax(), Money::zero());
        assert_eq!(receipt.total_price(), Money::zero());
    }

    #[test]
    fn test_blank_and_whitespace_lines_are_discarded() {
        let receipt = ReceiptParser::parse(Some("\n   \n1 book at 12.49\n\t\n")).unwrap();
        assert_eq!(receipt.line_items().len(), 1);
    }

    #[test]
    fn test_lines_are_trimmed_before_matching() {
        let receipt = ReceiptParser::parse(Some("   1 book at 12.49   ")).unwrap();
        assert_eq!(receipt.line_items().len(), 1);
        assert_eq!(receipt.line_items()[0].name(), "book");
    }

    #[test]
    fn test_malformed_lines_are_silently_skipped() {
        let input = "book at 12.49\n\
                     1 book at\n\
                     1 book at 12.4\n\
                     1 book at 12.49";
        let receipt = ReceiptParser::parse(Some(input)).unwrap();
        // Missing quantity, missing price, one-decimal price: all skipped
        assert_eq!(receipt.line_items().len(), 1);
        assert_eq!(receipt.total_price(), money("12.49"));
    }

    #[test]
    fn test_price_requires_exactly_two_decimals() {
        assert!(ReceiptParser::parse(Some("1 book at 12.4"))
            .unwrap()
            .line_items()
            .is_empty());
        assert!(ReceiptParser::parse(Some("1 book at 12.495"))
            .unwrap()
            .line_items()
            .is_empty());
        assert_eq!(
            ReceiptParser::parse(Some("1 book at 12.49"))
                .unwrap()
                .line_items()
                .len(),
            1
        );
    }

    #[test]
    fn test_name_spans_to_last_at_separator() {
        // Non-greedy name still leaves the final " at <price>" as separator
        let receipt = ReceiptParser::parse(Some("1 potatoes at the farm at 1.00")).unwrap();
        assert_eq!(receipt.line_items()[0].name(), "potatoes at the farm");
    }

    #[test]
    fn test_input_order_is_preserved() {
        let input = "1 music CD at 14.99\n2 book at 12.49\n1 chocolate bar at 0.85";
        let receipt = ReceiptParser::parse(Some(input)).unwrap();
        let names: Vec<&str> = receipt.line_items().iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["music CD", "book", "chocolate bar"]);
    }

    #[test]
    fn test_validation_failures_propagate() {
        // "0 book at 12.49" matches the grammar but fails quantity validation;
        // unlike grammar mismatches this aborts the whole parse.
        let err = ReceiptParser::parse(Some("1 book at 12.49\n0 book at 12.49")).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(err.to_string(), "Validation error: Quantity must be positive");
    }

    #[test]
    fn test_strict_parse_raises_on_malformed_line() {
        let err = ReceiptParser::parse_strict(Some("1 book at 12.49\nbook at 12.49")).unwrap_err();
        match err {
            CoreError::Parse(ParseError::MalformedLine { line, content }) => {
                assert_eq!(line, 2);
                assert_eq!(content, "book at 12.49");
            }
            other => panic!("expected MalformedLine, got {other:?}"),
        }
    }

    #[test]
    fn test_strict_parse_still_skips_blank_lines() {
        let receipt = ReceiptParser::parse_strict(Some("\n1 book at 12.49\n\n")).unwrap();
        assert_eq!(receipt.line_items().len(), 1);
    }
}
