//! # Money Module
//!
//! Provides the `Money` and `TaxRate` types for handling monetary values safely.
//!
//! ## Why Exact Decimals?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In f64 arithmetic:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  And tax bases carry sub-cent digits BEFORE rounding:                   │
//! │    11.25 × 5% = 0.5625  → must round UP to 0.60                        │
//! │    Integer cents would truncate 0.5625 to 0.56 first → 0.60 vs 0.55!   │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal                                             │
//! │    Exact base-10 arithmetic, 96-bit mantissa, no representation error  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::money::{Money, TaxRate};
//!
//! let price = Money::from_cents(1125); // 11.25
//! let duty = TaxRate::from_bps(500);   // 5%
//!
//! // 11.25 × 5% = 0.5625, rounded UP to the nearest 0.05 → 0.60
//! assert_eq!(price.calculate_tax(duty), Money::from_cents(60));
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value as an exact decimal amount.
///
/// ## Design Decisions
/// - **Decimal (not f64)**: Exact base-10 arithmetic, no drift across sums
/// - **Decimal (not integer cents)**: Tax bases keep sub-cent precision
///   until the explicit 0.05 ceiling rounding step
/// - **Single field tuple struct**: Zero-cost abstraction over `Decimal`
/// - **Immutable**: All operations return new values
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  LineItem.unit_price ──► calculate_tax() ──► LineItem.total_tax        │
/// │                                                     │                   │
/// │  unit_price × quantity ─────────────────────────────┴─► total_price     │
/// │                                                                         │
/// │  Receipt sums item totals ──► "Sales Taxes: …" / "Total: …"            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from an exact decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from cents (the smallest display unit).
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // 10.99
    /// assert_eq!(price.to_string(), "10.99");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Returns the underlying decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Rounds **up** to the nearest 0.05 increment (ceiling rounding).
    ///
    /// Any fractional remainder above a 0.05 boundary moves to the next
    /// boundary; amounts already on a boundary are returned unchanged.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// // 0.5625 → 0.60
    /// assert_eq!(
    ///     Money::new("0.5625".parse().unwrap()).round_up_to_nickel(),
    ///     Money::from_cents(60)
    /// );
    /// // Already aligned: unchanged
    /// assert_eq!(
    ///     Money::from_cents(150).round_up_to_nickel(),
    ///     Money::from_cents(150)
    /// );
    /// ```
    pub fn round_up_to_nickel(&self) -> Self {
        // ceil(x / 0.05) × 0.05, computed as ceil(x × 20) / 20
        let twenty = Decimal::from(20);
        Money((self.0 * twenty).ceil() / twenty)
    }

    /// Calculates the tax owed on this amount at the given rate, rounded
    /// up to the nearest 0.05.
    ///
    /// This is the per-unit tax primitive: callers taxing a multi-quantity
    /// line must round FIRST and multiply by quantity afterwards —
    /// `round_up(price × rate) × qty`, never `round_up(price × rate × qty)`.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::{Money, TaxRate};
    ///
    /// let cd = Money::from_cents(1499);        // 14.99
    /// let basic = TaxRate::from_bps(1000);     // 10%
    /// // 14.99 × 10% = 1.499 → 1.50
    /// assert_eq!(cd.calculate_tax(basic), Money::from_cents(150));
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        Money(self.0 * rate.as_decimal()).round_up_to_nickel()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display renders exactly two decimal digits with standard
/// (midpoint-away-from-zero) rounding.
///
/// ## Note
/// This rounding is for DISPLAY only. It never feeds back into tax math,
/// which uses [`Money::round_up_to_nickel`] exclusively.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{rounded:.2}")
    }
}

/// Parses a plain decimal literal ("12.49", "0.85", "12.495").
impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s).map(Money)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by quantity (line totals).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * Decimal::from(qty))
    }
}

/// Summation over receipt line items.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10% (basic sales tax), 500 bps = 5% (import duty)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as an exact decimal fraction (1000 bps → 0.1000).
    #[inline]
    pub fn as_decimal(&self) -> Decimal {
        Decimal::new(self.0 as i64, 4)
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
