//! # Money Module
//!
//! Provides the `Money` type used for item prices and cart totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE RUNNING TOTAL PROBLEM                                              │
//! │                                                                         │
//! │  A cart keeps a cached total that grows one unit at a time:             │
//! │    total += price   (once per add_item call)                            │
//! │                                                                         │
//! │  With floating point, 0.1 added ten times is 0.9999999999999999,        │
//! │  so "total == Σ quantity × price" stops being an exact equality.        │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    10 × 10 cents = 100 cents, every time                                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shop_core::money::Money;
//!
//! // A price of 1.50 is 150 cents
//! let pen = Money::from_cents(150);
//!
//! // Running totals only ever grow through checked addition
//! let total = Money::zero().checked_add(pen).and_then(|t| t.checked_add(pen));
//! assert_eq!(total, Some(pen * 2));
//! assert_eq!(pen.to_string(), "$1.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: callers may hand us a negative price; the type must be
///   able to hold it so validation can reject it with a proper error
/// - **Single field tuple struct**: zero-cost wrapper, serializes as a bare
///   integer
/// - **Ord**: price bounds in list filters compare `Money` directly
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Item.price ──► add_item() ──► Cart.price += Item.price                 │
/// │      │                                                                  │
/// │      └──► ItemFilter { min_price, max_price }                           │
/// │                                                                         │
/// │  Cart.price ──► CartFilter { min_price, max_price }                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // 10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds two values, returning `None` on overflow.
    ///
    /// Cart totals go through this instead of `+` so that an absurd total is
    /// reported before the cart is touched.
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Human-readable form, e.g. `$6.00`.
///
/// ## Note
/// This is for logs and debugging. Callers own user-facing formatting.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Multiplication by a quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
