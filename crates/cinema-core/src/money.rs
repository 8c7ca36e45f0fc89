//! # Money Module
//!
//! Provides the `Money` type for ticket prices and purchase totals.
//!
//! ## Why a Newtype?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Ticket prices are whole currency units (ADULT = 25, CHILD = 15).       │
//! │                                                                         │
//! │  A bare i64 "25" could be a price, a seat count or an account ID.       │
//! │  Money(25) can only be an amount, so seats and amounts never mix:       │
//! │                                                                         │
//! │    make_payment(account_id, Money)    ← amount                          │
//! │    reserve_seat(account_id, i64)      ← seat count                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cinema_core::money::Money;
//!
//! let adult = Money::from_units(25);
//! let total = adult
//!     .checked_multiply_quantity(2)
//!     .and_then(|line| line.checked_add(Money::from_units(15)));
//! assert_eq!(total, Some(Money::from_units(65)));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole currency units.
///
/// ## Design Decisions
/// - **i64 (signed)**: a negative ticket quantity produces a negative line
///   total, and the aggregate rules allow such lines through
/// - **Transparent serde**: serializes as a plain integer (`25`, not `{"0":25}`)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use cinema_core::money::Money;
    ///
    /// let price = Money::from_units(25);
    /// assert_eq!(price.units(), 25);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the value in whole currency units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a ticket quantity.
    ///
    /// Returns `None` if the line total does not fit in an `i64`.
    ///
    /// ## Example
    /// ```rust
    /// use cinema_core::money::Money;
    ///
    /// let child = Money::from_units(15);
    /// assert_eq!(child.checked_multiply_quantity(3), Some(Money::from_units(45)));
    /// assert_eq!(Money::from_units(i64::MAX).checked_multiply_quantity(2), None);
    /// ```
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(units) => Some(Money(units)),
            None => None,
        }
    }

    /// Adds two amounts, returning `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(units) => Some(Money(units)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount in pounds, e.g. `£95`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}£{}", sign, self.0.unsigned_abs())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
