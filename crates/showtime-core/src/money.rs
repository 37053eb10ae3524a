//! # Money Module
//!
//! Provides the `Money` type for ticket prices and booking totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  TICKET TOTALS IN MINOR UNITS                                           │
//! │                                                                         │
//! │  Floating point:                                                        │
//! │    3 seats × $18.10 = 54.300000000000004  ❌                             │
//! │                                                                         │
//! │  Integer cents:                                                         │
//! │    3 seats × 1810 cents = 5430 cents = $54.30  ✅                       │
//! │                                                                         │
//! │  A booking total is always `seat count × price per seat`, so the only  │
//! │  operation that matters is exact integer multiplication.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use showtime_core::money::Money;
//!
//! let ticket = Money::from_major(15);       // $15.00
//! let total = ticket.times(2);              // two seats
//! assert_eq!(total, Money::from_major(30));
//! assert_eq!(total.to_string(), "$30.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Where Money Flows
/// ```text
/// ShowRecord.price ──► SelectionState.price_per_seat
///                            │
///                            ▼
///                 summarize(): count × price ──► BookingSummary.total
///                                                      │
///                                                      ▼
///                                       BookingConfirmation.total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use showtime_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1850).cents(), 1850);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole currency units.
    ///
    /// Catalog prices are whole dollars, so this is the usual constructor
    /// for [`crate::ShowRecord`] prices.
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * 100)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is below zero.
    ///
    /// Prices are never negative; the catalog rejects such records.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a per-seat price by a seat count.
    ///
    /// ## User Workflow
    /// ```text
    /// Price per seat: $15.00
    /// Seats selected: 2
    ///      │
    ///      ▼
    /// times(2) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Total: $30.00
    /// ```
    ///
    /// Saturates at the `i64` bounds instead of overflowing.
    #[inline]
    pub fn times(&self, count: usize) -> Self {
        let count = i64::try_from(count).unwrap_or(i64::MAX);
        Money(self.0.saturating_mul(count))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$12.34`.
///
/// For debugging and plain console output. The terminal app formats
/// with its configured currency symbol instead.
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

/// Multiplication by a seat count.
impl Mul<usize> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: usize) -> Self {
        self.times(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
