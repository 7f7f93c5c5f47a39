//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Dividing cents by 100 in floating point:                               │
//! │    1005 / 100 = 10.049999999999999  → rounds to "$10.04"  ❌ WRONG!     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents, split with integer division               │
//! │    1005 / 100 = 10 (major)   1005 % 100 = 5 (minor)  → "$10.05"        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//!
//! let price = Money::from_cents(16500); // $165.00
//! assert_eq!(price.to_string(), "$165.00");
//!
//! // NEVER do this:
//! // let bad = Money::from_float(165.0); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::format::CurrencyFormat;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: a negative sale price is still a sale price; the
///   classifier does not second-guess it
/// - **Single field tuple struct**: Zero-cost abstraction over i64, serializes
///   as a bare integer
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  ShoeListing.price ─────┬──► ShoeCard.price_label       "$165.00"      │
/// │                         │                                               │
/// │  ShoeListing.sale_price ┼──► ShoeCard.sale_price_label  "$139.99"      │
/// │                         │                                               │
/// │                         └──► classify() → Variant::OnSale              │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let price = Money::from_cents(2999); // Represents $29.99
    /// assert_eq!(price.cents(), 2999);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Splits the absolute value into major and minor units.
    ///
    /// `minor_digits` is the number of minor-unit digits of the currency
    /// (2 for USD, 0 for JPY). Works for `i64::MIN` because the split is
    /// done on the unsigned magnitude. When `10^minor_digits` exceeds `u64`
    /// every amount is smaller than one major unit, so major is 0.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(2999).split_units(2), (29, 99));
    /// assert_eq!(Money::from_cents(-550).split_units(2), (5, 50));
    /// ```
    pub const fn split_units(&self, minor_digits: u32) -> (u64, u64) {
        let magnitude = self.0.unsigned_abs();
        match 10u64.checked_pow(minor_digits) {
            Some(divisor) => (magnitude / divisor, magnitude % divisor),
            None => (0, magnitude),
        }
    }

    /// Formats this amount for display in the given currency.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::{CurrencyFormat, Money};
    ///
    /// let price = Money::from_cents(123456);
    /// assert_eq!(price.format(&CurrencyFormat::usd()), "$1,234.56");
    /// assert_eq!(price.format(&CurrencyFormat::eur()), "1.234,56\u{a0}€");
    /// ```
    pub fn format(&self, currency: &CurrencyFormat) -> String {
        currency.format(*self)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display renders the amount in US dollars.
///
/// ## Note
/// Use [`Money::format`] when the shop is configured for another currency.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&CurrencyFormat::usd().format(*self))
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
