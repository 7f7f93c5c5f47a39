//! # Formatters
//!
//! Pure functions turning raw listing data into display strings.
//!
//! ## Functions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  format_price(2999)           → "$29.99"                               │
//! │  format_price_with(2999, EUR) → "29,99 €"                              │
//! │  pluralize("Color", 1)        → "1 Color"                              │
//! │  pluralize("Color", 0)        → "0 Colors"                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Currency rendering follows the CLDR patterns of the shop's locale
//! (grouping, decimal mark, symbol placement) using integer arithmetic only.

use serde::Serialize;

use crate::error::ValidationError;
use crate::money::Money;

/// Non-breaking space, used between an amount and a trailing symbol.
const NBSP: &str = "\u{a0}";

// =============================================================================
// Currency Format
// =============================================================================

/// Where the currency symbol goes relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolPosition {
    /// `$29.99`
    Prefix,
    /// `29,99 €` (separated by a non-breaking space)
    Suffix,
}

/// Locale-specific currency rendering rules.
///
/// ## Presets
/// | Code | 123456 cents     |
/// |------|------------------|
/// | USD  | `$1,234.56`      |
/// | GBP  | `£1,234.56`      |
/// | CAD  | `CA$1,234.56`    |
/// | EUR  | `1.234,56 €`     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyFormat {
    /// ISO 4217 code.
    pub code: &'static str,
    pub symbol: &'static str,
    /// Number of minor-unit digits (2 for cents).
    pub minor_digits: u32,
    pub group_separator: &'static str,
    pub decimal_separator: &'static str,
    pub symbol_position: SymbolPosition,
}

impl CurrencyFormat {
    /// Codes accepted by [`CurrencyFormat::for_code`].
    pub const SUPPORTED_CODES: [&'static str; 4] = ["USD", "GBP", "CAD", "EUR"];

    /// US dollars, en-US.
    pub const fn usd() -> Self {
        CurrencyFormat {
            code: "USD",
            symbol: "$",
            minor_digits: 2,
            group_separator: ",",
            decimal_separator: ".",
            symbol_position: SymbolPosition::Prefix,
        }
    }

    /// Pounds sterling, en-GB.
    pub const fn gbp() -> Self {
        CurrencyFormat {
            code: "GBP",
            symbol: "£",
            ..Self::usd()
        }
    }

    /// Canadian dollars as rendered by an en-US storefront.
    pub const fn cad() -> Self {
        CurrencyFormat {
            code: "CAD",
            symbol: "CA$",
            ..Self::usd()
        }
    }

    /// Euros, de-DE.
    pub const fn eur() -> Self {
        CurrencyFormat {
            code: "EUR",
            symbol: "€",
            minor_digits: 2,
            group_separator: ".",
            decimal_separator: ",",
            symbol_position: SymbolPosition::Suffix,
        }
    }

    /// Looks up a preset by ISO 4217 code (case-insensitive).
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::CurrencyFormat;
    ///
    /// assert_eq!(CurrencyFormat::for_code("eur").unwrap(), CurrencyFormat::eur());
    /// assert!(CurrencyFormat::for_code("XYZ").is_err());
    /// ```
    pub fn for_code(code: &str) -> Result<Self, ValidationError> {
        match code.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Self::usd()),
            "GBP" => Ok(Self::gbp()),
            "CAD" => Ok(Self::cad()),
            "EUR" => Ok(Self::eur()),
            _ => Err(ValidationError::NotAllowed {
                field: "currency".to_string(),
                allowed: Self::SUPPORTED_CODES.iter().map(|c| c.to_string()).collect(),
            }),
        }
    }

    /// Renders an amount with this currency's rules.
    pub fn format(&self, amount: Money) -> String {
        let (major, minor) = amount.split_units(self.minor_digits);

        let mut number = group_digits(major, self.group_separator);
        if self.minor_digits > 0 {
            number.push_str(self.decimal_separator);
            number.push_str(&format!("{:0width$}", minor, width = self.minor_digits as usize));
        }

        let sign = if amount.is_negative() { "-" } else { "" };
        match self.symbol_position {
            SymbolPosition::Prefix => format!("{sign}{}{number}", self.symbol),
            SymbolPosition::Suffix => format!("{sign}{number}{NBSP}{}", self.symbol),
        }
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        CurrencyFormat::usd()
    }
}

/// Inserts `separator` between every group of three digits, from the right.
fn group_digits(value: u64, separator: &str) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }

    grouped
}

// =============================================================================
// Public Formatters
// =============================================================================

/// Formats an amount in cents as US dollars.
///
/// ## Example
/// ```rust
/// use storefront_core::format_price;
///
/// assert_eq!(format_price(2999), "$29.99");
/// assert_eq!(format_price(16500), "$165.00");
/// ```
pub fn format_price(cents: i64) -> String {
    format_price_with(cents, &CurrencyFormat::usd())
}

/// Formats an amount in minor units for the given currency.
pub fn format_price_with(cents: i64, currency: &CurrencyFormat) -> String {
    currency.format(Money::from_cents(cents))
}

/// Builds a count label, appending `s` to the noun unless `count == 1`.
///
/// Only regular plurals are handled; every noun on the storefront takes
/// a plain `s`.
///
/// ## Example
/// ```rust
/// use storefront_core::pluralize;
///
/// assert_eq!(pluralize("Color", 1), "1 Color");
/// assert_eq!(pluralize("Color", 0), "0 Colors");
/// ```
pub fn pluralize(word: &str, count: i64) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
