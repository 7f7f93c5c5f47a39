//! # Validation Module
//!
//! Turns untyped catalog values into typed listing fields.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: serde (catalog.rs)                                           │
//! │  └── Document shape: array of objects, field names                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── salePrice present but not an integer → InvalidFormat              │
//! │  ├── releaseDate unparseable → InvalidFormat                           │
//! │  └── numOfColors negative → OutOfRange                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: display rules (variant.rs, format.rs)                        │
//! │  └── Total functions, no checks of their own                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here guesses. A present value of the wrong kind fails fast
//! instead of being coerced to "absent".
//!
//! ## Usage
//! ```rust
//! use serde_json::json;
//! use storefront_core::validation::{parse_sale_price, validate_slug};
//!
//! validate_slug("tail-twisters").unwrap();
//! assert!(parse_sale_price(Some(&json!(12999))).unwrap().is_some());
//! assert!(parse_sale_price(Some(&json!("12.99"))).is_err());
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a listing slug (the `/shoe/{slug}` path segment).
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 100 characters
/// - Only letters, numbers, hyphens and underscores
pub fn validate_slug(slug: &str) -> ValidationResult<()> {
    let slug = slug.trim();

    if slug.is_empty() {
        return Err(ValidationError::Required {
            field: "slug".to_string(),
        });
    }

    if slug.chars().count() > 100 {
        return Err(ValidationError::InvalidFormat {
            field: "slug".to_string(),
            reason: "must be at most 100 characters".to_string(),
        });
    }

    if !slug
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "slug".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a display name. Must not be blank.
pub fn validate_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses a required integer amount in cents.
pub fn parse_price(value: Option<&Value>) -> ValidationResult<Money> {
    match value {
        None | Some(Value::Null) => Err(ValidationError::Required {
            field: "price".to_string(),
        }),
        Some(value) => parse_cents("price", value),
    }
}

/// Parses an optional sale price.
///
/// ## Rules
/// ```text
/// missing or null      → Ok(None)        (not on sale)
/// integer (any sign)   → Ok(Some(money)) (on sale, even at 0 or below)
/// anything else        → InvalidFormat   (string, float, bool, object)
/// ```
pub fn parse_sale_price(value: Option<&Value>) -> ValidationResult<Option<Money>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(value) => parse_cents("salePrice", value).map(Some),
    }
}

fn parse_cents(field: &str, value: &Value) -> ValidationResult<Money> {
    match value.as_i64() {
        Some(cents) => Ok(Money::from_cents(cents)),
        None if value.is_u64() => Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: i64::MIN,
            max: i64::MAX,
        }),
        None => Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: format!("must be an integer amount in cents, got {value}"),
        }),
    }
}

/// Parses the number of available colors.
///
/// ## Rules
/// - Must be an integer between 0 and `u32::MAX`
pub fn parse_num_of_colors(value: Option<&Value>) -> ValidationResult<u32> {
    let value = match value {
        None | Some(Value::Null) => {
            return Err(ValidationError::Required {
                field: "numOfColors".to_string(),
            })
        }
        Some(value) => value,
    };

    let out_of_range = || ValidationError::OutOfRange {
        field: "numOfColors".to_string(),
        min: 0,
        max: u32::MAX as i64,
    };

    match value.as_i64() {
        Some(n) => u32::try_from(n).map_err(|_| out_of_range()),
        // Integers above i64::MAX are still integers, just too large.
        None if value.is_u64() => Err(out_of_range()),
        None => Err(ValidationError::InvalidFormat {
            field: "numOfColors".to_string(),
            reason: format!("must be an integer, got {value}"),
        }),
    }
}

// =============================================================================
// Date Validators
// =============================================================================

/// Parses a release date.
///
/// ## Accepted Forms
/// - RFC 3339 string: `"2024-06-01T09:30:00Z"`, `"2024-06-01T09:30:00-05:00"`
/// - Calendar date: `"2024-06-01"` (midnight UTC)
/// - Integer: milliseconds since the Unix epoch
///
/// ## Example
/// ```rust
/// use serde_json::json;
/// use storefront_core::validation::parse_release_date;
///
/// let a = parse_release_date(Some(&json!("2024-06-01"))).unwrap();
/// let b = parse_release_date(Some(&json!("2024-06-01T00:00:00Z"))).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn parse_release_date(value: Option<&Value>) -> ValidationResult<DateTime<Utc>> {
    let invalid = |reason: String| ValidationError::InvalidFormat {
        field: "releaseDate".to_string(),
        reason,
    };

    match value {
        None | Some(Value::Null) => Err(ValidationError::Required {
            field: "releaseDate".to_string(),
        }),
        Some(Value::String(text)) => parse_date_str(text.trim()).ok_or_else(|| {
            invalid(format!(
                "'{text}' is not an RFC 3339 timestamp or YYYY-MM-DD date"
            ))
        }),
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .ok_or_else(|| invalid(format!("{n} is not a valid epoch timestamp in milliseconds"))),
        Some(other) => Err(invalid(format!("expected a date, got {other}"))),
    }
}

fn parse_date_str(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        return Some(timestamp.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

// =============================================================================
// Unit Tests
// =============================================================================
