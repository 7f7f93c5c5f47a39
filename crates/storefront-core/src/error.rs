//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - Catalog-level failures                         │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── AppError         - What the operator sees on stderr               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The display rules themselves never fail: classification and formatting
//! are total functions. Errors only come from turning untyped input into a
//! [`ShoeListing`](crate::ShoeListing).

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Catalog-level errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The catalog document is not valid JSON, or not an array of objects.
    #[error("Malformed catalog: {0}")]
    MalformedCatalog(#[from] serde_json::Error),

    /// A single listing failed validation.
    ///
    /// ## When This Occurs
    /// - `salePrice` is present but not an integer (e.g. `"12.99"`, `true`)
    /// - `releaseDate` cannot be parsed
    /// - `numOfColors` is negative
    #[error("Invalid listing at index {index}")]
    InvalidListing {
        index: usize,
        #[source]
        source: ValidationError,
    },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when raw input doesn't meet requirements.
/// Raised at the parsing boundary, before any display rule runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., non-integer price, invalid date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "slug".to_string(),
        };
        assert_eq!(err.to_string(), "slug is required");

        let err = ValidationError::InvalidFormat {
            field: "salePrice".to_string(),
            reason: "must be an integer amount in cents".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "salePrice has invalid format: must be an integer amount in cents"
        );
    }

    #[test]
    fn test_invalid_listing_message() {
        let err = CoreError::InvalidListing {
            index: 3,
            source: ValidationError::Required {
                field: "name".to_string(),
            },
        };
        assert_eq!(err.to_string(), "Invalid listing at index 3");

        // The cause is reachable through the chain, not repeated in the message.
        let cause = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(cause.as_deref(), Some("name is required"));
    }
}
