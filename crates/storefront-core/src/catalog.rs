//! # Catalog Parsing
//!
//! Parses a JSON catalog document (an array of listings) into validated
//! [`ShoeListing`]s. The caller reads the bytes; this module never touches
//! the file system.
//!
//! ## Document Shape
//! ```json
//! [
//!   {
//!     "slug": "tail-twisters",
//!     "name": "Tail-Twisters",
//!     "imageSrc": "/assets/tail-twisters.jpg",
//!     "price": 16500,
//!     "salePrice": null,
//!     "releaseDate": "2024-06-01",
//!     "numOfColors": 3
//!   }
//! ]
//! ```

use crate::error::{CoreError, CoreResult};
use crate::types::{RawShoeListing, ShoeListing};

/// Parses and validates a whole catalog. Fails on the first bad listing.
///
/// ## Example
/// ```rust
/// use storefront_core::catalog::parse_catalog;
///
/// let listings = parse_catalog(r#"[
///     {"slug": "glide", "name": "Glide", "price": 12000,
///      "releaseDate": "2024-06-01", "numOfColors": 1}
/// ]"#).unwrap();
/// assert_eq!(listings.len(), 1);
/// assert!(listings[0].sale_price.is_none());
/// ```
pub fn parse_catalog(json: &str) -> CoreResult<Vec<ShoeListing>> {
    let raw: Vec<RawShoeListing> = serde_json::from_str(json)?;

    raw.into_iter()
        .enumerate()
        .map(|(index, listing)| {
            ShoeListing::try_from(listing)
                .map_err(|source| CoreError::InvalidListing { index, source })
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::money::Money;

    #[test]
    fn test_parse_catalog() {
        let listings = parse_catalog(
            r#"[
                {"slug": "tail-twisters", "name": "Tail-Twisters", "price": 16500,
                 "salePrice": 14000, "releaseDate": "2024-06-01", "numOfColors": 3},
                {"slug": "glide", "name": "Glide", "price": 12000,
                 "releaseDate": "2024-05-01T10:00:00Z", "numOfColors": 1}
            ]"#,
        )
        .unwrap();

        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].sale_price, Some(Money::from_cents(14000)));
        assert_eq!(listings[1].sale_price, None);
    }

    #[test]
    fn test_empty_catalog() {
        assert!(parse_catalog("[]").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            parse_catalog("{not json"),
            Err(CoreError::MalformedCatalog(_))
        ));
        assert!(matches!(
            parse_catalog(r#"{"slug": "not-an-array"}"#),
            Err(CoreError::MalformedCatalog(_))
        ));
    }

    #[test]
    fn test_invalid_listing_reports_index() {
        let err = parse_catalog(
            r#"[
                {"slug": "ok", "name": "Ok", "price": 100,
                 "releaseDate": "2024-06-01", "numOfColors": 1},
                {"slug": "bad", "name": "Bad", "price": 100, "salePrice": "cheap",
                 "releaseDate": "2024-06-01", "numOfColors": 1}
            ]"#,
        )
        .unwrap_err();

        match err {
            CoreError::InvalidListing { index, source } => {
                assert_eq!(index, 1);
                assert!(matches!(source, ValidationError::InvalidFormat { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
