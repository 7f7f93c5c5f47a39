//! # Listing Types
//!
//! Input records for the display rules.
//!
//! ## Type Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  JSON object ──► RawShoeListing ──► ShoeListing ──► ShoeCard           │
//! │                  (untyped values)   (validated)     (view model)        │
//! │                         │                                               │
//! │                         └── validation.rs decides, fails fast          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{
    parse_num_of_colors, parse_price, parse_release_date, parse_sale_price, validate_name,
    validate_slug,
};
use crate::variant::{classify, Variant};

// =============================================================================
// Shoe Listing
// =============================================================================

/// A shoe as supplied by the catalog. Owned by the caller, never mutated.
///
/// Deserializing goes through [`RawShoeListing`], so a `ShoeListing` read
/// straight from JSON obeys the same rules as one from
/// [`parse_catalog`](crate::catalog::parse_catalog).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", try_from = "RawShoeListing")]
pub struct ShoeListing {
    /// URL path segment, `/shoe/{slug}`.
    pub slug: String,

    pub name: String,

    pub image_src: String,

    /// Regular price in cents.
    pub price: Money,

    /// Discounted price in cents. `Some` means on sale, whatever the amount.
    pub sale_price: Option<Money>,

    #[ts(as = "String")]
    pub release_date: DateTime<Utc>,

    pub num_of_colors: u32,
}

impl ShoeListing {
    /// The card variant for this listing at `now`.
    #[inline]
    pub fn variant(&self, now: DateTime<Utc>) -> Variant {
        classify(self.sale_price, self.release_date, now)
    }

    /// Link target for the product page.
    pub fn href(&self) -> String {
        format!("/shoe/{}", self.slug)
    }
}

// =============================================================================
// Raw Listing
// =============================================================================

/// A listing exactly as it appears in a catalog document.
///
/// Numeric and date fields are kept as raw JSON values so that a present
/// but mistyped value (e.g. `"salePrice": "12.99"`) is reported instead
/// of being silently dropped.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawShoeListing {
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image_src: String,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub sale_price: Option<Value>,
    #[serde(default)]
    pub release_date: Option<Value>,
    #[serde(default)]
    pub num_of_colors: Option<Value>,
}

impl TryFrom<RawShoeListing> for ShoeListing {
    type Error = ValidationError;

    fn try_from(raw: RawShoeListing) -> Result<Self, Self::Error> {
        validate_slug(&raw.slug)?;
        validate_name(&raw.name)?;

        Ok(ShoeListing {
            price: parse_price(raw.price.as_ref())?,
            sale_price: parse_sale_price(raw.sale_price.as_ref())?,
            release_date: parse_release_date(raw.release_date.as_ref())?,
            num_of_colors: parse_num_of_colors(raw.num_of_colors.as_ref())?,
            slug: raw.slug.trim().to_string(),
            name: raw.name,
            image_src: raw.image_src,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
