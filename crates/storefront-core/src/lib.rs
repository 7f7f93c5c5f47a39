//! # storefront-core: Pure Display Logic for the Storefront
//!
//! This crate decides *what* a storefront fragment shows. It contains the
//! price formatter, the pluralizer, the new-release check and the variant
//! classifier, plus the view models built from them. Markup and styling
//! belong to the UI layer.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    UI Layer (external)                          │   │
//! │  │         Header markup ──► ShoeCard markup ──► Flag badge        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ view models (JSON / TS bindings)       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  format   │  │  variant  │  │   card    │  │  header   │  │   │
//! │  │   │  price    │  │  classify │  │ ShoeCard  │  │  NavLink  │  │   │
//! │  │   │ pluralize │  │ is_new    │  │   Flag    │  │  promo    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SYSTEM CLOCK • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                ▲                                        │
//! │  ┌─────────────────────────────┴───────────────────────────────────┐   │
//! │  │               apps/cli (catalog file + system clock)            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`format`] - Currency formatting and pluralization
//! - [`variant`] - The on-sale / new-release / default classifier
//! - [`types`] - Listing input types
//! - [`catalog`] - JSON catalog parsing
//! - [`card`] - Product card view model
//! - [`header`] - Page header view model
//! - [`validation`] - Input validation at the parsing boundary
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **Injected Time**: "now" is a parameter or a [`Clock`], never `Utc::now()`
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use storefront_core::{classify, format_price, pluralize, Money, Variant};
//!
//! let now = Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap();
//! let released = Utc.with_ymd_and_hms(2024, 6, 20, 0, 0, 0).unwrap();
//!
//! assert_eq!(classify(Some(Money::from_cents(0)), released, now), Variant::OnSale);
//! assert_eq!(classify(None, released, now), Variant::NewRelease);
//! assert_eq!(format_price(2999), "$29.99");
//! assert_eq!(pluralize("Color", 4), "4 Colors");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod card;
pub mod catalog;
pub mod error;
pub mod format;
pub mod header;
pub mod money;
pub mod types;
pub mod validation;
pub mod variant;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use storefront_core::Money` instead of
// `use storefront_core::money::Money`

pub use card::{Flag, ShoeCard, Tone};
pub use error::{CoreError, CoreResult, ValidationError};
pub use format::{format_price, format_price_with, pluralize, CurrencyFormat, SymbolPosition};
pub use header::{Header, NavLink, SuperHeader};
pub use money::Money;
pub use types::*;
pub use variant::{classify, is_new_shoe, Clock, FixedClock, Variant, VariantClassifier};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Length of the new-release window in days.
///
/// ## Business Reason
/// Any shoe released in the last month is promoted with a `new-release`
/// badge, unless it is on sale.
pub const NEW_RELEASE_WINDOW_DAYS: i64 = 30;

/// Noun used for the color count on a product card.
pub const COLOR_NOUN: &str = "Color";

/// Order total (in cents) above which domestic shipping is free.
pub const FREE_SHIPPING_THRESHOLD_CENTS: i64 = 7500;
