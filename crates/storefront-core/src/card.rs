//! # Product Card
//!
//! The view model behind a shoe card. Every decision the card markup needs
//! is made here; the UI only places strings.
//!
//! ## Card Anatomy
//! ```text
//! ┌──────────────────────────────┐
//! │ ┌──────────────────────┐ ┌───┴──────┐
//! │ │                      │ │  flag    │  ← Some only for on-sale / new-release
//! │ │       image_src      │ └───┬──────┘
//! │ └──────────────────────┘     │
//! │  name            price_label │  ← struck through when on sale
//! │  colors_label sale_price_lbl │  ← only when a sale price exists
//! └──────────────────────────────┘
//!            href = /shoe/{slug}
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;

use crate::format::{pluralize, CurrencyFormat};
use crate::types::ShoeListing;
use crate::variant::Variant;
use crate::COLOR_NOUN;

// =============================================================================
// Flag
// =============================================================================

/// Theme color of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Sale color.
    Primary,
    /// New-release color; also used for the emphasized nav link.
    Secondary,
}

/// The corner badge on a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Flag {
    pub label: String,
    pub tone: Tone,
}

impl Flag {
    /// Badge for a variant. `Default` has none.
    pub fn for_variant(variant: Variant) -> Option<Flag> {
        let tone = match variant {
            Variant::OnSale => Tone::Primary,
            Variant::NewRelease => Tone::Secondary,
            Variant::Default => return None,
        };

        Some(Flag {
            label: variant.as_str().to_string(),
            tone,
        })
    }
}

// =============================================================================
// Shoe Card
// =============================================================================

/// Everything a product card renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShoeCard {
    pub slug: String,
    pub href: String,
    pub name: String,
    pub image_src: String,
    pub variant: Variant,
    pub price_label: String,
    pub price_struck_through: bool,
    pub sale_price_label: Option<String>,
    pub colors_label: String,
    pub flag: Option<Flag>,
}

impl ShoeCard {
    /// Builds the card for one listing, evaluated at `now`.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::{Duration, TimeZone, Utc};
    /// use storefront_core::{CurrencyFormat, Money, ShoeCard, ShoeListing, Variant};
    ///
    /// let now = Utc.with_ymd_and_hms(2024, 6, 30, 0, 0, 0).unwrap();
    /// let listing = ShoeListing {
    ///     slug: "tail-twisters".into(),
    ///     name: "Tail-Twisters".into(),
    ///     image_src: "/assets/tail-twisters.jpg".into(),
    ///     price: Money::from_cents(16500),
    ///     sale_price: Some(Money::from_cents(14000)),
    ///     release_date: now - Duration::days(3),
    ///     num_of_colors: 3,
    /// };
    ///
    /// let card = ShoeCard::build(&listing, now, &CurrencyFormat::usd());
    /// assert_eq!(card.variant, Variant::OnSale);
    /// assert_eq!(card.price_label, "$165.00");
    /// assert_eq!(card.sale_price_label.as_deref(), Some("$140.00"));
    /// assert_eq!(card.colors_label, "3 Colors");
    /// ```
    pub fn build(listing: &ShoeListing, now: DateTime<Utc>, currency: &CurrencyFormat) -> ShoeCard {
        let variant = listing.variant(now);

        ShoeCard {
            slug: listing.slug.clone(),
            href: listing.href(),
            name: listing.name.clone(),
            image_src: listing.image_src.clone(),
            variant,
            price_label: currency.format(listing.price),
            price_struck_through: variant == Variant::OnSale,
            sale_price_label: listing.sale_price.map(|sale| currency.format(sale)),
            colors_label: pluralize(COLOR_NOUN, i64::from(listing.num_of_colors)),
            flag: Flag::for_variant(variant),
        }
    }

    /// Builds cards for a whole catalog against one shared `now`, so every
    /// card in a render pass agrees on what "new" means.
    pub fn build_all(
        listings: &[ShoeListing],
        now: DateTime<Utc>,
        currency: &CurrencyFormat,
    ) -> Vec<ShoeCard> {
        listings
            .iter()
            .map(|listing| ShoeCard::build(listing, now, currency))
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap()
    }

    fn listing(sale_price: Option<i64>, released_days_ago: i64, colors: u32) -> ShoeListing {
        ShoeListing {
            slug: "tail-twisters".to_string(),
            name: "Tail-Twisters".to_string(),
            image_src: "/assets/tail-twisters.jpg".to_string(),
            price: Money::from_cents(16500),
            sale_price: sale_price.map(Money::from_cents),
            release_date: now() - Duration::days(released_days_ago),
            num_of_colors: colors,
        }
    }

    #[test]
    fn test_on_sale_card() {
        let card = ShoeCard::build(&listing(Some(14000), 2, 3), now(), &CurrencyFormat::usd());

        assert_eq!(card.variant, Variant::OnSale);
        assert!(card.price_struck_through);
        assert_eq!(card.price_label, "$165.00");
        assert_eq!(card.sale_price_label.as_deref(), Some("$140.00"));
        assert_eq!(
            card.flag,
            Some(Flag {
                label: "on-sale".to_string(),
                tone: Tone::Primary
            })
        );
    }

    /// A zero sale price is still a sale: badge, strike-through and "$0.00".
    #[test]
    fn test_zero_sale_price_card() {
        let card = ShoeCard::build(&listing(Some(0), 200, 1), now(), &CurrencyFormat::usd());

        assert_eq!(card.variant, Variant::OnSale);
        assert!(card.price_struck_through);
        assert_eq!(card.sale_price_label.as_deref(), Some("$0.00"));
    }

    #[test]
    fn test_new_release_card() {
        let card = ShoeCard::build(&listing(None, 29, 1), now(), &CurrencyFormat::usd());

        assert_eq!(card.variant, Variant::NewRelease);
        assert!(!card.price_struck_through);
        assert_eq!(card.sale_price_label, None);
        assert_eq!(card.colors_label, "1 Color");
        assert_eq!(card.flag.map(|f| f.tone), Some(Tone::Secondary));
    }

    #[test]
    fn test_default_card_has_no_flag() {
        let card = ShoeCard::build(&listing(None, 30, 0), now(), &CurrencyFormat::usd());

        assert_eq!(card.variant, Variant::Default);
        assert_eq!(card.flag, None);
        assert_eq!(card.colors_label, "0 Colors");
        assert_eq!(card.href, "/shoe/tail-twisters");
    }

    #[test]
    fn test_card_uses_configured_currency() {
        let card = ShoeCard::build(&listing(Some(14000), 2, 3), now(), &CurrencyFormat::eur());
        assert_eq!(card.price_label, "165,00\u{a0}€");
        assert_eq!(card.sale_price_label.as_deref(), Some("140,00\u{a0}€"));
    }

    #[test]
    fn test_build_all_shares_now() {
        let listings = vec![listing(None, 1, 2), listing(None, 60, 2), listing(Some(100), 60, 2)];
        let cards = ShoeCard::build_all(&listings, now(), &CurrencyFormat::usd());

        let variants: Vec<Variant> = cards.iter().map(|c| c.variant).collect();
        assert_eq!(variants, vec![Variant::NewRelease, Variant::Default, Variant::OnSale]);
    }

    #[test]
    fn test_card_serializes_camel_case() {
        let card = ShoeCard::build(&listing(None, 1, 2), now(), &CurrencyFormat::usd());
        let json = serde_json::to_value(&card).unwrap();

        assert_eq!(json["priceLabel"], "$165.00");
        assert_eq!(json["variant"], "new-release");
        assert_eq!(json["flag"]["tone"], "secondary");
        assert!(json["salePriceLabel"].is_null());
    }
}
