//! End-to-end: catalog document -> validated listings -> cards, with a fixed clock.

use chrono::{DateTime, Duration, TimeZone, Utc};
use storefront_core::catalog::parse_catalog;
use storefront_core::{
    format_price, pluralize, CurrencyFormat, FixedClock, ShoeCard, Tone, Variant,
    VariantClassifier,
};

const CATALOG: &str = r#"[
    {"slug": "tail-twisters", "name": "Tail-Twisters", "imageSrc": "/assets/tail-twisters.jpg",
     "price": 16500, "salePrice": 14000, "releaseDate": "2024-06-25", "numOfColors": 3},
    {"slug": "glide", "name": "Glide", "imageSrc": "/assets/glide.jpg",
     "price": 12000, "salePrice": null, "releaseDate": "2024-06-01T12:00:00Z", "numOfColors": 1},
    {"slug": "stride-run", "name": "Stride Run", "imageSrc": "/assets/stride-run.jpg",
     "price": 9999, "releaseDate": "2024-05-31T12:00:00Z", "numOfColors": 0},
    {"slug": "freebie", "name": "Freebie", "imageSrc": "/assets/freebie.jpg",
     "price": 5000, "salePrice": 0, "releaseDate": "2023-01-01", "numOfColors": 12}
]"#;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap()
}

#[test]
fn catalog_renders_one_badge_per_card() {
    let listings = parse_catalog(CATALOG).unwrap();
    let cards = ShoeCard::build_all(&listings, now(), &CurrencyFormat::usd());

    let variants: Vec<Variant> = cards.iter().map(|card| card.variant).collect();
    assert_eq!(
        variants,
        vec![
            // Recent and discounted: sale wins.
            Variant::OnSale,
            // 29 days old.
            Variant::NewRelease,
            // Exactly 30 days old.
            Variant::Default,
            // Zero sale price still counts.
            Variant::OnSale,
        ]
    );

    assert_eq!(cards[0].flag.as_ref().map(|f| f.tone), Some(Tone::Primary));
    assert_eq!(cards[1].flag.as_ref().map(|f| f.label.as_str()), Some("new-release"));
    assert!(cards[2].flag.is_none());
}

#[test]
fn catalog_labels() {
    let listings = parse_catalog(CATALOG).unwrap();
    let cards = ShoeCard::build_all(&listings, now(), &CurrencyFormat::usd());

    assert_eq!(cards[0].price_label, "$165.00");
    assert_eq!(cards[0].sale_price_label.as_deref(), Some("$140.00"));
    assert_eq!(cards[1].colors_label, "1 Color");
    assert_eq!(cards[2].colors_label, "0 Colors");
    assert_eq!(cards[2].price_label, format_price(9999));
    assert_eq!(cards[3].colors_label, pluralize("Color", 12));
}

#[test]
fn same_now_same_cards() {
    let listings = parse_catalog(CATALOG).unwrap();
    let first = ShoeCard::build_all(&listings, now(), &CurrencyFormat::usd());
    let second = ShoeCard::build_all(&listings, now(), &CurrencyFormat::usd());
    assert_eq!(first, second);
}

#[test]
fn moving_now_expires_new_release() {
    let listings = parse_catalog(CATALOG).unwrap();
    let glide = &listings[1];

    let today = VariantClassifier::new(FixedClock(now()));
    let tomorrow = VariantClassifier::new(FixedClock(now() + Duration::days(1)));

    assert_eq!(today.classify(glide.sale_price, glide.release_date), Variant::NewRelease);
    assert_eq!(tomorrow.classify(glide.sale_price, glide.release_date), Variant::Default);
}
