//! # Page Header
//!
//! Two visual bars grouped as one semantic header:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │ SuperHeader: "Free shipping on domestic orders over $75.00!"            │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │ [logo]   SALE  NEW RELEASES  MEN  WOMEN  KIDS  COLLECTIONS              │
//! │          ^^^^ emphasized                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The links are static data. Routing belongs to the UI layer.

use serde::Serialize;
use ts_rs::TS;

use crate::card::Tone;
use crate::format::CurrencyFormat;
use crate::money::Money;
use crate::FREE_SHIPPING_THRESHOLD_CENTS;

/// `(label, href)` pairs of the main navigation, in display order.
const MAIN_NAV: [(&str, &str); 6] = [
    ("Sale", "/sale"),
    ("New Releases", "/new"),
    ("Men", "/men"),
    ("Women", "/women"),
    ("Kids", "/kids"),
    ("Collections", "/collections"),
];

/// One entry of the main navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    /// Highlight color, set on the first link only.
    pub tone: Option<Tone>,
}

/// The promotional bar above the main header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct SuperHeader {
    pub message: String,
}

/// The complete page header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub super_header: SuperHeader,
    pub nav: Vec<NavLink>,
}

impl Header {
    /// The storefront header with prices in `currency`.
    pub fn storefront(currency: &CurrencyFormat) -> Header {
        let threshold = currency.format(Money::from_cents(FREE_SHIPPING_THRESHOLD_CENTS));

        Header {
            super_header: SuperHeader {
                message: format!("Free shipping on domestic orders over {threshold}!"),
            },
            nav: main_nav(),
        }
    }
}

/// The main navigation links, first one emphasized.
pub fn main_nav() -> Vec<NavLink> {
    MAIN_NAV
        .iter()
        .enumerate()
        .map(|(i, (label, href))| NavLink {
            label: label.to_string(),
            href: href.to_string(),
            tone: (i == 0).then_some(Tone::Secondary),
        })
        .collect()
}
