//! # Variant Classifier
//!
//! Decides which badge a product card carries.
//!
//! ## Decision Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  classify(sale_price, release_date, now)                               │
//! │       │                                                                 │
//! │       ├── sale_price is Some(_)?  ──────────────► OnSale               │
//! │       │      (zero and negative amounts included)                      │
//! │       │                                                                 │
//! │       ├── is_new_shoe(release_date, now)? ──────► NewRelease           │
//! │       │                                                                 │
//! │       └── otherwise ────────────────────────────► Default              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A shoe can be both discounted and recently released. Sale always wins,
//! and the card shows exactly one badge.
//!
//! ## New-Release Window
//! `now - release_date < 30 days`. The boundary is exclusive: a shoe
//! released exactly 30 days before `now` is no longer new. A release date
//! after `now` (a pre-release listing) counts as new.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;
use crate::NEW_RELEASE_WINDOW_DAYS;

// =============================================================================
// Variant
// =============================================================================

/// Mutually exclusive display category of a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Has a sale price. Takes precedence over everything else.
    OnSale,
    /// Released within the new-release window.
    NewRelease,
    /// No badge.
    Default,
}

impl Variant {
    /// The variant's display text, also used as the badge label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Variant::OnSale => "on-sale",
            Variant::NewRelease => "new-release",
            Variant::Default => "default",
        }
    }
}

impl Default for Variant {
    fn default() -> Self {
        Variant::Default
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Time Source
// =============================================================================

/// Source of the evaluation instant.
///
/// The core never reads the system clock itself. Binaries provide a
/// wall-clock implementation; tests use [`FixedClock`].
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

// =============================================================================
// Rules
// =============================================================================

/// Returns true if `release_date` falls inside the new-release window
/// ending at `now`.
///
/// ## Example
/// ```rust
/// use chrono::{Duration, TimeZone, Utc};
/// use storefront_core::is_new_shoe;
///
/// let now = Utc.with_ymd_and_hms(2024, 6, 30, 0, 0, 0).unwrap();
/// assert!(is_new_shoe(now - Duration::days(29), now));
/// assert!(!is_new_shoe(now - Duration::days(30), now));
/// ```
pub fn is_new_shoe(release_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now.signed_duration_since(release_date) < Duration::days(NEW_RELEASE_WINDOW_DAYS)
}

/// Picks the card variant for a listing, evaluated at `now`.
///
/// Any present sale price means `OnSale`, including zero and negative
/// amounts. No range check is applied here.
///
/// ## Example
/// ```rust
/// use chrono::{Duration, TimeZone, Utc};
/// use storefront_core::{classify, Money, Variant};
///
/// let now = Utc.with_ymd_and_hms(2024, 6, 30, 0, 0, 0).unwrap();
/// let fresh = now - Duration::days(3);
///
/// assert_eq!(classify(Some(Money::from_cents(9999)), fresh, now), Variant::OnSale);
/// assert_eq!(classify(None, fresh, now), Variant::NewRelease);
/// assert_eq!(classify(None, now - Duration::days(90), now), Variant::Default);
/// ```
pub fn classify(
    sale_price: Option<Money>,
    release_date: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Variant {
    if sale_price.is_some() {
        Variant::OnSale
    } else if is_new_shoe(release_date, now) {
        Variant::NewRelease
    } else {
        Variant::Default
    }
}

// =============================================================================
// Classifier with an injected clock
// =============================================================================

/// [`classify`] bound to a time source.
///
/// Reads the clock once per call; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct VariantClassifier<C> {
    clock: C,
}

impl<C: Clock> VariantClassifier<C> {
    pub fn new(clock: C) -> Self {
        VariantClassifier { clock }
    }

    pub fn classify(&self, sale_price: Option<Money>, release_date: DateTime<Utc>) -> Variant {
        classify(sale_price, release_date, self.clock.now())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::cell::Cell;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap()
    }

    fn days_ago(days: i64) -> DateTime<Utc> {
        now() - Duration::days(days)
    }

    #[test]
    fn test_any_sale_price_is_on_sale() {
        for cents in [0, -1, -5000, 1, 2999, i64::MAX] {
            for release in [days_ago(0), days_ago(29), days_ago(30), days_ago(400)] {
                assert_eq!(
                    classify(Some(Money::from_cents(cents)), release, now()),
                    Variant::OnSale,
                    "sale price {cents} released {release}"
                );
            }
        }
    }

    #[test]
    fn test_recent_release_without_sale() {
        assert_eq!(classify(None, days_ago(0), now()), Variant::NewRelease);
        assert_eq!(classify(None, days_ago(29), now()), Variant::NewRelease);
    }

    #[test]
    fn test_old_release_without_sale() {
        assert_eq!(classify(None, days_ago(31), now()), Variant::Default);
        assert_eq!(classify(None, days_ago(365), now()), Variant::Default);
    }

    /// Exactly 30 days is outside the window.
    #[test]
    fn test_window_boundary_is_exclusive() {
        assert_eq!(classify(None, days_ago(30), now()), Variant::Default);
        assert!(!is_new_shoe(days_ago(30), now()));

        let just_inside = days_ago(30) + Duration::seconds(1);
        assert!(is_new_shoe(just_inside, now()));
        assert_eq!(classify(None, just_inside, now()), Variant::NewRelease);
    }

    #[test]
    fn test_future_release_counts_as_new() {
        let upcoming = now() + Duration::days(7);
        assert!(is_new_shoe(upcoming, now()));
        assert_eq!(classify(None, upcoming, now()), Variant::NewRelease);
    }

    #[test]
    fn test_result_depends_on_now() {
        let release = days_ago(20);
        assert_eq!(classify(None, release, now()), Variant::NewRelease);
        assert_eq!(classify(None, release, now() + Duration::days(15)), Variant::Default);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let release = days_ago(10);
        assert_eq!(classify(None, release, now()), classify(None, release, now()));
    }

    #[test]
    fn test_variant_labels() {
        assert_eq!(Variant::OnSale.to_string(), "on-sale");
        assert_eq!(Variant::NewRelease.to_string(), "new-release");
        assert_eq!(Variant::Default.to_string(), "default");

        let json = serde_json::to_string(&Variant::NewRelease).unwrap();
        assert_eq!(json, "\"new-release\"");
    }

    #[test]
    fn test_classifier_with_fixed_clock() {
        let classifier = VariantClassifier::new(FixedClock(now()));
        assert_eq!(classifier.classify(None, days_ago(5)), Variant::NewRelease);
        assert_eq!(classifier.classify(Some(Money::zero()), days_ago(5)), Variant::OnSale);
        assert_eq!(classifier.classify(None, days_ago(45)), Variant::Default);
    }

    /// A clock that advances one day per read.
    struct SteppingClock {
        current: Cell<DateTime<Utc>>,
    }

    impl Clock for SteppingClock {
        fn now(&self) -> DateTime<Utc> {
            let value = self.current.get();
            self.current.set(value + Duration::days(1));
            value
        }
    }

    #[test]
    fn test_classifier_rereads_clock_every_call() {
        let release = days_ago(29);
        let clock = SteppingClock {
            current: Cell::new(now()),
        };
        let classifier = VariantClassifier::new(&clock);

        assert_eq!(classifier.classify(None, release), Variant::NewRelease);
        assert_eq!(classifier.classify(None, release), Variant::Default);
    }
}
