//! Card variant classification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shoe_catalog::{Money, ShoeRecord};
use std::fmt;

use crate::recency::RecencyWindow;

/// The three mutually exclusive presentations of a shoe card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Released inside the recency window.
    NewRelease,
    /// Has a sale price.
    OnSale,
    /// Neither.
    Default,
}

impl Variant {
    /// All variants, in declaration order.
    pub const ALL: [Variant; 3] = [Variant::NewRelease, Variant::OnSale, Variant::Default];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::NewRelease => "new-release",
            Variant::OnSale => "on-sale",
            Variant::Default => "default",
        }
    }

    /// Classify a record at the evaluation instant `now`.
    pub fn for_shoe(shoe: &ShoeRecord, now: DateTime<Utc>, window: &RecencyWindow) -> Self {
        let variant = classify(shoe.sale_price.as_ref(), shoe.release_date, now, window);
        tracing::debug!(slug = %shoe.slug, variant = variant.as_str(), "classified shoe card");
        variant
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the card variant.
///
/// A sale price wins over a recent release: a shoe that is both new and
/// discounted is shown as on sale. Any sale price counts, zero included.
pub fn classify(
    sale_price: Option<&Money>,
    release_date: DateTime<Utc>,
    now: DateTime<Utc>,
    window: &RecencyWindow,
) -> Variant {
    if sale_price.is_some() {
        Variant::OnSale
    } else if window.is_new(release_date, now) {
        Variant::NewRelease
    } else {
        Variant::Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use shoe_catalog::Currency;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    #[test]
    fn test_sale_beats_new_release() {
        let window = RecencyWindow::default();
        let yesterday = now() - Duration::days(1);
        assert_eq!(
            classify(Some(&usd(5000)), yesterday, now(), &window),
            Variant::OnSale
        );
    }

    #[test]
    fn test_zero_sale_price_is_on_sale() {
        let window = RecencyWindow::default();
        let old = now() - Duration::days(3650);
        assert_eq!(classify(Some(&usd(0)), old, now(), &window), Variant::OnSale);
    }

    #[test]
    fn test_recent_without_sale_is_new_release() {
        let window = RecencyWindow::default();
        assert_eq!(
            classify(None, now() - Duration::days(5), now(), &window),
            Variant::NewRelease
        );
    }

    #[test]
    fn test_boundary_is_default() {
        let window = RecencyWindow::default();
        assert_eq!(
            classify(None, now() - Duration::days(30), now(), &window),
            Variant::Default
        );
    }

    #[test]
    fn test_variant_tags() {
        for variant in Variant::ALL {
            let tag = serde_json::to_string(&variant).unwrap();
            assert_eq!(tag, format!("\"{}\"", variant.as_str()));
        }
        assert_eq!(Variant::OnSale.to_string(), "on-sale");
        assert!(serde_json::from_str::<Variant>("\"clearance\"").is_err());
    }
}
