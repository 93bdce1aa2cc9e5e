//! Card view model.

use chrono::{DateTime, Utc};
use serde::Serialize;
use shoe_catalog::ShoeRecord;

use crate::config::CardConfig;
use crate::error::CardError;
use crate::format::{color_label, format_price};
use crate::style::StyleDirective;
use crate::variant::Variant;

/// Text of the new-release flag.
pub const JUST_RELEASED_TEXT: &str = "Just released!";
/// Text of the sale flag.
pub const SALE_TEXT: &str = "Sale";

/// Everything a renderer needs to paint one card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub href: String,
    pub image_src: String,
    pub name: String,
    pub variant: Variant,
    pub style: StyleDirective,
    pub price_label: String,
    /// Empty when the shoe has no sale price.
    pub sale_price_label: String,
    pub color_label: String,
}

impl CardView {
    /// Build the view for `shoe` as of `now`.
    ///
    /// Fails only when `config` carries an unusable recency window.
    pub fn build(
        shoe: &ShoeRecord,
        now: DateTime<Utc>,
        config: &CardConfig,
    ) -> Result<Self, CardError> {
        let variant = Variant::for_shoe(shoe, now, &config.recency_window()?);

        Ok(Self {
            href: config.href_for(shoe.slug.as_str()),
            image_src: shoe.image_src.clone(),
            name: shoe.name.clone(),
            variant,
            style: StyleDirective::for_variant(variant),
            price_label: format_price(Some(&shoe.price)),
            sale_price_label: format_price(shoe.sale_price.as_ref()),
            color_label: color_label(shoe.num_of_colors),
        })
    }

    /// Build the view using the system clock.
    pub fn build_now(shoe: &ShoeRecord, config: &CardConfig) -> Result<Self, CardError> {
        Self::build(shoe, Utc::now(), config)
    }

    pub fn shows_just_released_flag(&self) -> bool {
        self.style.just_released_flag.is_visible()
    }

    pub fn shows_sale_flag(&self) -> bool {
        self.style.sale_flag.is_visible()
    }

    pub fn shows_sale_price(&self) -> bool {
        self.style.sale_price.is_visible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use shoe_catalog::{Currency, Money};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_view_for_sale_shoe() {
        let shoe = ShoeRecord::new(
            "react-infinity",
            "React Infinity Run",
            "/assets/react-infinity.jpg",
            Money::new(16000, Currency::USD),
            now() - Duration::days(400),
        )
        .with_sale_price(Money::new(13500, Currency::USD))
        .with_colors(5);

        let view = CardView::build(&shoe, now(), &CardConfig::default()).unwrap();
        assert_eq!(view.href, "/shoe/react-infinity");
        assert_eq!(view.variant, Variant::OnSale);
        assert_eq!(view.price_label, "$160.00");
        assert_eq!(view.sale_price_label, "$135.00");
        assert_eq!(view.color_label, "5 Colors");
        assert!(view.shows_sale_flag());
        assert!(view.shows_sale_price());
        assert!(!view.shows_just_released_flag());
    }

    #[test]
    fn test_view_without_sale_has_empty_sale_label() {
        let shoe = ShoeRecord::new(
            "joyride",
            "Joyride",
            "/assets/joyride.jpg",
            Money::new(18000, Currency::USD),
            now() - Duration::days(2),
        );

        let view = CardView::build(&shoe, now(), &CardConfig::default()).unwrap();
        assert_eq!(view.variant, Variant::NewRelease);
        assert_eq!(view.sale_price_label, "");
        assert_eq!(view.color_label, "1 Color");
        assert!(view.shows_just_released_flag());
    }

    #[test]
    fn test_unusable_window_is_an_error() {
        let shoe = ShoeRecord::new(
            "cortez",
            "Cortez",
            "/assets/cortez.jpg",
            Money::new(9000, Currency::USD),
            now(),
        );
        let config = CardConfig {
            recency_days: i64::MAX,
            ..CardConfig::default()
        };

        let err = CardView::build(&shoe, now(), &config).unwrap_err();
        assert!(matches!(err, CardError::Config(_)));
    }
}
