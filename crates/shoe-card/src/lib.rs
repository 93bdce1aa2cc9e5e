//! Shoe listing cards.
//!
//! A card shows one of three variants, picked from the shoe's pricing and
//! release date:
//!
//! - **on-sale**: the shoe has a sale price (wins over new-release)
//! - **new-release**: released within the recency window (30 days by default)
//! - **default**: everything else
//!
//! The variant selects a [`StyleDirective`] that toggles the flags and the
//! sale price and strikes through the base price. [`CardView`] gathers the
//! variant, styles and formatted labels; [`render_card`] turns it into HTML.
//! With the `leptos` feature, [`component::ShoeCard`] renders the same
//! markup as a Leptos component.
//!
//! # Example
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use shoe_card::prelude::*;
//!
//! let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
//! let shoe = ShoeRecord::new(
//!     "tree-runner",
//!     "Tree Runner",
//!     "/assets/tree-runner.jpg",
//!     Money::new(9800, Currency::USD),
//!     now - Duration::days(5),
//! );
//!
//! let config = CardConfig::default();
//! let card = CardView::build(&shoe, now, &config).unwrap();
//! assert_eq!(card.variant, Variant::NewRelease);
//! assert!(render_card(&card, &config).contains("Just released!"));
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod recency;
pub mod render;
pub mod style;
pub mod variant;
pub mod view;

#[cfg(feature = "leptos")]
pub mod component;

pub use config::CardConfig;
pub use error::CardError;
pub use format::{color_label, format_price, pluralize};
pub use recency::{is_new_shoe, RecencyWindow};
pub use render::{
    render_card, render_card_error, render_card_skeleton, render_listing, render_listing_json,
};
pub use style::{Display, Palette, PaletteColor, PriceStyle, StyleDirective, TextDecoration};
pub use variant::{classify, Variant};
pub use view::CardView;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::CardConfig;
    pub use crate::error::CardError;
    pub use crate::recency::RecencyWindow;
    pub use crate::render::{render_card, render_listing, render_listing_json};
    pub use crate::style::{Display, Palette, StyleDirective};
    pub use crate::variant::{classify, Variant};
    pub use crate::view::CardView;

    pub use shoe_catalog::prelude::*;

    #[cfg(feature = "leptos")]
    pub use crate::component::ShoeCard;
}
