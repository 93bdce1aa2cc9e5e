//! The shoe record rendered by one card.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::slug::Slug;

/// A shoe in a listing.
///
/// Records are read-only for the duration of a render; everything shown on
/// the card is derived from these fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoeRecord {
    /// URL slug, used for the card's link target.
    pub slug: Slug,
    /// Display name.
    pub name: String,
    /// Image reference, passed through untouched.
    pub image_src: String,
    /// Base price.
    pub price: Money,
    /// Discounted price, present only when the shoe is on sale.
    #[serde(default)]
    pub sale_price: Option<Money>,
    /// First availability.
    pub release_date: DateTime<Utc>,
    /// Number of color options.
    pub num_of_colors: u32,
}

impl ShoeRecord {
    /// Create a full-price record with a single color.
    pub fn new(
        slug: impl Into<Slug>,
        name: impl Into<String>,
        image_src: impl Into<String>,
        price: Money,
        release_date: DateTime<Utc>,
    ) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            image_src: image_src.into(),
            price,
            sale_price: None,
            release_date,
            num_of_colors: 1,
        }
    }

    /// Set the sale price.
    pub fn with_sale_price(mut self, sale_price: Money) -> Self {
        self.sale_price = Some(sale_price);
        self
    }

    /// Set the number of color options.
    pub fn with_colors(mut self, num_of_colors: u32) -> Self {
        self.num_of_colors = num_of_colors;
        self
    }
}
