//! Per-variant style directives.
//!
//! Each card element reads its look from CSS custom properties
//! (`--display`, `--text-color`, `--text-decoration`). The values come
//! from a fixed table keyed by [`Variant`].

use serde::{Deserialize, Serialize};

use crate::variant::Variant;

/// CSS `display` value for a toggled element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Display {
    Block,
    Inline,
    None,
}

impl Display {
    pub fn as_css(&self) -> &'static str {
        match self {
            Display::Block => "block",
            Display::Inline => "inline",
            Display::None => "none",
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, Display::None)
    }
}

/// CSS `text-decoration` value for the base price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextDecoration {
    Inherit,
    LineThrough,
}

impl TextDecoration {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextDecoration::Inherit => "inherit",
            TextDecoration::LineThrough => "line-through",
        }
    }
}

/// Named colors of the storefront palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteColor {
    White,
    Gray700,
    Gray900,
    Primary,
    Secondary,
}

/// CSS color values for each [`PaletteColor`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub white: String,
    pub gray_700: String,
    pub gray_900: String,
    pub primary: String,
    pub secondary: String,
}

impl Palette {
    /// Resolve a named color.
    pub fn resolve(&self, color: PaletteColor) -> &str {
        match color {
            PaletteColor::White => &self.white,
            PaletteColor::Gray700 => &self.gray_700,
            PaletteColor::Gray900 => &self.gray_900,
            PaletteColor::Primary => &self.primary,
            PaletteColor::Secondary => &self.secondary,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            white: "hsl(0deg 0% 100%)".to_string(),
            gray_700: "hsl(220deg 5% 40%)".to_string(),
            gray_900: "hsl(220deg 3% 20%)".to_string(),
            primary: "hsl(340deg 65% 47%)".to_string(),
            secondary: "hsl(240deg 60% 63%)".to_string(),
        }
    }
}

/// Color and decoration of the base price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceStyle {
    pub color: PaletteColor,
    pub decoration: TextDecoration,
}

/// The four independent style facets of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleDirective {
    /// "Just released!" flag.
    pub just_released_flag: Display,
    /// "Sale" flag.
    pub sale_flag: Display,
    /// Base price text.
    pub price: PriceStyle,
    /// Sale price text.
    pub sale_price: Display,
}

impl StyleDirective {
    /// Look up the directive for a variant.
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::NewRelease => Self {
                just_released_flag: Display::Block,
                sale_flag: Display::None,
                price: REGULAR_PRICE,
                sale_price: Display::None,
            },
            Variant::OnSale => Self {
                just_released_flag: Display::None,
                sale_flag: Display::Block,
                price: PriceStyle {
                    color: PaletteColor::Gray700,
                    decoration: TextDecoration::LineThrough,
                },
                sale_price: Display::Inline,
            },
            Variant::Default => Self {
                just_released_flag: Display::None,
                sale_flag: Display::None,
                price: REGULAR_PRICE,
                sale_price: Display::None,
            },
        }
    }

    /// Inline style for the "Just released!" flag.
    pub fn just_released_flag_css(&self) -> String {
        display_css(self.just_released_flag)
    }

    /// Inline style for the "Sale" flag.
    pub fn sale_flag_css(&self) -> String {
        display_css(self.sale_flag)
    }

    /// Inline style for the base price.
    pub fn price_css(&self, palette: &Palette) -> String {
        format!(
            "--text-color: {}; --text-decoration: {}",
            palette.resolve(self.price.color),
            self.price.decoration.as_css()
        )
    }

    /// Inline style for the sale price.
    pub fn sale_price_css(&self) -> String {
        display_css(self.sale_price)
    }
}

impl From<Variant> for StyleDirective {
    fn from(variant: Variant) -> Self {
        Self::for_variant(variant)
    }
}

const REGULAR_PRICE: PriceStyle = PriceStyle {
    color: PaletteColor::Gray900,
    decoration: TextDecoration::Inherit,
};

fn display_css(display: Display) -> String {
    format!("--display: {}", display.as_css())
}
