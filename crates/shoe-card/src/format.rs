//! Text formatting helpers for card labels.

use shoe_catalog::Money;
use std::borrow::Cow;

/// Format a price for display.
///
/// The sale price slot is always rendered, hidden or not, so an absent
/// amount formats to an empty string instead of failing.
pub fn format_price(amount: Option<&Money>) -> String {
    amount.map(Money::display).unwrap_or_default()
}

/// `word` when `count` is one, otherwise `word` with an `s` appended.
pub fn pluralize(word: &str, count: u32) -> Cow<'_, str> {
    if count == 1 {
        Cow::Borrowed(word)
    } else {
        Cow::Owned(format!("{word}s"))
    }
}

/// Color count label, e.g. "1 Color" or "3 Colors".
pub fn color_label(count: u32) -> String {
    format!("{} {}", count, pluralize("Color", count))
}
