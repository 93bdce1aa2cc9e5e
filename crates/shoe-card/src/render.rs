//! Server-side HTML rendering for shoe cards.

use chrono::{DateTime, Utc};
use shoe_catalog::{parse_listing, CatalogError, ShoeRecord};

use crate::config::CardConfig;
use crate::error::CardError;
use crate::view::{CardView, JUST_RELEASED_TEXT, SALE_TEXT};

/// Render a single card.
pub fn render_card(view: &CardView, config: &CardConfig) -> String {
    let palette = &config.palette;
    let style = &view.style;

    format!(
        r#"<a class="shoe-card" href="{href}" data-variant="{variant}">
    <article>
        <div class="shoe-image">
            <img alt="" src="{image_src}">
            <div class="shoe-flag shoe-flag--just-released" style="{just_released_css}; background-color: {secondary}; color: {white}">{just_released_text}</div>
            <div class="shoe-flag shoe-flag--sale" style="{sale_flag_css}; background-color: {primary}; color: {white}">{sale_text}</div>
        </div>
        <div class="shoe-row">
            <h3 class="shoe-name" style="color: {gray_900}">{name}</h3>
            <span class="shoe-price" style="{price_css}">{price}</span>
        </div>
        <div class="shoe-row">
            <p class="shoe-colors" style="color: {gray_700}">{colors}</p>
            <span class="shoe-sale-price" style="{sale_price_css}; color: {primary}">{sale_price}</span>
        </div>
    </article>
</a>"#,
        href = html_escape(&view.href),
        variant = view.variant.as_str(),
        image_src = html_escape(&view.image_src),
        just_released_css = style.just_released_flag_css(),
        sale_flag_css = style.sale_flag_css(),
        just_released_text = JUST_RELEASED_TEXT,
        sale_text = SALE_TEXT,
        white = html_escape(&palette.white),
        primary = html_escape(&palette.primary),
        secondary = html_escape(&palette.secondary),
        gray_700 = html_escape(&palette.gray_700),
        gray_900 = html_escape(&palette.gray_900),
        name = html_escape(&view.name),
        price_css = html_escape(&style.price_css(palette)),
        price = html_escape(&view.price_label),
        colors = html_escape(&view.color_label),
        sale_price_css = style.sale_price_css(),
        sale_price = html_escape(&view.sale_price_label),
    )
}

/// Render a grid of cards.
///
/// Entries that failed to load become error placeholders; the rest of the
/// grid renders normally.
pub fn render_listing(
    records: &[Result<ShoeRecord, CatalogError>],
    now: DateTime<Utc>,
    config: &CardConfig,
) -> String {
    let cards: String = records
        .iter()
        .map(|record| {
            let card = match record {
                Ok(shoe) => CardView::build(shoe, now, config),
                Err(err) => Err(CardError::from(err.clone())),
            };
            match card {
                Ok(card) => render_card(&card, config),
                Err(err) => {
                    tracing::warn!(error = %err, "skipping shoe card");
                    render_card_error(&err.to_string())
                }
            }
        })
        .collect();

    format!(
        r#"<section class="shoe-grid" data-count="{}">
    {}
</section>"#,
        records.len(),
        cards
    )
}

/// Parse a JSON listing feed and render it as a grid.
///
/// Fails only when the feed itself is not a JSON array of objects.
pub fn render_listing_json(
    json: &str,
    now: DateTime<Utc>,
    config: &CardConfig,
) -> Result<String, CardError> {
    let records = parse_listing(json, config.currency)?;
    tracing::debug!(count = records.len(), "rendering shoe listing");
    Ok(render_listing(&records, now, config))
}

/// Render a placeholder for a card whose record could not be read.
pub fn render_card_error(message: &str) -> String {
    format!(
        r#"<article class="shoe-card shoe-card--error">
    <p class="error-message">{}</p>
</article>"#,
        html_escape(message)
    )
}

/// Render skeleton placeholder for a loading card.
pub fn render_card_skeleton() -> String {
    r#"<div class="shoe-card skeleton">
    <div class="skeleton-image"></div>
    <div class="skeleton-text"></div>
    <div class="skeleton-text short"></div>
</div>"#
        .to_string()
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
