//! Leptos component for hydrated storefronts.

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use shoe_catalog::ShoeRecord;

use crate::config::CardConfig;
use crate::view::{CardView, JUST_RELEASED_TEXT, SALE_TEXT};

/// A shoe card. Same markup as [`crate::render::render_card`].
#[component]
pub fn ShoeCard(
    shoe: ShoeRecord,
    now: DateTime<Utc>,
    #[prop(optional)] config: Option<CardConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let card = match CardView::build(&shoe, now, &config) {
        Ok(card) => card,
        Err(err) => {
            tracing::warn!(slug = %shoe.slug, error = %err, "skipping shoe card");
            return view! {
                <article class="shoe-card shoe-card--error">
                    <p class="error-message">{err.to_string()}</p>
                </article>
            }
            .into_any();
        }
    };
    let palette = &config.palette;
    let style = card.style;

    let just_released_style = format!(
        "{}; background-color: {}; color: {}",
        style.just_released_flag_css(),
        palette.secondary,
        palette.white
    );
    let sale_flag_style = format!(
        "{}; background-color: {}; color: {}",
        style.sale_flag_css(),
        palette.primary,
        palette.white
    );
    let name_style = format!("color: {}", palette.gray_900);
    let price_style = style.price_css(palette);
    let colors_style = format!("color: {}", palette.gray_700);
    let sale_price_style = format!("{}; color: {}", style.sale_price_css(), palette.primary);

    view! {
        <a class="shoe-card" href=card.href data-variant=card.variant.as_str()>
            <article>
                <div class="shoe-image">
                    <img alt="" src=card.image_src/>
                    <div class="shoe-flag shoe-flag--just-released" style=just_released_style>
                        {JUST_RELEASED_TEXT}
                    </div>
                    <div class="shoe-flag shoe-flag--sale" style=sale_flag_style>
                        {SALE_TEXT}
                    </div>
                </div>
                <div class="shoe-row">
                    <h3 class="shoe-name" style=name_style>{card.name}</h3>
                    <span class="shoe-price" style=price_style>{card.price_label}</span>
                </div>
                <div class="shoe-row">
                    <p class="shoe-colors" style=colors_style>{card.color_label}</p>
                    <span class="shoe-sale-price" style=sale_price_style>
                        {card.sale_price_label}
                    </span>
                </div>
            </article>
        </a>
    }
    .into_any()
}
