//! Product cards and card grids.

use shopfront_commerce::prelude::*;
use shopfront_streaming::escape_html;

use crate::sections::render_price_block;

/// Render a single product card.
pub fn render_product_card(card: &ProductCard) -> String {
    let href = escape_html(&card.href());
    let image = match &card.image {
        Some(image) => format!(
            r#"<img src="{}" alt="{}" loading="lazy">"#,
            escape_html(&image.url),
            escape_html(&image.alt_text)
        ),
        None => r#"<div class="card-image-placeholder"></div>"#.to_string(),
    };
    let brand = card
        .brand
        .as_deref()
        .map(|brand| format!(r#"<p class="card-brand">{}</p>"#, escape_html(brand)))
        .unwrap_or_default();

    format!(
        r#"<li class="product-card">
    <a href="{href}">{image}</a>
    {brand}
    <h3 class="card-title"><a href="{href}">{name}</a></h3>
    {price}
</li>"#,
        href = href,
        image = image,
        brand = brand,
        name = escape_html(&card.name),
        price = render_price_block(&card.prices)
    )
}

/// Render a titled grid of cards. Empty lists render nothing.
pub fn render_card_grid(title: &str, cards: &[ProductCard]) -> String {
    if cards.is_empty() {
        return String::new();
    }

    let items: String = cards.iter().map(render_product_card).collect();
    format!(
        r#"<section class="product-grid">
    <h2>{}</h2>
    <ul class="card-list">{}</ul>
</section>"#,
        escape_html(title),
        items
    )
}
