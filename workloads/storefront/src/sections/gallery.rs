//! Product gallery renderer.

use shopfront_commerce::prelude::*;
use shopfront_streaming::escape_html;

/// Render the gallery: reconciled images, default first.
pub fn render_gallery(product: &Product) -> String {
    let images = product.gallery_images();
    let ordered = gallery_order(&images);

    let Some((lead, rest)) = ordered.split_first() else {
        return format!(
            r#"<section class="product-gallery product-gallery--empty" data-section="gallery">
    <div class="gallery-placeholder" role="img" aria-label="{}"></div>
</section>"#,
            escape_html(&product.name)
        );
    };

    let thumbnails: String = rest
        .iter()
        .map(|image| {
            format!(
                r#"<li><img src="{}" alt="{}" loading="lazy"></li>"#,
                escape_html(&image.url),
                escape_html(&image.alt_text)
            )
        })
        .collect();

    let thumbnail_list = if thumbnails.is_empty() {
        String::new()
    } else {
        format!(r#"<ul class="gallery-thumbnails">{}</ul>"#, thumbnails)
    };

    format!(
        r#"<section class="product-gallery" data-section="gallery">
    <img class="gallery-main" src="{url}" alt="{alt}">
    {thumbnails}
</section>"#,
        url = escape_html(&lead.url),
        alt = escape_html(&lead.alt_text),
        thumbnails = thumbnail_list
    )
}
