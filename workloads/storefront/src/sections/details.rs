//! Summary, description and details renderers.

use shopfront_commerce::prelude::*;
use shopfront_streaming::escape_html;

use crate::page::ProductView;
use crate::sections::{render_options, render_price_block};

/// Render the product summary: brand, name, price block and option pickers.
pub fn render_summary(view: &ProductView) -> String {
    let product = &view.product;
    let brand = product
        .brand
        .as_deref()
        .map(|brand| format!(r#"<p class="product-brand">{}</p>"#, escape_html(brand)))
        .unwrap_or_default();

    format!(
        r#"<section class="product-summary" data-section="summary">
    {brand}
    <h1 class="product-title">{name}</h1>
    {price}
    {options}
</section>"#,
        brand = brand,
        name = escape_html(&product.name),
        price = render_price_block(&product.prices),
        options = render_options(view)
    )
}

/// Render the rich text description. The body is merchant HTML and is
/// passed through unescaped.
pub fn render_description(product: &Product) -> String {
    if product.description.trim().is_empty() {
        return String::new();
    }

    format!(
        r#"<section class="product-description" data-section="description">
    <h2>Description</h2>
    <div class="rich-text">{}</div>
</section>"#,
        product.description
    )
}

/// Render the details table.
pub fn render_details(product: &Product) -> String {
    if !product.has_details() {
        return String::new();
    }

    let mut rows: Vec<(String, String)> = Vec::new();
    if let Some(sku) = &product.sku {
        rows.push(("SKU".into(), sku.clone()));
    }
    if let Some(upc) = &product.upc {
        rows.push(("UPC".into(), upc.clone()));
    }
    if let Some(condition) = &product.condition {
        rows.push(("Condition".into(), condition.clone()));
    }
    if let Some(weight) = &product.weight {
        rows.push(("Weight".into(), weight.display()));
    }
    if let Some(min) = product.min_purchase_quantity {
        rows.push(("Minimum purchase".into(), min.to_string()));
    }
    if let Some(max) = product.max_purchase_quantity {
        rows.push(("Maximum purchase".into(), max.to_string()));
    }
    for field in &product.custom_fields {
        rows.push((field.name.clone(), field.value.clone()));
    }

    let rows: String = rows
        .iter()
        .map(|(name, value)| {
            format!(
                "<dt>{}</dt><dd>{}</dd>",
                escape_html(name),
                escape_html(value)
            )
        })
        .collect();

    format!(
        r#"<section class="product-details" data-section="details">
    <h2>Details</h2>
    <dl>{}</dl>
</section>"#,
        rows
    )
}
