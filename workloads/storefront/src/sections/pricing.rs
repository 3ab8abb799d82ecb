//! Price block renderer.

use shopfront_commerce::prelude::*;

fn msrp_line(msrp: Option<Money>) -> String {
    match msrp {
        Some(msrp) => format!(
            r#"<div class="price-msrp">MSRP: <s>{}</s></div>"#,
            msrp.display()
        ),
        None => String::new(),
    }
}

/// Render the price block for a price set, or nothing when no price is
/// populated.
pub fn render_price_block(prices: &PriceSet) -> String {
    let Some(display) = prices.resolve() else {
        return String::new();
    };

    let body = match display {
        PriceDisplay::Range { min, max } => format!(
            r#"<span class="price-range">{} – {}</span>"#,
            min.display(),
            max.display()
        ),
        PriceDisplay::Sale { msrp, was, now } => format!(
            r#"{msrp}<div class="price-main">
        <span class="price-was">Was: <s>{was}</s></span>
        <span class="price-now">Now: {now}</span>
    </div>"#,
            msrp = msrp_line(msrp),
            was = was.display(),
            now = now.display()
        ),
        PriceDisplay::Single { msrp, price } => format!(
            r#"{msrp}<div class="price-main"><span class="price-current">{price}</span></div>"#,
            msrp = msrp_line(msrp),
            price = price.display()
        ),
        PriceDisplay::MsrpOnly { msrp } => msrp_line(Some(msrp)),
    };

    format!(
        r#"<div class="price price--{mode}">
    {body}
</div>"#,
        mode = display.mode(),
        body = body
    )
}
