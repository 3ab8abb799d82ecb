//! Product page integration tests.

mod support;

use http::StatusCode;
use shopfront_commerce::prelude::*;
use shopfront_data::{DependencyTag, InMemoryCommerceApi};
use shopfront_observability::LogLevel;
use support::*;

#[test]
fn test_option_links_select_each_value() {
    let api = catalog();
    let page = get(&storefront(&api), "/product/77");

    assert_eq!(page.status, StatusCode::OK);
    for value in [139, 140, 141] {
        let href = format!("/product/77?134={}", value);
        assert!(page.body.contains(&format!(r#"href="{}""#, href)), "missing link for {}", value);
        assert!(page.body.contains(&format!(r#"data-href="{}""#, href)));
    }
    assert!(page.body.contains("window.location.assign(href)"));
}

#[test]
fn test_option_links_keep_other_parameters() {
    let api = catalog();
    let page = get(&storefront(&api), "/product/77?134=140&utm_source=mail");

    assert!(page.body.contains(r#"href="/product/77?134=139&amp;utm_source=mail""#));
    assert!(page
        .body
        .contains(r#"value="140" data-href="/product/77?134=140&amp;utm_source=mail" checked"#));
    assert_eq!(page.body.matches(r#" checked>"#).count(), 1);
}

#[test]
fn test_selection_fetches_variant() {
    let mut large = tee();
    large.sku = Some("TEE-001-L".into());
    let api = catalog().with_variant(
        ProductId::new(PRODUCT_ID),
        &[(OptionId::new(SIZE_OPTION), ValueId::new(141))],
        large,
    );

    let page = get(&storefront(&api), "/product/77?134=141");
    assert!(page.body.contains("TEE-001-L"));

    let base = get(&storefront(&api), "/product/77");
    assert!(base.body.contains("<dd>TEE-001</dd>"));
}

#[test]
fn test_garbage_selection_degrades_to_base_product() {
    let api = catalog();
    let page = get(&storefront(&api), "/product/77?134=large&abc=139");

    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Classic Tee"));
    assert!(!page.body.contains(" checked>"));
}

#[test]
fn test_missing_product_is_not_found() {
    let api = catalog();
    let page = get(&storefront(&api), "/product/999");

    assert_eq!(page.status, StatusCode::NOT_FOUND);
    assert!(page.body.contains("Page not found"));
    assert!(page.body.contains(r#"<meta name="robots" content="noindex">"#));
}

#[test]
fn test_non_numeric_product_id_is_not_found() {
    let api = catalog();
    let page = get(&storefront(&api), "/product/classic-tee");

    assert_eq!(page.status, StatusCode::NOT_FOUND);
    assert!(api.calls().is_empty());
}

#[test]
fn test_sale_price_block() {
    let api = catalog();
    let page = get(&storefront(&api), "/product/77");

    assert!(page.body.contains("MSRP: <s>$30.00</s>"));
    assert!(page.body.contains("Was: <s>$24.00</s>"));
    assert!(page.body.contains("Now: $18.00"));

    // Retail and base amounts only ever appear struck through.
    for struck in ["$30.00", "$24.00"] {
        assert_eq!(
            page.body.matches(struck).count(),
            page.body.matches(&format!("<s>{}</s>", struck)).count(),
            "{} shown unstruck",
            struck
        );
    }
    assert!(!page.body.contains(r#"<span class="price-now">Now: $30.00"#));
}

#[test]
fn test_head_uses_seo_metadata() {
    let api = catalog();
    let page = get(&storefront(&api), "/product/77");

    assert!(page.body.contains("<title>Classic Organic Tee | Shopfront</title>"));
    assert!(page
        .body
        .contains(r#"<meta name="description" content="An everyday tee.">"#));
    assert!(page
        .body
        .contains(r#"<meta name="keywords" content="tee, cotton">"#));
    assert!(page.body.contains(r#"<link rel="canonical" href="/product/77">"#));
    assert_eq!(page.header("content-type"), Some("text/html; charset=utf-8"));
    assert!(page.header("x-request-id").is_some());
}

#[test]
fn test_sections_stream_in_order() {
    let api = catalog();
    let page = get(&storefront(&api), "/product/77");
    let body = &page.body;

    let shell = position(body, "<main class=\"page page--product\">");
    let gallery = position(body, r#"<section class="product-gallery""#);
    let summary = position(body, r#"<section class="product-summary""#);
    let description = position(body, r#"<section class="product-description""#);
    let deferred = position(body, r#"<div class="deferred-sections">"#);
    let script = position(body, r#"const order = ["review-summary","reviews","featured"];"#);
    let footer = position(body, r#"<footer class="site-footer">"#);

    assert!(shell < gallery && gallery < summary && summary < description);
    assert!(description < deferred && deferred < script && script < footer);
    assert!(body.ends_with("</html>"));

    assert!(page.summary.section_order().starts_with("gallery,summary,description,details"));
    assert!(page.summary.time_to_shell.is_some());
}

#[test]
fn test_deferred_sections_render() {
    let api = catalog();
    let page = get(&storefront(&api), "/product/77");

    assert!(page.body.contains(r#"<div data-section="reviews">"#));
    assert!(page.body.contains("(2 reviews)"));
    assert!(page.body.contains("Great fit"));
    assert!(page.body.contains("You may also like"));
    assert!(page.body.contains("Brass Lamp"));

    let calls = api.calls();
    assert_eq!(calls[0], "product:77");
    assert!(calls.contains(&"review_summary:77".to_string()));
    assert!(calls.contains(&"reviews:77".to_string()));
    assert!(calls.contains(&"featured".to_string()));
}

#[test]
fn test_review_failure_renders_fallback() {
    let api = catalog().failing(DependencyTag::Reviews);
    let (storefront, capture) = captured(&api);
    let page = get(&storefront, "/product/77");

    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Reviews are unavailable right now."));
    assert!(!page.body.contains(r#"data-section="review-summary""#));
    assert!(page.body.contains("Brass Lamp"));

    let entry = capture.find("deferred section failed").unwrap();
    assert_eq!(entry.level, LogLevel::Warn);
    let summary = capture.find("request completed").unwrap();
    assert_eq!(summary.fields["status"], 200);
}

#[test]
fn test_catalog_failure_is_server_error() {
    let api = catalog().failing(DependencyTag::Catalog);
    let (storefront, capture) = captured(&api);
    let page = get(&storefront, "/product/77");

    assert_eq!(page.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(page.body.contains("Something went wrong"));
    assert!(!page.body.contains("catalog unavailable"));

    let failure = capture.find("page resolution failed").unwrap();
    assert_eq!(failure.level, LogLevel::Error);
    assert_eq!(capture.find("request completed").unwrap().level, LogLevel::Error);
}

#[test]
fn test_product_without_extras() {
    let api = InMemoryCommerceApi::new().with_product(Product::new(ProductId::new(3), "Plain"));
    let page = get(&storefront(&api), "/product/3");

    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("product-gallery--empty"));
    assert!(!page.body.contains(r#"<div class="price"#));
    assert!(!page.body.contains(r#"<form class="product-options""#));
    assert!(page.body.contains("No reviews yet"));
}
