//! Shared fixtures for storefront integration tests.

#![allow(dead_code)]

use futures::executor::block_on;
use shopfront_commerce::prelude::*;
use shopfront_core::{Method, RequestContext, StoreConfig};
use shopfront_data::InMemoryCommerceApi;
use shopfront_observability::LogCapture;
use storefront::{RenderedPage, Storefront};

pub const PRODUCT_ID: i64 = 77;
pub const SIZE_OPTION: i64 = 134;

/// A tee with a size option (139, 140, 141) and a sale price.
pub fn tee() -> Product {
    let mut product = Product::new(ProductId::new(PRODUCT_ID), "Classic Tee");
    product.brand = Some("Northwind".into());
    product.description = "<p>Soft <strong>organic</strong> cotton.</p>".into();
    product.sku = Some("TEE-001".into());
    product.images = vec![
        Image::new("https://cdn.example.com/tee-front.jpg", "Front").as_default(),
        Image::new("https://cdn.example.com/tee-back.jpg", "Back"),
    ];
    product.prices = PriceSet {
        retail_price: Some(Money::usd(3000)),
        sale_price: Some(Money::usd(1800)),
        base_price: Some(Money::usd(2400)),
        ..Default::default()
    };
    product.product_options = vec![ProductOption::multiple_choice(
        OptionId::new(SIZE_OPTION),
        "Size",
        vec![
            OptionValue::new(ValueId::new(139), "Small"),
            OptionValue::new(ValueId::new(140), "Medium"),
            OptionValue::new(ValueId::new(141), "Large"),
        ],
    )];
    product.seo = SeoMetadata {
        page_title: "Classic Organic Tee".into(),
        meta_description: "An everyday tee.".into(),
        meta_keywords: vec!["tee".into(), "cotton".into()],
    };
    product
}

pub fn lamp() -> Product {
    let mut product = Product::new(ProductId::new(5), "Brass Lamp");
    product.prices.price = Some(Money::usd(4999));
    product
}

pub fn review(id: i64, title: &str, rating: u8) -> Review {
    Review {
        entity_id: ReviewId::new(id),
        title: title.into(),
        text: "Would buy again.".into(),
        rating,
        author_name: "Sam".into(),
        created_at: "2024-03-02T09:30:00Z".into(),
    }
}

pub fn about_page() -> WebPage {
    serde_json::from_value(serde_json::json!({
        "entityId": 2,
        "name": "About Us",
        "path": "/about/",
        "htmlBody": "<p>Family run since 1982.</p>",
        "type": "NormalPage",
        "seo": {"pageTitle": "", "metaDescription": "Our story", "metaKeywords": []}
    }))
    .unwrap()
}

pub fn contact_page() -> WebPage {
    serde_json::from_value(serde_json::json!({
        "entityId": 4,
        "name": "Contact Us",
        "path": "/contact-us/",
        "htmlBody": "<p>We read every message.</p>",
        "type": "ContactPage",
        "contactFields": ["fullName", "orderNumber"]
    }))
    .unwrap()
}

/// A catalog with the tee, the lamp, pages and reviews.
pub fn catalog() -> InMemoryCommerceApi {
    InMemoryCommerceApi::new()
        .with_product(tee())
        .with_product(lamp())
        .with_featured(&[ProductId::new(5)])
        .with_reviews(
            ProductId::new(PRODUCT_ID),
            ReviewSummary {
                average_rating: 4.5,
                number_of_reviews: 2,
            },
            vec![review(1, "Great fit", 5), review(2, "Shrank a bit", 4)],
        )
        .with_page(about_page())
        .with_page(contact_page())
}

pub fn storefront(api: &InMemoryCommerceApi) -> Storefront {
    Storefront::new(api.clone(), StoreConfig::default())
}

pub fn get(storefront: &Storefront, path: &str) -> RenderedPage {
    block_on(storefront.render(RequestContext::new(Method::Get, path))).unwrap()
}

pub fn post_form(storefront: &Storefront, path: &str, body: &str) -> RenderedPage {
    let ctx = RequestContext::new(Method::Post, path)
        .with_header("Content-Type", "application/x-www-form-urlencoded")
        .with_body(body);
    block_on(storefront.render(ctx)).unwrap()
}

pub fn captured(api: &InMemoryCommerceApi) -> (Storefront, LogCapture) {
    let capture = LogCapture::new();
    (storefront(api).with_log_capture(capture.clone()), capture)
}

/// Byte offset of `needle`, panicking with the body when absent.
pub fn position(body: &str, needle: &str) -> usize {
    body.find(needle)
        .unwrap_or_else(|| panic!("{:?} not found in:\n{}", needle, body))
}
