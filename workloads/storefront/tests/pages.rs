//! Home, content, contact, search and error page integration tests.

mod support;

use futures::executor::block_on;
use http::StatusCode;
use shopfront_commerce::prelude::*;
use shopfront_core::{Method, PageError, RequestContext};
use shopfront_data::DependencyTag;
use support::*;

#[test]
fn test_home_lists_featured_products() {
    let api = catalog();
    let page = get(&storefront(&api), "/");

    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("<title>Shopfront</title>"));
    assert!(page.body.contains("Welcome to Shopfront"));
    assert!(page.body.contains("Featured products"));
    assert!(page.body.contains(r#"href="/product/5""#));
    assert!(page.body.contains("$49.99"));
    assert_eq!(api.calls(), vec!["featured".to_string()]);
}

#[test]
fn test_home_survives_featured_failure() {
    let api = catalog().failing(DependencyTag::Recommendations);
    let page = get(&storefront(&api), "/");

    assert_eq!(page.status, StatusCode::OK);
    assert!(!page.body.contains("Featured products"));
    assert!(!page.body.contains("deferred-sections\""));
    assert!(page.body.ends_with("</html>"));
}

#[test]
fn test_normal_content_page() {
    let api = catalog();
    let page = get(&storefront(&api), "/about/");

    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("<title>About Us | Shopfront</title>"));
    assert!(page.body.contains("<p>Family run since 1982.</p>"));
    assert!(!page.body.contains("<form method=\"post\""));
    assert_eq!(api.calls(), vec!["page:/about/".to_string()]);
}

#[test]
fn test_unknown_path_is_not_found() {
    let api = catalog();
    let page = get(&storefront(&api), "/no-such-page/");

    assert_eq!(page.status, StatusCode::NOT_FOUND);
    assert!(page.body.contains("Page not found"));
}

#[test]
fn test_contact_page_fetches_bot_verification() {
    let api = catalog().with_bot_verification(BotVerification {
        is_enabled: true,
        site_key: Some("site-key-9".into()),
    });
    let page = get(&storefront(&api), "/contact-us/");

    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains(r#"<form method="post" action="/contact-us/">"#));
    assert!(page.body.contains(r#"name="fullName""#));
    assert!(page.body.contains(r#"name="orderNumber""#));
    assert!(!page.body.contains(r#"name="phone""#));
    assert!(page.body.contains(r#"data-sitekey="site-key-9""#));
    assert_eq!(
        api.calls(),
        vec!["page:/contact-us/".to_string(), "bot_verification".to_string()]
    );
}

#[test]
fn test_bot_verification_failure_is_server_error() {
    let api = catalog().failing(DependencyTag::Settings);
    let page = get(&storefront(&api), "/contact-us/");

    assert_eq!(page.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(page.body.contains("Something went wrong"));
    assert!(!page.body.contains("<form method=\"post\""));
}

#[test]
fn test_contact_submission() {
    let api = catalog();
    let page = post_form(
        &storefront(&api),
        "/contact-us/",
        "email=sam%40example.com&comments=Where+is+my+order%3F&orderNumber=1001&phone=555",
    );

    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Thanks for reaching out."));

    let submissions = api.submissions();
    assert_eq!(submissions.len(), 1);
    let (page_id, submission) = &submissions[0];
    assert_eq!(*page_id, PageId::new(4));
    assert_eq!(submission.email, "sam@example.com");
    assert_eq!(submission.comments, "Where is my order?");
    assert_eq!(submission.order_number.as_deref(), Some("1001"));
    assert_eq!(submission.phone, None);
}

#[test]
fn test_invalid_contact_submission() {
    let api = catalog();
    let page = post_form(&storefront(&api), "/contact-us/", "email=sam&comments=&fullName=Sam");

    assert_eq!(page.status, StatusCode::BAD_REQUEST);
    assert!(page.body.contains("Enter a valid email address."));
    assert!(page.body.contains("Comments are required."));
    assert!(page.body.contains(r#"name="email" value="sam""#));
    assert!(page.body.contains(r#"name="fullName" value="Sam""#));
    assert!(api.submissions().is_empty());
}

#[test]
fn test_contact_submit_failure_is_server_error() {
    let api = catalog().failing(DependencyTag::Forms);
    let page = post_form(&storefront(&api), "/contact-us/", "email=a%40b.co&comments=Hi");

    assert_eq!(page.status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_post_to_normal_page_not_allowed() {
    let api = catalog();
    let page = post_form(&storefront(&api), "/about/", "email=a%40b.co&comments=Hi");

    assert_eq!(page.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(page.header("allow"), Some("GET, HEAD, POST"));
}

#[test]
fn test_unsupported_method() {
    let api = catalog();
    let ctx = RequestContext::new(Method::Delete, "/product/77");
    let page = block_on(storefront(&api).render(ctx)).unwrap();

    assert_eq!(page.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(page.header("allow"), Some("GET, HEAD"));
    assert!(api.calls().is_empty());
}

#[test]
fn test_search_results() {
    let api = catalog();
    let page = get(&storefront(&api), "/search?term=lamp");

    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains(r#"1 result for "lamp""#));
    assert!(page.body.contains("Brass Lamp"));
    assert!(page.body.contains(r#"value="lamp""#));
    assert_eq!(api.calls(), vec!["search:lamp".to_string()]);
}

#[test]
fn test_empty_search_makes_no_call() {
    let api = catalog();
    let page = get(&storefront(&api), "/search?term=++");

    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Enter a search term"));
    assert!(api.calls().is_empty());
}

#[test]
fn test_search_failure_is_server_error() {
    let api = catalog().failing(DependencyTag::Search);
    let page = get(&storefront(&api), "/search?term=tee");

    assert_eq!(page.status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_request_id_header_round_trip() {
    let api = catalog();
    let ctx = RequestContext::new(Method::Get, "/about/")
        .with_request_id(shopfront_core::RequestId::from_string("req-abc"));
    let page = block_on(storefront(&api).render(ctx)).unwrap();

    assert_eq!(page.header("x-request-id"), Some("req-abc"));
}

#[test]
fn test_unreadable_contact_body_is_bad_request() {
    let api = catalog();
    let (storefront, capture) = captured(&api);
    let ctx = RequestContext::new(Method::Post, "/contact-us/")
        .with_header("Content-Type", "application/x-www-form-urlencoded");

    let prepared = storefront.prepare_rejected(
        ctx,
        PageError::BadRequest("unreadable request body".into()),
    );
    assert_eq!(prepared.status(), StatusCode::BAD_REQUEST);

    let mut chunks: Vec<Vec<u8>> = Vec::new();
    let summary = block_on(storefront.stream(prepared, &mut chunks)).unwrap();
    let body = String::from_utf8(chunks.concat()).unwrap();

    assert_eq!(summary.status, 400);
    assert!(body.contains("We could not process that request."));
    assert!(!body.contains("Enter a valid email address."));
    assert!(api.calls().is_empty());
    assert!(api.submissions().is_empty());
    assert!(capture.find("page resolution failed").is_some());
}
