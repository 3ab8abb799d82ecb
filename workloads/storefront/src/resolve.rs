//! Page resolver: route plus critical fetches.
//!
//! Everything here runs before the status line is chosen. Missing products
//! and pages become `NotFound`, failed critical fetches become `Upstream`.
//! Deferred data (reviews, featured products) is not touched here.

use shopfront_commerce::content::CAPTCHA_FIELD;
use shopfront_commerce::prelude::*;
use shopfront_core::{Method, PageError, RequestContext, StoreSettings};
use shopfront_data::{CommerceApi, DependencyTag, FetchError};

use crate::page::{ContentView, FormState, Page, ProductView, SearchView};
use crate::routes::Route;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

fn upstream(tag: DependencyTag) -> impl FnOnce(FetchError) -> PageError {
    move |error| PageError::upstream(tag.name(), error)
}

/// Resolve a request into a page.
pub(crate) async fn resolve(
    api: &dyn CommerceApi,
    store: &StoreSettings,
    route: &Route,
    ctx: &RequestContext,
) -> Result<Page, PageError> {
    if !route.accepts(ctx.method) {
        return Err(PageError::MethodNotAllowed(ctx.method));
    }

    match route {
        Route::Home => Ok(Page::Home),
        Route::Product { id } => resolve_product(api, id, ctx).await,
        Route::Search => resolve_search(api, store, ctx).await,
        Route::Content { path } => resolve_content(api, path, ctx).await,
    }
}

async fn resolve_product(
    api: &dyn CommerceApi,
    raw_id: &str,
    ctx: &RequestContext,
) -> Result<Page, PageError> {
    let id = ProductId::parse(raw_id)
        .map_err(|_| PageError::not_found(format!("product {}", raw_id)))?;
    let selection = OptionSelection::from_query(&ctx.query);

    let product = api
        .product(id, &selection)
        .await
        .map_err(upstream(DependencyTag::Catalog))?
        .ok_or_else(|| PageError::not_found(format!("product {}", id)))?;

    Ok(Page::Product(Box::new(ProductView {
        product,
        selection,
        path: ctx.path.clone(),
        query: ctx.query.clone(),
    })))
}

async fn resolve_search(
    api: &dyn CommerceApi,
    store: &StoreSettings,
    ctx: &RequestContext,
) -> Result<Page, PageError> {
    let term = ctx.query_param("term").unwrap_or_default().trim().to_string();
    if term.is_empty() {
        return Ok(Page::Search(SearchView {
            term,
            results: Vec::new(),
        }));
    }

    let results = api
        .search_products(&term, store.search_limit)
        .await
        .map_err(upstream(DependencyTag::Search))?;

    Ok(Page::Search(SearchView { term, results }))
}

async fn resolve_content(
    api: &dyn CommerceApi,
    path: &str,
    ctx: &RequestContext,
) -> Result<Page, PageError> {
    let page = api
        .page(path)
        .await
        .map_err(upstream(DependencyTag::Content))?
        .ok_or_else(|| PageError::not_found(format!("page {}", path)))?;

    if !page.is_contact() {
        if ctx.method == Method::Post {
            return Err(PageError::MethodNotAllowed(ctx.method));
        }
        return Ok(Page::Content(Box::new(ContentView {
            page,
            verification: None,
            form: FormState::Blank,
        })));
    }

    let verification = api
        .bot_verification()
        .await
        .map_err(upstream(DependencyTag::Settings))?;

    let form = if ctx.method == Method::Post {
        submit_contact(api, &page, &verification, ctx).await?
    } else {
        FormState::Blank
    };

    Ok(Page::Content(Box::new(ContentView {
        page,
        verification: Some(verification),
        form,
    })))
}

async fn submit_contact(
    api: &dyn CommerceApi,
    page: &WebPage,
    verification: &BotVerification,
    ctx: &RequestContext,
) -> Result<FormState, PageError> {
    if let Some(content_type) = ctx.header("content-type") {
        if !content_type.starts_with(FORM_CONTENT_TYPE) {
            return Err(PageError::BadRequest(format!(
                "unsupported content type {}",
                content_type
            )));
        }
    }

    let values = ctx.form();
    let mut submission = ContactSubmission::from_form(&values, page.contact_fields());

    // Verification of the token itself happens upstream.
    if verification.widget_site_key().is_some() {
        let missing_token = match &submission {
            Ok(accepted) => accepted.captcha_token.is_none(),
            Err(_) => values.get(CAPTCHA_FIELD).map_or(true, str::is_empty),
        };
        if missing_token {
            let captcha_error = FieldError {
                field: CAPTCHA_FIELD,
                message: "Please confirm you are not a robot.",
            };
            submission = match submission {
                Ok(_) => Err(vec![captcha_error]),
                Err(mut errors) => {
                    errors.push(captcha_error);
                    Err(errors)
                }
            };
        }
    }

    match submission {
        Ok(submission) => {
            api.submit_contact(page.entity_id, &submission)
                .await
                .map_err(upstream(DependencyTag::Forms))?;
            Ok(FormState::Submitted)
        }
        Err(errors) => Ok(FormState::Invalid { errors, values }),
    }
}
