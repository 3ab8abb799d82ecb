//! Spin HTTP component entry point.

use spin_sdk::http::{Fields, IncomingRequest, Method as SpinMethod, OutgoingResponse, ResponseOutparam};
use spin_sdk::{http_component, variables};

use shopfront_core::{Method, PageError, RequestContext, RequestId, StoreConfig};
use shopfront_observability::{init, LogSettings};

use crate::Storefront;

/// Read `SHOPFRONT_*` overrides from Spin variables (`SHOPFRONT_API_URL`
/// is the `api_url` variable).
fn load_config() -> StoreConfig {
    let lookup = |key: &str| {
        let name = key.strip_prefix("SHOPFRONT_")?.to_ascii_lowercase();
        variables::get(&name).ok().filter(|value| !value.is_empty())
    };

    match StoreConfig::default().with_overrides(lookup) {
        Ok(config) => config,
        Err(error) => {
            tracing::warn!(error = %error, "invalid Spin variable, using defaults");
            StoreConfig::default()
        }
    }
}

fn method_name(method: &SpinMethod) -> &str {
    match method {
        SpinMethod::Get => "GET",
        SpinMethod::Head => "HEAD",
        SpinMethod::Post => "POST",
        SpinMethod::Put => "PUT",
        SpinMethod::Delete => "DELETE",
        SpinMethod::Patch => "PATCH",
        SpinMethod::Options => "OPTIONS",
        SpinMethod::Connect => "CONNECT",
        SpinMethod::Trace => "TRACE",
        SpinMethod::Other(name) => name,
    }
}

/// Build the request context. A POST body that cannot be read comes back as
/// the error alongside the body-less context.
async fn request_context(
    req: IncomingRequest,
) -> Result<RequestContext, (RequestContext, PageError)> {
    // Unrecognised methods are rejected by every route.
    let method = Method::parse(method_name(&req.method())).unwrap_or(Method::Options);
    let path = req.path_with_query().unwrap_or_else(|| "/".to_string());

    let mut ctx = RequestContext::new(method, &path);
    for (name, value) in req.headers().entries() {
        if let Ok(value) = String::from_utf8(value) {
            ctx = ctx.with_header(&name, value);
        }
    }
    if let Some(id) = ctx.header("x-request-id").map(RequestId::from_string) {
        ctx = ctx.with_request_id(id);
    }

    if method == Method::Post {
        match req.into_body().await {
            Ok(body) => ctx = ctx.with_body(body),
            Err(error) => {
                let error = PageError::BadRequest(format!("unreadable request body: {:?}", error));
                return Err((ctx, error));
            }
        }
    }

    Ok(ctx)
}

/// Main HTTP handler.
#[http_component]
async fn handle(req: IncomingRequest, response_out: ResponseOutparam) {
    let config = load_config();
    init(&LogSettings::from(&config.logging));

    let storefront = Storefront::from_config(config);
    let prepared = match request_context(req).await {
        Ok(ctx) => storefront.prepare(ctx).await,
        Err((ctx, error)) => storefront.prepare_rejected(ctx, error),
    };

    let header_list: Vec<(String, Vec<u8>)> = prepared
        .headers()
        .into_iter()
        .map(|(name, value)| (name, value.into_bytes()))
        .collect();
    let headers = Fields::from_list(&header_list).unwrap_or_else(|_| Fields::new());
    let response = OutgoingResponse::new(headers);
    if response.set_status_code(prepared.status().as_u16()).is_err() {
        tracing::warn!(status = prepared.status().as_u16(), "failed to set status code");
    }

    let body = response.take_body();
    response_out.set(response);

    // Failures are already logged with the request summary.
    let _ = storefront.stream(prepared, body).await;
}
