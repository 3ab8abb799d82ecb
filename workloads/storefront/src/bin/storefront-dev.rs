//! Native development server for the storefront.
//!
//! Serves the same pipeline as the Spin component over axum, streaming each
//! page through a channel-backed body.
//!
//! ```text
//! storefront-dev [config.toml]
//! ```

#[cfg(not(target_arch = "wasm32"))]
mod server {
    use std::convert::Infallible;
    use std::sync::Arc;

    use anyhow::Context;
    use axum::body::{to_bytes, Body};
    use axum::extract::{Request, State};
    use axum::http::StatusCode;
    use axum::response::Response;
    use axum::Router;
    use futures::channel::mpsc;
    use futures::StreamExt;
    use shopfront_core::{Method, RequestContext, RequestId, StoreConfig};
    use shopfront_observability::{init, LogSettings};
    use storefront::Storefront;

    /// Largest accepted form body.
    const MAX_BODY_BYTES: usize = 64 * 1024;

    fn load_config() -> anyhow::Result<StoreConfig> {
        match std::env::args().nth(1) {
            Some(path) => StoreConfig::load(&path)
                .and_then(StoreConfig::with_env_overrides)
                .with_context(|| format!("loading {}", path)),
            None => StoreConfig::from_env().context("reading SHOPFRONT_* variables"),
        }
    }

    fn plain(status: StatusCode, text: &'static str) -> Response {
        let mut response = Response::new(Body::from(text));
        *response.status_mut() = status;
        response
    }

    async fn handle(State(storefront): State<Arc<Storefront>>, request: Request) -> Response {
        let (parts, body) = request.into_parts();
        let body = match to_bytes(body, MAX_BODY_BYTES).await {
            Ok(body) => body,
            Err(_) => return plain(StatusCode::PAYLOAD_TOO_LARGE, "request body too large"),
        };

        // Unrecognised methods are rejected by every route.
        let method = Method::parse(parts.method.as_str()).unwrap_or(Method::Options);
        let path = parts
            .uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");

        let mut ctx = RequestContext::new(method, path).with_body(body.to_vec());
        for (name, value) in &parts.headers {
            if let Ok(value) = value.to_str() {
                ctx = ctx.with_header(name.as_str(), value);
            }
        }
        if let Some(id) = ctx.header("x-request-id").map(RequestId::from_string) {
            ctx = ctx.with_request_id(id);
        }

        let prepared = storefront.prepare(ctx).await;
        let status = prepared.status();
        let headers = prepared.headers();

        let (tx, rx) = mpsc::channel::<Vec<u8>>(16);
        let task_storefront = Arc::clone(&storefront);
        tokio::spawn(async move {
            // Failures are already logged with the request summary.
            let _ = task_storefront.stream(prepared, tx).await;
        });

        let mut builder = Response::builder().status(status);
        for (name, value) in headers {
            builder = builder.header(name, value);
        }
        builder
            .body(Body::from_stream(rx.map(Ok::<_, Infallible>)))
            .unwrap_or_else(|_| plain(StatusCode::INTERNAL_SERVER_ERROR, "invalid response headers"))
    }

    pub async fn run() -> anyhow::Result<()> {
        let config = load_config()?;
        init(&LogSettings::from(&config.logging));

        let bind = config.server.bind.clone();
        let storefront = Arc::new(Storefront::from_config(config));
        let app = Router::new().fallback(handle).with_state(storefront);

        let listener = tokio::net::TcpListener::bind(&bind)
            .await
            .with_context(|| format!("binding {}", bind))?;
        tracing::info!(address = %bind, "storefront dev server listening");

        axum::serve(listener, app).await.context("serving")?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {}
