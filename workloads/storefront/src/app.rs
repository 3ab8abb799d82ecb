//! The storefront request pipeline.

use std::fmt::Display;
use std::sync::Arc;

use futures::Sink;
use http::StatusCode;
use shopfront_core::{PageError, RequestContext, StoreConfig};
use shopfront_data::{platform_transport, CommerceApi, HttpCommerceApi};
use shopfront_observability::{LogCapture, RequestSummary, StructuredLogger};
use shopfront_streaming::{StreamingSink, WorkloadError};

use crate::page::Page;
use crate::pages::{stream_page, RenderContext};
use crate::resolve::resolve;
use crate::routes::Route;

const WORKLOAD: &str = "storefront";

/// The storefront: a commerce API and the store configuration.
#[derive(Clone)]
pub struct Storefront {
    api: Arc<dyn CommerceApi>,
    config: StoreConfig,
    capture: Option<LogCapture>,
}

/// A resolved request whose status is known and whose body is not yet
/// written.
pub struct Prepared {
    page: Page,
    ctx: RequestContext,
    logger: StructuredLogger,
}

/// A page rendered to a single buffer.
#[derive(Debug)]
pub struct RenderedPage {
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: String,
    pub summary: RequestSummary,
}

impl Storefront {
    pub fn new(api: impl CommerceApi + 'static, config: StoreConfig) -> Self {
        Self {
            api: Arc::new(api),
            config,
            capture: None,
        }
    }

    /// Storefront backed by the remote commerce API in `config`.
    pub fn from_config(config: StoreConfig) -> Self {
        let api = HttpCommerceApi::from_settings(&config.commerce, platform_transport());
        Self::new(api, config)
    }

    /// Record every request log entry into `capture` as well.
    pub fn with_log_capture(mut self, capture: LogCapture) -> Self {
        self.capture = Some(capture);
        self
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn logger(&self, ctx: &RequestContext, route: &Route) -> StructuredLogger {
        let logger = StructuredLogger::new(ctx.request_id.clone())
            .with_workload(WORKLOAD)
            .with_route(route.pattern());
        match &self.capture {
            Some(capture) => logger.with_capture(capture.clone()),
            None => logger,
        }
    }

    /// Match the route and run the critical fetches.
    pub async fn prepare(&self, ctx: RequestContext) -> Prepared {
        let route = Route::match_path(&ctx.path);
        let logger = self.started(&ctx, &route);

        let page = match resolve(self.api.as_ref(), &self.config.store, &route, &ctx).await {
            Ok(page) => page,
            Err(error) => {
                log_resolution_failure(&logger, &error);
                Page::from_error(&error, route.allow())
            }
        };
        resolved(page, ctx, logger)
    }

    /// Prepare the error page for a request the host could not read, such
    /// as a body that failed mid-transfer. Nothing is fetched.
    pub fn prepare_rejected(&self, ctx: RequestContext, error: PageError) -> Prepared {
        let route = Route::match_path(&ctx.path);
        let logger = self.started(&ctx, &route);

        log_resolution_failure(&logger, &error);
        resolved(Page::from_error(&error, route.allow()), ctx, logger)
    }

    fn started(&self, ctx: &RequestContext, route: &Route) -> StructuredLogger {
        let logger = self.logger(ctx, route);
        logger
            .info_builder("request started")
            .field("method", ctx.method.as_str())
            .field("path", ctx.path.as_str())
            .emit();
        logger
    }

    /// Stream a prepared page into `sink` and log the request summary.
    pub async fn stream<S, E>(
        &self,
        prepared: Prepared,
        sink: S,
    ) -> Result<RequestSummary, WorkloadError>
    where
        S: Sink<Vec<u8>, Error = E> + Unpin,
        E: Display,
    {
        let Prepared { page, ctx, logger } = prepared;
        let status = page.status();
        let mut sink = StreamingSink::new(sink, ctx.timing.clone());

        let render = RenderContext {
            api: self.api.as_ref(),
            store: &self.config.store,
            logger: &logger,
        };
        let result = stream_page(&page, &render, &mut sink).await;

        if let Err(error) = &result {
            logger
                .error_builder("stream failed")
                .field("error", error.to_string())
                .field("phase", format!("{:?}", sink.phase()))
                .emit();
        }

        let summary = RequestSummary::from_timing(status.as_u16(), sink.timing(), sink.bytes_sent());
        logger.request_summary(&summary);

        result.map(|()| summary)
    }

    /// Resolve and stream into memory.
    pub async fn render(&self, ctx: RequestContext) -> Result<RenderedPage, WorkloadError> {
        let prepared = self.prepare(ctx).await;
        let status = prepared.status();
        let headers = prepared.headers();

        let mut chunks: Vec<Vec<u8>> = Vec::new();
        let summary = self.stream(prepared, &mut chunks).await?;

        Ok(RenderedPage {
            status,
            headers,
            body: String::from_utf8_lossy(&chunks.concat()).into_owned(),
            summary,
        })
    }
}

fn resolved(page: Page, mut ctx: RequestContext, logger: StructuredLogger) -> Prepared {
    ctx.timing.mark("resolved");
    logger
        .debug_builder("page resolved")
        .field("page", page.kind())
        .field_i64("status", page.status().as_u16() as i64)
        .emit();
    Prepared { page, ctx, logger }
}

fn log_resolution_failure(logger: &StructuredLogger, error: &PageError) {
    let builder = match error {
        PageError::Upstream { .. } => logger.error_builder("page resolution failed"),
        _ => logger.info_builder("page resolution failed"),
    };
    builder
        .field("error", error.to_string())
        .field_i64("status", error.status().as_u16() as i64)
        .emit();
}

impl Prepared {
    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn status(&self) -> StatusCode {
        self.page.status()
    }

    /// Response headers: content type, request id and page specific ones.
    pub fn headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![
            (
                "content-type".to_string(),
                "text/html; charset=utf-8".to_string(),
            ),
            ("x-request-id".to_string(), self.ctx.request_id.to_string()),
        ];
        headers.extend(self.page.extra_headers());
        headers
    }
}

impl RenderedPage {
    /// Look up a response header.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}
