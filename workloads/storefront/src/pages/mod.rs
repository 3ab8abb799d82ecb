//! Page streaming.
//!
//! Each page sends its shell, then its critical sections in document order,
//! then any deferred sections as their fetches resolve, then the closing
//! HTML.

mod content;
mod deferred;
mod home;
mod layout;
mod product;
mod search;
mod status;

use std::fmt::Display;

use futures::Sink;
use shopfront_core::StoreSettings;
use shopfront_data::CommerceApi;
use shopfront_observability::StructuredLogger;
use shopfront_streaming::{StreamingSink, WorkloadError};

use crate::page::Page;

/// What page streaming needs besides the page itself.
pub(crate) struct RenderContext<'a> {
    pub api: &'a dyn CommerceApi,
    pub store: &'a StoreSettings,
    pub logger: &'a StructuredLogger,
}

/// Stream `page` into `sink`, from shell to completion.
pub(crate) async fn stream_page<S, E>(
    page: &Page,
    ctx: &RenderContext<'_>,
    sink: &mut StreamingSink<S, E>,
) -> Result<(), WorkloadError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    match page {
        Page::Home => home::stream(ctx, sink).await,
        Page::Product(view) => product::stream(view, ctx, sink).await,
        Page::Content(view) => content::stream(view, ctx, sink).await,
        Page::Search(view) => search::stream(view, ctx, sink).await,
        Page::NotFound
        | Page::Error
        | Page::BadRequest
        | Page::MethodNotAllowed { .. } => status::stream(page, ctx, sink).await,
    }
}

/// Send a critical section unless it rendered to nothing.
async fn send_nonempty<S, E>(
    sink: &mut StreamingSink<S, E>,
    name: &str,
    html: String,
) -> Result<(), WorkloadError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    if html.is_empty() {
        return Ok(());
    }
    sink.send_section(name, &html).await
}
