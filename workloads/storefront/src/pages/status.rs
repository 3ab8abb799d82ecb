//! Not-found and error pages.

use std::fmt::Display;

use futures::Sink;
use shopfront_streaming::{StreamingSink, WorkloadError};

use super::{layout, RenderContext};
use crate::page::Page;
use crate::sections::render_search_form;

fn message(page: &Page) -> (&'static str, &'static str) {
    match page {
        Page::NotFound => (
            "Page not found",
            "The page you were looking for does not exist or has moved.",
        ),
        Page::BadRequest => (
            "Bad request",
            "We could not process that request.",
        ),
        Page::MethodNotAllowed { .. } => (
            "Method not allowed",
            "This page cannot handle that kind of request.",
        ),
        _ => (
            "Something went wrong",
            "We could not load this page. Please try again in a moment.",
        ),
    }
}

pub(crate) async fn stream<S, E>(
    page: &Page,
    ctx: &RenderContext<'_>,
    sink: &mut StreamingSink<S, E>,
) -> Result<(), WorkloadError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    let (title, text) = message(page);
    let head = layout::head(ctx.store, title).with_meta("robots", "noindex");
    let shell = layout::shell(ctx.store, head, "status");
    sink.send_shell(&shell.render_opening()).await?;

    let body = format!(
        r#"<section class="status-page" data-section="status">
    <h1>{title}</h1>
    <p>{text}</p>
    <p><a class="button" href="/">Back to the home page</a></p>
</section>"#,
        title = title,
        text = text
    );
    sink.send_section("status", &body).await?;

    if matches!(page, Page::NotFound) {
        sink.send_section("search-form", &render_search_form(""))
            .await?;
    }

    sink.complete(&shell.render_closing()).await
}
