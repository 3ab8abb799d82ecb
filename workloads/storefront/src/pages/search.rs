//! Search page.

use std::fmt::Display;

use futures::Sink;
use shopfront_streaming::{StreamingSink, WorkloadError};

use super::{layout, RenderContext};
use crate::page::SearchView;
use crate::sections::{render_search_form, render_search_results};

pub(crate) async fn stream<S, E>(
    view: &SearchView,
    ctx: &RenderContext<'_>,
    sink: &mut StreamingSink<S, E>,
) -> Result<(), WorkloadError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    let title = if view.term.is_empty() {
        "Search".to_string()
    } else {
        format!("Search results for \"{}\"", view.term)
    };
    let head = layout::head(ctx.store, &title).with_meta("robots", "noindex");
    let shell = layout::shell(ctx.store, head, "search");
    sink.send_shell(&shell.render_opening()).await?;

    sink.send_section("search-form", &render_search_form(&view.term))
        .await?;
    sink.send_section("results", &render_search_results(view))
        .await?;

    sink.complete(&shell.render_closing()).await
}
