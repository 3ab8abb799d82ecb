//! Content pages, dispatched on page type.

use std::fmt::Display;

use futures::Sink;
use shopfront_commerce::content::WebPageKind;
use shopfront_streaming::{StreamingSink, WorkloadError};

use super::{layout, RenderContext};
use crate::page::ContentView;
use crate::sections::{render_contact_form, render_content_body};

pub(crate) async fn stream<S, E>(
    view: &ContentView,
    ctx: &RenderContext<'_>,
    sink: &mut StreamingSink<S, E>,
) -> Result<(), WorkloadError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    let page = &view.page;
    let head = layout::head(ctx.store, page.seo.title_or(&page.name))
        .with_meta("description", &page.seo.meta_description)
        .with_meta("keywords", &page.seo.meta_keywords.join(", "))
        .with_canonical(page.path.clone());
    let shell = layout::shell(ctx.store, head, "content");
    sink.send_shell(&shell.render_opening()).await?;

    sink.send_section("content", &render_content_body(page)).await?;

    match page.kind {
        WebPageKind::Contact { .. } => {
            sink.send_section("contact-form", &render_contact_form(view))
                .await?;
        }
        WebPageKind::Normal => {}
    }

    sink.complete(&shell.render_closing()).await
}
