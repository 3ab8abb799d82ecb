//! Product page.

use std::fmt::Display;

use futures::Sink;
use shopfront_streaming::{StreamingSink, WorkloadError};

use super::deferred::{stream_deferred, Deferred};
use super::{layout, send_nonempty, RenderContext};
use crate::page::ProductView;
use crate::sections::{render_description, render_details, render_gallery, render_summary};

pub(crate) async fn stream<S, E>(
    view: &ProductView,
    ctx: &RenderContext<'_>,
    sink: &mut StreamingSink<S, E>,
) -> Result<(), WorkloadError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    let product = &view.product;
    let seo = &product.seo;

    let head = layout::head(ctx.store, seo.title_or(&product.name))
        .with_meta("description", &seo.meta_description)
        .with_meta("keywords", &seo.meta_keywords.join(", "))
        .with_canonical(product.href());
    let shell = layout::shell(ctx.store, head, "product");
    sink.send_shell(&shell.render_opening()).await?;

    sink.send_section("gallery", &render_gallery(product)).await?;
    sink.send_section("summary", &render_summary(view)).await?;
    send_nonempty(sink, "description", render_description(product)).await?;
    send_nonempty(sink, "details", render_details(product)).await?;

    let deferred = [
        Deferred::ReviewSummary(product.entity_id),
        Deferred::Reviews(product.entity_id),
        Deferred::Featured {
            title: "You may also like",
        },
    ];
    let tail = stream_deferred(&deferred, ctx, sink).await?;

    sink.complete(&format!("{}{}", tail, shell.render_closing()))
        .await
}
