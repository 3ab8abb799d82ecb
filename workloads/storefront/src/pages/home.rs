//! Home page.

use std::fmt::Display;

use futures::Sink;
use shopfront_streaming::{escape_html, StreamingSink, WorkloadError};

use super::deferred::{stream_deferred, Deferred};
use super::{layout, RenderContext};

pub(crate) async fn stream<S, E>(
    ctx: &RenderContext<'_>,
    sink: &mut StreamingSink<S, E>,
) -> Result<(), WorkloadError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    let head = layout::head(ctx.store, "");
    let shell = layout::shell(ctx.store, head, "home");
    sink.send_shell(&shell.render_opening()).await?;

    let hero = format!(
        r#"<section class="home-hero" data-section="hero">
    <h1>Welcome to {}</h1>
    <p>Browse our latest products or search the catalog.</p>
</section>"#,
        escape_html(&ctx.store.name)
    );
    sink.send_section("hero", &hero).await?;

    let deferred = [Deferred::Featured {
        title: "Featured products",
    }];
    let tail = stream_deferred(&deferred, ctx, sink).await?;

    sink.complete(&format!("{}{}", tail, shell.render_closing()))
        .await
}
