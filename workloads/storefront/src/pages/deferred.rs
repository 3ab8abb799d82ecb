//! Deferred sections.
//!
//! Fetched concurrently once the critical sections are out; each section is
//! sent as soon as its own fetch resolves. A failure can no longer change
//! the status, so it is logged and settled by the section's boundary.

use std::fmt::Display;

use futures::stream::{FuturesUnordered, StreamExt};
use futures::Sink;
use shopfront_commerce::prelude::*;
use shopfront_data::FetchError;
use shopfront_streaming::{
    generate_reorder_script, wrap_section_for_reorder, FallbackStrategy, SectionBoundary,
    StreamingSink, WorkloadError,
};

use super::RenderContext;
use crate::sections::{render_card_grid, render_review_summary, render_reviews};

const CONTAINER_OPEN: &str = r#"<div class="deferred-sections">"#;

/// A section whose data is fetched after the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Deferred {
    ReviewSummary(ProductId),
    Reviews(ProductId),
    Featured { title: &'static str },
}

impl Deferred {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::ReviewSummary(_) => "review-summary",
            Self::Reviews(_) => "reviews",
            Self::Featured { .. } => "featured",
        }
    }

    fn boundary(&self) -> SectionBoundary {
        let fallback = match self {
            Self::Reviews(_) => FallbackStrategy::message("Reviews are unavailable right now."),
            Self::ReviewSummary(_) | Self::Featured { .. } => FallbackStrategy::Skip,
        };
        // Failures are logged through the request logger instead.
        SectionBoundary::new(self.name(), fallback).with_logging(false)
    }

    async fn load(self, ctx: &RenderContext<'_>) -> (Self, Result<String, FetchError>) {
        let html = match self {
            Self::ReviewSummary(id) => ctx
                .api
                .review_summary(id)
                .await
                .map(|summary| render_review_summary(&summary)),
            Self::Reviews(id) => ctx
                .api
                .reviews(id, ctx.store.reviews_limit)
                .await
                .map(|reviews| render_reviews(&reviews)),
            Self::Featured { title } => ctx
                .api
                .featured_products(ctx.store.featured_limit)
                .await
                .map(|cards| render_card_grid(title, &cards)),
        };
        (self, html)
    }
}

/// Fetch and stream `sections`, returning the HTML that must precede the
/// page's closing HTML (the reorder script and the container end tag).
pub(crate) async fn stream_deferred<S, E>(
    sections: &[Deferred],
    ctx: &RenderContext<'_>,
    sink: &mut StreamingSink<S, E>,
) -> Result<String, WorkloadError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    let mut pending: FuturesUnordered<_> =
        sections.iter().map(|section| section.load(ctx)).collect();
    let mut opened = false;

    while let Some((section, result)) = pending.next().await {
        if let Err(error) = &result {
            ctx.logger
                .warn_builder("deferred section failed")
                .field("section", section.name())
                .field("error", error.to_string())
                .emit();
        }

        let Some(html) = section.boundary().settle(result) else {
            continue;
        };
        if html.is_empty() {
            continue;
        }

        let mut chunk = String::new();
        if !opened {
            chunk.push_str(CONTAINER_OPEN);
            opened = true;
        }
        chunk.push_str(&wrap_section_for_reorder(section.name(), &html));
        sink.send_section(section.name(), &chunk).await?;
    }

    if !opened {
        return Ok(String::new());
    }

    let order: Vec<&str> = sections.iter().map(Deferred::name).collect();
    Ok(format!("{}</div>\n", generate_reorder_script(&order)))
}
