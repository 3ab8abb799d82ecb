//! Shopfront storefront workload.
//!
//! Serves the home page, product pages with option selection, content and
//! contact pages, and search, as shell-first streamed HTML.
//!
//! Every request goes through the same pipeline:
//!
//! 1. **Resolve**: match the route and run the critical fetches (product,
//!    page, bot verification, search results).
//! 2. **Status**: the resolved [`Page`] decides the status line.
//! 3. **Stream**: shell first, then critical sections, then deferred
//!    sections (reviews, featured products) as their fetches resolve.
//!
//! Hosts drive the pipeline through [`Storefront::prepare`] and
//! [`Storefront::stream`]: the Spin component on `wasm32`, the axum dev
//! server (`storefront-dev`) on native targets.

mod app;
mod page;
mod pages;
mod resolve;
mod routes;
mod sections;
mod styles;

#[cfg(target_arch = "wasm32")]
mod component;

pub use app::{Prepared, RenderedPage, Storefront};
pub use page::{ContentView, FormState, Page, ProductView, SearchView};
pub use routes::Route;
