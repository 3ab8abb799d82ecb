//! Commerce API access for the Shopfront storefront.
//!
//! This crate provides:
//! - `FetchClient` - Base-URL aware HTTP client over a platform `Transport`
//! - `DependencyTag` - Semantic upstream categories
//! - `CommerceApi` - The storefront's view of the commerce API
//! - `HttpCommerceApi` / `InMemoryCommerceApi` - Remote and local backends
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_data::{platform_transport, CommerceApi, HttpCommerceApi};
//!
//! let api = HttpCommerceApi::from_settings(&config.commerce, platform_transport());
//! let product = api.product(ProductId::new(77), &OptionSelection::new()).await?;
//! ```

mod api;
mod client;
mod dependency;
mod error;
mod memory;
mod request;
mod response;
#[cfg(test)]
mod testing;
mod transport;

pub use api::{CommerceApi, HttpCommerceApi};
pub use client::{ClientRequest, FetchClient};
pub use dependency::DependencyTag;
pub use error::FetchError;
pub use memory::InMemoryCommerceApi;
pub use request::RequestBuilder;
pub use response::Response;
pub use transport::*;
