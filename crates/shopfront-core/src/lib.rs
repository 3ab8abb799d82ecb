//! Core abstractions for the Shopfront storefront.
//!
//! This crate provides the fundamental types shared by every page:
//! - `RequestContext` - Method, path, ordered query and request id
//! - `QueryParams` - Order-preserving query string model
//! - `PageError` - Not found / upstream failure taxonomy
//! - `StoreConfig` - Store and commerce API configuration
//! - `TimingContext` - Request lifecycle tracking

mod config;
mod context;
mod error;
mod lifecycle;
mod query;

pub use config::*;
pub use context::*;
pub use error::*;
pub use lifecycle::*;
pub use query::*;
