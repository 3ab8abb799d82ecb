//! Observability for the Shopfront storefront.
//!
//! This crate provides:
//! - `StructuredLogger` - Request-scoped structured logging over `tracing`
//! - `RequestSummary` - One log line per request with stream timings
//! - `init` - Process-wide `tracing-subscriber` setup

mod logging;
mod subscriber;
mod summary;

pub use logging::*;
pub use subscriber::*;
pub use summary::*;

pub use shopfront_core::{RequestId, TimingContext};
