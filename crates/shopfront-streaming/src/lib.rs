//! Streaming primitives for shell-first SSR.
//!
//! This crate enforces shell-first streaming patterns:
//! - `StreamingSink` - Shell, then sections, then completion
//! - `Shell` / `HeadContent` - Page shell template
//! - `SectionBoundary` - Fallback HTML for sections that fail after the shell
//! - `generate_reorder_script` - Restores declared order of out-of-order sections

mod boundary;
mod error;
mod escape;
mod ordering;
mod shell;
mod sink;

pub use boundary::*;
pub use error::*;
pub use escape::*;
pub use ordering::*;
pub use shell::*;
pub use sink::*;
