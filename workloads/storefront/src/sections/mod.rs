//! Section renderers for storefront pages.

mod cards;
mod content;
mod details;
mod gallery;
mod options;
mod pricing;
mod reviews;
mod search;

pub use cards::*;
pub use content::*;
pub use details::*;
pub use gallery::*;
pub use options::*;
pub use pricing::*;
pub use reviews::*;
pub use search::*;
