//! Storefront domain types and presentation rules for Shopfront.
//!
//! Everything here is a read-only snapshot of commerce API data plus the
//! pure functions that shape it for display:
//!
//! - **Catalog**: products, images, prices, options
//! - **Content**: web pages, contact forms, bot verification
//! - **Reviews**: review summary and individual reviews
//!
//! # Example
//!
//! ```rust
//! use shopfront_commerce::prelude::*;
//! use shopfront_core::QueryParams;
//!
//! let current = QueryParams::parse("ref=home");
//! let next = select_option_value(&current, OptionId::new(134), ValueId::new(139));
//! assert_eq!(next.to_query_string(), "ref=home&134=139");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod content;
pub mod review;
pub mod seo;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        gallery_order, reconcile_default_image, select_option_value, CustomField, DisplayStyle,
        Image, OptionKind, OptionSelection, OptionValue, PriceDisplay, PriceRange, PriceSet,
        Product, ProductCard, ProductOption, Weight,
    };

    // Content
    pub use crate::content::{
        BotVerification, ContactField, ContactSubmission, FieldError, WebPage, WebPageKind,
    };

    // Reviews
    pub use crate::review::{Review, ReviewSummary};

    pub use crate::seo::SeoMetadata;
}
