//! Product catalog module.
//!
//! Contains products, images, prices and options, plus the pure rules that
//! shape them for display: default-image reconciliation, price display
//! resolution and option selection state.

mod image;
mod option;
mod price;
mod product;

pub use image::{gallery_order, reconcile_default_image, Image};
pub use option::{
    select_option_value, DisplayStyle, OptionKind, OptionSelection, OptionValue, ProductOption,
};
pub use price::{PriceDisplay, PriceRange, PriceSet};
pub use product::{CustomField, Product, ProductCard, Weight};
