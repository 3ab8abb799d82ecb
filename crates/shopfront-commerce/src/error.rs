//! Commerce error types.

use thiserror::Error;

/// Errors raised while interpreting commerce data.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommerceError {
    /// An identifier that should be an integer was not.
    #[error("Invalid {kind} identifier: {value:?}")]
    InvalidIdentifier { kind: &'static str, value: String },

    /// A currency code the storefront cannot format.
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),
}
