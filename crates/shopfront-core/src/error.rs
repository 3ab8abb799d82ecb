//! Page-level error taxonomy.

use http::StatusCode;
use thiserror::Error;

use crate::context::Method;

/// Errors that decide the status of a page response.
///
/// Malformed option selections never show up here: they are dropped while
/// parsing the query and the page degrades to the base product view.
#[derive(Error, Debug)]
pub enum PageError {
    /// The page or product does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A dependency fetch failed. Not recovered locally.
    #[error("Upstream failure ({dependency}): {message}")]
    Upstream { dependency: String, message: String },

    /// The route exists but does not accept this method.
    #[error("Method {0} not allowed")]
    MethodNotAllowed(Method),

    /// The submitted form was rejected.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl PageError {
    /// Create a not-found error for a resource description.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// Wrap a dependency failure.
    pub fn upstream(dependency: impl Into<String>, error: impl std::fmt::Display) -> Self {
        Self::Upstream {
            dependency: dependency.into(),
            message: error.to_string(),
        }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Whether this is a not-found result.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
