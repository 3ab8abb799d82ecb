//! Resolved pages.
//!
//! A [`Page`] is everything the critical fetches produced. It decides the
//! status line before any byte of the body is written.

use http::StatusCode;
use shopfront_commerce::prelude::*;
use shopfront_core::{PageError, QueryParams};

/// A fully resolved page, ready to stream.
#[derive(Debug, Clone)]
pub enum Page {
    Home,
    Product(Box<ProductView>),
    Content(Box<ContentView>),
    Search(SearchView),
    NotFound,
    /// A dependency failed before the status was chosen.
    Error,
    /// The request could not be understood.
    BadRequest,
    MethodNotAllowed { allow: &'static str },
}

/// Product page data.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub product: Product,
    /// Option selections parsed from the query.
    pub selection: OptionSelection,
    /// Request path the option links are built on.
    pub path: String,
    /// Current request query, the base for every option link.
    pub query: QueryParams,
}

/// Content page data.
#[derive(Debug, Clone)]
pub struct ContentView {
    pub page: WebPage,
    /// Bot verification settings, fetched for contact pages only.
    pub verification: Option<BotVerification>,
    pub form: FormState,
}

/// Contact form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Blank,
    /// Rejected submission, re-rendered with the posted values.
    Invalid {
        errors: Vec<FieldError>,
        values: QueryParams,
    },
    Submitted,
}

/// Search page data.
#[derive(Debug, Clone)]
pub struct SearchView {
    /// Trimmed search term; empty shows the prompt.
    pub term: String,
    pub results: Vec<ProductCard>,
}

impl Page {
    /// The page rendered in place of a failed resolution.
    pub fn from_error(error: &PageError, allow: &'static str) -> Self {
        match error {
            PageError::NotFound(_) => Self::NotFound,
            PageError::Upstream { .. } => Self::Error,
            PageError::BadRequest(_) => Self::BadRequest,
            PageError::MethodNotAllowed(_) => Self::MethodNotAllowed { allow },
        }
    }

    /// Response status.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Content(view) if matches!(view.form, FormState::Invalid { .. }) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Error => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::OK,
        }
    }

    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Product(_) => "product",
            Self::Content(view) if view.page.is_contact() => "contact",
            Self::Content(_) => "content",
            Self::Search(_) => "search",
            Self::NotFound => "not_found",
            Self::Error => "error",
            Self::BadRequest => "bad_request",
            Self::MethodNotAllowed { .. } => "method_not_allowed",
        }
    }

    /// Headers beyond content type and request id.
    pub fn extra_headers(&self) -> Vec<(String, String)> {
        match self {
            Self::MethodNotAllowed { allow } => vec![("allow".to_string(), allow.to_string())],
            _ => Vec::new(),
        }
    }
}
