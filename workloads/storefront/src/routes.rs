//! Route matching.

use shopfront_core::Method;

/// A storefront route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Home,
    /// `/product/{id}`. The id is kept raw; the resolver decides whether it
    /// names a product.
    Product { id: String },
    /// `/search?term=...`
    Search,
    /// Any other path, looked up as a content page.
    Content { path: String },
}

impl Route {
    /// Match a request path.
    pub fn match_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');

        if trimmed.is_empty() {
            return Self::Home;
        }
        if trimmed == "/search" {
            return Self::Search;
        }
        if let Some(id) = trimmed.strip_prefix("/product/") {
            if !id.is_empty() && !id.contains('/') {
                return Self::Product { id: id.to_string() };
            }
        }

        Self::Content {
            path: path.to_string(),
        }
    }

    /// Route pattern used as the log `route` field.
    pub fn pattern(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Product { .. } => "/product/{id}",
            Self::Search => "/search",
            Self::Content { .. } => "/{path}",
        }
    }

    /// Methods the route accepts, as an `Allow` header value.
    pub fn allow(&self) -> &'static str {
        match self {
            Self::Content { .. } => "GET, HEAD, POST",
            _ => "GET, HEAD",
        }
    }

    /// Whether the route accepts `method` at all. A `POST` to a content
    /// route is only accepted once the page turns out to be a contact page.
    pub fn accepts(&self, method: Method) -> bool {
        match method {
            Method::Get | Method::Head => true,
            Method::Post => matches!(self, Self::Content { .. }),
            _ => false,
        }
    }
}
