//! Dependency tagging for semantic categorization.

/// Commerce API dependency categories.
///
/// Tags name the upstream in logs and errors, and say whether a fetch must
/// finish before the response status is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyTag {
    /// Product lookups.
    Catalog,
    /// Content pages by path.
    Content,
    /// Product search.
    Search,
    /// Review summary and review lists.
    Reviews,
    /// Featured products.
    Recommendations,
    /// Storefront settings such as bot verification.
    Settings,
    /// Form submissions.
    Forms,
}

impl DependencyTag {
    /// Check if this dependency is critical (must resolve before the status).
    pub fn is_critical(&self) -> bool {
        !matches!(self, Self::Reviews | Self::Recommendations)
    }

    /// Get the name of this dependency.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Catalog => "catalog",
            Self::Content => "content",
            Self::Search => "search",
            Self::Reviews => "reviews",
            Self::Recommendations => "recommendations",
            Self::Settings => "settings",
            Self::Forms => "forms",
        }
    }
}

impl std::fmt::Display for DependencyTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
