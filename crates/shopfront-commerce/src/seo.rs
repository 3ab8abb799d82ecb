//! SEO metadata rendered into the page head.

use serde::{Deserialize, Serialize};

/// Title and meta tags for a product or content page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMetadata {
    #[serde(default)]
    pub page_title: String,
    #[serde(default)]
    pub meta_description: String,
    #[serde(default)]
    pub meta_keywords: Vec<String>,
}

impl SeoMetadata {
    /// Title to render, falling back to the entity name.
    pub fn title_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.page_title.trim().is_empty() {
            fallback
        } else {
            &self.page_title
        }
    }
}
