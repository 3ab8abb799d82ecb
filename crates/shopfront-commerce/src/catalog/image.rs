//! Product images and default-image reconciliation.

use serde::{Deserialize, Serialize};

/// A product image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Absolute image URL.
    pub url: String,
    /// Alt text.
    #[serde(default)]
    pub alt_text: String,
    /// Whether the catalog flags this as the default image.
    #[serde(default)]
    pub is_default: bool,
}

impl Image {
    /// Create a non-default image.
    pub fn new(url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt_text: alt_text.into(),
            is_default: false,
        }
    }

    /// Mark this image as the default.
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }
}

/// Reconcile the catalog image list against the canonical default image.
///
/// The catalog default is the first flagged image. When it already has the
/// canonical URL the list is returned unchanged. Otherwise every flag is
/// cleared and the canonical image is appended as the only default. Without
/// a canonical image the list passes through as-is, including lists with
/// zero or several flagged images.
pub fn reconcile_default_image(images: Vec<Image>, canonical: Option<&Image>) -> Vec<Image> {
    let Some(canonical) = canonical else {
        return images;
    };

    let catalog_default = images.iter().find(|image| image.is_default);
    if catalog_default.is_some_and(|image| image.url == canonical.url) {
        return images;
    }

    let mut reconciled: Vec<Image> = images
        .into_iter()
        .map(|mut image| {
            image.is_default = false;
            image
        })
        .collect();

    reconciled.push(Image {
        url: canonical.url.clone(),
        alt_text: canonical.alt_text.clone(),
        is_default: true,
    });

    reconciled
}

/// Gallery display order: the first default image leads, the rest keep
/// their relative order.
pub fn gallery_order(images: &[Image]) -> Vec<&Image> {
    let lead = images.iter().position(|image| image.is_default);

    let mut ordered = Vec::with_capacity(images.len());
    if let Some(lead) = lead {
        ordered.push(&images[lead]);
    }
    ordered.extend(
        images
            .iter()
            .enumerate()
            .filter(|(index, _)| Some(*index) != lead)
            .map(|(_, image)| image),
    );
    ordered
}
