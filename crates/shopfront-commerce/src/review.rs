//! Product reviews.

use serde::{Deserialize, Serialize};

use crate::ids::ReviewId;

/// Aggregate rating for a product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    #[serde(default)]
    pub average_rating: f32,
    #[serde(default)]
    pub number_of_reviews: u32,
}

impl ReviewSummary {
    pub fn has_reviews(&self) -> bool {
        self.number_of_reviews > 0
    }

    /// Average rounded to the nearest whole star, clamped to 0..=5.
    pub fn stars(&self) -> u8 {
        self.average_rating.round().clamp(0.0, 5.0) as u8
    }
}

/// A single customer review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub entity_id: ReviewId,
    pub title: String,
    #[serde(default)]
    pub text: String,
    pub rating: u8,
    #[serde(default)]
    pub author_name: String,
    /// ISO 8601 creation date as sent by the API.
    #[serde(default)]
    pub created_at: String,
}
