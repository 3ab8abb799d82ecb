//! In-memory commerce API for tests and local development.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use shopfront_commerce::prelude::*;

use crate::api::CommerceApi;
use crate::dependency::DependencyTag;
use crate::FetchError;

#[derive(Default)]
struct Store {
    products: HashMap<ProductId, Product>,
    variants: Vec<(ProductId, Vec<(OptionId, ValueId)>, Product)>,
    pages: HashMap<String, WebPage>,
    featured: Vec<ProductId>,
    summaries: HashMap<ProductId, ReviewSummary>,
    reviews: HashMap<ProductId, Vec<Review>>,
    bot_verification: BotVerification,
    failing: HashSet<DependencyTag>,
    calls: Vec<String>,
    submissions: Vec<(PageId, ContactSubmission)>,
}

/// A [`CommerceApi`] backed by maps.
///
/// Cloning shares the underlying store, so a test can keep a handle to
/// inspect calls and submissions after handing the API to a page.
#[derive(Clone, Default)]
pub struct InMemoryCommerceApi {
    store: Arc<Mutex<Store>>,
}

impl InMemoryCommerceApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_store(self, f: impl FnOnce(&mut Store)) -> Self {
        if let Ok(mut store) = self.store.lock() {
            f(&mut store);
        }
        self
    }

    pub fn with_product(self, product: Product) -> Self {
        self.with_store(|s| {
            s.products.insert(product.entity_id, product);
        })
    }

    /// Serve `product` when exactly these option values are selected.
    pub fn with_variant(
        self,
        id: ProductId,
        selection: &[(OptionId, ValueId)],
        product: Product,
    ) -> Self {
        let mut key = selection.to_vec();
        key.sort();
        self.with_store(|s| s.variants.push((id, key, product)))
    }

    /// Register a content page under its own path.
    pub fn with_page(self, page: WebPage) -> Self {
        self.with_store(|s| {
            s.pages.insert(page.path.clone(), page);
        })
    }

    /// Mark already-registered products as featured, in order.
    pub fn with_featured(self, ids: &[ProductId]) -> Self {
        self.with_store(|s| s.featured.extend_from_slice(ids))
    }

    pub fn with_reviews(self, id: ProductId, summary: ReviewSummary, reviews: Vec<Review>) -> Self {
        self.with_store(|s| {
            s.summaries.insert(id, summary);
            s.reviews.insert(id, reviews);
        })
    }

    pub fn with_bot_verification(self, verification: BotVerification) -> Self {
        self.with_store(|s| s.bot_verification = verification)
    }

    /// Make every call tagged `tag` fail with a 503.
    pub fn failing(self, tag: DependencyTag) -> Self {
        self.with_store(|s| {
            s.failing.insert(tag);
        })
    }

    /// Operations called so far, e.g. `search:red`.
    pub fn calls(&self) -> Vec<String> {
        self.store
            .lock()
            .map(|s| s.calls.clone())
            .unwrap_or_default()
    }

    /// Contact submissions received so far.
    pub fn submissions(&self) -> Vec<(PageId, ContactSubmission)> {
        self.store
            .lock()
            .map(|s| s.submissions.clone())
            .unwrap_or_default()
    }

    fn call<T>(
        &self,
        tag: DependencyTag,
        label: String,
        f: impl FnOnce(&mut Store) -> T,
    ) -> Result<T, FetchError> {
        let mut store = self
            .store
            .lock()
            .map_err(|_| FetchError::Request("in-memory store poisoned".to_string()))?;
        store.calls.push(label.clone());

        if store.failing.contains(&tag) {
            return Err(FetchError::Http {
                status: 503,
                url: label,
                message: format!("{} unavailable", tag),
            });
        }

        Ok(f(&mut store))
    }
}

fn card_for(store: &Store, id: &ProductId) -> Option<ProductCard> {
    store.products.get(id).map(Product::card)
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl CommerceApi for InMemoryCommerceApi {
    async fn product(
        &self,
        id: ProductId,
        selection: &OptionSelection,
    ) -> Result<Option<Product>, FetchError> {
        let mut key: Vec<(OptionId, ValueId)> = selection.iter().collect();
        key.sort();

        self.call(DependencyTag::Catalog, format!("product:{}", id), |s| {
            s.variants
                .iter()
                .find(|(variant_id, variant_key, _)| *variant_id == id && *variant_key == key)
                .map(|(_, _, product)| product.clone())
                .or_else(|| s.products.get(&id).cloned())
        })
    }

    async fn page(&self, path: &str) -> Result<Option<WebPage>, FetchError> {
        self.call(DependencyTag::Content, format!("page:{}", path), |s| {
            s.pages.get(path).cloned()
        })
    }

    async fn featured_products(&self, limit: u32) -> Result<Vec<ProductCard>, FetchError> {
        self.call(DependencyTag::Recommendations, "featured".to_string(), |s| {
            s.featured
                .iter()
                .filter_map(|id| card_for(s, id))
                .take(limit as usize)
                .collect()
        })
    }

    async fn search_products(
        &self,
        term: &str,
        limit: u32,
    ) -> Result<Vec<ProductCard>, FetchError> {
        let needle = term.to_lowercase();
        self.call(DependencyTag::Search, format!("search:{}", term), |s| {
            let mut matches: Vec<&Product> = s
                .products
                .values()
                .filter(|p| p.name.to_lowercase().contains(&needle))
                .collect();
            matches.sort_by_key(|p| p.entity_id);
            matches
                .into_iter()
                .take(limit as usize)
                .map(Product::card)
                .collect()
        })
    }

    async fn review_summary(&self, id: ProductId) -> Result<ReviewSummary, FetchError> {
        self.call(DependencyTag::Reviews, format!("review_summary:{}", id), |s| {
            s.summaries.get(&id).copied().unwrap_or_default()
        })
    }

    async fn reviews(&self, id: ProductId, limit: u32) -> Result<Vec<Review>, FetchError> {
        self.call(DependencyTag::Reviews, format!("reviews:{}", id), |s| {
            s.reviews
                .get(&id)
                .map(|reviews| reviews.iter().take(limit as usize).cloned().collect())
                .unwrap_or_default()
        })
    }

    async fn bot_verification(&self) -> Result<BotVerification, FetchError> {
        self.call(DependencyTag::Settings, "bot_verification".to_string(), |s| {
            s.bot_verification.clone()
        })
    }

    async fn submit_contact(
        &self,
        page: PageId,
        submission: &ContactSubmission,
    ) -> Result<(), FetchError> {
        self.call(DependencyTag::Forms, format!("contact:{}", page), |s| {
            s.submissions.push((page, submission.clone()));
        })
    }
}
