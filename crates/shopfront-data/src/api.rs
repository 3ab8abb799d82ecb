//! The commerce API as seen by the storefront.

use async_trait::async_trait;
use shopfront_commerce::prelude::*;
use shopfront_core::{CommerceSettings, QueryParams};

use crate::client::FetchClient;
use crate::dependency::DependencyTag;
use crate::transport::Transport;
use crate::FetchError;

/// Read-mostly access to the remote commerce API.
///
/// Lookups that can legitimately miss (`product`, `page`) return
/// `Ok(None)` for a 404. Every other failure is an error for the caller to
/// surface; nothing here retries.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait CommerceApi: Send + Sync {
    /// A product with the given option selection applied.
    async fn product(
        &self,
        id: ProductId,
        selection: &OptionSelection,
    ) -> Result<Option<Product>, FetchError>;

    /// A content page by storefront path.
    async fn page(&self, path: &str) -> Result<Option<WebPage>, FetchError>;

    async fn featured_products(&self, limit: u32) -> Result<Vec<ProductCard>, FetchError>;

    async fn search_products(&self, term: &str, limit: u32)
        -> Result<Vec<ProductCard>, FetchError>;

    async fn review_summary(&self, id: ProductId) -> Result<ReviewSummary, FetchError>;

    async fn reviews(&self, id: ProductId, limit: u32) -> Result<Vec<Review>, FetchError>;

    async fn bot_verification(&self) -> Result<BotVerification, FetchError>;

    /// Forward a validated contact form for a contact page.
    async fn submit_contact(
        &self,
        page: PageId,
        submission: &ContactSubmission,
    ) -> Result<(), FetchError>;
}

/// [`CommerceApi`] over JSON/HTTP.
#[derive(Clone)]
pub struct HttpCommerceApi {
    client: FetchClient,
}

impl HttpCommerceApi {
    pub fn new(client: FetchClient) -> Self {
        Self { client }
    }

    /// Client configured from store settings: base URL, token and channel.
    pub fn from_settings(settings: &CommerceSettings, transport: impl Transport + 'static) -> Self {
        let mut client = FetchClient::new(transport)
            .with_base_url(settings.api_url.clone())
            .with_default_header("X-Channel-Id", settings.channel_id.to_string());
        if let Some(token) = &settings.access_token {
            client = client.with_bearer_token(token);
        }
        Self::new(client)
    }
}

fn limit_query(limit: u32) -> QueryParams {
    [("limit", limit.to_string())].into_iter().collect()
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl CommerceApi for HttpCommerceApi {
    async fn product(
        &self,
        id: ProductId,
        selection: &OptionSelection,
    ) -> Result<Option<Product>, FetchError> {
        self.client
            .get(format!("/products/{}", id), DependencyTag::Catalog)
            .query(&selection.to_query())
            .json_optional()
            .await
    }

    async fn page(&self, path: &str) -> Result<Option<WebPage>, FetchError> {
        let query: QueryParams = [("path", path)].into_iter().collect();
        self.client
            .get("/pages", DependencyTag::Content)
            .query(&query)
            .json_optional()
            .await
    }

    async fn featured_products(&self, limit: u32) -> Result<Vec<ProductCard>, FetchError> {
        self.client
            .get("/products/featured", DependencyTag::Recommendations)
            .query(&limit_query(limit))
            .json()
            .await
    }

    async fn search_products(
        &self,
        term: &str,
        limit: u32,
    ) -> Result<Vec<ProductCard>, FetchError> {
        let mut query: QueryParams = [("term", term)].into_iter().collect();
        query.append("limit", limit.to_string());
        self.client
            .get("/search/products", DependencyTag::Search)
            .query(&query)
            .json()
            .await
    }

    async fn review_summary(&self, id: ProductId) -> Result<ReviewSummary, FetchError> {
        self.client
            .get(format!("/products/{}/reviews/summary", id), DependencyTag::Reviews)
            .json()
            .await
    }

    async fn reviews(&self, id: ProductId, limit: u32) -> Result<Vec<Review>, FetchError> {
        self.client
            .get(format!("/products/{}/reviews", id), DependencyTag::Reviews)
            .query(&limit_query(limit))
            .json()
            .await
    }

    async fn bot_verification(&self) -> Result<BotVerification, FetchError> {
        self.client
            .get("/settings/bot-verification", DependencyTag::Settings)
            .json()
            .await
    }

    async fn submit_contact(
        &self,
        page: PageId,
        submission: &ContactSubmission,
    ) -> Result<(), FetchError> {
        self.client
            .post(format!("/pages/{}/contact", page), DependencyTag::Forms)
            .json_body(submission)?
            .execute()
            .await
    }
}
