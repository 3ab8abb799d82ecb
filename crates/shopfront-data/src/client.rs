//! Fetch client bound to the commerce API base URL.

use std::sync::Arc;
use std::time::Instant;

use serde::de::DeserializeOwned;
use serde::Serialize;
use shopfront_core::{Method, QueryParams};

use crate::dependency::DependencyTag;
use crate::transport::Transport;
use crate::{FetchError, RequestBuilder, Response};

/// HTTP client for the commerce API.
///
/// Relative URLs are joined to the base URL and default headers (auth,
/// accept) are added to every request. There is no retry or timeout layer:
/// a failed call is returned to the caller as-is.
#[derive(Clone)]
pub struct FetchClient {
    base_url: Option<String>,
    default_headers: Vec<(String, String)>,
    transport: Arc<dyn Transport>,
}

impl FetchClient {
    /// Create a client over a transport.
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self {
            base_url: None,
            default_headers: vec![("Accept".to_string(), "application/json".to_string())],
            transport: Arc::new(transport),
        }
    }

    /// Prepend a base URL to relative request paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.push((key.into(), value.into()));
        self
    }

    /// Send `Authorization: Bearer <token>` with every request.
    pub fn with_bearer_token(self, token: impl AsRef<str>) -> Self {
        let value = format!("Bearer {}", token.as_ref());
        self.with_default_header("Authorization", value)
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>, tag: DependencyTag) -> ClientRequest<'_> {
        self.request(Method::Get, url, tag)
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>, tag: DependencyTag) -> ClientRequest<'_> {
        self.request(Method::Post, url, tag)
    }

    /// Create a request with a custom method.
    pub fn request(
        &self,
        method: Method,
        url: impl Into<String>,
        tag: DependencyTag,
    ) -> ClientRequest<'_> {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) if !url.starts_with("http://") && !url.starts_with("https://") => {
                format!("{}{}", base.trim_end_matches('/'), url)
            }
            _ => url,
        };

        let builder = self
            .default_headers
            .iter()
            .fold(RequestBuilder::new(method, full_url), |builder, (k, v)| {
                builder.header(k.clone(), v.clone())
            });

        ClientRequest {
            client: self,
            builder,
            tag,
        }
    }
}

/// A request bound to a client and a dependency tag.
pub struct ClientRequest<'a> {
    client: &'a FetchClient,
    builder: RequestBuilder,
    tag: DependencyTag,
}

impl ClientRequest<'_> {
    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// Append query parameters.
    pub fn query(mut self, params: &QueryParams) -> Self {
        self.builder = self.builder.query(params);
        self
    }

    /// Set the request body as JSON.
    pub fn json_body<T: Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    /// Send the request and return the raw response.
    pub async fn send(self) -> Result<Response, FetchError> {
        let started = Instant::now();
        let method = self.builder.method();
        let url = self.builder.url().to_string();

        let result = self.client.transport.send(self.builder).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(response) => tracing::debug!(
                dependency = %self.tag,
                method = %method,
                url = %url,
                status = response.status,
                elapsed_ms,
                "commerce api call"
            ),
            Err(error) => tracing::warn!(
                dependency = %self.tag,
                method = %method,
                url = %url,
                elapsed_ms,
                error = %error,
                "commerce api call failed"
            ),
        }

        result
    }

    /// Send and decode a JSON body; non-2xx is an error.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T, FetchError> {
        let url = self.builder.url().to_string();
        self.send().await?.error_for_status(&url)?.json()
    }

    /// Like [`ClientRequest::json`], but a 404 is `Ok(None)`.
    pub async fn json_optional<T: DeserializeOwned>(self) -> Result<Option<T>, FetchError> {
        let url = self.builder.url().to_string();
        let response = self.send().await?;
        if response.is_not_found() {
            return Ok(None);
        }
        response.error_for_status(&url)?.json().map(Some)
    }

    /// Send and only check for a 2xx status.
    pub async fn execute(self) -> Result<(), FetchError> {
        let url = self.builder.url().to_string();
        self.send().await?.error_for_status(&url).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubTransport;
    use futures::executor::block_on;

    #[test]
    fn test_base_url_and_default_headers() {
        let transport = StubTransport::new(200, "{}");
        let client = FetchClient::new(transport.clone())
            .with_base_url("https://api.test/v3/")
            .with_bearer_token("secret");

        block_on(client.get("/products/7", DependencyTag::Catalog).send()).unwrap();

        let sent = transport.requests();
        assert_eq!(sent[0].url(), "https://api.test/v3/products/7");
        assert_eq!(sent[0].header_value("authorization"), Some("Bearer secret"));
        assert_eq!(sent[0].header_value("accept"), Some("application/json"));
    }

    #[test]
    fn test_absolute_url_kept() {
        let transport = StubTransport::new(200, "{}");
        let client = FetchClient::new(transport.clone()).with_base_url("https://api.test");

        block_on(client.get("https://other.test/x", DependencyTag::Content).send()).unwrap();
        assert_eq!(transport.requests()[0].url(), "https://other.test/x");
    }

    #[test]
    fn test_json_optional_not_found() {
        let client = FetchClient::new(StubTransport::new(404, "missing"));
        let result: Option<serde_json::Value> =
            block_on(client.get("/pages", DependencyTag::Content).json_optional()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_json_server_error() {
        let client = FetchClient::new(StubTransport::new(500, "boom"));
        let result: Result<serde_json::Value, _> =
            block_on(client.get("/products/featured", DependencyTag::Recommendations).json());
        assert_eq!(result.unwrap_err().status(), Some(500));
    }

    #[test]
    fn test_json_optional_server_error_is_error() {
        let client = FetchClient::new(StubTransport::new(503, ""));
        let result: Result<Option<serde_json::Value>, _> =
            block_on(client.get("/products/1", DependencyTag::Catalog).json_optional());
        assert!(result.is_err());
    }
}
