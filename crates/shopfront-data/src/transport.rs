//! Platform transports that actually put requests on the wire.
//!
//! Spin's outbound HTTP is used inside the component; native builds (the dev
//! server) use `reqwest`. Tests plug in their own implementation.

use async_trait::async_trait;

use crate::{FetchError, RequestBuilder, Response};

/// Sends a request and returns the raw response.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait Transport: Send + Sync {
    async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError>;
}

/// Outbound HTTP through the Spin host.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct SpinTransport;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl Transport for SpinTransport {
    async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        use shopfront_core::Method;
        use spin_sdk::http::{Method as SpinMethod, Request};

        let RequestBuilder {
            method,
            url,
            headers,
            body,
        } = request;

        let method = match method {
            Method::Get => SpinMethod::Get,
            Method::Head => SpinMethod::Head,
            Method::Post => SpinMethod::Post,
            Method::Put => SpinMethod::Put,
            Method::Delete => SpinMethod::Delete,
            Method::Patch => SpinMethod::Patch,
            Method::Options => SpinMethod::Options,
        };

        let mut builder = Request::builder();
        builder.method(method).uri(url.as_str());
        for (key, value) in &headers {
            builder.header(key.as_str(), value.as_str());
        }
        let request = builder.body(body.unwrap_or_default()).build();

        let response: spin_sdk::http::Response = spin_sdk::http::send(request)
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = *response.status();
        let headers = response
            .headers()
            .map(|(k, v)| (k.to_string(), v.as_str().unwrap_or("").to_string()))
            .collect();

        Ok(Response::new(status, headers, response.into_body()))
    }
}

/// Outbound HTTP through `reqwest`, for native builds.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[cfg(not(target_arch = "wasm32"))]
impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        let RequestBuilder {
            method,
            url,
            headers,
            body,
        } = request;

        let method = reqwest::Method::from_bytes(method.as_str().as_bytes())
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let mut builder = self.client.request(method, url.as_str());
        for (key, value) in &headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_builder() {
                FetchError::InvalidUrl(url.clone())
            } else {
                FetchError::Request(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(k, v)| (k.as_str().to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?
            .to_vec();

        Ok(Response::new(status, headers, body))
    }
}

/// The transport for the current target.
#[cfg(target_arch = "wasm32")]
pub fn platform_transport() -> SpinTransport {
    SpinTransport
}

/// The transport for the current target.
#[cfg(not(target_arch = "wasm32"))]
pub fn platform_transport() -> ReqwestTransport {
    ReqwestTransport::new()
}
