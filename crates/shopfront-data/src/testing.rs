//! Canned transport for client tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::{FetchError, RequestBuilder, Response, Transport};

/// Answers every request from a route table and records what was sent.
#[derive(Clone, Default)]
pub(crate) struct StubTransport {
    routes: Arc<Vec<(String, u16, String)>>,
    fallback: (u16, String),
    sent: Arc<Mutex<Vec<RequestBuilder>>>,
}

impl StubTransport {
    /// Answer everything with one response.
    pub(crate) fn new(status: u16, body: &str) -> Self {
        Self {
            fallback: (status, body.to_string()),
            ..Default::default()
        }
    }

    /// Answer by URL path (query ignored); unknown paths get a 404.
    pub(crate) fn routes(routes: &[(&str, u16, &str)]) -> Self {
        Self {
            routes: Arc::new(
                routes
                    .iter()
                    .map(|(path, status, body)| (path.to_string(), *status, body.to_string()))
                    .collect(),
            ),
            fallback: (404, String::new()),
            sent: Arc::default(),
        }
    }

    pub(crate) fn requests(&self) -> Vec<RequestBuilder> {
        self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl Transport for StubTransport {
    async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        let path = request.url().split('?').next().unwrap_or("").to_string();
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(request);
        }

        let (status, body) = self
            .routes
            .iter()
            .find(|(route, _, _)| path.ends_with(route.as_str()))
            .map(|(_, status, body)| (*status, body.clone()))
            .unwrap_or_else(|| self.fallback.clone());

        Ok(Response::new(status, HashMap::new(), body.into_bytes()))
    }
}
