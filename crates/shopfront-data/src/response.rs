//! HTTP response handling.

use serde::de::DeserializeOwned;
use std::collections::HashMap;

use crate::FetchError;

/// An HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The response headers.
    pub headers: HashMap<String, String>,
    /// The response body.
    pub body: Vec<u8>,
}

/// Longest upstream error body quoted in a [`FetchError::Http`] message.
const ERROR_BODY_LIMIT: usize = 200;

impl Response {
    pub fn new(status: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The commerce API answers 404 for unknown products and pages.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Body as UTF-8 text.
    pub fn text(&self) -> Result<String, FetchError> {
        std::str::from_utf8(&self.body)
            .map(str::to_owned)
            .map_err(|e| FetchError::Parse(format!("Invalid UTF-8: {}", e)))
    }

    /// Decode a JSON body.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Turn a non-2xx response into [`FetchError::Http`], quoting the start
    /// of the body.
    pub fn error_for_status(self, url: &str) -> Result<Self, FetchError> {
        if self.is_success() {
            return Ok(self);
        }

        let body = String::from_utf8_lossy(&self.body);
        let message = match body.char_indices().nth(ERROR_BODY_LIMIT) {
            Some((cut, _)) => format!("{}...", &body[..cut]),
            None if body.trim().is_empty() => "empty response body".to_string(),
            None => body.into_owned(),
        };

        Err(FetchError::Http {
            status: self.status,
            url: url.to_string(),
            message,
        })
    }
}
