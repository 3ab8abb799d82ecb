//! Store configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML config {path}: {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to parse JSON config {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Top-level storefront configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store identity and listing sizes.
    #[serde(default)]
    pub store: StoreSettings,

    /// Remote commerce API.
    #[serde(default)]
    pub commerce: CommerceSettings,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingSettings,

    /// Native development server.
    #[serde(default)]
    pub server: ServerSettings,
}

/// Store identity and listing sizes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Store name shown in titles and the header.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// Number of featured products on the home and product pages.
    #[serde(default = "default_featured_limit")]
    pub featured_limit: u32,

    /// Maximum search results shown.
    #[serde(default = "default_search_limit")]
    pub search_limit: u32,

    /// Number of reviews listed on a product page.
    #[serde(default = "default_reviews_limit")]
    pub reviews_limit: u32,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            featured_limit: default_featured_limit(),
            search_limit: default_search_limit(),
            reviews_limit: default_reviews_limit(),
        }
    }
}

fn default_store_name() -> String {
    "Shopfront".to_string()
}

fn default_featured_limit() -> u32 {
    4
}

fn default_search_limit() -> u32 {
    24
}

fn default_reviews_limit() -> u32 {
    5
}

/// Commerce API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommerceSettings {
    /// Base URL of the commerce API.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Bearer token sent with every request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// Sales channel the storefront renders.
    #[serde(default = "default_channel_id")]
    pub channel_id: u32,
}

impl Default for CommerceSettings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            access_token: None,
            channel_id: default_channel_id(),
        }
    }
}

fn default_api_url() -> String {
    "http://127.0.0.1:4000/api".to_string()
}

fn default_channel_id() -> u32 {
    1
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default filter directive (overridden by `RUST_LOG`).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `json` or `human`.
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

/// Native development server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Address to bind, e.g. `127.0.0.1:3000`.
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

impl StoreConfig {
    /// Load config from a TOML file (or JSON, by extension).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;

        if display.ends_with(".json") {
            serde_json::from_str(&content).map_err(|source| ConfigError::Json {
                path: display,
                source,
            })
        } else {
            Self::from_toml_str(&content).map_err(|source| ConfigError::Toml {
                path: display,
                source,
            })
        }
    }

    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Defaults plus `SHOPFRONT_*` environment overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_overrides()
    }

    /// Apply `SHOPFRONT_*` environment overrides.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup (environment, Spin variables).
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(name) = lookup("SHOPFRONT_STORE_NAME") {
            self.store.name = name;
        }
        if let Some(url) = lookup("SHOPFRONT_API_URL") {
            self.commerce.api_url = url;
        }
        if let Some(token) = lookup("SHOPFRONT_API_TOKEN") {
            self.commerce.access_token = Some(token);
        }
        if let Some(channel) = lookup("SHOPFRONT_CHANNEL_ID") {
            self.commerce.channel_id = parse_value("SHOPFRONT_CHANNEL_ID", &channel)?;
        }
        if let Some(level) = lookup("SHOPFRONT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("SHOPFRONT_LOG_FORMAT") {
            self.logging.format = format;
        }
        if let Some(bind) = lookup("SHOPFRONT_BIND") {
            self.server.bind = bind;
        }

        Ok(self)
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}
