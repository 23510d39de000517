//! Configuration for the dog.ceo HTTP fetcher.
//!
//! Built in code via the consuming setters, or deserialized from TOML:
//!
//! ```toml
//! base_url = "https://dog.ceo/api"
//! timeout_ms = 2500
//! user_agent = "kennel-bot/1.0"
//! ```
//!
//! Every field is optional in TOML and falls back to its default.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::{DogApiError, Result};

/// Default base URL of the public dog.ceo API.
pub const DEFAULT_BASE_URL: &str = "https://dog.ceo/api";

/// Settings for the dog.ceo HTTP fetcher (`providers::DogCeoClient`).
///
/// ```rust
/// # use dogapi::DogApiConfig;
/// # use std::time::Duration;
/// let config = DogApiConfig::new()
///     .timeout(Duration::from_millis(500))
///     .user_agent("kennel-bot/1.0");
/// assert_eq!(config.timeout_ms, 500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DogApiConfig {
    /// API root; requests go to `{base_url}/breed/{breed}/list`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request timeout in milliseconds (default: 30,000). Must be non-zero.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Optional `User-Agent` header value.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for DogApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            user_agent: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    30_000
}

impl DogApiConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at a different API root (e.g. a stub server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout. Sub-millisecond precision is truncated.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the `User-Agent` header sent with each request.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Reject settings no client could work with.
    pub fn validate(&self) -> Result<()> {
        if self.timeout_ms == 0 {
            return Err(DogApiError::Configuration(
                "timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse a config from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| DogApiError::Configuration(format!("failed to parse config: {e}")))
    }

    /// Load a config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            DogApiError::Configuration(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }
}
