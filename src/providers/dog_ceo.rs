//! dog.ceo API client for sub-breed listings.
//!
//! Queries `GET {base}/breed/{breed}/list` and reads the JSON envelope:
//!
//! ```json
//! { "status": "success", "message": ["afghan", "basset"] }
//! ```
//!
//! See: <https://dog.ceo/dog-api/documentation/sub-breed>

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::cache::normalize_breed;
use crate::error::FetchResult;
use crate::traits::BreedFetcher;
use crate::{BreedNotFound, DogApiConfig, DogApiError, Result};

/// Response envelope shared by every dog.ceo endpoint.
///
/// `message` is an array on success and an error string otherwise.
#[derive(Debug, Deserialize)]
struct BreedListEnvelope {
    #[serde(default)]
    status: String,
    #[serde(default)]
    message: Value,
}

/// [`BreedFetcher`] backed by the dog.ceo HTTP API.
///
/// Every failure (blank breed, transport error, non-2xx, bad payload,
/// non-`success` envelope) is reported as [`BreedNotFound`].
#[derive(Clone)]
pub struct DogCeoClient {
    http: Client,
    base_url: Url,
}

impl DogCeoClient {
    /// Create a client from configuration.
    ///
    /// Fails if the config is invalid (unparsable base URL, zero timeout) or
    /// the HTTP client cannot be built.
    pub fn new(config: DogApiConfig) -> Result<Self> {
        config.validate()?;
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            DogApiError::Configuration(format!("invalid base URL '{}': {e}", config.base_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(DogApiError::Configuration(format!(
                "base URL '{}' cannot carry a path",
                config.base_url
            )));
        }

        let mut builder = Client::builder().timeout(config.request_timeout());
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        let http = builder
            .build()
            .map_err(|e| DogApiError::Http(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    /// Create a client with a custom base URL (for testing with wiremock).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Self::new(DogApiConfig::new().base_url(base_url))
    }

    /// Build `{base}/breed/{key}/list`, encoding `key` as one path segment.
    fn breed_list_url(&self, key: &str) -> FetchResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| BreedNotFound::new(format!("failed to fetch sub-breeds for: {key}")))?
            .pop_if_empty()
            .extend(["breed", key, "list"]);
        Ok(url)
    }
}

#[async_trait]
impl BreedFetcher for DogCeoClient {
    fn name(&self) -> &str {
        "dog-ceo"
    }

    async fn sub_breeds(&self, breed: &str) -> FetchResult<Vec<String>> {
        let key = normalize_breed(breed);
        if key.is_empty() {
            return Err(BreedNotFound::new("breed is blank"));
        }

        let url = self.breed_list_url(&key)?;
        debug!(url = %url, "fetching sub-breeds");

        let response = self.http.get(url.clone()).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "sub-breed request failed");
            fetch_failed(breed)
        })?;

        let status = response.status();
        if !status.is_success() {
            debug!(url = %url, status = status.as_u16(), "sub-breed request rejected");
            return Err(not_found(breed));
        }

        let body = response.text().await.map_err(|e| {
            warn!(url = %url, error = %e, "failed to read sub-breed response body");
            fetch_failed(breed)
        })?;

        parse_envelope(&body, breed)
    }
}

/// Translate a response body into the sub-breed list.
fn parse_envelope(body: &str, breed: &str) -> FetchResult<Vec<String>> {
    if body.trim().is_empty() {
        return Err(BreedNotFound::new("empty API response"));
    }

    let value: Value = serde_json::from_str(body).map_err(|e| {
        debug!(breed, error = %e, "malformed sub-breed response");
        fetch_failed(breed)
    })?;
    // Only a JSON object is an envelope; arrays would fill fields by position.
    if !value.is_object() {
        debug!(breed, body = %value, "sub-breed response is not a JSON object");
        return Err(fetch_failed(breed));
    }
    let envelope: BreedListEnvelope = serde_json::from_value(value).map_err(|e| {
        debug!(breed, error = %e, "malformed sub-breed envelope");
        fetch_failed(breed)
    })?;

    if !envelope.status.eq_ignore_ascii_case("success") {
        debug!(
            breed,
            status = %envelope.status,
            upstream = %envelope.message,
            "upstream reported failure"
        );
        return Err(not_found(breed));
    }

    match envelope.message {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(name) => Ok(name),
                other => {
                    debug!(breed, entry = %other, "non-string sub-breed entry");
                    Err(fetch_failed(breed))
                }
            })
            .collect(),
        _ => Ok(Vec::new()),
    }
}

fn not_found(breed: &str) -> BreedNotFound {
    BreedNotFound::new(format!("breed not found: {breed}"))
}

fn fetch_failed(breed: &str) -> BreedNotFound {
    BreedNotFound::new(format!("failed to fetch sub-breeds for: {breed}"))
}
