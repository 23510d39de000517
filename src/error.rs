//! Error types

/// The sole failure outcome of a [`BreedFetcher`](crate::BreedFetcher) lookup.
///
/// Covers both a genuinely unknown breed and any upstream anomaly
/// (transport failure, non-success status, unparsable payload). Callers get
/// a single branch: no data is available for this breed right now.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct BreedNotFound {
    message: String,
}

impl BreedNotFound {
    /// Create a new error with a human-readable diagnostic.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The diagnostic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Crate-level error types.
///
/// Fetch lookups only ever fail with [`BreedNotFound`]; the other variants
/// come from constructing fetchers and loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum DogApiError {
    /// A caching fetcher was built without a delegate. Indicates misuse,
    /// not data absence.
    #[error("no delegate fetcher configured")]
    NoFetcher,

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("HTTP client error: {0}")]
    Http(String),

    #[error(transparent)]
    BreedNotFound(#[from] BreedNotFound),
}

/// Result type alias for crate operations
pub type Result<T> = std::result::Result<T, DogApiError>;

/// Result type of the fetch contract.
pub type FetchResult<T> = std::result::Result<T, BreedNotFound>;
