//! Memoizing decorator for [`BreedFetcher`] implementations.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use moka::sync::Cache;
use tracing::debug;

use super::builder::CachingFetcherBuilder;
use crate::error::FetchResult;
use crate::traits::BreedFetcher;

/// Derive the cache key for a breed name.
///
/// Strips surrounding whitespace and lowercases with Unicode's
/// locale-independent mapping. An absent breed (the empty string) and a
/// whitespace-only one both map to `""`.
///
/// ```rust
/// # use dogapi::normalize_breed;
/// assert_eq!(normalize_breed("  HOUND "), "hound");
/// assert_eq!(normalize_breed("   "), "");
/// ```
pub fn normalize_breed(breed: &str) -> String {
    breed.trim().to_lowercase()
}

/// Caches successful sub-breed lookups of a delegate fetcher.
///
/// Thread-safe: share it behind an `Arc` and call it from any number of
/// tasks. Concurrent misses for the same key are not coalesced; each one
/// reaches the delegate and is counted, and the last successful store wins.
///
/// ```rust,no_run
/// # use std::sync::Arc;
/// # use dogapi::{BreedFetcher, CachingBreedFetcher, DogApiConfig};
/// # use dogapi::providers::DogCeoClient;
/// # async fn run() -> dogapi::Result<()> {
/// let client = DogCeoClient::new(DogApiConfig::default())?;
/// let fetcher = CachingBreedFetcher::new(Arc::new(client));
///
/// let hounds = fetcher.sub_breeds("hound").await?;
/// let again = fetcher.sub_breeds("  Hound ").await?;
/// assert_eq!(hounds, again);
/// assert_eq!(fetcher.calls_made(), 1);
/// # Ok(())
/// # }
/// ```
pub struct CachingBreedFetcher {
    delegate: Arc<dyn BreedFetcher>,
    /// Normalized breed → immutable snapshot of the delegate's answer.
    cache: Cache<String, Arc<[String]>>,
    calls_made: AtomicU64,
}

impl CachingBreedFetcher {
    /// Wrap `delegate` with an empty cache and a zeroed call counter.
    pub fn new(delegate: Arc<dyn BreedFetcher>) -> Self {
        Self {
            delegate,
            // No max_capacity and no TTL: entries are never evicted.
            cache: Cache::builder().build(),
            calls_made: AtomicU64::new(0),
        }
    }

    /// Create a builder. `build()` fails if no delegate was supplied.
    pub fn builder() -> CachingFetcherBuilder {
        CachingFetcherBuilder::new()
    }

    /// Number of times the delegate has been invoked.
    ///
    /// Counted before each delegate call, so failed lookups are included.
    /// Cache hits never change it.
    pub fn calls_made(&self) -> u64 {
        self.calls_made.load(Ordering::Relaxed)
    }

    /// Whether a successful lookup for `breed` (after normalization) is cached.
    pub fn is_cached(&self, breed: &str) -> bool {
        self.cache.contains_key(normalize_breed(breed).as_str())
    }

    /// Look up sub-breeds and return the shared immutable snapshot.
    ///
    /// Same semantics as [`BreedFetcher::sub_breeds`], but hands out the
    /// cached slice itself instead of a copy.
    pub async fn sub_breeds_shared(&self, breed: &str) -> FetchResult<Arc<[String]>> {
        let key = normalize_breed(breed);

        if let Some(hit) = self.cache.get(key.as_str()) {
            debug!(breed = %key, "sub-breed cache hit");
            return Ok(hit);
        }

        let attempt = self.calls_made.fetch_add(1, Ordering::Relaxed) + 1;
        debug!(
            breed = %key,
            fetcher = self.delegate.name(),
            calls_made = attempt,
            "sub-breed cache miss, calling delegate"
        );

        // The delegate sees the caller's original spelling, not the key.
        let list = match self.delegate.sub_breeds(breed).await {
            Ok(list) => list,
            Err(e) => {
                debug!(breed = %key, error = %e, "delegate found no sub-breeds, not caching");
                return Err(e);
            }
        };

        let snapshot: Arc<[String]> = list.into();
        self.cache.insert(key, Arc::clone(&snapshot));
        Ok(snapshot)
    }
}

#[async_trait]
impl BreedFetcher for CachingBreedFetcher {
    fn name(&self) -> &str {
        "caching"
    }

    /// Returns an owned copy of the cached snapshot; mutating it cannot
    /// affect later lookups.
    async fn sub_breeds(&self, breed: &str) -> FetchResult<Vec<String>> {
        self.sub_breeds_shared(breed)
            .await
            .map(|snapshot| snapshot.to_vec())
    }
}
