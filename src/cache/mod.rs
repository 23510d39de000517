//! Caching subsystem.
//!
//! [`CachingBreedFetcher`] wraps any [`BreedFetcher`](crate::BreedFetcher)
//! and memoizes successful lookups:
//!
//! - Keyed on [`normalize_breed()`]: trimmed and lowercased, so `"Hound"`,
//!   `"hound"` and `"  HOUND  "` share one entry.
//! - Only successes are stored. A [`BreedNotFound`](crate::BreedNotFound)
//!   is passed through untouched and the next call tries the delegate again.
//! - Entries live as long as the fetcher. There is no capacity bound, TTL
//!   or eviction.
//! - [`CachingBreedFetcher::calls_made()`] counts delegate invocations,
//!   including the ones that failed.
//!
//! Construct directly from an `Arc<dyn BreedFetcher>`, or through
//! [`CachingBreedFetcher::builder()`], which rejects a missing delegate.

pub mod builder;
pub mod fetcher;

pub use builder::CachingFetcherBuilder;
pub use fetcher::{CachingBreedFetcher, normalize_breed};
