//! dogapi - sub-breed lookups with a memoizing fetcher
//!
//! This crate provides a narrow `BreedFetcher` trait that lists the
//! sub-breeds of a dog breed, an HTTP implementation backed by the public
//! dog.ceo API, and `CachingBreedFetcher`, a decorator that memoizes
//! successful lookups of any fetcher.
//!
//! # Example
//!
//! ```rust,no_run
//! use dogapi::{BreedFetcher, CachingBreedFetcher, DogApiConfig};
//!
//! #[tokio::main]
//! async fn main() -> dogapi::Result<()> {
//!     let fetcher = CachingBreedFetcher::builder()
//!         .dog_ceo(DogApiConfig::default())
//!         .build()?;
//!
//!     match fetcher.sub_breeds("hound").await {
//!         Ok(names) => println!("hound: {}", names.join(", ")),
//!         Err(e) => println!("no data: {e}"),
//!     }
//!
//!     // Same key after normalization: served from the cache on success.
//!     let _ = fetcher.sub_breeds("  Hound ").await;
//!     println!("upstream calls: {}", fetcher.calls_made());
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod providers;
pub mod traits;

// Re-export main types at crate root
pub use cache::{CachingBreedFetcher, CachingFetcherBuilder, normalize_breed};
pub use config::DogApiConfig;
pub use error::{BreedNotFound, DogApiError, FetchResult, Result};
pub use traits::BreedFetcher;
