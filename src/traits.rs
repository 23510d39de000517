//! The fetch contract shared by the HTTP client and the caching decorator.
//!
//! Implementations map every anomaly to [`BreedNotFound`]; that is the only
//! failure the contract exposes. Decorators such as
//! [`CachingBreedFetcher`](crate::CachingBreedFetcher) wrap any implementation
//! behind `Arc<dyn BreedFetcher>`.
//!
//! # Example
//!
//! ```ignore
//! async fn sub_breeds(&self, breed: &str) -> FetchResult<Vec<String>> {
//!     match self.table.get(breed) {
//!         Some(list) => Ok(list.clone()),
//!         None => Err(BreedNotFound::new(format!("breed not found: {breed}"))),
//!     }
//! }
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::FetchResult;

/// Source of sub-breed names for a breed.
#[async_trait]
pub trait BreedFetcher: Send + Sync {
    /// Fetcher name for logging/debugging.
    fn name(&self) -> &str;

    /// List the sub-breeds of `breed`, in the order the source reports them.
    ///
    /// An absent breed is passed as the empty string. An empty list is a
    /// valid answer, distinct from [`BreedNotFound`](crate::BreedNotFound).
    async fn sub_breeds(&self, breed: &str) -> FetchResult<Vec<String>>;
}

#[async_trait]
impl<T: BreedFetcher + ?Sized> BreedFetcher for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn sub_breeds(&self, breed: &str) -> FetchResult<Vec<String>> {
        (**self).sub_breeds(breed).await
    }
}

#[async_trait]
impl<T: BreedFetcher + ?Sized> BreedFetcher for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn sub_breeds(&self, breed: &str) -> FetchResult<Vec<String>> {
        (**self).sub_breeds(breed).await
    }
}
