//! Builder for caching fetchers

use std::sync::Arc;

use super::fetcher::CachingBreedFetcher;
use crate::traits::BreedFetcher;
use crate::{DogApiError, Result};

#[cfg(feature = "dog-ceo")]
use crate::DogApiConfig;
#[cfg(feature = "dog-ceo")]
use crate::providers::DogCeoClient;

/// Builder for [`CachingBreedFetcher`].
///
/// A delegate is mandatory. Building without one fails immediately with
/// [`DogApiError::NoFetcher`] rather than at the first lookup.
///
/// ```rust
/// # use dogapi::{CachingBreedFetcher, DogApiError};
/// let err = CachingBreedFetcher::builder().build().err();
/// assert!(matches!(err, Some(DogApiError::NoFetcher)));
/// ```
#[derive(Default)]
pub struct CachingFetcherBuilder {
    delegate: Option<Arc<dyn BreedFetcher>>,
    #[cfg(feature = "dog-ceo")]
    dog_ceo: Option<DogApiConfig>,
}

impl CachingFetcherBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing fetcher.
    pub fn delegate(mut self, fetcher: Arc<dyn BreedFetcher>) -> Self {
        self.delegate = Some(fetcher);
        self
    }

    /// Wrap a `DogCeoClient` built from `config`.
    ///
    /// Ignored if an explicit [`delegate()`](Self::delegate) is also set.
    #[cfg(feature = "dog-ceo")]
    pub fn dog_ceo(mut self, config: DogApiConfig) -> Self {
        self.dog_ceo = Some(config);
        self
    }

    /// Build the caching fetcher.
    pub fn build(self) -> Result<CachingBreedFetcher> {
        let delegate = match &self.delegate {
            Some(fetcher) => Arc::clone(fetcher),
            None => self.configured_client()?.ok_or(DogApiError::NoFetcher)?,
        };
        Ok(CachingBreedFetcher::new(delegate))
    }

    #[cfg(feature = "dog-ceo")]
    fn configured_client(&self) -> Result<Option<Arc<dyn BreedFetcher>>> {
        match &self.dog_ceo {
            Some(config) => {
                let client: Arc<dyn BreedFetcher> = Arc::new(DogCeoClient::new(config.clone())?);
                Ok(Some(client))
            }
            None => Ok(None),
        }
    }

    #[cfg(not(feature = "dog-ceo"))]
    fn configured_client(&self) -> Result<Option<Arc<dyn BreedFetcher>>> {
        Ok(None)
    }
}
