//! Fetcher implementations backed by remote services.
//!
//! Each client implements [`BreedFetcher`](crate::BreedFetcher) and folds
//! its own failure modes into [`BreedNotFound`](crate::BreedNotFound).

#[cfg(feature = "dog-ceo")]
pub mod dog_ceo;

#[cfg(feature = "dog-ceo")]
pub use dog_ceo::DogCeoClient;
