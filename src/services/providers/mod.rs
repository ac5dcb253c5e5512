/// Movie metadata provider abstraction
///
/// Sessions talk to the metadata service only through [`MetadataProvider`], so
/// the TMDB client can be swapped for a mock in tests.
use crate::{
    error::AppResult,
    models::{DetailExtras, DiscoverQuery, Genre, MovieDetail, MovieSummary},
};

pub mod tmdb;

pub use tmdb::TmdbProvider;

/// Trait for movie metadata providers
///
/// Every operation is a single request. A non-success status surfaces as
/// [`crate::error::AppError::Status`]; callers decide how to report it.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MetadataProvider: Send + Sync {
    /// All movie genres, in service order
    async fn list_genres(&self) -> AppResult<Vec<Genre>>;

    /// Free-text title search, one page of results
    async fn search_movies(&self, query: &str, page: u32) -> AppResult<Vec<MovieSummary>>;

    /// Popular movies matching the filters, adult content excluded
    ///
    /// Results keep the service's descending-popularity order.
    async fn discover_movies(&self, query: &DiscoverQuery) -> AppResult<Vec<MovieSummary>>;

    /// Full record for one movie with the requested sub-resources embedded
    async fn movie_details(&self, movie_id: u64, extras: DetailExtras) -> AppResult<MovieDetail>;

    /// Movies the service recommends for a given movie
    async fn movie_recommendations(&self, movie_id: u64) -> AppResult<Vec<MovieSummary>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
