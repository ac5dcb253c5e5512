/// TMDB (The Movie Database) provider
///
/// Wraps the v3 REST API. Every request carries the API key as the `api_key`
/// query parameter.
///
/// Endpoints:
/// - `/genre/movie/list` → `{"genres": [...]}`
/// - `/search/movie`, `/discover/movie`, `/movie/{id}/recommendations` → `{"results": [...]}`
/// - `/movie/{id}` → flat object, optionally with appended sub-resources
use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{DetailExtras, DiscoverQuery, Genre, GenreList, MovieDetail, MovieSummary, Page},
    services::providers::MetadataProvider,
};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl TmdbProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.tmdb_api_key.clone(), config.tmdb_api_url.clone())
    }

    /// Issues a GET against `path` and decodes the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> AppResult<T> {
        let url = format!("{}{}", self.api_url, path);

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(path = %path, status = status.as_u16(), "TMDB request failed");
            return Err(AppError::Status(status));
        }

        let response_text = response.text().await?;
        tracing::debug!(path = %path, response = %response_text, "Raw TMDB API response");

        serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                path = %path,
                "Failed to deserialize TMDB response"
            );
            AppError::Decode(e)
        })
    }

    fn discover_params(query: &DiscoverQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("sort_by", "popularity.desc".to_string()),
            ("include_adult", "false".to_string()),
            ("include_video", "false".to_string()),
            ("page", query.page.to_string()),
        ];

        if let Some(genre_id) = query.genre_id {
            params.push(("with_genres", genre_id.to_string()));
        }
        if let Some(year) = query.year {
            params.push(("primary_release_year", year.to_string()));
        }

        params
    }
}

#[async_trait::async_trait]
impl MetadataProvider for TmdbProvider {
    async fn list_genres(&self) -> AppResult<Vec<Genre>> {
        let list: GenreList = self.get_json("/genre/movie/list", &[]).await?;

        tracing::info!(genres = list.genres.len(), provider = "tmdb", "Genres fetched");

        Ok(list.genres)
    }

    async fn search_movies(&self, query: &str, page: u32) -> AppResult<Vec<MovieSummary>> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }

        let results: Page<MovieSummary> = self
            .get_json(
                "/search/movie",
                &[
                    ("query", query.to_string()),
                    ("page", page.to_string()),
                    ("include_adult", "false".to_string()),
                ],
            )
            .await?;

        tracing::info!(
            query = %query,
            results = results.results.len(),
            provider = "tmdb",
            "Movie search completed"
        );

        Ok(results.results)
    }

    async fn discover_movies(&self, query: &DiscoverQuery) -> AppResult<Vec<MovieSummary>> {
        let results: Page<MovieSummary> = self
            .get_json("/discover/movie", &Self::discover_params(query))
            .await?;

        tracing::info!(
            genre_id = ?query.genre_id,
            year = ?query.year,
            results = results.results.len(),
            provider = "tmdb",
            "Discover completed"
        );

        Ok(results.results)
    }

    async fn movie_details(&self, movie_id: u64, extras: DetailExtras) -> AppResult<MovieDetail> {
        let detail: MovieDetail = self
            .get_json(
                &format!("/movie/{}", movie_id),
                &[(
                    "append_to_response",
                    extras.append_to_response().to_string(),
                )],
            )
            .await?;

        tracing::info!(
            movie_id = movie_id,
            cast = detail.cast().len(),
            provider = "tmdb",
            "Movie details fetched"
        );

        Ok(detail)
    }

    async fn movie_recommendations(&self, movie_id: u64) -> AppResult<Vec<MovieSummary>> {
        let results: Page<MovieSummary> = self
            .get_json(&format!("/movie/{}/recommendations", movie_id), &[])
            .await?;

        tracing::info!(
            movie_id = movie_id,
            results = results.results.len(),
            provider = "tmdb",
            "Recommendations fetched"
        );

        Ok(results.results)
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
