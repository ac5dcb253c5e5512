use serde::{Deserialize, Serialize};

use super::MovieSummary;

/// Upper bound on movies embedded in a single prompt
pub const MAX_PROMPT_MOVIES: usize = 10;

/// Reduced movie record handed to the language model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieDigest {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub overview: Option<String>,
    pub popularity: Option<f64>,
    pub vote_average: Option<f64>,
    pub release_date: String,
}

impl From<&MovieSummary> for MovieDigest {
    fn from(movie: &MovieSummary) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            overview: movie.overview.clone(),
            popularity: movie.popularity,
            vote_average: movie.vote_average,
            release_date: movie
                .release_date
                .clone()
                .unwrap_or_else(|| "Unknown".to_string()),
        }
    }
}

/// Everything needed to ask the model for recommendations in one genre
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationRequest {
    pub genre: String,
    pub preferences: String,
    pub movies: Vec<MovieDigest>,
}

impl RecommendationRequest {
    /// Keeps at most the first [`MAX_PROMPT_MOVIES`] movies, in the order given
    pub fn new(
        genre: impl Into<String>,
        preferences: impl Into<String>,
        movies: &[MovieSummary],
    ) -> Self {
        Self {
            genre: genre.into(),
            preferences: preferences.into(),
            movies: movies
                .iter()
                .take(MAX_PROMPT_MOVIES)
                .map(MovieDigest::from)
                .collect(),
        }
    }
}

// ============================================================================
// Ollama API Types
// ============================================================================

/// Raw `/api/tags` response
#[derive(Debug, Default, Deserialize)]
pub struct ModelList {
    #[serde(default)]
    pub models: Vec<ModelEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelEntry {
    pub name: String,
}

/// Body of a non-streaming `/api/generate` call
#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub stream: bool,
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub response: Option<String>,
}
