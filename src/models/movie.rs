use serde::{Deserialize, Serialize};

use super::Genre;

// ============================================================================
// TMDB Movie Types
// ============================================================================
//
// Every externally sourced field is optional. TMDB omits or nulls fields
// freely; the formatting layer decides what to show in their place.

/// A movie as returned by the search, discover and recommendation endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    /// ISO date (`YYYY-MM-DD`), sometimes empty
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub popularity: Option<f64>,
}

/// Paginated list envelope shared by the list endpoints
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            page: None,
            results: Vec::new(),
        }
    }
}

/// One entry of a movie's cast
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CastMember {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub character: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Keyword {
    pub id: u64,
    pub name: String,
}

/// `keywords` sub-resource appended to a detail request
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Keywords {
    #[serde(default)]
    pub keywords: Vec<Keyword>,
}

/// Full record from `/movie/{id}`, with any appended sub-resources
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MovieDetail {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub vote_count: Option<u64>,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    /// Minutes
    #[serde(default)]
    pub runtime: Option<u32>,
    /// 0 means unknown
    #[serde(default)]
    pub budget: Option<u64>,
    /// 0 means unknown
    #[serde(default)]
    pub revenue: Option<u64>,
    #[serde(default)]
    pub credits: Option<Credits>,
    #[serde(default)]
    pub keywords: Option<Keywords>,
    #[serde(default)]
    pub recommendations: Option<Page<MovieSummary>>,
}

impl MovieDetail {
    /// The summary fields of this record
    pub fn summary(&self) -> MovieSummary {
        MovieSummary {
            id: self.id,
            title: self.title.clone(),
            overview: self.overview.clone(),
            release_date: self.release_date.clone(),
            vote_average: self.vote_average,
            popularity: self.popularity,
        }
    }

    pub fn cast(&self) -> &[CastMember] {
        self.credits
            .as_ref()
            .map(|credits| credits.cast.as_slice())
            .unwrap_or_default()
    }

    pub fn keywords(&self) -> &[Keyword] {
        self.keywords
            .as_ref()
            .map(|keywords| keywords.keywords.as_slice())
            .unwrap_or_default()
    }

    pub fn related(&self) -> &[MovieSummary] {
        self.recommendations
            .as_ref()
            .map(|page| page.results.as_slice())
            .unwrap_or_default()
    }
}

/// Sub-resources appended to a detail request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailExtras {
    /// Cast plus related-movie recommendations
    CreditsAndRecommendations,
    /// Cast plus keywords
    CreditsAndKeywords,
}

impl DetailExtras {
    /// Value of the `append_to_response` query parameter
    pub fn append_to_response(&self) -> &'static str {
        match self {
            DetailExtras::CreditsAndRecommendations => "credits,recommendations",
            DetailExtras::CreditsAndKeywords => "credits,keywords",
        }
    }
}

/// Filters for `/discover/movie`; results always come back by descending popularity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoverQuery {
    pub genre_id: Option<u32>,
    pub year: Option<u16>,
    pub page: u32,
}

impl Default for DiscoverQuery {
    fn default() -> Self {
        Self {
            genre_id: None,
            year: None,
            page: 1,
        }
    }
}

impl DiscoverQuery {
    pub fn for_genre(genre_id: u32) -> Self {
        Self {
            genre_id: Some(genre_id),
            ..Self::default()
        }
    }
}
