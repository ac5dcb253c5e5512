pub mod genre;
pub mod movie;
pub mod recommendation;

pub use genre::{Genre, GenreCatalog, GenreList, KNOWN_GENRES};
pub use movie::{
    CastMember, Credits, DetailExtras, DiscoverQuery, Keyword, Keywords, MovieDetail,
    MovieSummary, Page,
};
pub use recommendation::{
    GenerateRequest, GenerateResponse, ModelEntry, ModelList, MovieDigest,
    RecommendationRequest, MAX_PROMPT_MOVIES,
};
