use std::borrow::Cow;

use crate::models::{Genre, MovieDetail, MovieSummary};

/// Overview limit on single-movie cards
pub const CARD_OVERVIEW_LIMIT: usize = 200;
/// Overview limit in result listings
pub const LISTING_OVERVIEW_LIMIT: usize = 100;
pub const CAST_LIMIT: usize = 5;
pub const RELATED_LIMIT: usize = 5;
/// Entries shown for search and discover
pub const SEARCH_LIMIT: usize = 10;
/// Entries shown for movie recommendations
pub const RECOMMENDATION_LIMIT: usize = 8;

pub const ELLIPSIS: &str = "...";

const UNKNOWN: &str = "Unknown";
const UNKNOWN_TITLE: &str = "Unknown Title";
const NO_OVERVIEW: &str = "No overview available";
const NOT_AVAILABLE: &str = "N/A";

/// First four characters of an ISO date, or "Unknown"
pub fn release_year(release_date: Option<&str>) -> &str {
    match release_date {
        Some(date) => match date.char_indices().nth(4) {
            Some((end, _)) => &date[..end],
            None if date.chars().count() == 4 => date,
            None => UNKNOWN,
        },
        None => UNKNOWN,
    }
}

/// Cuts `text` to `limit` characters and appends [`ELLIPSIS`] when longer
pub fn truncate(text: &str, limit: usize) -> Cow<'_, str> {
    match text.char_indices().nth(limit) {
        Some((end, _)) => Cow::Owned(format!("{}{}", &text[..end], ELLIPSIS)),
        None => Cow::Borrowed(text),
    }
}

/// Integer with comma thousands separators
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}

/// Ratings keep one decimal when whole, like `8.0`
fn rating(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

fn rating_or(value: Option<f64>, missing: &str) -> String {
    value.map(rating).unwrap_or_else(|| missing.to_string())
}

fn title(value: Option<&str>) -> &str {
    value.unwrap_or(UNKNOWN_TITLE)
}

fn overview(value: Option<&str>) -> &str {
    value.unwrap_or(NO_OVERVIEW)
}

/// Movie card used by the genre recommender
pub fn movie_card(movie: &MovieSummary) -> String {
    format!(
        "Title: {} ({})\nRating: {}/10\nOverview: {}",
        title(movie.title.as_deref()),
        release_year(movie.release_date.as_deref()),
        rating_or(movie.vote_average, "0"),
        truncate(overview(movie.overview.as_deref()), CARD_OVERVIEW_LIMIT),
    )
}

/// One entry of a search/discover/recommendation listing
pub fn listing_entry(movie: &MovieSummary) -> String {
    let id = movie
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    format!(
        "ID: {} - {} ({})\n  Rating: {}/10\n  Overview: {}",
        id,
        title(movie.title.as_deref()),
        release_year(movie.release_date.as_deref()),
        rating_or(movie.vote_average, NOT_AVAILABLE),
        truncate(overview(movie.overview.as_deref()), LISTING_OVERVIEW_LIMIT),
    )
}

/// Listing of at most `limit` movies, each followed by a blank line
pub fn listing(movies: &[MovieSummary], limit: usize) -> String {
    movies
        .iter()
        .take(limit)
        .map(|movie| format!("{}\n", listing_entry(movie)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Cast block, or `None` when there is no cast
pub fn top_cast(detail: &MovieDetail) -> Option<String> {
    let cast = detail.cast();
    if cast.is_empty() {
        return None;
    }

    let mut lines = vec!["Top Cast:".to_string()];
    lines.extend(cast.iter().take(CAST_LIMIT).map(|member| {
        format!(
            "  {} as {}",
            member.name.as_deref().unwrap_or(UNKNOWN),
            member.character.as_deref().unwrap_or(UNKNOWN)
        )
    }));

    Some(lines.join("\n"))
}

/// Full detail block used by the movie bot
pub fn movie_details(detail: &MovieDetail) -> String {
    let genres = detail
        .genres
        .iter()
        .map(|genre| genre.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let runtime = detail
        .runtime
        .map(|minutes| minutes.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let mut sections = vec![format!(
        "Movie Details:\n\
         Title: {} ({})\n\
         Genres: {}\n\
         Rating: {}/10 ({} votes)\n\
         Runtime: {} minutes\n\
         Budget: ${}\n\
         Revenue: ${}\n\
         Overview: {}",
        title(detail.title.as_deref()),
        release_year(detail.release_date.as_deref()),
        genres,
        rating_or(detail.vote_average, NOT_AVAILABLE),
        detail.vote_count.unwrap_or(0),
        runtime,
        thousands(detail.budget.unwrap_or(0)),
        thousands(detail.revenue.unwrap_or(0)),
        overview(detail.overview.as_deref()),
    )];

    if let Some(cast) = top_cast(detail) {
        sections.push(cast);
    }

    let related = detail.related();
    if !related.is_empty() {
        let mut lines = vec!["Related titles:".to_string()];
        lines.extend(related.iter().take(RELATED_LIMIT).map(|movie| {
            format!(
                "  ID: {} - {} ({})",
                movie
                    .id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                title(movie.title.as_deref()),
                release_year(movie.release_date.as_deref()),
            )
        }));
        sections.push(lines.join("\n"));
    }

    sections.join("\n\n")
}

/// Movie card with cast and keywords, used by the genre recommender
pub fn movie_card_with_extras(detail: &MovieDetail) -> String {
    let mut sections = vec![movie_card(&detail.summary())];

    if let Some(cast) = top_cast(detail) {
        sections.push(cast);
    }

    let keywords = detail.keywords();
    if !keywords.is_empty() {
        sections.push(format!(
            "Keywords: {}",
            keywords
                .iter()
                .map(|keyword| keyword.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }

    sections.join("\n\n")
}

/// Numbered genre list, 1-based
pub fn genre_list(genres: &[Genre]) -> String {
    let mut lines = vec!["Available movie genres:".to_string()];
    lines.extend(
        genres
            .iter()
            .enumerate()
            .map(|(i, genre)| format!("{}. {}", i + 1, genre.name)),
    );
    lines.join("\n")
}
