use serde::{Deserialize, Serialize};

/// A TMDB movie genre
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

impl Genre {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// The 19 genres TMDB defines for movies, in the service's listing order
pub const KNOWN_GENRES: [(u32, &str); 19] = [
    (28, "Action"),
    (12, "Adventure"),
    (16, "Animation"),
    (35, "Comedy"),
    (80, "Crime"),
    (99, "Documentary"),
    (18, "Drama"),
    (10751, "Family"),
    (14, "Fantasy"),
    (36, "History"),
    (27, "Horror"),
    (10402, "Music"),
    (9648, "Mystery"),
    (10749, "Romance"),
    (878, "Science Fiction"),
    (10770, "TV Movie"),
    (53, "Thriller"),
    (10752, "War"),
    (37, "Western"),
];

/// Raw `/genre/movie/list` response
#[derive(Debug, Default, Deserialize)]
pub struct GenreList {
    #[serde(default)]
    pub genres: Vec<Genre>,
}

/// The genre list shown to the user during a session
///
/// Positions are 1-based, matching the numbered listing printed on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreCatalog {
    genres: Vec<Genre>,
}

impl GenreCatalog {
    pub fn new(genres: Vec<Genre>) -> Self {
        Self { genres }
    }

    /// Catalog built from the static table
    pub fn fallback() -> Self {
        Self::new(
            KNOWN_GENRES
                .iter()
                .map(|(id, name)| Genre::new(*id, *name))
                .collect(),
        )
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    pub fn len(&self) -> usize {
        self.genres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
    }

    /// Resolves user input to a genre.
    ///
    /// Input made only of ASCII digits is first tried as a 1-based position;
    /// anything else, or a position out of bounds, falls through to a
    /// case-insensitive match on the full genre name.
    pub fn resolve(&self, input: &str) -> Option<&Genre> {
        let input = input.trim();

        if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(position) = input.parse::<usize>() {
                if (1..=self.genres.len()).contains(&position) {
                    return Some(&self.genres[position - 1]);
                }
            }
        }

        self.genres
            .iter()
            .find(|genre| genre.name.to_lowercase() == input.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_genre_ids_are_unique() {
        let mut ids: Vec<u32> = KNOWN_GENRES.iter().map(|(id, _)| *id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), KNOWN_GENRES.len());
    }

    #[test]
    fn test_resolve_by_position() {
        let catalog = GenreCatalog::fallback();
        assert_eq!(catalog.resolve("1").map(|g| g.id), Some(28));
        assert_eq!(catalog.resolve("19").map(|g| g.id), Some(37));
    }

    #[test]
    fn test_resolve_out_of_bounds_position() {
        let catalog = GenreCatalog::fallback();
        assert!(catalog.resolve("0").is_none());
        assert!(catalog.resolve("20").is_none());
        assert!(catalog.resolve("-1").is_none());
    }

    #[test]
    fn test_resolve_by_name_matches_position() {
        let catalog = GenreCatalog::fallback();
        for (index, genre) in catalog.genres().iter().enumerate() {
            let by_name = catalog.resolve(&genre.name.to_uppercase()).unwrap();
            let by_position = catalog.resolve(&(index + 1).to_string()).unwrap();
            assert_eq!(by_name.id, by_position.id);
        }
    }

    #[test]
    fn test_resolve_numeric_name_falls_back_to_name_match() {
        let catalog = GenreCatalog::new(vec![Genre::new(1, "Drama"), Genre::new(2, "1984")]);
        assert_eq!(catalog.resolve("1984").map(|g| g.id), Some(2));
        assert_eq!(catalog.resolve("2").map(|g| g.id), Some(2));
    }

    #[test]
    fn test_resolve_requires_full_name() {
        let catalog = GenreCatalog::fallback();
        assert!(catalog.resolve("Science").is_none());
        assert!(catalog.resolve("").is_none());
    }

    #[test]
    fn test_genre_list_deserialization() {
        let json = r#"{"genres": [{"id": 28, "name": "Action"}, {"id": 35, "name": "Comedy"}]}"#;
        let list: GenreList = serde_json::from_str(json).unwrap();
        assert_eq!(list.genres, vec![Genre::new(28, "Action"), Genre::new(35, "Comedy")]);
    }
}
