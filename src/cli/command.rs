/// Splits a line into a lowercased keyword and the rest of the line.
///
/// Returns `None` for blank input.
pub fn split_command(line: &str) -> Option<(String, &str)> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => Some((keyword.to_lowercase(), rest.trim())),
        None => Some((line.to_lowercase(), "")),
    }
}

fn is_exit(keyword: &str) -> bool {
    matches!(keyword, "exit" | "quit" | "q")
}

/// Commands understood by the movie bot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieBotCommand {
    Empty,
    Exit,
    Search(String),
    Details(String),
    Recommend(String),
    /// Raw `[genre_id] [year]` arguments, possibly empty
    Discover(String),
    Unknown,
}

impl MovieBotCommand {
    pub fn parse(line: &str) -> Self {
        let Some((keyword, args)) = split_command(line) else {
            return Self::Empty;
        };

        match (keyword.as_str(), args) {
            (k, _) if is_exit(k) => Self::Exit,
            ("search", args) if !args.is_empty() => Self::Search(args.to_string()),
            ("details", args) if !args.is_empty() => Self::Details(args.to_string()),
            ("recommend", args) if !args.is_empty() => Self::Recommend(args.to_string()),
            ("discover", args) => Self::Discover(args.to_string()),
            _ => Self::Unknown,
        }
    }
}

/// Commands understood by the genre recommender
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecommenderCommand {
    Empty,
    Exit,
    List,
    /// Genre name or 1-based position in the list
    Recommend(String),
    Details(String),
    Unknown,
}

impl RecommenderCommand {
    pub fn parse(line: &str) -> Self {
        let Some((keyword, args)) = split_command(line) else {
            return Self::Empty;
        };

        match (keyword.as_str(), args) {
            (k, _) if is_exit(k) => Self::Exit,
            ("list", _) => Self::List,
            ("recommend", args) if !args.is_empty() => Self::Recommend(args.to_string()),
            ("details", args) if !args.is_empty() => Self::Details(args.to_string()),
            _ => Self::Unknown,
        }
    }
}

/// Parses a movie id argument; anything but a plain integer is rejected
pub fn parse_movie_id(args: &str) -> Option<u64> {
    args.trim().parse().ok()
}

/// Interprets `discover` arguments.
///
/// The first word is a genre id when it is all digits; the second is a year
/// when it is all digits and exactly four long. Anything else is ignored.
pub fn parse_discover_args(args: &str) -> (Option<u32>, Option<u16>) {
    let mut words = args.split_whitespace();
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    let genre_id = words
        .next()
        .filter(|w| all_digits(*w))
        .and_then(|w| w.parse().ok());
    let year = words
        .next()
        .filter(|w| all_digits(*w) && w.len() == 4)
        .and_then(|w| w.parse().ok());

    (genre_id, year)
}
