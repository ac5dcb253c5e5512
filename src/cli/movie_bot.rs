use std::io::Write;
use std::sync::Arc;

use tokio::io::AsyncBufRead;

use crate::{
    cli::{
        command::{parse_discover_args, parse_movie_id, MovieBotCommand},
        console::Console,
    },
    error::AppResult,
    formatting::{self, RECOMMENDATION_LIMIT, SEARCH_LIMIT},
    models::{DetailExtras, DiscoverQuery},
    services::providers::MetadataProvider,
};

const BANNER: &str = "
=== Movie Recommendation Bot (TMDB API) ===
Search for movies, get recommendations, or discover new films.
Commands:
  search <query> - Search for movies
  details <movie_id> - Get details about a specific movie
  recommend <movie_id> - Get recommendations based on a movie
  discover [genre_id] [year] - Discover popular movies, optionally by genre and year
  exit - Quit the program
";

const PROMPT: &str = "> ";
const NO_RESULTS: &str = "No results found or API error.";
const NO_RECOMMENDATIONS: &str = "No recommendations found or API error.";
const MOVIE_NOT_FOUND: &str = "Movie not found or API error.";
const INVALID_MOVIE_ID: &str = "Invalid movie ID. Please provide a numeric ID.";
const UNKNOWN_COMMAND: &str = "Unknown command or missing arguments. Type 'exit' to quit.";

/// Interactive TMDB browser: search, details, recommendations and discover
pub struct MovieBot {
    provider: Arc<dyn MetadataProvider>,
}

impl MovieBot {
    pub fn new(provider: Arc<dyn MetadataProvider>) -> Self {
        Self { provider }
    }

    /// Runs the command loop until an exit command or end of input
    pub async fn run<R, W>(&self, console: &mut Console<R, W>) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        tracing::info!(provider = self.provider.name(), "Starting movie bot session");
        console.say(BANNER)?;

        while let Some(line) = console.prompt(PROMPT).await? {
            match MovieBotCommand::parse(&line) {
                MovieBotCommand::Empty => continue,
                MovieBotCommand::Exit => break,
                command => self.handle(command, console).await?,
            }

            console.say(format!("\n{}\n", "-".repeat(50)))?;
        }

        tracing::info!("Movie bot session ended");
        Ok(())
    }

    async fn handle<R, W>(
        &self,
        command: MovieBotCommand,
        console: &mut Console<R, W>,
    ) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        match command {
            MovieBotCommand::Search(query) => self.search(&query, console).await,
            MovieBotCommand::Details(args) => self.details(&args, console).await,
            MovieBotCommand::Recommend(args) => self.recommend(&args, console).await,
            MovieBotCommand::Discover(args) => self.discover(&args, console).await,
            MovieBotCommand::Empty | MovieBotCommand::Exit | MovieBotCommand::Unknown => {
                console.say(UNKNOWN_COMMAND)
            }
        }
    }

    async fn search<R, W>(&self, query: &str, console: &mut Console<R, W>) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let results = console.recover(self.provider.search_movies(query, 1).await)?;

        match results {
            Some(movies) if !movies.is_empty() => {
                console.say(format!("\nFound {} movies:", movies.len()))?;
                console.say(formatting::listing(&movies, SEARCH_LIMIT))
            }
            _ => console.say(NO_RESULTS),
        }
    }

    async fn details<R, W>(&self, args: &str, console: &mut Console<R, W>) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let Some(movie_id) = parse_movie_id(args) else {
            return console.say(INVALID_MOVIE_ID);
        };

        let detail = console.recover(
            self.provider
                .movie_details(movie_id, DetailExtras::CreditsAndRecommendations)
                .await,
        )?;

        match detail {
            Some(detail) => console.say(format!("\n{}", formatting::movie_details(&detail))),
            None => console.say(MOVIE_NOT_FOUND),
        }
    }

    async fn recommend<R, W>(&self, args: &str, console: &mut Console<R, W>) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let Some(movie_id) = parse_movie_id(args) else {
            return console.say(INVALID_MOVIE_ID);
        };

        let results = console.recover(self.provider.movie_recommendations(movie_id).await)?;

        match results {
            Some(movies) if !movies.is_empty() => {
                console.say(format!("\nRecommendations based on movie ID {}:", movie_id))?;
                console.say(formatting::listing(&movies, RECOMMENDATION_LIMIT))
            }
            _ => console.say(NO_RECOMMENDATIONS),
        }
    }

    async fn discover<R, W>(&self, args: &str, console: &mut Console<R, W>) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let (genre_id, year) = parse_discover_args(args);
        let query = DiscoverQuery {
            genre_id,
            year,
            ..DiscoverQuery::default()
        };

        let results = console.recover(self.provider.discover_movies(&query).await)?;

        match results {
            Some(movies) if !movies.is_empty() => {
                console.say("\nDiscovered movies:")?;
                console.say(formatting::listing(&movies, SEARCH_LIMIT))
            }
            _ => console.say(NO_RESULTS),
        }
    }
}
