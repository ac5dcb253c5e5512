use std::io::Write;
use std::sync::Arc;

use tokio::io::AsyncBufRead;

use crate::{
    cli::{
        command::{parse_movie_id, RecommenderCommand},
        console::Console,
    },
    error::AppResult,
    formatting,
    models::{DetailExtras, DiscoverQuery, GenreCatalog, RecommendationRequest},
    services::{
        inference::{OllamaClient, ProbeOutcome},
        providers::MetadataProvider,
        recommendations,
    },
};

const BANNER: &str = "\n=== Genre-Based Movie Recommender (with Free LLM) ===";

const MENU: &str = "
Commands:
  recommend <genre> - Get personalized recommendations for a specific genre
  details <movie_id> - Show a movie with its cast and keywords
  list - List all available genres
  exit - Quit the program";

const PROMPT: &str = "\nEnter command: ";
const FAREWELL: &str = "\nThank you for using the Genre-Based Movie Recommender!";
const UNKNOWN_COMMAND: &str =
    "Unknown command or missing arguments. Try 'recommend <genre>' or 'list'.";

/// Genre-driven recommender backed by a local Ollama model
///
/// The model and the genre catalog are fixed when the session starts.
pub struct GenreRecommender {
    provider: Arc<dyn MetadataProvider>,
    inference: OllamaClient,
    model: String,
    catalog: GenreCatalog,
}

impl GenreRecommender {
    /// Probes the inference server and loads the genre list.
    ///
    /// Returns `None` after printing setup instructions when the server is
    /// unusable; the command loop must not be entered in that case.
    pub async fn start<R, W>(
        provider: Arc<dyn MetadataProvider>,
        inference: OllamaClient,
        preferred_model: &str,
        console: &mut Console<R, W>,
    ) -> AppResult<Option<Self>>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        console.say(BANNER)?;

        let model = match inference.probe(preferred_model).await {
            ProbeOutcome::Ready { model, available } => {
                console.say(format!(
                    "Ollama is running with available models: {}",
                    available.join(", ")
                ))?;
                console.say(format!("Using LLM model: {}", model))?;
                model
            }
            outcome => {
                Self::print_setup_help(&outcome, preferred_model, console)?;
                return Ok(None);
            }
        };

        let genres = console
            .recover(provider.list_genres().await)?
            .unwrap_or_default();

        let catalog = if genres.is_empty() {
            tracing::warn!("Genre list unavailable, using built-in genres");
            console.say("Could not retrieve genres from TMDB. Using the built-in genre list.")?;
            GenreCatalog::fallback()
        } else {
            GenreCatalog::new(genres)
        };

        let recommender = Self {
            provider,
            inference,
            model,
            catalog,
        };
        recommender.list(console)?;

        Ok(Some(recommender))
    }

    fn print_setup_help<R, W>(
        outcome: &ProbeOutcome,
        preferred_model: &str,
        console: &mut Console<R, W>,
    ) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        match outcome {
            ProbeOutcome::Unreachable => {
                console.say("Ollama is not running. Please install and start Ollama:")?;
                console.say("1. Download from https://ollama.com/")?;
                console.say("2. Start Ollama")?;
                console.say(format!(
                    "3. Run 'ollama pull {}' to download a model",
                    preferred_model
                ))?;
            }
            ProbeOutcome::NoModels => {
                console.say("Ollama is running but no models are available.")?;
                console.say(format!(
                    "Run 'ollama pull {}' to download a model.",
                    preferred_model
                ))?;
            }
            ProbeOutcome::ApiError(status) => {
                tracing::warn!(status = status.as_u16(), "Ollama API returned an error");
                console.say("Ollama API returned an error.")?;
            }
            ProbeOutcome::Ready { .. } => return Ok(()),
        }

        console.say("Please start Ollama and try again.")
    }

    /// Runs the command loop until an exit command or end of input
    pub async fn run<R, W>(&self, console: &mut Console<R, W>) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        tracing::info!(
            model = %self.model,
            genres = self.catalog.len(),
            "Starting genre recommender session"
        );

        loop {
            console.say(MENU)?;

            let Some(line) = console.prompt(PROMPT).await? else {
                break;
            };

            match RecommenderCommand::parse(&line) {
                RecommenderCommand::Empty => continue,
                RecommenderCommand::Exit => break,
                RecommenderCommand::List => self.list(console)?,
                RecommenderCommand::Recommend(args) => self.recommend(&args, console).await?,
                RecommenderCommand::Details(args) => self.details(&args, console).await?,
                RecommenderCommand::Unknown => console.say(UNKNOWN_COMMAND)?,
            }
        }

        console.say(FAREWELL)
    }

    fn list<R, W>(&self, console: &mut Console<R, W>) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        console.say(format!("\n{}", formatting::genre_list(self.catalog.genres())))
    }

    async fn recommend<R, W>(&self, args: &str, console: &mut Console<R, W>) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let Some(genre) = self.catalog.resolve(args) else {
            return console.say(format!(
                "Genre '{}' not found. Use 'list' to see available genres.",
                args
            ));
        };

        console.say(format!("\nFetching movies for genre: {}", genre.name))?;

        let Some(preferences) = console
            .prompt(&format!(
                "Tell me more about what you like in {} movies (e.g., themes, actors, style): ",
                genre.name
            ))
            .await?
        else {
            return Ok(());
        };

        let movies = console
            .recover(
                self.provider
                    .discover_movies(&DiscoverQuery::for_genre(genre.id))
                    .await,
            )?
            .unwrap_or_default();

        if movies.is_empty() {
            return console.say(format!("No movies found for genre: {}", genre.name));
        }

        console.say(format!(
            "\nFound {} {} movies. Generating personalized recommendations...",
            movies.len(),
            genre.name
        ))?;

        let request = RecommendationRequest::new(genre.name.as_str(), preferences, &movies);
        let text =
            recommendations::get_recommendations(&self.inference, &self.model, &request).await;

        console.say("\n=== Personalized Recommendations ===\n")?;
        console.say(text)?;
        console.say(format!("\n{}\n", "=".repeat(50)))
    }

    async fn details<R, W>(&self, args: &str, console: &mut Console<R, W>) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let Some(movie_id) = parse_movie_id(args) else {
            return console.say("Invalid movie ID. Please provide a numeric ID.");
        };

        let detail = console.recover(
            self.provider
                .movie_details(movie_id, DetailExtras::CreditsAndKeywords)
                .await,
        )?;

        match detail {
            Some(detail) => {
                console.say(format!("\n{}", formatting::movie_card_with_extras(&detail)))
            }
            None => console.say("Movie not found or API error."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::{Genre, MovieDetail};
    use crate::services::providers::MockMetadataProvider;
    use mockall::predicate::eq;
    use reqwest::StatusCode;

    fn recommender(provider: MockMetadataProvider, catalog: GenreCatalog) -> GenreRecommender {
        GenreRecommender {
            provider: Arc::new(provider),
            // Never contacted by these tests
            inference: OllamaClient::new("http://127.0.0.1:1".to_string()),
            model: "mistral".to_string(),
            catalog,
        }
    }

    async fn run_session(recommender: &GenreRecommender, input: &str) -> String {
        let mut console = Console::new(input.as_bytes(), Vec::new());
        recommender.run(&mut console).await.unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[tokio::test]
    async fn test_list_and_exit() {
        let recommender = recommender(
            MockMetadataProvider::new(),
            GenreCatalog::new(vec![Genre::new(28, "Action"), Genre::new(35, "Comedy")]),
        );

        let output = run_session(&recommender, "list\nexit\n").await;
        assert!(output.contains("\nAvailable movie genres:\n1. Action\n2. Comedy\n"));
        assert_eq!(output.matches("Enter command: ").count(), 2);
        assert!(output.ends_with("Thank you for using the Genre-Based Movie Recommender!\n"));
    }

    #[tokio::test]
    async fn test_unresolved_genre() {
        let recommender = recommender(MockMetadataProvider::new(), GenreCatalog::fallback());

        let output = run_session(&recommender, "recommend Noir\nrecommend 42\n").await;
        assert!(output.contains("Genre 'Noir' not found. Use 'list' to see available genres."));
        assert!(output.contains("Genre '42' not found."));
    }

    #[tokio::test]
    async fn test_no_movies_for_genre() {
        let mut provider = MockMetadataProvider::new();
        provider
            .expect_discover_movies()
            .withf(|query| query.genre_id == Some(27) && query.year.is_none())
            .times(1)
            .returning(|_| Err(AppError::Status(StatusCode::SERVICE_UNAVAILABLE)));

        let recommender = recommender(provider, GenreCatalog::fallback());
        let output = run_session(&recommender, "recommend horror\nslow burn\nq\n").await;

        assert!(output.contains("Fetching movies for genre: Horror"));
        assert!(output.contains("Tell me more about what you like in Horror movies"));
        assert!(output.contains("Error: 503\nNo movies found for genre: Horror\n"));
        assert!(!output.contains("Personalized Recommendations"));
    }

    #[tokio::test]
    async fn test_details_with_keywords() {
        let mut provider = MockMetadataProvider::new();
        provider
            .expect_movie_details()
            .with(eq(813), eq(DetailExtras::CreditsAndKeywords))
            .returning(|_, _| {
                Ok(MovieDetail {
                    title: Some("Airplane!".to_string()),
                    release_date: Some("1980-07-02".to_string()),
                    vote_average: Some(7.3),
                    ..MovieDetail::default()
                })
            });

        let recommender = recommender(provider, GenreCatalog::fallback());
        let output = run_session(&recommender, "details 813\ndetails abc\n").await;

        assert!(output.contains("\nTitle: Airplane! (1980)\nRating: 7.3/10\n"));
        assert!(output.contains("Invalid movie ID. Please provide a numeric ID."));
    }

    #[tokio::test]
    async fn test_input_closed_at_preferences_prompt() {
        let provider = MockMetadataProvider::new();
        let recommender = recommender(provider, GenreCatalog::fallback());

        let output = run_session(&recommender, "recommend comedy\n").await;
        assert!(output.contains("Tell me more about what you like in Comedy movies"));
        assert!(!output.contains("No movies found"));
        assert!(!output.contains("Generating personalized recommendations"));
        assert!(output.ends_with("Thank you for using the Genre-Based Movie Recommender!\n"));
    }

    #[tokio::test]
    async fn test_unknown_command() {
        let recommender = recommender(MockMetadataProvider::new(), GenreCatalog::fallback());

        let output = run_session(&recommender, "search matrix\nrecommend\n").await;
        assert_eq!(output.matches(UNKNOWN_COMMAND).count(), 2);
    }
}
