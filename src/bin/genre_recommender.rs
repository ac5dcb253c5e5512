use std::sync::Arc;

use movie_scout::{
    cli::{Console, GenreRecommender},
    config::Config,
    services::{OllamaClient, TmdbProvider},
    telemetry,
};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    let config = Config::from_env()?;
    let provider = Arc::new(TmdbProvider::from_config(&config));
    let inference = OllamaClient::from_config(&config);

    let mut console = Console::new(BufReader::new(tokio::io::stdin()), std::io::stdout());

    let Some(recommender) =
        GenreRecommender::start(provider, inference, &config.ollama_model, &mut console).await?
    else {
        return Ok(());
    };

    recommender.run(&mut console).await?;

    Ok(())
}
