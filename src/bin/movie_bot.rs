use std::sync::Arc;

use movie_scout::{
    cli::{Console, MovieBot},
    config::Config,
    services::TmdbProvider,
    telemetry,
};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    let config = Config::from_env()?;
    let provider = TmdbProvider::from_config(&config);

    let mut console = Console::new(BufReader::new(tokio::io::stdin()), std::io::stdout());
    MovieBot::new(Arc::new(provider)).run(&mut console).await?;

    Ok(())
}
