use serde::Deserialize;

/// Application configuration loaded from environment variables
///
/// Every field has a default, so an empty environment yields a working
/// configuration pointing at the public TMDB API and a local Ollama server.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// TMDB API key, sent as the `api_key` query parameter
    #[serde(default = "default_tmdb_api_key")]
    pub tmdb_api_key: String,

    /// TMDB API base URL (versioned)
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// Ollama server base URL
    #[serde(default = "default_ollama_url")]
    pub ollama_url: String,

    /// Preferred Ollama model, used when the server has it
    #[serde(default = "default_ollama_model")]
    pub ollama_model: String,
}

fn default_tmdb_api_key() -> String {
    "23cc57835e00ff5675bf698ea2c75afc".to_string()
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_ollama_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_ollama_model() -> String {
    "mistral".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tmdb_api_key: default_tmdb_api_key(),
            tmdb_api_url: default_tmdb_api_url(),
            ollama_url: default_ollama_url(),
            ollama_model: default_ollama_model(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Builds a config from explicit key/value pairs, as if read from the environment
    pub fn from_pairs<I>(pairs: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(pairs)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
