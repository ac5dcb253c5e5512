/// Ollama inference server client
///
/// Two endpoints are used:
/// 1. `GET /api/tags` lists the models pulled on the local server
/// 2. `POST /api/generate` runs a single non-streaming completion
use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{GenerateRequest, GenerateResponse, ModelList},
};
use reqwest::{Client as HttpClient, StatusCode};

/// Outcome of the startup reachability check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Connection refused or host unreachable
    Unreachable,
    /// Server answered with a non-success status
    ApiError(StatusCode),
    /// Server is up but has no models pulled
    NoModels,
    /// Server is up; `model` was picked from `available`
    Ready {
        model: String,
        available: Vec<String>,
    },
}

#[derive(Clone)]
pub struct OllamaClient {
    http_client: HttpClient,
    base_url: String,
}

impl OllamaClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.ollama_url.clone())
    }

    /// Names of the registered models, in listing order
    pub async fn list_models(&self) -> AppResult<Vec<String>> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self.http_client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Status(status));
        }

        let response_text = response.text().await?;
        let list: ModelList = serde_json::from_str(&response_text)?;

        Ok(list.models.into_iter().map(|m| m.name).collect())
    }

    /// Checks the server and picks the model for the session.
    ///
    /// Transport failures other than a refused connection are reported as
    /// unreachable as well; nothing here is worth retrying.
    pub async fn probe(&self, preferred_model: &str) -> ProbeOutcome {
        match self.list_models().await {
            Ok(models) => match select_model(&models, preferred_model) {
                Some(model) => {
                    tracing::info!(
                        model = %model,
                        available = models.len(),
                        "Ollama model selected"
                    );
                    ProbeOutcome::Ready {
                        model,
                        available: models,
                    }
                }
                None => ProbeOutcome::NoModels,
            },
            Err(AppError::Status(status)) => ProbeOutcome::ApiError(status),
            Err(e) => {
                tracing::warn!(error = %e, connect = e.is_connect(), "Ollama probe failed");
                if e.is_connect() {
                    ProbeOutcome::Unreachable
                } else {
                    ProbeOutcome::ApiError(StatusCode::BAD_GATEWAY)
                }
            }
        }
    }

    /// Runs one completion and returns the raw response text
    pub async fn generate(&self, model: &str, prompt: &str) -> AppResult<Option<String>> {
        let url = format!("{}/api/generate", self.base_url);

        let body = GenerateRequest {
            model,
            prompt,
            stream: false,
        };

        let response = self.http_client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(model = %model, status = status.as_u16(), "Ollama generation failed");
            return Err(AppError::Status(status));
        }

        let response_text = response.text().await?;
        let generated: GenerateResponse = serde_json::from_str(&response_text)?;

        tracing::info!(
            model = %model,
            prompt_chars = prompt.len(),
            "Ollama generation completed"
        );

        Ok(generated.response)
    }
}

/// Exact match on `preferred` wins, otherwise the first listed model
pub fn select_model(models: &[String], preferred: &str) -> Option<String> {
    models
        .iter()
        .find(|name| name.as_str() == preferred)
        .or_else(|| models.first())
        .cloned()
}
