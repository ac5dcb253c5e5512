use reqwest::StatusCode;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Service returned status {0}")]
    Status(StatusCode),

    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Console error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    /// One-line console rendering of a recoverable failure.
    ///
    /// A non-success status is reported as its bare numeric code.
    pub fn console_message(&self) -> String {
        match self {
            AppError::Status(status) => format!("Error: {}", status.as_u16()),
            other => format!("Error: {}", other),
        }
    }

    /// True when the remote host could not be reached at all
    pub fn is_connect(&self) -> bool {
        matches!(self, AppError::HttpClient(e) if e.is_connect())
    }
}

pub type AppResult<T> = Result<T, AppError>;
