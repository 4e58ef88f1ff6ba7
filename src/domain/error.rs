use std::io;

use thiserror::Error;

/// Library-wide error type for blogwright operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Credentials are missing or were rejected by the backend.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The generation backend could not be reached or failed on its side.
    #[error("Generation service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The backend answered with a non-success status that is not an auth or server failure.
    #[error("Generation API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The backend answered successfully but the body carried no generated text.
    #[error("Malformed response from generation service: {0}")]
    MalformedResponse(String),

    /// Failed to render the prompt template with the request parameters.
    #[error("Failed to render template {template}: {reason}")]
    PromptRender { template: String, reason: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Whether this error came from credentials rather than the network.
    pub fn is_authentication(&self) -> bool {
        matches!(self, AppError::Authentication(_))
    }

    /// Whether this error means the backend could not serve the request.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, AppError::ServiceUnavailable(_))
    }
}
