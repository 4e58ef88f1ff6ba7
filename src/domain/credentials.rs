use std::fmt;

use super::AppError;

/// Environment variable holding the generation backend credential.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Credential for the generation backend.
///
/// Construction fails for empty or whitespace-only values, so a request is never
/// sent without something to authenticate with.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Result<Self, AppError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AppError::Authentication(format!("{} is empty", API_KEY_ENV)));
        }
        Ok(Self(value.trim().to_string()))
    }

    /// Read the key from [`API_KEY_ENV`].
    pub fn from_env() -> Result<Self, AppError> {
        let value = std::env::var(API_KEY_ENV).map_err(|_| {
            AppError::Authentication(format!("{} environment variable not set", API_KEY_ENV))
        })?;
        Self::new(value)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}
