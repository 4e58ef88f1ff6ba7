//! Chat completions client implementation using reqwest.
//!
//! Speaks the OpenAI-compatible chat completions wire format that Groq serves.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::domain::{ApiKey, AppError, BackendConfig};
use crate::ports::GenerationBackend;

/// HTTP client for an OpenAI-compatible chat completions endpoint.
#[derive(Clone)]
pub struct HttpGenerationBackend {
    api_key: ApiKey,
    api_url: Url,
    model: String,
    temperature: f32,
    client: Client,
}

impl std::fmt::Debug for HttpGenerationBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGenerationBackend")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpGenerationBackend {
    /// Create a new HTTP backend with the given API key and configuration.
    pub fn new(api_key: ApiKey, config: &BackendConfig) -> Result<Self, AppError> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            client,
        })
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl GenerationBackend for HttpGenerationBackend {
    fn complete(&self, prompt: &str) -> Result<String, AppError> {
        let request = ChatRequest {
            model: &self.model,
            temperature: self.temperature,
            messages: [ChatMessage { role: "user", content: prompt }],
        };

        debug!(
            url = %self.api_url,
            model = %self.model,
            prompt_chars = prompt.chars().count(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(self.api_url.clone())
            .bearer_auth(self.api_key.expose())
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .map_err(|e| {
                warn!(error = %e, "Generation request did not reach the backend");
                AppError::ServiceUnavailable(format!("HTTP request failed: {}", e))
            })?;

        let status = response.status();
        debug!(status = status.as_u16(), "Received chat completion response");

        let body = response.text().map_err(|e| {
            warn!(error = %e, timeout = e.is_timeout(), "Failed to read generation response body");
            AppError::ServiceUnavailable(format!("Failed to read response body: {}", e))
        })?;

        if !status.is_success() {
            return Err(status_error(status, body));
        }

        let chat_response: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| AppError::MalformedResponse(format!("Failed to parse response: {}", e)))?;

        chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AppError::MalformedResponse("No message content in response".into()))
    }
}

fn status_error(status: StatusCode, body: String) -> AppError {
    warn!(status = status.as_u16(), "Generation backend returned an error status");

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        AppError::Authentication(format!("Credentials rejected ({}): {}", status.as_u16(), body))
    } else if status.is_server_error() {
        AppError::ServiceUnavailable(format!("Server error ({}): {}", status.as_u16(), body))
    } else {
        AppError::Api { status: status.as_u16(), message: body }
    }
}
