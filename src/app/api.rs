//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::adapters::{HttpGenerationBackend, MinijinjaTemplateRenderer};
use crate::app::{AppContext, commands, config};
use crate::domain::{self, ApiKey, GenerationRequest};

pub use crate::app::commands::options::OptionsListing;
pub use crate::domain::AppError;

/// Options controlling where credentials and backend settings come from.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Explicit config file; `blogwright.toml` in the working directory otherwise.
    pub config_path: Option<PathBuf>,
    /// Explicit API key; `GROQ_API_KEY` otherwise.
    pub api_key: Option<String>,
}

/// Render the blog prompt for `request` without contacting the backend.
pub fn compose_prompt(request: &GenerationRequest) -> Result<String, AppError> {
    domain::compose_prompt(&MinijinjaTemplateRenderer::new(), request)
}

/// Generate a blog post for `request` and return the backend's text unchanged.
///
/// The credential is resolved before anything else, so a missing or blank key
/// fails with [`AppError::Authentication`] without any network traffic.
pub fn generate(
    request: &GenerationRequest,
    options: &GenerateOptions,
) -> Result<String, AppError> {
    let api_key = match &options.api_key {
        Some(value) => ApiKey::new(value.as_str())?,
        None => ApiKey::from_env()?,
    };

    let backend_config = config::load_backend_config(options.config_path.as_deref())?;
    let backend = HttpGenerationBackend::new(api_key, &backend_config)?;
    let ctx = AppContext::new(backend, MinijinjaTemplateRenderer::new());

    commands::generate::execute(&ctx, request)
}

/// List the accepted style, tone, and audience labels.
pub fn options() -> OptionsListing {
    commands::options::execute()
}
