//! Backend configuration loading.
//!
//! Precedence, lowest first: built-in defaults, `blogwright.toml` (or an explicit
//! path), then `BLOGWRIGHT_API_URL` / `BLOGWRIGHT_MODEL` from the environment.

use std::fs;
use std::path::Path;

use tracing::debug;
use url::Url;

use crate::domain::{AppError, BackendConfig, Settings};

/// Config file picked up from the working directory when no path is given.
pub const CONFIG_FILE_NAME: &str = "blogwright.toml";

pub const API_URL_ENV: &str = "BLOGWRIGHT_API_URL";
pub const MODEL_ENV: &str = "BLOGWRIGHT_MODEL";

/// Load the backend configuration.
pub fn load_backend_config(path: Option<&Path>) -> Result<BackendConfig, AppError> {
    let mut settings = match path {
        Some(path) => read_settings(path)?,
        None => {
            let default_path = Path::new(CONFIG_FILE_NAME);
            if default_path.is_file() { read_settings(default_path)? } else { Settings::default() }
        }
    };

    apply_env_overrides(&mut settings.backend, |name| std::env::var(name).ok())?;
    settings.backend.validate()?;
    Ok(settings.backend)
}

/// Parse the contents of a config file.
pub fn parse_settings(content: &str) -> Result<Settings, AppError> {
    Ok(toml::from_str(content)?)
}

fn read_settings(path: &Path) -> Result<Settings, AppError> {
    if !path.is_file() {
        return Err(AppError::config_error(format!("Config file not found: {}", path.display())));
    }

    debug!(path = %path.display(), "Loading config file");
    let content = fs::read_to_string(path)?;
    parse_settings(&content)
}

fn apply_env_overrides<F>(config: &mut BackendConfig, lookup: F) -> Result<(), AppError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
        config.api_url = Url::parse(raw.trim()).map_err(|e| {
            AppError::config_error(format!("Invalid {} '{}': {}", API_URL_ENV, raw, e))
        })?;
    }
    if let Some(model) = lookup(MODEL_ENV).filter(|v| !v.trim().is_empty()) {
        config.model = model.trim().to_string();
    }
    Ok(())
}
