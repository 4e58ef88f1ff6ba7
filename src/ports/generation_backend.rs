//! Generation backend port definition.

use crate::domain::AppError;

/// Port for the external text-generation service.
///
/// Implementations make exactly one call per invocation and return the generated
/// text untouched.
pub trait GenerationBackend {
    /// Send `prompt` to the backend and return its text output.
    fn complete(&self, prompt: &str) -> Result<String, AppError>;
}
