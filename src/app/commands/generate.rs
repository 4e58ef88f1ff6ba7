use tracing::info;

use crate::app::AppContext;
use crate::domain::{AppError, GenerationRequest, TemplateRenderer, compose_prompt};
use crate::ports::GenerationBackend;

/// Execute the generate command.
///
/// Composes the blog prompt for `request`, makes a single backend call with it,
/// and returns the backend's text as-is. Errors from either step are returned
/// unchanged; nothing is retried.
pub fn execute<B, R>(ctx: &AppContext<B, R>, request: &GenerationRequest) -> Result<String, AppError>
where
    B: GenerationBackend,
    R: TemplateRenderer,
{
    let prompt = compose_prompt(ctx.renderer(), request)?;

    info!(
        word_count = request.word_count(),
        style = %request.style(),
        tone = %request.tone(),
        audience = %request.audience(),
        "Requesting blog post"
    );

    let text = ctx.backend().complete(&prompt)?;

    info!(response_chars = text.chars().count(), "Received blog post");
    Ok(text)
}
