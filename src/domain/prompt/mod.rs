//! Prompt composition for blog generation.
//!
//! There is exactly one prompt template. It is embedded at build time and rendered
//! through the [`TemplateRenderer`] port so the template engine stays out of the domain.

mod template;

use std::collections::HashMap;

use tracing::debug;

use super::{AppError, GenerationRequest};

pub use template::TemplateRenderer;

/// Name used when reporting render failures.
pub const BLOG_POST_TEMPLATE_NAME: &str = "blog_post.j2";

/// The blog post prompt sent to the generation backend.
pub const BLOG_POST_TEMPLATE: &str = include_str!("../../assets/prompts/blog_post.j2");

/// Variables available to the template.
#[derive(Debug, Clone, Default)]
pub struct PromptContext {
    /// Variable name to value mapping.
    pub variables: HashMap<String, String>,
}

impl PromptContext {
    /// Create a new empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable to the context.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// Get a variable value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(|s| s.as_str())
    }
}

/// Substitute the request parameters into the blog post template.
///
/// Values are inserted literally: nothing in a topic or label is interpreted as
/// template syntax, and no label is checked against the fixed sets.
pub fn compose_prompt<R: TemplateRenderer>(
    renderer: &R,
    request: &GenerationRequest,
) -> Result<String, AppError> {
    let prompt =
        renderer.render(BLOG_POST_TEMPLATE, &request.prompt_context(), BLOG_POST_TEMPLATE_NAME)?;

    debug!(
        template = BLOG_POST_TEMPLATE_NAME,
        prompt_chars = prompt.chars().count(),
        "Composed blog prompt"
    );

    Ok(prompt)
}
