pub mod configuration;
pub mod credentials;
pub mod error;
pub mod labels;
pub mod prompt;
pub mod request;

pub use configuration::{BackendConfig, Settings};
pub use credentials::{API_KEY_ENV, ApiKey};
pub use error::AppError;
pub use labels::{Audience, Tone, WritingStyle};
pub use prompt::{
    BLOG_POST_TEMPLATE, BLOG_POST_TEMPLATE_NAME, PromptContext, TemplateRenderer, compose_prompt,
};
pub use request::GenerationRequest;
