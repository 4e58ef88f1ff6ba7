//! blogwright: compose a blog-writing prompt from a handful of parameters and
//! hand it to a hosted LLM.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{GenerateOptions, OptionsListing, compose_prompt, generate, options};
pub use domain::{
    ApiKey, AppError, Audience, BackendConfig, GenerationRequest, Tone, WritingStyle,
};
