mod generation_backend_http;
mod template;

pub use generation_backend_http::HttpGenerationBackend;
pub use template::MinijinjaTemplateRenderer;
