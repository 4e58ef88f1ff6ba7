use crate::domain::TemplateRenderer;
use crate::ports::GenerationBackend;

/// Application context holding dependencies for command execution.
pub struct AppContext<B: GenerationBackend, R: TemplateRenderer> {
    backend: B,
    renderer: R,
}

impl<B: GenerationBackend, R: TemplateRenderer> AppContext<B, R> {
    /// Create a new application context.
    pub fn new(backend: B, renderer: R) -> Self {
        Self { backend, renderer }
    }

    /// Get a reference to the generation backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Get a reference to the template renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
