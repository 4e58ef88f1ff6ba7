mod generation_backend;

pub use generation_backend::GenerationBackend;
