mod fake_generation_backend;

pub use fake_generation_backend::{FakeFailure, FakeGenerationBackend};
