use crate::domain::AppError;
use crate::ports::GenerationBackend;
use std::sync::{Arc, Mutex};

/// Backend double that records prompts and replies with a fixed outcome.
#[derive(Clone)]
pub struct FakeGenerationBackend {
    pub received_prompts: Arc<Mutex<Vec<String>>>,
    reply: Result<String, FakeFailure>,
}

#[derive(Debug, Clone, Copy)]
pub enum FakeFailure {
    Unavailable,
    Unauthorized,
}

impl FakeGenerationBackend {
    pub fn replying(text: impl Into<String>) -> Self {
        Self { received_prompts: Arc::new(Mutex::new(vec![])), reply: Ok(text.into()) }
    }

    pub fn failing(failure: FakeFailure) -> Self {
        Self { received_prompts: Arc::new(Mutex::new(vec![])), reply: Err(failure) }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.received_prompts.lock().unwrap().clone()
    }
}

impl GenerationBackend for FakeGenerationBackend {
    fn complete(&self, prompt: &str) -> Result<String, AppError> {
        self.received_prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(FakeFailure::Unavailable) => {
                Err(AppError::ServiceUnavailable("connection refused".into()))
            }
            Err(FakeFailure::Unauthorized) => {
                Err(AppError::Authentication("Credentials rejected (401)".into()))
            }
        }
    }
}
