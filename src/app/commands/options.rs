use crate::domain::{Audience, GenerationRequest, Tone, WritingStyle};

/// The accepted parameter values, as offered to users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsListing {
    pub styles: Vec<String>,
    pub tones: Vec<String>,
    pub audiences: Vec<String>,
    pub word_count_range: (u32, u32),
    pub default_word_count: u32,
}

/// Execute the options command.
pub fn execute() -> OptionsListing {
    OptionsListing {
        styles: WritingStyle::ALL.iter().map(|s| s.label().to_string()).collect(),
        tones: Tone::ALL.iter().map(|t| t.label().to_string()).collect(),
        audiences: Audience::ALL.iter().map(|a| a.label().to_string()).collect(),
        word_count_range: (GenerationRequest::MIN_WORD_COUNT, GenerationRequest::MAX_WORD_COUNT),
        default_word_count: GenerationRequest::DEFAULT_WORD_COUNT,
    }
}
