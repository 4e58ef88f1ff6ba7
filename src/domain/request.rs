use super::labels::{Audience, Tone, WritingStyle};
use super::prompt::PromptContext;

/// Parameters for a single blog generation call.
///
/// Built once per call and not mutated afterwards; the `with_*` methods consume
/// the request and return a new one. No field is validated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    topic: String,
    word_count: u32,
    style: WritingStyle,
    tone: Tone,
    audience: Audience,
}

impl GenerationRequest {
    pub const DEFAULT_WORD_COUNT: u32 = 250;
    pub const MIN_WORD_COUNT: u32 = 100;
    pub const MAX_WORD_COUNT: u32 = 1000;

    /// Create a request for `topic` with default word count, style, tone, and audience.
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            word_count: Self::DEFAULT_WORD_COUNT,
            style: WritingStyle::default(),
            tone: Tone::default(),
            audience: Audience::default(),
        }
    }

    pub fn with_word_count(mut self, word_count: u32) -> Self {
        self.word_count = word_count;
        self
    }

    pub fn with_style(mut self, style: WritingStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn with_audience(mut self, audience: Audience) -> Self {
        self.audience = audience;
        self
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn word_count(&self) -> u32 {
        self.word_count
    }

    pub fn style(&self) -> &WritingStyle {
        &self.style
    }

    pub fn tone(&self) -> &Tone {
        &self.tone
    }

    pub fn audience(&self) -> &Audience {
        &self.audience
    }

    /// Template variables for the blog post prompt.
    pub fn prompt_context(&self) -> PromptContext {
        PromptContext::new()
            .with_var("blog_topic", self.topic.as_str())
            .with_var("blog_wordcount", self.word_count.to_string())
            .with_var("blog_style", self.style.label())
            .with_var("blog_tone", self.tone.label())
            .with_var("blog_audience", self.audience.label())
    }
}
