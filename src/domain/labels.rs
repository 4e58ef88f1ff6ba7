//! Fixed label sets offered for writing style, tone, and audience.
//!
//! Each set also carries an `Other` variant. Parsing through [`WritingStyle::from_label`]
//! and friends never fails: an unknown label is kept verbatim so the prompt composer
//! can render whatever the caller hands it. Callers that want the fixed set enforced
//! use `parse_known`.

use std::fmt;

/// Writing style of the post.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum WritingStyle {
    #[default]
    Professional,
    Conversational,
    Technical,
    Storytelling,
    Listicle,
    Interview,
    /// Label outside the fixed set, carried as-is.
    Other(String),
}

impl WritingStyle {
    /// The fixed styles, in menu order.
    pub const ALL: [WritingStyle; 6] = [
        WritingStyle::Professional,
        WritingStyle::Conversational,
        WritingStyle::Technical,
        WritingStyle::Storytelling,
        WritingStyle::Listicle,
        WritingStyle::Interview,
    ];

    /// Label as it appears in the prompt.
    pub fn label(&self) -> &str {
        match self {
            WritingStyle::Professional => "Professional",
            WritingStyle::Conversational => "Conversational",
            WritingStyle::Technical => "Technical",
            WritingStyle::Storytelling => "Storytelling",
            WritingStyle::Listicle => "Listicle",
            WritingStyle::Interview => "Interview",
            WritingStyle::Other(label) => label,
        }
    }

    /// Match a label against the fixed set, ignoring case.
    pub fn parse_known(label: &str) -> Option<WritingStyle> {
        match label.trim().to_lowercase().as_str() {
            "professional" => Some(WritingStyle::Professional),
            "conversational" => Some(WritingStyle::Conversational),
            "technical" => Some(WritingStyle::Technical),
            "storytelling" => Some(WritingStyle::Storytelling),
            "listicle" => Some(WritingStyle::Listicle),
            "interview" => Some(WritingStyle::Interview),
            _ => None,
        }
    }

    /// Lenient parse: unknown labels become [`WritingStyle::Other`].
    pub fn from_label(label: &str) -> WritingStyle {
        Self::parse_known(label).unwrap_or_else(|| WritingStyle::Other(label.to_string()))
    }
}

impl fmt::Display for WritingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tone of voice for the post.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    #[default]
    Authoritative,
    Friendly,
    Informative,
    Persuasive,
    Neutral,
    Humorous,
    /// Label outside the fixed set, carried as-is.
    Other(String),
}

impl Tone {
    /// The fixed tones, in menu order.
    pub const ALL: [Tone; 6] = [
        Tone::Authoritative,
        Tone::Friendly,
        Tone::Informative,
        Tone::Persuasive,
        Tone::Neutral,
        Tone::Humorous,
    ];

    pub fn label(&self) -> &str {
        match self {
            Tone::Authoritative => "Authoritative",
            Tone::Friendly => "Friendly",
            Tone::Informative => "Informative",
            Tone::Persuasive => "Persuasive",
            Tone::Neutral => "Neutral",
            Tone::Humorous => "Humorous",
            Tone::Other(label) => label,
        }
    }

    pub fn parse_known(label: &str) -> Option<Tone> {
        match label.trim().to_lowercase().as_str() {
            "authoritative" => Some(Tone::Authoritative),
            "friendly" => Some(Tone::Friendly),
            "informative" => Some(Tone::Informative),
            "persuasive" => Some(Tone::Persuasive),
            "neutral" => Some(Tone::Neutral),
            "humorous" => Some(Tone::Humorous),
            _ => None,
        }
    }

    pub fn from_label(label: &str) -> Tone {
        Self::parse_known(label).unwrap_or_else(|| Tone::Other(label.to_string()))
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Readership the post is written for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Audience {
    #[default]
    GeneralReaders,
    IndustryProfessionals,
    AcademicResearchers,
    Students,
    /// Label outside the fixed set, carried as-is.
    Other(String),
}

impl Audience {
    /// The fixed audiences, in menu order.
    pub const ALL: [Audience; 4] = [
        Audience::GeneralReaders,
        Audience::IndustryProfessionals,
        Audience::AcademicResearchers,
        Audience::Students,
    ];

    pub fn label(&self) -> &str {
        match self {
            Audience::GeneralReaders => "General Readers",
            Audience::IndustryProfessionals => "Industry Professionals",
            Audience::AcademicResearchers => "Academic Researchers",
            Audience::Students => "Students",
            Audience::Other(label) => label,
        }
    }

    /// Match a label against the fixed set. Spaces, hyphens and underscores are
    /// interchangeable so `industry-professionals` works on the command line.
    pub fn parse_known(label: &str) -> Option<Audience> {
        let normalized: String = label
            .trim()
            .chars()
            .map(|c| if c == '-' || c == '_' { ' ' } else { c.to_ascii_lowercase() })
            .collect();

        match normalized.as_str() {
            "general readers" | "general" => Some(Audience::GeneralReaders),
            "industry professionals" | "professionals" => Some(Audience::IndustryProfessionals),
            "academic researchers" | "researchers" => Some(Audience::AcademicResearchers),
            "students" => Some(Audience::Students),
            _ => None,
        }
    }

    pub fn from_label(label: &str) -> Audience {
        Self::parse_known(label).unwrap_or_else(|| Audience::Other(label.to_string()))
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
