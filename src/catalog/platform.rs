//! Downstream platform catalog.
//!
//! The four fixed image-generation platforms a prompt set targets. Each
//! platform has distinct prompt-format expectations that the generation
//! instruction spells out, and a label the model must echo back when
//! formatting its reply.

use serde::{Deserialize, Serialize};

/// The four downstream prompt targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    TooningMagic,
    CanvaAi,
    ArtBonbon,
    ChatGpt,
}

impl Platform {
    /// Returns all platforms, in display order.
    pub fn all() -> Vec<Platform> {
        vec![
            Platform::TooningMagic,
            Platform::CanvaAi,
            Platform::ArtBonbon,
            Platform::ChatGpt,
        ]
    }

    /// Returns the label the model is instructed to emit for this platform.
    ///
    /// Reply parsing matches this label exactly (after whitespace and
    /// trailing-colon trimming).
    pub fn label(&self) -> &'static str {
        match self {
            Platform::TooningMagic => "Tooning Magic",
            Platform::CanvaAi => "Canva AI",
            Platform::ArtBonbon => "Art Bonbon School",
            Platform::ChatGpt => "ChatGPT",
        }
    }

    /// Returns the display icon for this platform.
    pub fn icon(&self) -> &'static str {
        match self {
            Platform::TooningMagic => "🎭",
            Platform::CanvaAi => "🎨",
            Platform::ArtBonbon => "🎪",
            Platform::ChatGpt => "🤖",
        }
    }

    /// Returns the destination site where the prompt is meant to be pasted.
    pub fn url(&self) -> &'static str {
        match self {
            Platform::TooningMagic => "https://tooning.io/",
            Platform::CanvaAi => "https://www.canva.com/",
            Platform::ArtBonbon => "https://school-teacher.art-bonbon.com/",
            Platform::ChatGpt => "https://chat.openai.com/",
        }
    }

    /// Returns a short description of the prompt format this platform expects.
    pub fn summary(&self) -> &'static str {
        match self {
            Platform::TooningMagic => "simple comma-separated Korean tags",
            Platform::CanvaAi => "detailed English description",
            Platform::ArtBonbon => "education-optimized Korean phrasing",
            Platform::ChatGpt => "creative English description for DALL-E",
        }
    }

    /// Returns the per-platform constraint embedded in the generation prompt.
    pub fn guidance(&self) -> &'static str {
        match self {
            Platform::TooningMagic => {
                "Korean keywords separated by commas, short and clear, no full \
                 sentences (example: children, space suits, stars, bright colors, cute style)"
            }
            Platform::CanvaAi => {
                "one fully-formed English sentence, as detailed and specific as possible"
            }
            Platform::ArtBonbon => {
                "Korean phrasing optimized for elementary-school classroom display"
            }
            Platform::ChatGpt => {
                "an elaborate, imaginative English description suitable for DALL-E"
            }
        }
    }

    /// Matches a parsed reply label back to a platform, if it is one of the
    /// four known labels.
    pub fn from_label(label: &str) -> Option<Platform> {
        Platform::all()
            .into_iter()
            .find(|platform| platform.label() == label)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
