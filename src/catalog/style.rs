//! Visual style catalog.
//!
//! The ten fixed rendering presets a user can apply to a generated image.

use serde::{Deserialize, Serialize};

/// The available visual style presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StylePreset {
    CharacterAnimation,
    Webtoon,
    Character3d,
    PowerfulCharacter,
    Doodle,
    Watercolor,
    Fairytale,
    Photorealistic,
    CharacterDrama,
    ClayModel,
}

impl StylePreset {
    /// Returns all available style presets, in display order.
    pub fn all() -> Vec<StylePreset> {
        vec![
            StylePreset::CharacterAnimation,
            StylePreset::Webtoon,
            StylePreset::Character3d,
            StylePreset::PowerfulCharacter,
            StylePreset::Doodle,
            StylePreset::Watercolor,
            StylePreset::Fairytale,
            StylePreset::Photorealistic,
            StylePreset::CharacterDrama,
            StylePreset::ClayModel,
        ]
    }

    /// Returns the stable key for this preset (used by the CLI and config).
    pub fn key(&self) -> &'static str {
        match self {
            StylePreset::CharacterAnimation => "character-animation",
            StylePreset::Webtoon => "webtoon",
            StylePreset::Character3d => "3d-character",
            StylePreset::PowerfulCharacter => "powerful-character",
            StylePreset::Doodle => "doodle",
            StylePreset::Watercolor => "watercolor",
            StylePreset::Fairytale => "fairytale",
            StylePreset::Photorealistic => "photo",
            StylePreset::CharacterDrama => "character-drama",
            StylePreset::ClayModel => "clay-model",
        }
    }

    /// Returns the display icon for this preset.
    pub fn icon(&self) -> &'static str {
        match self {
            StylePreset::CharacterAnimation => "🎭",
            StylePreset::Webtoon => "📚",
            StylePreset::Character3d => "🎪",
            StylePreset::PowerfulCharacter => "👑",
            StylePreset::Doodle => "✏️",
            StylePreset::Watercolor => "📷",
            StylePreset::Fairytale => "🍄",
            StylePreset::Photorealistic => "📸",
            StylePreset::CharacterDrama => "🏠",
            StylePreset::ClayModel => "🔮",
        }
    }

    /// Returns the display name for this preset.
    pub fn display_name(&self) -> &'static str {
        match self {
            StylePreset::CharacterAnimation => "Character Animation",
            StylePreset::Webtoon => "Korean Webtoon",
            StylePreset::Character3d => "3D Character",
            StylePreset::PowerfulCharacter => "Powerful Character",
            StylePreset::Doodle => "Doodle Character",
            StylePreset::Watercolor => "Watercolor",
            StylePreset::Fairytale => "Fairytale",
            StylePreset::Photorealistic => "Photorealistic",
            StylePreset::CharacterDrama => "Character Drama",
            StylePreset::ClayModel => "Clay Model",
        }
    }

    /// Returns the short description embedded in generation prompts.
    pub fn description(&self) -> &'static str {
        match self {
            StylePreset::CharacterAnimation => "cute characters in an animation style",
            StylePreset::Webtoon => "a Korean webtoon comic style",
            StylePreset::Character3d => "dimensional 3D character rendering",
            StylePreset::PowerfulCharacter => "strong, heroic character designs",
            StylePreset::Doodle => "a loose, freehand doodle style",
            StylePreset::Watercolor => "soft watercolor textures",
            StylePreset::Fairytale => "a warm storybook illustration feel",
            StylePreset::Photorealistic => "a realistic photographic look",
            StylePreset::CharacterDrama => "dramatic, person-centered scenes",
            StylePreset::ClayModel => "a sculpted clay model texture",
        }
    }

    /// Parses a stable key back into a preset.
    pub fn from_key(key: &str) -> Option<StylePreset> {
        StylePreset::all()
            .into_iter()
            .find(|preset| preset.key() == key)
    }
}

impl std::fmt::Display for StylePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
