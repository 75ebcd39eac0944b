//! Generation prompt builder for multi-platform image prompts.
//!
//! Builds the single instruction that asks the model for one prompt per
//! downstream platform, formatted as bold-marked labeled blocks so the
//! reply can be split deterministically (see `utils::section_extraction`).

use crate::catalog::{Platform, StylePreset};

/// Instruction template for prompt generation.
///
/// `{platform_constraints}` expands to one numbered line per platform and
/// `{format_lines}` to the mandated `**Label**: ...` reply skeleton.
const GENERATION_PROMPT_TEMPLATE: &str = r#"Create image-generation prompts for educational use.

Topic: {topic}
Style: {style_name} - {style_description}

Create one prompt for each of the following platforms:

{platform_constraints}

Reply format:
{format_lines}"#;

/// Builds the multi-platform generation prompt for a topic and style.
///
/// The caller guarantees the topic has already passed screening; this
/// builder performs no checks of its own.
///
/// # Examples
///
/// ```
/// use eduprompt::catalog::StylePreset;
/// use eduprompt::prompts::build_generation_prompt;
///
/// let prompt = build_generation_prompt("Friends exploring a coral reef", StylePreset::Watercolor);
/// assert!(prompt.contains("Watercolor"));
/// assert!(prompt.contains("**Canva AI**"));
/// ```
pub fn build_generation_prompt(topic: &str, style: StylePreset) -> String {
    let platform_constraints = Platform::all()
        .iter()
        .enumerate()
        .map(|(i, platform)| format!("{}. {}: {}", i + 1, platform.label(), platform.guidance()))
        .collect::<Vec<_>>()
        .join("\n");

    let format_lines = Platform::all()
        .iter()
        .map(|platform| format!("**{}**: [prompt]", platform.label()))
        .collect::<Vec<_>>()
        .join("\n");

    GENERATION_PROMPT_TEMPLATE
        .replace("{topic}", topic)
        .replace("{style_name}", style.display_name())
        .replace("{style_description}", style.description())
        .replace("{platform_constraints}", &platform_constraints)
        .replace("{format_lines}", &format_lines)
}
