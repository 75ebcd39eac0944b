//! Labeled-section extraction for parsing LLM responses.
//!
//! The generation stage instructs the model to format its reply as a
//! sequence of bold-marked labeled blocks:
//!
//! ```text
//! **Tooning Magic**: children, coral reef, bright colors
//! **Canva AI**: A gentle watercolor illustration of children exploring a reef
//! ```
//!
//! This module implements that grammar explicitly so its edge cases (partial
//! replies, unknown labels, dangling markers, empty output) are independently
//! testable rather than buried in the generator.
//!
//! # Grammar
//!
//! - The reply is split on the two-character bold marker `**`, producing
//!   alternating non-label/label segments.
//! - Segments are walked in (label, content) pairs starting at the second
//!   segment. A trailing label with no content segment is discarded.
//! - Labels are trimmed of surrounding whitespace and one trailing colon.
//! - Content is trimmed of surrounding whitespace and one leading colon
//!   (the model may place the colon inside or outside the bold marker).
//! - Labels are kept as-is, including labels that match no known platform;
//!   filtering to the known platform set is the caller's responsibility.

use regex::Regex;
use std::collections::HashMap;

/// The bold marker delimiting section labels in a reply.
pub const SECTION_DELIMITER: &str = "**";

/// Extracts labeled sections from a raw model reply.
///
/// Returns a mapping from trimmed label to trimmed content. The mapping may
/// hold fewer entries than the reply has labels (duplicate labels keep the
/// last occurrence) and may be empty; neither case is an error.
///
/// # Examples
///
/// ```
/// use eduprompt::utils::extract_labeled_sections;
///
/// let reply = "**Tooning Magic**: children, reef **Canva AI**: A detailed scene";
/// let sections = extract_labeled_sections(reply);
/// assert_eq!(sections["Tooning Magic"], "children, reef");
/// assert_eq!(sections["Canva AI"], "A detailed scene");
/// ```
pub fn extract_labeled_sections(raw: &str) -> HashMap<String, String> {
    let mut sections = HashMap::new();

    let segments: Vec<&str> = raw.split(SECTION_DELIMITER).collect();

    // Labels occupy the odd segments; the segment after each label is its
    // content. A label at the very end with no following segment is dropped.
    let mut index = 1;
    while index + 1 < segments.len() {
        let label = segments[index].trim();
        let label = label.strip_suffix(':').unwrap_or(label).trim();

        let content = segments[index + 1].trim();
        let content = content.strip_prefix(':').unwrap_or(content).trim();

        if !label.is_empty() {
            sections.insert(label.to_string(), content.to_string());
        }

        index += 2;
    }

    sections
}

/// Strips a surrounding markdown code fence from a reply, if present.
///
/// Models occasionally wrap the whole labeled-block reply in a ``` fence.
/// Returns the inner content when the reply is a single fenced block,
/// otherwise the trimmed input unchanged.
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();

    if !trimmed.starts_with("```") {
        return trimmed;
    }

    // Only unwrap when the fence spans the entire reply.
    let re = Regex::new(r"^```(?:\w+)?\s*\n?([\s\S]*?)\n?```$").expect("static fence pattern");
    match re.captures(trimmed) {
        Some(caps) => caps.get(1).map(|m| m.as_str().trim()).unwrap_or(trimmed),
        None => trimmed,
    }
}
