//! Multi-platform prompt generation.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::catalog::{Platform, StylePreset};
use crate::error::LlmError;
use crate::llm::{CompletionProvider, CompletionRequest};
use crate::prompts::build_generation_prompt;
use crate::utils::{extract_labeled_sections, strip_code_fences};

/// Sampling temperature for generation calls; variety across regenerations
/// is desirable here.
const GENERATION_TEMPERATURE: f64 = 0.8;

/// The parsed platform-name to prompt-text mapping for one request.
///
/// Raw reply labels are retained verbatim, including labels that match no
/// known platform; [`PromptSet::known`] filters to the fixed platform set.
/// A partial or empty set is a valid value, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PromptSet {
    entries: HashMap<String, String>,
}

impl PromptSet {
    /// Parses a raw model reply into a prompt set.
    ///
    /// A reply with no recognizable labeled blocks yields an empty set.
    pub fn from_response(raw: &str) -> Self {
        let entries = extract_labeled_sections(strip_code_fences(raw));
        Self { entries }
    }

    /// Returns the prompt for a known platform, if present.
    pub fn get(&self, platform: Platform) -> Option<&str> {
        self.entries.get(platform.label()).map(String::as_str)
    }

    /// Returns the prompt for a raw reply label, known or not.
    pub fn get_label(&self, label: &str) -> Option<&str> {
        self.entries.get(label).map(String::as_str)
    }

    /// Iterates the entries that match known platforms, in catalog order.
    pub fn known(&self) -> impl Iterator<Item = (Platform, &str)> {
        Platform::all()
            .into_iter()
            .filter_map(move |platform| self.get(platform).map(|prompt| (platform, prompt)))
    }

    /// Returns all raw labels present in the set.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of parsed entries, including unknown labels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the reply parsed to zero entries. Callers should
    /// surface this as "nothing generated", not as a failure.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Generates platform-tailored image prompts for an approved topic.
pub struct PromptGenerator {
    /// The completion provider used for generation calls.
    client: Arc<dyn CompletionProvider>,
}

impl PromptGenerator {
    /// Create a new generator backed by the given completion provider.
    pub fn new(client: Arc<dyn CompletionProvider>) -> Self {
        Self { client }
    }

    /// Generates prompts for all platforms in one completion call.
    ///
    /// The caller must hold an approved verdict for this exact topic in the
    /// current request; no re-screening happens here. Service failures
    /// surface as `Err`; an unparseable but successful reply yields an
    /// empty [`PromptSet`].
    pub async fn generate(
        &self,
        topic: &str,
        style: StylePreset,
    ) -> Result<PromptSet, LlmError> {
        let request = CompletionRequest::new(build_generation_prompt(topic, style))
            .with_temperature(GENERATION_TEMPERATURE);

        let response = self.client.complete(request).await?;
        let prompts = PromptSet::from_response(&response.text);

        tracing::debug!(
            entries = prompts.len(),
            style = style.key(),
            "Generated prompt set"
        );
        if prompts.is_empty() {
            tracing::warn!("Generation reply parsed to zero labeled blocks");
        }

        Ok(prompts)
    }
}
