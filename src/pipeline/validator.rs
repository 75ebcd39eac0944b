//! Topic appropriateness screening.

use std::sync::Arc;

use crate::error::LlmError;
use crate::llm::{CompletionProvider, CompletionRequest};
use crate::prompts::{build_validation_prompt, AFFIRMATIVE_TOKEN, NEGATIVE_TOKEN};

/// Fixed rejection reason reported for a negative verdict.
const REJECTION_REASON: &str =
    "The topic contains content unsuitable for elementary classroom use";

/// Sampling temperature for screening calls; verdicts should be stable.
const VALIDATION_TEMPERATURE: f64 = 0.0;

/// The screening verdict for a topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The topic is suitable; prompt generation may proceed.
    Approved,
    /// The topic is unsuitable. The user may revise and resubmit.
    Rejected { reason: String },
}

impl Verdict {
    /// Returns true for an approved verdict.
    pub fn is_approved(&self) -> bool {
        matches!(self, Verdict::Approved)
    }
}

/// Screens topics against the classroom-appropriateness rubric.
pub struct ContentValidator {
    /// The completion provider used for screening calls.
    client: Arc<dyn CompletionProvider>,
}

impl ContentValidator {
    /// Create a new validator backed by the given completion provider.
    pub fn new(client: Arc<dyn CompletionProvider>) -> Self {
        Self { client }
    }

    /// Screens a topic and returns the verdict.
    ///
    /// The caller must have checked that `topic` is non-empty after
    /// trimming; this method does not re-check it.
    ///
    /// Verdict matching checks the negative token before the affirmative
    /// one, because "INAPPROPRIATE" textually contains "APPROPRIATE". A
    /// reply carrying neither token is treated as a rejection. Service
    /// failures surface as `Err` and are never retried here.
    pub async fn validate(&self, topic: &str) -> Result<Verdict, LlmError> {
        let request = CompletionRequest::new(build_validation_prompt(topic))
            .with_temperature(VALIDATION_TEMPERATURE);

        let response = self.client.complete(request).await?;
        let reply = response.text.trim();

        let verdict = if reply.contains(NEGATIVE_TOKEN) {
            Verdict::Rejected {
                reason: REJECTION_REASON.to_string(),
            }
        } else if reply.contains(AFFIRMATIVE_TOKEN) {
            Verdict::Approved
        } else {
            tracing::warn!(reply_len = reply.len(), "Screening reply carried no verdict token");
            Verdict::Rejected {
                reason: REJECTION_REASON.to_string(),
            }
        };

        tracing::debug!(approved = verdict.is_approved(), "Topic screened");
        Ok(verdict)
    }
}
