//! Per-request session state machine and the two-stage workflow runner.
//!
//! A [`PromptSession`] carries everything one generation request touches:
//! the topic, the chosen style, the current lifecycle state, the last
//! rejection reason, and the last prompt set. Sessions are independent
//! values; concurrent requests never share one.
//!
//! The state machine makes "screen before generate" structural: generation
//! can only begin from `Approved`, and `Approved` is only reachable through
//! `Validating`.

use std::sync::Arc;

use crate::catalog::StylePreset;
use crate::error::SessionError;
use crate::llm::CompletionProvider;
use crate::pipeline::generator::{PromptGenerator, PromptSet};
use crate::pipeline::validator::{ContentValidator, Verdict};

/// Lifecycle states of a prompt session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Session created, nothing submitted yet.
    Idle,
    /// Screening call in flight.
    Validating,
    /// Screening returned a negative verdict; resubmission allowed.
    Rejected,
    /// Screening returned a positive verdict; generation may begin.
    Approved,
    /// Generation call in flight.
    Generating,
    /// A prompt set is available.
    Ready,
    /// A service call failed; the user may retry.
    Failed,
}

impl SessionState {
    /// Returns the states reachable from this one.
    ///
    /// Rejected, Ready, and Failed all lead back to Validating: any
    /// resubmission or regeneration re-runs both stages from scratch.
    pub fn valid_transitions(&self) -> &'static [SessionState] {
        match self {
            SessionState::Idle => &[SessionState::Validating],
            SessionState::Validating => &[
                SessionState::Approved,
                SessionState::Rejected,
                SessionState::Failed,
            ],
            SessionState::Approved => &[SessionState::Generating],
            SessionState::Generating => &[SessionState::Ready, SessionState::Failed],
            SessionState::Rejected => &[SessionState::Validating],
            SessionState::Ready => &[SessionState::Validating],
            SessionState::Failed => &[SessionState::Validating],
        }
    }

    /// Check if a transition to `to` is allowed from this state.
    pub fn can_transition(&self, to: SessionState) -> bool {
        self.valid_transitions().contains(&to)
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SessionState::Idle => "idle",
            SessionState::Validating => "validating",
            SessionState::Rejected => "rejected",
            SessionState::Approved => "approved",
            SessionState::Generating => "generating",
            SessionState::Ready => "ready",
            SessionState::Failed => "failed",
        };
        write!(f, "{}", name)
    }
}

/// Request-scoped context for one generation flow.
#[derive(Debug)]
pub struct PromptSession {
    topic: String,
    style: StylePreset,
    state: SessionState,
    rejection_reason: Option<String>,
    failure: Option<String>,
    prompts: Option<PromptSet>,
}

impl PromptSession {
    /// Create a new idle session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyTopic` when the topic is empty after
    /// trimming; an empty request never reaches the screening stage.
    pub fn new(topic: impl Into<String>, style: StylePreset) -> Result<Self, SessionError> {
        let topic = topic.into().trim().to_string();
        if topic.is_empty() {
            return Err(SessionError::EmptyTopic);
        }

        Ok(Self {
            topic,
            style,
            state: SessionState::Idle,
            rejection_reason: None,
            failure: None,
            prompts: None,
        })
    }

    /// The trimmed topic under screening/generation.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// The chosen style preset.
    pub fn style(&self) -> StylePreset {
        self.style
    }

    /// The current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The rejection reason, when the last screening was negative.
    pub fn rejection_reason(&self) -> Option<&str> {
        self.rejection_reason.as_deref()
    }

    /// The failure message, when the last service call failed.
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// The prompt set from the last completed generation.
    pub fn prompts(&self) -> Option<&PromptSet> {
        self.prompts.as_ref()
    }

    /// Attempt a state transition, rejecting anything outside the table.
    fn transition(&mut self, to: SessionState) -> Result<(), SessionError> {
        if !self.state.can_transition(to) {
            return Err(SessionError::InvalidTransition {
                from: self.state.to_string(),
                to: to.to_string(),
            });
        }
        tracing::debug!(from = %self.state, to = %to, "Session transition");
        self.state = to;
        Ok(())
    }

    /// Enter screening. Clears results from any previous run: a re-run
    /// screens the topic again rather than reusing an old verdict.
    pub fn begin_validation(&mut self) -> Result<(), SessionError> {
        self.transition(SessionState::Validating)?;
        self.rejection_reason = None;
        self.failure = None;
        self.prompts = None;
        Ok(())
    }

    /// Record a positive verdict.
    pub fn mark_approved(&mut self) -> Result<(), SessionError> {
        self.transition(SessionState::Approved)
    }

    /// Record a negative verdict with its reason.
    pub fn mark_rejected(&mut self, reason: impl Into<String>) -> Result<(), SessionError> {
        self.transition(SessionState::Rejected)?;
        self.rejection_reason = Some(reason.into());
        Ok(())
    }

    /// Enter generation. Only reachable from an approved session.
    pub fn begin_generation(&mut self) -> Result<(), SessionError> {
        self.transition(SessionState::Generating)
    }

    /// Record a completed generation.
    pub fn mark_ready(&mut self, prompts: PromptSet) -> Result<(), SessionError> {
        self.transition(SessionState::Ready)?;
        self.prompts = Some(prompts);
        Ok(())
    }

    /// Record a service failure from either stage.
    pub fn mark_failed(&mut self, message: impl Into<String>) -> Result<(), SessionError> {
        self.transition(SessionState::Failed)?;
        self.failure = Some(message.into());
        Ok(())
    }
}

/// Drives a session through screening and, on approval, generation.
///
/// Both service calls are awaited in sequence with no overlap; there is no
/// retry and no cancellation. A failed call leaves the session in `Failed`
/// and propagates the error.
pub struct GenerationWorkflow {
    validator: ContentValidator,
    generator: PromptGenerator,
}

impl GenerationWorkflow {
    /// Create a workflow with both stages backed by one provider.
    pub fn new(client: Arc<dyn CompletionProvider>) -> Self {
        Self {
            validator: ContentValidator::new(client.clone()),
            generator: PromptGenerator::new(client),
        }
    }

    /// Run the full flow for the session's (topic, style).
    ///
    /// On return the session is in one of:
    /// - `Ready` — prompts parsed and stored on the session
    /// - `Rejected` — negative verdict, reason stored, generator never called
    /// - `Failed` — a service call failed; the error is also returned
    ///
    /// Calling this again on a `Rejected`, `Ready`, or `Failed` session
    /// re-runs both stages.
    pub async fn run(&self, session: &mut PromptSession) -> Result<(), SessionError> {
        session.begin_validation()?;
        tracing::info!(style = session.style().key(), "Screening topic");

        match self.validator.validate(session.topic()).await {
            Ok(Verdict::Approved) => session.mark_approved()?,
            Ok(Verdict::Rejected { reason }) => {
                tracing::info!("Topic rejected by screening");
                session.mark_rejected(reason)?;
                return Ok(());
            }
            Err(err) => {
                tracing::warn!(error = %err, "Screening call failed");
                let message = err.to_string();
                session.mark_failed(message)?;
                return Err(err.into());
            }
        }

        session.begin_generation()?;
        tracing::info!("Generating platform prompts");

        match self
            .generator
            .generate(session.topic(), session.style())
            .await
        {
            Ok(prompts) => {
                session.mark_ready(prompts)?;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "Generation call failed");
                let message = err.to_string();
                session.mark_failed(message)?;
                Err(err.into())
            }
        }
    }
}
