//! Two-stage generation pipeline.
//!
//! The pipeline turns a (topic, style) request into a set of
//! platform-tailored image prompts in two strictly ordered stages:
//!
//! 1. **Screening**: [`ContentValidator`] sends the topic with a fixed
//!    rubric to the completion service and parses a binary verdict.
//! 2. **Generation**: only after an approved verdict, [`PromptGenerator`]
//!    requests one prompt per platform and parses the labeled reply into a
//!    [`PromptSet`].
//!
//! The ordering is enforced structurally by [`PromptSession`], a small
//! per-request state machine, rather than by caller convention. Sessions
//! are request-scoped values; re-running a session ("regenerate") repeats
//! both stages from scratch — verdicts are never cached across runs.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use eduprompt::catalog::StylePreset;
//! use eduprompt::llm::GeminiClient;
//! use eduprompt::pipeline::{GenerationWorkflow, PromptSession, SessionState};
//!
//! let client = Arc::new(GeminiClient::from_env()?);
//! let workflow = GenerationWorkflow::new(client);
//!
//! let mut session = PromptSession::new("Friends exploring a coral reef", StylePreset::Watercolor)?;
//! workflow.run(&mut session).await?;
//!
//! match session.state() {
//!     SessionState::Ready => {
//!         for (platform, prompt) in session.prompts().expect("ready session").known() {
//!             println!("{}: {}", platform, prompt);
//!         }
//!     }
//!     SessionState::Rejected => eprintln!("{}", session.rejection_reason().unwrap_or_default()),
//!     _ => {}
//! }
//! ```

pub mod generator;
pub mod session;
pub mod validator;

pub use generator::{PromptGenerator, PromptSet};
pub use session::{GenerationWorkflow, PromptSession, SessionState};
pub use validator::{ContentValidator, Verdict};
