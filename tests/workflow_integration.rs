//! Integration tests for the two-stage generation workflow.
//!
//! These tests drive the full pipeline against a scripted completion
//! provider: screening and generation replies are queued up front, and the
//! provider records every prompt it receives so the tests can assert which
//! stages actually ran.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use eduprompt::catalog::{Platform, StylePreset};
use eduprompt::error::{LlmError, SessionError};
use eduprompt::llm::{CompletionProvider, CompletionRequest, CompletionResponse};
use eduprompt::pipeline::{GenerationWorkflow, PromptSession, SessionState};

/// A queued reply for the scripted provider.
enum ScriptedReply {
    Text(String),
    Fail(String),
}

/// Completion provider that replays queued replies and records prompts.
struct ScriptedProvider {
    replies: Mutex<Vec<ScriptedReply>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    fn new(replies: Vec<ScriptedReply>) -> Self {
        let mut replies = replies;
        replies.reverse();
        Self {
            replies: Mutex::new(replies),
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn recorded_prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompt log lock").clone()
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.prompts
            .lock()
            .expect("prompt log lock")
            .push(request.prompt);

        let reply = self
            .replies
            .lock()
            .expect("reply queue lock")
            .pop()
            .expect("scripted provider ran out of replies");

        match reply {
            ScriptedReply::Text(text) => Ok(CompletionResponse {
                text,
                usage: Default::default(),
            }),
            ScriptedReply::Fail(message) => Err(LlmError::RequestFailed(message)),
        }
    }
}

fn four_block_reply() -> String {
    "**Tooning Magic**: friends, coral reef, watercolor tones\n\
     **Canva AI**: A gentle watercolor illustration of children exploring a vibrant coral reef\n\
     **Art Bonbon School**: friendly reef explorers for a classroom poster\n\
     **ChatGPT**: An imaginative underwater world rendered in soft watercolor washes"
        .to_string()
}

#[tokio::test]
async fn approved_topic_produces_full_prompt_set() {
    let provider = Arc::new(ScriptedProvider::new(vec![
        ScriptedReply::Text("APPROPRIATE".to_string()),
        ScriptedReply::Text(four_block_reply()),
    ]));
    let workflow = GenerationWorkflow::new(provider.clone());

    let mut session =
        PromptSession::new("Friends exploring a coral reef", StylePreset::Watercolor)
            .expect("valid session");
    workflow.run(&mut session).await.expect("flow succeeds");

    assert_eq!(session.state(), SessionState::Ready);
    let prompts = session.prompts().expect("ready session has prompts");
    assert_eq!(prompts.known().count(), 4);

    let platforms: Vec<Platform> = prompts.known().map(|(p, _)| p).collect();
    assert_eq!(platforms, Platform::all());

    // Exactly two service calls: one screening, one generation. The
    // generation prompt embeds the style name and description.
    let recorded = provider.recorded_prompts();
    assert_eq!(recorded.len(), 2);
    assert!(recorded[0].contains("Friends exploring a coral reef"));
    assert!(recorded[0].contains("INAPPROPRIATE"));
    assert!(recorded[1].contains("Watercolor"));
    assert!(recorded[1].contains(StylePreset::Watercolor.description()));
}

#[tokio::test]
async fn rejected_topic_never_reaches_the_generator() {
    let provider = Arc::new(ScriptedProvider::new(vec![ScriptedReply::Text(
        "INAPPROPRIATE".to_string(),
    )]));
    let workflow = GenerationWorkflow::new(provider.clone());

    let mut session = PromptSession::new(
        "A violent assassination of a named real politician",
        StylePreset::Photorealistic,
    )
    .expect("valid session");
    workflow.run(&mut session).await.expect("rejection is not an error");

    assert_eq!(session.state(), SessionState::Rejected);
    assert!(session.rejection_reason().is_some());
    assert!(session.prompts().is_none());

    // Only the screening call was made.
    assert_eq!(provider.recorded_prompts().len(), 1);
}

#[tokio::test]
async fn screening_failure_leaves_session_failed() {
    let provider = Arc::new(ScriptedProvider::new(vec![ScriptedReply::Fail(
        "connection refused".to_string(),
    )]));
    let workflow = GenerationWorkflow::new(provider.clone());

    let mut session =
        PromptSession::new("coral reef", StylePreset::Watercolor).expect("valid session");
    let result = workflow.run(&mut session).await;

    assert!(matches!(
        result,
        Err(SessionError::Llm(LlmError::RequestFailed(_)))
    ));
    assert_eq!(session.state(), SessionState::Failed);
    assert!(session.failure().expect("failure recorded").contains("connection refused"));
    assert_eq!(provider.recorded_prompts().len(), 1);
}

#[tokio::test]
async fn generation_failure_leaves_session_failed() {
    let provider = Arc::new(ScriptedProvider::new(vec![
        ScriptedReply::Text("APPROPRIATE".to_string()),
        ScriptedReply::Fail("bad gateway".to_string()),
    ]));
    let workflow = GenerationWorkflow::new(provider.clone());

    let mut session =
        PromptSession::new("coral reef", StylePreset::Watercolor).expect("valid session");
    let result = workflow.run(&mut session).await;

    assert!(result.is_err());
    assert_eq!(session.state(), SessionState::Failed);
    assert_eq!(provider.recorded_prompts().len(), 2);
}

#[tokio::test]
async fn regeneration_rescreens_the_topic() {
    // Two full runs on one session: screening must happen again on the
    // second run, never reusing the first verdict.
    let provider = Arc::new(ScriptedProvider::new(vec![
        ScriptedReply::Text("APPROPRIATE".to_string()),
        ScriptedReply::Text(four_block_reply()),
        ScriptedReply::Text("APPROPRIATE".to_string()),
        ScriptedReply::Text("**Canva AI**: A different watercolor reef scene".to_string()),
    ]));
    let workflow = GenerationWorkflow::new(provider.clone());

    let mut session =
        PromptSession::new("coral reef", StylePreset::Watercolor).expect("valid session");

    workflow.run(&mut session).await.expect("first run");
    assert_eq!(session.prompts().expect("prompts").known().count(), 4);

    workflow.run(&mut session).await.expect("second run");
    assert_eq!(session.state(), SessionState::Ready);
    assert_eq!(session.prompts().expect("prompts").known().count(), 1);

    // Four calls total: two screenings, two generations.
    assert_eq!(provider.recorded_prompts().len(), 4);
}

#[tokio::test]
async fn resubmission_after_rejection_runs_both_stages() {
    let provider = Arc::new(ScriptedProvider::new(vec![
        ScriptedReply::Text("INAPPROPRIATE".to_string()),
        ScriptedReply::Text("APPROPRIATE".to_string()),
        ScriptedReply::Text(four_block_reply()),
    ]));
    let workflow = GenerationWorkflow::new(provider.clone());

    let mut session =
        PromptSession::new("coral reef", StylePreset::Fairytale).expect("valid session");

    workflow.run(&mut session).await.expect("rejection run");
    assert_eq!(session.state(), SessionState::Rejected);

    workflow.run(&mut session).await.expect("approval run");
    assert_eq!(session.state(), SessionState::Ready);
    assert_eq!(provider.recorded_prompts().len(), 3);
}

#[tokio::test]
async fn partial_generation_reply_yields_partial_set() {
    let partial = "**Tooning Magic**: friends, coral reef, watercolor tones \
                   **Canva AI**: A gentle watercolor illustration of children \
                   exploring a vibrant coral reef";
    let provider = Arc::new(ScriptedProvider::new(vec![
        ScriptedReply::Text("APPROPRIATE".to_string()),
        ScriptedReply::Text(partial.to_string()),
    ]));
    let workflow = GenerationWorkflow::new(provider);

    let mut session =
        PromptSession::new("coral reef", StylePreset::Watercolor).expect("valid session");
    workflow.run(&mut session).await.expect("flow succeeds");

    let prompts = session.prompts().expect("prompts");
    assert_eq!(prompts.len(), 2);
    assert_eq!(
        prompts.get(Platform::TooningMagic),
        Some("friends, coral reef, watercolor tones")
    );
    assert_eq!(prompts.get(Platform::ChatGpt), None);
}

#[tokio::test]
async fn unparseable_generation_reply_is_ready_with_empty_set() {
    let provider = Arc::new(ScriptedProvider::new(vec![
        ScriptedReply::Text("APPROPRIATE".to_string()),
        ScriptedReply::Text("Sorry, I can only answer in prose.".to_string()),
    ]));
    let workflow = GenerationWorkflow::new(provider);

    let mut session =
        PromptSession::new("coral reef", StylePreset::Doodle).expect("valid session");
    workflow.run(&mut session).await.expect("empty set is not an error");

    assert_eq!(session.state(), SessionState::Ready);
    assert!(session.prompts().expect("prompts").is_empty());
}
