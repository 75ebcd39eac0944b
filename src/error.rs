//! Error types for eduprompt operations.
//!
//! Defines error types for the two major subsystems:
//! - Completion-service calls (configuration and transport failures)
//! - Session lifecycle (invalid input, invalid state transitions)

use thiserror::Error;

/// Errors that can occur when calling the completion service.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Missing API key: GEMINI_API_KEY environment variable not set")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    RequestFailed(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("API error ({code}): {message}")]
    ApiError { code: u16, message: String },

    #[error("Failed to parse completion response: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while driving a prompt session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Topic must not be empty")]
    EmptyTopic,

    #[error("Unknown style key '{0}'")]
    UnknownStyle(String),

    #[error("Invalid state transition from '{from}' to '{to}'")]
    InvalidTransition { from: String, to: String },

    #[error("Completion service error: {0}")]
    Llm(#[from] LlmError),
}
