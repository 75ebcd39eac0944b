//! Completion-service integration for eduprompt.
//!
//! This module provides the client for the Gemini text-completion API and
//! the provider trait the pipeline components are written against. Both
//! pipeline stages (topic screening and prompt generation) issue single-turn
//! completions through [`CompletionProvider`].
//!
//! ```ignore
//! use eduprompt::llm::{GeminiClient, CompletionProvider, CompletionRequest};
//!
//! let client = GeminiClient::from_env()?;
//! let request = CompletionRequest::new("Describe a coral reef in one sentence.")
//!     .with_temperature(0.7);
//! let response = client.complete(request).await?;
//! println!("{}", response.text);
//! ```

pub mod gemini;

pub use gemini::{
    CompletionProvider, CompletionRequest, CompletionResponse, GeminiClient, TokenUsage,
    DEFAULT_MODEL,
};
