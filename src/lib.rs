//! eduprompt: classroom image-prompt pipeline.
//!
//! This library screens a free-text lesson topic for classroom
//! appropriateness and, on approval, generates image-generation prompts
//! tailored to four downstream platforms. Both stages are backed by a
//! single text-completion service (Gemini).

// Core modules
pub mod catalog;
pub mod cli;
pub mod error;
pub mod llm;
pub mod pipeline;
pub mod prompts;
pub mod utils;

// Re-export commonly used error types
pub use error::{LlmError, SessionError};
