//! LLM prompts for the two pipeline stages.
//!
//! This module contains the fixed templates and builder functions for each
//! stage of the generation pipeline:
//!
//! - [`validation`] - the appropriateness-screening rubric around a topic
//! - [`generation`] - the multi-platform prompt-generation instruction
//!
//! Templates are fixed at compile time; builders only substitute the
//! request's topic and style into them.

pub mod generation;
pub mod validation;

pub use generation::build_generation_prompt;
pub use validation::{build_validation_prompt, AFFIRMATIVE_TOKEN, NEGATIVE_TOKEN};
