//! Command-line interface for eduprompt.
//!
//! Provides commands for listing the style catalog, screening a topic, and
//! running the full generation flow.

mod commands;

pub use commands::{parse_cli, run_with_cli, Cli};
