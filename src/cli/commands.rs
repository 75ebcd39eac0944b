//! CLI command definitions for eduprompt.
//!
//! The CLI is a thin caller over the library pipeline: it builds the Gemini
//! client from configuration, drives a single session per invocation, and
//! prints the outcome. All policy decisions live in the pipeline.

use clap::Parser;
use std::sync::Arc;
use tracing::info;

use crate::catalog::StylePreset;
use crate::error::{LlmError, SessionError};
use crate::llm::{GeminiClient, DEFAULT_MODEL};
use crate::pipeline::{ContentValidator, GenerationWorkflow, PromptSession, SessionState};

/// Classroom image-prompt generator.
#[derive(Parser)]
#[command(name = "eduprompt")]
#[command(about = "Screen a lesson topic and generate platform-tailored image prompts")]
#[command(version)]
#[command(
    long_about = "eduprompt screens a lesson topic for classroom appropriateness and, on \
approval, generates one image prompt per downstream platform.\n\nExample usage:\n  \
eduprompt generate --topic \"Friends exploring a coral reef\" --style watercolor"
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,
}

/// Available CLI subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// List the available style presets.
    Styles,

    /// Screen a topic for classroom appropriateness without generating.
    Validate(ValidateArgs),

    /// Run the full flow: screen the topic, then generate platform prompts.
    #[command(alias = "gen")]
    Generate(GenerateArgs),
}

/// Arguments for `eduprompt validate`.
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// The lesson topic to screen.
    #[arg(short, long)]
    pub topic: String,

    /// Gemini API key (can also be set via GEMINI_API_KEY env var).
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Gemini model to use.
    #[arg(short, long, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,
}

/// Arguments for `eduprompt generate`.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// The lesson topic to illustrate.
    #[arg(short, long)]
    pub topic: String,

    /// Style preset key (see `eduprompt styles`).
    #[arg(short, long)]
    pub style: String,

    /// Emit the prompt set as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Gemini API key (can also be set via GEMINI_API_KEY env var).
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Gemini model to use.
    #[arg(short, long, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,
}

/// Parse CLI arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Run the CLI with pre-parsed arguments.
pub async fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Styles => {
            run_styles();
            Ok(())
        }
        Commands::Validate(args) => run_validate(args).await,
        Commands::Generate(args) => run_generate(args).await,
    }
}

/// A missing credential disables both stages before any network call; it is
/// reported distinctly from service failures.
fn build_client(api_key: Option<String>, model: String) -> Result<GeminiClient, LlmError> {
    match api_key {
        Some(api_key) => Ok(GeminiClient::new(api_key, model)),
        None => Err(LlmError::MissingApiKey),
    }
}

fn run_styles() {
    println!("Available styles:");
    for preset in StylePreset::all() {
        println!(
            "  {:<20} {} {:<20} {}",
            preset.key(),
            preset.icon(),
            preset.display_name(),
            preset.description()
        );
    }
}

async fn run_validate(args: ValidateArgs) -> anyhow::Result<()> {
    if args.topic.trim().is_empty() {
        return Err(SessionError::EmptyTopic.into());
    }

    let client = Arc::new(build_client(args.api_key, args.model)?);
    let validator = ContentValidator::new(client);

    let verdict = validator.validate(args.topic.trim()).await?;
    match verdict {
        crate::pipeline::Verdict::Approved => {
            println!("✅ Topic is suitable for classroom use.");
        }
        crate::pipeline::Verdict::Rejected { reason } => {
            println!("❌ Topic rejected: {}", reason);
        }
    }
    Ok(())
}

async fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let style = StylePreset::from_key(&args.style)
        .ok_or_else(|| SessionError::UnknownStyle(args.style.clone()))?;

    let client = Arc::new(build_client(args.api_key, args.model)?);
    let workflow = GenerationWorkflow::new(client);

    let mut session = PromptSession::new(args.topic, style)?;
    info!(style = style.key(), "Running generation flow");
    workflow.run(&mut session).await?;

    match session.state() {
        SessionState::Ready => {
            let prompts = session
                .prompts()
                .expect("ready session carries a prompt set");

            if prompts.is_empty() {
                println!("Nothing generated: the model reply contained no labeled prompts.");
                return Ok(());
            }

            if args.json {
                println!("{}", serde_json::to_string_pretty(prompts)?);
            } else {
                for (platform, prompt) in prompts.known() {
                    println!("{} {} ({})", platform.icon(), platform.label(), platform.url());
                    println!("    {}", platform.summary());
                    println!("    {}\n", prompt);
                }
            }
        }
        SessionState::Rejected => {
            println!(
                "❌ Topic rejected: {}",
                session.rejection_reason().unwrap_or("no reason recorded")
            );
        }
        state => {
            // Failed sessions propagate their error from run(); any other
            // state here indicates a bug in the workflow.
            anyhow::bail!("Unexpected session state after run: {}", state);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_client_without_key_is_configuration_error() {
        let result = build_client(None, DEFAULT_MODEL.to_string());
        assert!(matches!(result, Err(LlmError::MissingApiKey)));
    }

    #[test]
    fn test_build_client_with_key() {
        let client = build_client(Some("test-key".to_string()), DEFAULT_MODEL.to_string())
            .expect("client builds");
        assert_eq!(client.model(), DEFAULT_MODEL);
    }

    #[test]
    fn test_cli_parses_generate() {
        let cli = Cli::parse_from([
            "eduprompt",
            "generate",
            "--topic",
            "Friends exploring a coral reef",
            "--style",
            "watercolor",
            "--api-key",
            "test-key",
        ]);

        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.topic, "Friends exploring a coral reef");
                assert_eq!(args.style, "watercolor");
                assert!(!args.json);
            }
            _ => panic!("expected generate subcommand"),
        }
    }

    #[test]
    fn test_cli_parses_styles() {
        let cli = Cli::parse_from(["eduprompt", "styles"]);
        assert!(matches!(cli.command, Commands::Styles));
    }

    #[test]
    fn test_cli_generate_alias() {
        let cli = Cli::parse_from([
            "eduprompt", "gen", "--topic", "t", "--style", "doodle", "--api-key", "k",
        ]);
        assert!(matches!(cli.command, Commands::Generate(_)));
    }

    #[test]
    fn test_all_platforms_have_display_metadata() {
        use crate::catalog::Platform;

        for platform in Platform::all() {
            assert!(platform.url().starts_with("https://"));
            assert!(!platform.summary().is_empty());
        }
    }
}
