//! CLI interface module

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use crate::services::ShortenerService;
use commands::{config_generate, shorten_urls};

#[derive(Debug)]
pub enum CliError {
    ValidationError(String),
    ParseError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::ValidationError(msg) => format!("Validation error: {}", msg),
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::ValidationError(msg) => {
                format!("{} {}", "Validation error:".yellow().bold(), msg.white())
            }
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<crate::errors::ShortenitError> for CliError {
    fn from(err: crate::errors::ShortenitError) -> Self {
        if err.is_validation() {
            CliError::ValidationError(err.user_message().to_string())
        } else {
            CliError::CommandError(err.to_string())
        }
    }
}

/// Run a CLI command from clap-parsed input
///
/// `Serve` is dispatched by the binary and is rejected here.
pub async fn run_cli_command(service: &ShortenerService, cmd: Commands) -> Result<(), CliError> {
    match cmd {
        Commands::Shorten {
            urls,
            validity,
            codes,
        } => shorten_urls(service, urls, validity, codes).await.map(|_| ()),

        Commands::Config {
            action: ConfigCommands::Generate { output_path, force },
        } => config_generate(output_path, force).await,

        Commands::Serve => Err(CliError::CommandError(
            "serve is not a one-shot command".to_string(),
        )),
    }
}
