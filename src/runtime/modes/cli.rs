//! CLI mode
//!
//! Builds a short-lived service from the loaded configuration and delegates to
//! the CLI implementation.

use crate::cli::Commands;
use crate::config::get_config;
use crate::interfaces::cli::{CliError, run_cli_command};
use crate::services::ShortenerService;

/// Run a single CLI command
pub async fn run_cli(cmd: Commands) -> Result<(), CliError> {
    let config = get_config();
    let service = ShortenerService::from_config(&config);
    run_cli_command(&service, cmd).await
}
