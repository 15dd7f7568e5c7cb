//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

/// Shortenit - batch URL shortener
#[derive(Parser, Debug)]
#[command(name = "shortenit")]
#[command(version)]
#[command(about = "Shorten up to five URLs at a time", long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,
    /// Shorten a batch of URLs and print the resulting links
    ///
    /// Usage: shorten <URL>... [--validity MIN] [--code CODE]...
    /// - `--code` values are matched to URLs by position
    Shorten {
        /// Long URLs, one per row
        #[arg(required = true, num_args = 1..)]
        urls: Vec<String>,
        /// Validity in minutes for every row (default from config)
        #[arg(long)]
        validity: Option<i64>,
        /// Custom shortcode for the URL at the same position
        #[arg(long = "code")]
        codes: Vec<String>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,
        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },
}
