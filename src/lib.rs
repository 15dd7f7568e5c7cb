//! Shortenit - a small batch URL shortener
//!
//! Up to five long URLs are submitted at once, each with a validity window in
//! minutes and an optional custom shortcode. Every accepted URL becomes an
//! in-memory record with a generated (or custom) shortcode, and a short log
//! line is reported to a remote telemetry endpoint without waiting for it.
//!
//! # Features
//! - **server**: HTTP server mode (default)
//! - **cli**: Command-line interface
//!
//! # Architecture
//! - `storage`: Link records and the in-memory registry
//! - `services`: Validation, the shortening service and telemetry
//! - `interfaces`: Batch form model and CLI commands
//! - `api`: HTTP handlers
//! - `config`: Configuration management
//! - `runtime`: Execution modes
//! - `system`: Logging setup

#[cfg(feature = "server")]
pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
