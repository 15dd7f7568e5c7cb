//! Service layer for business logic
//!
//! This module provides the logic shared between the HTTP API and the CLI.

mod shortener_service;
pub mod telemetry;
pub mod validator;

pub use shortener_service::*;
pub use telemetry::{LogEvent, LogLevel, TelemetryReporter, TelemetrySink};
