//! 远程日志上报
//!
//! 在用户操作时发送结构化日志事件，发送结果被忽略，
//! 失败不会影响主流程。

mod http;
mod provider;

pub use http::HttpTelemetrySink;
pub use provider::{LogEvent, LogLevel, NullTelemetrySink, TelemetryReporter, TelemetrySink};
