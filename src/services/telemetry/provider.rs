//! 遥测上报抽象层
//!
//! 根据配置选择实现：
//! 1. enabled 且 endpoint 非空 → HttpTelemetrySink
//! 2. 否则 → NullTelemetrySink（直接丢弃）

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter};
use tracing::{info, warn};

use super::http::HttpTelemetrySink;
use crate::config::TelemetryConfig;

/// 日志级别
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warning,
    Error,
    Fatal,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// 上报给远程日志服务的事件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    pub stack: String,
    pub level: LogLevel,
    pub package: String,
    pub message: String,
}

/// 遥测发送 trait
///
/// `send` 不能阻塞调用方，也不能返回错误：发送失败一律在实现内部吞掉。
pub trait TelemetrySink: Send + Sync {
    fn send(&self, event: LogEvent);

    /// 获取 sink 名称（用于日志）
    fn name(&self) -> &'static str;
}

/// 丢弃所有事件
pub struct NullTelemetrySink;

impl TelemetrySink for NullTelemetrySink {
    fn send(&self, _event: LogEvent) {}

    fn name(&self) -> &'static str {
        "Null"
    }
}

/// 请求超时，0 秒按 1 秒处理
fn request_timeout(config: &TelemetryConfig) -> Duration {
    if config.timeout_secs == 0 {
        warn!("Config: telemetry.timeout_secs = 0, using 1");
        return Duration::from_secs(1);
    }
    Duration::from_secs(config.timeout_secs)
}

/// 遥测上报入口
#[derive(Clone)]
pub struct TelemetryReporter {
    sink: Arc<dyn TelemetrySink>,
    stack: String,
    package: String,
}

impl TelemetryReporter {
    pub fn new(
        sink: Arc<dyn TelemetrySink>,
        stack: impl Into<String>,
        package: impl Into<String>,
    ) -> Self {
        Self {
            sink,
            stack: stack.into(),
            package: package.into(),
        }
    }

    pub fn disabled() -> Self {
        let defaults = TelemetryConfig::default();
        Self::new(Arc::new(NullTelemetrySink), defaults.stack, defaults.package)
    }

    pub fn from_config(config: &TelemetryConfig) -> Self {
        let endpoint = config.endpoint.trim();
        let sink: Arc<dyn TelemetrySink> = if config.enabled && !endpoint.is_empty() {
            info!("Telemetry: reporting to {}", endpoint);
            Arc::new(HttpTelemetrySink::new(endpoint, request_timeout(config)))
        } else {
            info!("Telemetry: disabled");
            Arc::new(NullTelemetrySink)
        };
        Self::new(sink, config.stack.clone(), config.package.clone())
    }

    pub fn sink_name(&self) -> &'static str {
        self.sink.name()
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        self.log_with_package(level, &self.package, message);
    }

    /// 发送一条事件，立即返回
    ///
    /// 空消息不会被发送。
    pub fn log_with_package(&self, level: LogLevel, package: &str, message: &str) {
        if message.is_empty() {
            warn!("Telemetry: dropping {} event with empty message", level);
            return;
        }

        self.sink.send(LogEvent {
            stack: self.stack.clone(),
            level,
            package: package.to_string(),
            message: message.to_string(),
        });
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    pub fn fatal(&self, message: &str) {
        self.log(LogLevel::Fatal, message);
    }
}

impl std::fmt::Debug for TelemetryReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelemetryReporter")
            .field("sink", &self.sink.name())
            .field("stack", &self.stack)
            .field("package", &self.package)
            .finish()
    }
}
