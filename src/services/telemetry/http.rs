//! HTTP 遥测实现
//!
//! 以 JSON POST 发送事件。请求在分离的阻塞任务中执行，
//! 调用方不会等待结果，失败只记录 debug 日志。

use std::time::Duration;

use tracing::{debug, trace};
use ureq::Agent;

use super::provider::{LogEvent, TelemetrySink};
use crate::errors::ShortenitError;

pub struct HttpTelemetrySink {
    endpoint: String,
    agent: Agent,
}

impl HttpTelemetrySink {
    pub fn new(endpoint: &str, timeout: Duration) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            endpoint: endpoint.to_string(),
            agent,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 同步发送一条事件，返回响应状态码
    ///
    /// 非 2xx 响应与网络错误都会转为 `ShortenitError::Telemetry`。
    pub fn post_event(&self, event: &LogEvent) -> Result<u16, ShortenitError> {
        post_event_with(&self.agent, &self.endpoint, event)
    }
}

fn post_event_with(agent: &Agent, endpoint: &str, event: &LogEvent) -> Result<u16, ShortenitError> {
    let resp = agent.post(endpoint).send_json(event).map_err(|e| {
        ShortenitError::telemetry(format!("request to \"{}\" failed: {}", endpoint, e))
    })?;

    let status = resp.status();
    if !status.is_success() {
        return Err(ShortenitError::telemetry(format!(
            "Log API error: HTTP status {}",
            status.as_u16()
        )));
    }

    trace!("Telemetry: {} event accepted ({})", event.level, status);
    Ok(status.as_u16())
}

impl TelemetrySink for HttpTelemetrySink {
    fn send(&self, event: LogEvent) {
        let agent = self.agent.clone();
        let endpoint = self.endpoint.clone();

        let task = move || {
            if let Err(e) = post_event_with(&agent, &endpoint, &event) {
                debug!("Telemetry: event dropped: {}", e);
            }
        };

        // JoinHandle 直接丢弃，任务与调用方分离
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let _ = handle.spawn_blocking(task);
            }
            Err(_) => {
                let _ = std::thread::spawn(task);
            }
        }
    }

    fn name(&self) -> &'static str {
        "HTTP"
    }
}
