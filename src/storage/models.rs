use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// 未指定有效期时使用的分钟数
pub const DEFAULT_VALIDITY_MINUTES: i64 = 30;

fn default_validity_minutes() -> i64 {
    DEFAULT_VALIDITY_MINUTES
}

/// 单条短链创建请求（由表单的一行生成，立即交给 registry 消费）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortLinkRequest {
    pub url: String,
    #[serde(alias = "validity", default = "default_validity_minutes")]
    pub validity_minutes: i64,
    #[serde(default)]
    pub shortcode: Option<String>,
}

impl ShortLinkRequest {
    pub fn new(url: impl Into<String>, validity_minutes: i64) -> Self {
        Self {
            url: url.into(),
            validity_minutes,
            shortcode: None,
        }
    }

    pub fn with_shortcode(mut self, shortcode: impl Into<String>) -> Self {
        self.shortcode = Some(shortcode.into());
        self
    }

    /// 用户指定的短码；空字符串视为未指定
    pub fn custom_shortcode(&self) -> Option<&str> {
        self.shortcode.as_deref().filter(|c| !c.is_empty())
    }
}

/// 点击事件（数据模型保留，但没有任何代码路径会写入）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickEvent {
    pub timestamp: DateTime<Utc>,
    pub source: String,
    pub geo: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortLinkRecord {
    pub url: String,
    pub shortcode: String,
    pub validity_minutes: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    #[serde(default)]
    pub clicks: Vec<ClickEvent>,
}

impl ShortLinkRecord {
    pub fn click_count(&self) -> usize {
        self.clicks.len()
    }

    /// 拼出展示用的短链地址
    pub fn short_url(&self, public_base_url: &str) -> String {
        format!("{}/{}", public_base_url.trim_end_matches('/'), self.shortcode)
    }
}

/// 计算过期时间：created_at + validity_minutes 分钟
///
/// 超出 chrono 可表示范围时饱和到最小/最大时间。
pub fn compute_expires_at(created_at: DateTime<Utc>, validity_minutes: i64) -> DateTime<Utc> {
    TimeDelta::try_minutes(validity_minutes)
        .and_then(|delta| created_at.checked_add_signed(delta))
        .unwrap_or(if validity_minutes >= 0 {
            DateTime::<Utc>::MAX_UTC
        } else {
            DateTime::<Utc>::MIN_UTC
        })
}
