//! URL 验证模块
//!
//! 只接受带协议和主机部分的绝对 URL

use url::Url;

/// URL 验证错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlValidationError {
    EmptyUrl,
    InvalidFormat(String),
    MissingHost(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUrl => write!(f, "URL cannot be empty"),
            Self::InvalidFormat(msg) => write!(f, "Invalid URL format: {}", msg),
            Self::MissingHost(url) => write!(f, "URL has no host: {}", url),
        }
    }
}

impl std::error::Error for UrlValidationError {}

/// 验证 URL 是否为绝对地址
///
/// 检查项目：
/// 1. URL 不为空
/// 2. 能被解析为绝对 URL（包含协议）
/// 3. 含有非空主机部分
pub fn validate_url(url: &str) -> Result<Url, UrlValidationError> {
    let url = url.trim();

    if url.is_empty() {
        return Err(UrlValidationError::EmptyUrl);
    }

    let parsed = Url::parse(url).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(parsed),
        _ => Err(UrlValidationError::MissingHost(url.to_string())),
    }
}
