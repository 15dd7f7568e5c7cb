use std::fmt;

/// 用户可见的提示信息
pub const INVALID_URL_USER_MESSAGE: &str = "Please enter a valid URL for all inputs.";
pub const INVALID_SHORTCODE_USER_MESSAGE: &str = "Shortcode must be alphanumeric.";
pub const EMPTY_BATCH_USER_MESSAGE: &str = "Please enter at least one URL.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortenitError {
    InvalidUrl(String),
    InvalidShortcode(String),
    EmptyBatch(String),
    BatchSizeTooLarge(String),
    Telemetry(String),
    Config(String),
    FileOperation(String),
    Serialization(String),
}

impl ShortenitError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ShortenitError::InvalidUrl(_) => "E001",
            ShortenitError::InvalidShortcode(_) => "E002",
            ShortenitError::EmptyBatch(_) => "E003",
            ShortenitError::BatchSizeTooLarge(_) => "E004",
            ShortenitError::Telemetry(_) => "E005",
            ShortenitError::Config(_) => "E006",
            ShortenitError::FileOperation(_) => "E007",
            ShortenitError::Serialization(_) => "E008",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ShortenitError::InvalidUrl(_) => "Invalid URL",
            ShortenitError::InvalidShortcode(_) => "Invalid Shortcode",
            ShortenitError::EmptyBatch(_) => "Empty Batch",
            ShortenitError::BatchSizeTooLarge(_) => "Batch Size Too Large",
            ShortenitError::Telemetry(_) => "Telemetry Error",
            ShortenitError::Config(_) => "Configuration Error",
            ShortenitError::FileOperation(_) => "File Operation Error",
            ShortenitError::Serialization(_) => "Serialization Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            ShortenitError::InvalidUrl(msg)
            | ShortenitError::InvalidShortcode(msg)
            | ShortenitError::EmptyBatch(msg)
            | ShortenitError::BatchSizeTooLarge(msg)
            | ShortenitError::Telemetry(msg)
            | ShortenitError::Config(msg)
            | ShortenitError::FileOperation(msg)
            | ShortenitError::Serialization(msg) => msg,
        }
    }

    /// 面向用户的提示（表单下方的提示条）
    pub fn user_message(&self) -> &str {
        match self {
            ShortenitError::InvalidUrl(_) => INVALID_URL_USER_MESSAGE,
            ShortenitError::InvalidShortcode(_) => INVALID_SHORTCODE_USER_MESSAGE,
            ShortenitError::EmptyBatch(_) => EMPTY_BATCH_USER_MESSAGE,
            other => other.message(),
        }
    }

    /// 是否为用户输入错误（批次被整体拒绝，控制权交还给用户）
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ShortenitError::InvalidUrl(_)
                | ShortenitError::InvalidShortcode(_)
                | ShortenitError::EmptyBatch(_)
                | ShortenitError::BatchSizeTooLarge(_)
        )
    }

    /// 映射到 HTTP 状态码：输入错误为 400，其余为 500
    #[cfg(feature = "server")]
    pub fn http_status(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;
        if self.is_validation() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    /// 格式化为彩色输出（用于 Server 模式）
    #[cfg(feature = "server")]
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 CLI 模式）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ShortenitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ShortenitError {}

// 便捷的构造函数
impl ShortenitError {
    pub fn invalid_url<T: Into<String>>(msg: T) -> Self {
        ShortenitError::InvalidUrl(msg.into())
    }

    pub fn invalid_shortcode<T: Into<String>>(msg: T) -> Self {
        ShortenitError::InvalidShortcode(msg.into())
    }

    pub fn empty_batch<T: Into<String>>(msg: T) -> Self {
        ShortenitError::EmptyBatch(msg.into())
    }

    pub fn batch_size_too_large<T: Into<String>>(msg: T) -> Self {
        ShortenitError::BatchSizeTooLarge(msg.into())
    }

    pub fn telemetry<T: Into<String>>(msg: T) -> Self {
        ShortenitError::Telemetry(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        ShortenitError::Config(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        ShortenitError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        ShortenitError::Serialization(msg.into())
    }
}

impl From<std::io::Error> for ShortenitError {
    fn from(err: std::io::Error) -> Self {
        ShortenitError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ShortenitError {
    fn from(err: serde_json::Error) -> Self {
        ShortenitError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for ShortenitError {
    fn from(err: toml::ser::Error) -> Self {
        ShortenitError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for ShortenitError {
    fn from(err: config::ConfigError) -> Self {
        ShortenitError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ShortenitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_for_validation_errors() {
        assert_eq!(
            ShortenitError::invalid_url("not-a-url").user_message(),
            INVALID_URL_USER_MESSAGE
        );
        assert_eq!(
            ShortenitError::invalid_shortcode("bad code!").user_message(),
            INVALID_SHORTCODE_USER_MESSAGE
        );
        assert_eq!(
            ShortenitError::batch_size_too_large("at most 5 URLs").user_message(),
            "at most 5 URLs"
        );
    }

    #[test]
    fn test_codes_are_unique() {
        let errors = [
            ShortenitError::invalid_url(""),
            ShortenitError::invalid_shortcode(""),
            ShortenitError::empty_batch(""),
            ShortenitError::batch_size_too_large(""),
            ShortenitError::telemetry(""),
            ShortenitError::config(""),
            ShortenitError::file_operation(""),
            ShortenitError::serialization(""),
        ];
        let codes: std::collections::HashSet<_> = errors.iter().map(|e| e.code()).collect();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_is_validation() {
        assert!(ShortenitError::invalid_url("x").is_validation());
        assert!(ShortenitError::empty_batch("x").is_validation());
        assert!(!ShortenitError::telemetry("x").is_validation());
        assert!(!ShortenitError::config("x").is_validation());
    }

    #[test]
    fn test_display_uses_simple_format() {
        let err = ShortenitError::invalid_shortcode("bad code!");
        assert_eq!(err.to_string(), "Invalid Shortcode: bad code!");
    }
}
