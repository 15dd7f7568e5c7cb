//! 统一 API 错误码定义

use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::errors::ShortenitError;

/// API 错误码枚举
///
/// 使用 serde_repr 序列化为数字。按千位分域：
/// - 0: 成功
/// - 1000-1099: 通用错误
/// - 3000-3099: 链接输入错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(i32)]
pub enum ErrorCode {
    // 成功
    Success = 0,

    // 通用错误 1000-1099
    BadRequest = 1000,
    NotFound = 1004,
    InternalServerError = 1005,
    BatchSizeTooLarge = 1010,
    EmptyBatch = 1013,

    // 链接输入错误 3000-3099
    LinkInvalidUrl = 3002,
    LinkInvalidShortcode = 3007,
}

impl From<&ShortenitError> for ErrorCode {
    fn from(err: &ShortenitError) -> Self {
        match err {
            ShortenitError::InvalidUrl(_) => ErrorCode::LinkInvalidUrl,
            ShortenitError::InvalidShortcode(_) => ErrorCode::LinkInvalidShortcode,
            ShortenitError::EmptyBatch(_) => ErrorCode::EmptyBatch,
            ShortenitError::BatchSizeTooLarge(_) => ErrorCode::BatchSizeTooLarge,
            ShortenitError::Telemetry(_)
            | ShortenitError::Config(_)
            | ShortenitError::FileOperation(_)
            | ShortenitError::Serialization(_) => ErrorCode::InternalServerError,
        }
    }
}
