//! 批量输入验证
//!
//! 按顺序逐条检查，遇到第一条非法输入即拒绝整批，不汇总多个错误。

use crate::errors::ShortenitError;
use crate::storage::ShortLinkRequest;
use crate::utils::is_valid_shortcode;
use crate::utils::url_validator::validate_url;

/// 遥测事件文案
pub const INVALID_URL_EVENT: &str = "Invalid URL input.";
pub const INVALID_SHORTCODE_EVENT: &str = "Invalid shortcode input.";
pub const SUBMITTED_EVENT: &str = "Shorten URLs submitted.";

/// 验证单条请求：先检查 URL，再检查（非空的）短码
pub fn validate_request(req: &ShortLinkRequest) -> Result<(), ShortenitError> {
    validate_url(&req.url)
        .map_err(|e| ShortenitError::invalid_url(format!("'{}': {}", req.url, e)))?;

    if let Some(code) = req.custom_shortcode()
        && !is_valid_shortcode(code)
    {
        return Err(ShortenitError::invalid_shortcode(format!(
            "Invalid shortcode '{}'. Only ASCII letters and digits are allowed.",
            code
        )));
    }

    Ok(())
}

/// 验证整批请求，返回第一条失败的错误
pub fn validate_batch(batch: &[ShortLinkRequest]) -> Result<(), ShortenitError> {
    for (idx, req) in batch.iter().enumerate() {
        validate_request(req).map_err(|e| match e {
            ShortenitError::InvalidUrl(msg) => {
                ShortenitError::invalid_url(format!("entry {}: {}", idx + 1, msg))
            }
            ShortenitError::InvalidShortcode(msg) => {
                ShortenitError::invalid_shortcode(format!("entry {}: {}", idx + 1, msg))
            }
            other => other,
        })?;
    }
    Ok(())
}

/// 验证失败时上报的遥测文案
pub fn telemetry_message(err: &ShortenitError) -> Option<&'static str> {
    match err {
        ShortenitError::InvalidUrl(_) => Some(INVALID_URL_EVENT),
        ShortenitError::InvalidShortcode(_) => Some(INVALID_SHORTCODE_EVENT),
        _ => None,
    }
}
