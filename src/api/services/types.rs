//! API 请求与响应类型

use serde::{Deserialize, Serialize};

use crate::interfaces::form::ShortenEntry;
use crate::services::LinkStats;

/// 统一响应包装
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// `POST /api/shorten` 请求体
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ShortenRequest {
    pub entries: Vec<ShortenEntry>,
}

/// `POST /api/shorten` 成功响应：本批次新建的链接
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ShortenResponse {
    pub links: Vec<LinkStats>,
}

/// `GET /api/links` 响应：全部链接（按创建顺序）
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LinksResponse {
    pub total: usize,
    pub links: Vec<LinkStats>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub uptime: u32,
    pub links_count: usize,
    pub telemetry: String,
}
