//! 批量缩短与统计接口

use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, Result as ActixResult, web};
use std::sync::Arc;
use tracing::{info, trace, warn};

use crate::services::ShortenerService;

use super::error_code::ErrorCode;
use super::helpers::{error_from_shortenit, error_response, success_response};
use super::types::{LinksResponse, ShortenRequest, ShortenResponse};

/// 请求体上限
const JSON_BODY_LIMIT: usize = 64 * 1024;

pub struct ShortenApiService;

impl ShortenApiService {
    /// 提交一批 URL
    ///
    /// 任一条目非法时整批拒绝（400），注册表不变。
    pub async fn shorten(
        service: web::Data<Arc<ShortenerService>>,
        body: web::Json<ShortenRequest>,
    ) -> ActixResult<impl Responder> {
        let ShortenRequest { entries } = body.into_inner();
        trace!("Shorten API: received batch of {} entries", entries.len());

        let form = match service.form_from_entries(entries) {
            Ok(form) => form,
            Err(e) => {
                warn!("Shorten API: rejected batch: {}", e);
                return Ok(error_from_shortenit(&e));
            }
        };

        match service.submit_form(&form) {
            Ok(records) => {
                info!("Shorten API: created {} links", records.len());
                Ok(success_response(ShortenResponse {
                    links: service.to_stats(&records),
                }))
            }
            Err(e) => Ok(error_from_shortenit(&e)),
        }
    }

    /// 列出全部链接及点击统计
    pub async fn list_links(
        service: web::Data<Arc<ShortenerService>>,
    ) -> ActixResult<impl Responder> {
        let links = service.stats();
        trace!("Shorten API: listing {} links", links.len());

        Ok(success_response(LinksResponse {
            total: links.len(),
            links,
        }))
    }
}

/// 请求体解析失败时返回统一格式的 400
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(|err, _req| {
            let message = format!("Invalid request body: {}", err);
            warn!("Shorten API: {}", message);
            let response: HttpResponse =
                error_response(StatusCode::BAD_REQUEST, ErrorCode::BadRequest, &message);
            InternalError::from_response(err, response).into()
        })
}

/// 缩短接口路由
pub fn shorten_routes() -> actix_web::Scope {
    web::scope("/api")
        .app_data(json_config())
        .route("/shorten", web::post().to(ShortenApiService::shorten))
        .route("/links", web::get().to(ShortenApiService::list_links))
}
