//! Server mode
//!
//! Configures and starts the HTTP server with the shorten and health routes.

use actix_cors::Cors;
use actix_web::{
    App, HttpServer,
    middleware::{Compress, DefaultHeaders},
    web,
};
use anyhow::Result;
use std::sync::Arc;
use tracing::warn;

use crate::api::services::{AppStartTime, health_routes, shorten_routes};
use crate::config::get_config;
use crate::services::ShortenerService;

/// Build CORS middleware from `server.cors_allowed_origins`
///
/// Empty list keeps the browser's same-origin policy; `"*"` allows any origin.
pub fn build_cors_middleware(allowed_origins: &[String]) -> Cors {
    if allowed_origins.is_empty() {
        return Cors::default();
    }

    let mut cors = if allowed_origins.iter().any(|o| o == "*") {
        Cors::default().allow_any_origin()
    } else {
        allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors = cors
        .allowed_methods(vec!["GET", "POST"])
        .allowed_header(actix_web::http::header::CONTENT_TYPE)
        .allowed_header(actix_web::http::header::ACCEPT)
        .max_age(3600);

    cors
}

/// Run the HTTP server
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server() -> Result<()> {
    let app_start_time = AppStartTime::default();

    let config = get_config();
    let service = Arc::new(ShortenerService::from_config(&config));

    let cpu_count = config.server.cpu_count.clamp(1, 32);
    warn!("Using {} CPU cores for the server", cpu_count);
    warn!(
        "Telemetry sink: {} (enabled: {})",
        service.telemetry().sink_name(),
        config.telemetry.enabled
    );

    let allowed_origins = config.server.cors_allowed_origins.clone();
    if allowed_origins.is_empty() {
        warn!("CORS allowed_origins is empty, cross-origin requests will be rejected");
    }

    let server = HttpServer::new(move || {
        let cors = build_cors_middleware(&allowed_origins);

        App::new()
            .wrap(cors)
            .wrap(Compress::default())
            .app_data(web::Data::new(service.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .wrap(
                DefaultHeaders::new()
                    .add(("Connection", "keep-alive"))
                    .add(("Cache-Control", "no-cache, no-store, must-revalidate")),
            )
            .service(health_routes())
            .service(shorten_routes())
    })
    .keep_alive(std::time::Duration::from_secs(30))
    .client_request_timeout(std::time::Duration::from_millis(5000))
    .workers(cpu_count);

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    warn!("Starting server at http://{}", bind_address);
    let server = server.bind(&bind_address)?.run();

    // Wait for server or shutdown signal
    tokio::select! {
        res = server => {
            res?;
        }
        _ = tokio::signal::ctrl_c() => {
            warn!("Received Ctrl+C, shutting down");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{Method, StatusCode, header};
    use actix_web::test::{self, TestRequest};

    /// 发送预检请求，返回状态码与 Access-Control-Allow-Origin
    async fn preflight(allowed: &[String], origin: &str) -> (StatusCode, Option<String>) {
        let app = test::init_service(
            App::new()
                .wrap(build_cors_middleware(allowed))
                .service(shorten_routes()),
        )
        .await;

        let req = TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/api/shorten")
            .insert_header((header::ORIGIN, origin))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .to_request();

        match test::try_call_service(&app, req).await {
            Ok(resp) => {
                let allow = resp
                    .headers()
                    .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
                (resp.status(), allow)
            }
            Err(e) => (e.as_response_error().status_code(), None),
        }
    }

    #[actix_rt::test]
    async fn test_listed_origin_passes_preflight() {
        let allowed = vec!["http://localhost:3000".to_string()];

        let (status, allow) = preflight(&allowed, "http://localhost:3000").await;
        assert!(status.is_success(), "status {}", status);
        assert_eq!(allow.as_deref(), Some("http://localhost:3000"));
    }

    #[actix_rt::test]
    async fn test_unlisted_origin_is_rejected() {
        let allowed = vec!["http://localhost:3000".to_string()];

        let (status, allow) = preflight(&allowed, "http://evil.example.com").await;
        assert!(status.is_client_error(), "status {}", status);
        assert!(allow.is_none());
    }

    #[actix_rt::test]
    async fn test_wildcard_allows_any_origin() {
        let (status, allow) = preflight(&["*".to_string()], "http://anything.example.com").await;
        assert!(status.is_success(), "status {}", status);
        assert!(allow.is_some());
    }

    #[actix_rt::test]
    async fn test_empty_list_rejects_cross_origin() {
        let (status, allow) = preflight(&[], "http://localhost:3000").await;
        assert!(status.is_client_error(), "status {}", status);
        assert!(allow.is_none());
    }
}
