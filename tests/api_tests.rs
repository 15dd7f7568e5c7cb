//! HTTP API integration tests
//!
//! Drives `/api/shorten`, `/api/links` and `/health` through actix's test
//! service with a recording telemetry sink.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use chrono::TimeDelta;
use parking_lot::Mutex;
use serde_json::{Value, json};

use shortenit::api::services::{
    ApiResponse, AppStartTime, ErrorCode, HealthResponse, LinksResponse, ShortenResponse,
    health_routes, shorten_routes,
};
use shortenit::services::{
    LogEvent, LogLevel, ShortenerService, ShortenerSettings, TelemetryReporter, TelemetrySink,
};

// =============================================================================
// Test Setup
// =============================================================================

#[derive(Default)]
struct RecordingSink {
    events: Mutex<Vec<LogEvent>>,
}

impl RecordingSink {
    fn events(&self) -> Vec<LogEvent> {
        self.events.lock().clone()
    }
}

impl TelemetrySink for RecordingSink {
    fn send(&self, event: LogEvent) {
        self.events.lock().push(event);
    }

    fn name(&self) -> &'static str {
        "Recording"
    }
}

fn setup() -> (Arc<ShortenerService>, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let telemetry = TelemetryReporter::new(sink.clone(), "frontend", "shortener");
    let service = Arc::new(ShortenerService::new(
        ShortenerSettings::default(),
        telemetry,
    ));
    (service, sink)
}

macro_rules! init_app {
    ($service:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($service.clone()))
                .app_data(web::Data::new(AppStartTime::default()))
                .service(health_routes())
                .service(shorten_routes()),
        )
        .await
    };
}

fn is_generated_code(code: &str) -> bool {
    code.len() == 6 && code.bytes().all(|b| b.is_ascii_alphanumeric())
}

// =============================================================================
// POST /api/shorten
// =============================================================================

#[actix_rt::test]
async fn test_shorten_single_url() {
    let (service, sink) = setup();
    let app = init_app!(service);

    let req = TestRequest::post()
        .uri("/api/shorten")
        .set_json(json!({
            "entries": [{ "url": "https://example.com", "validity": 30, "shortcode": "" }]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: ApiResponse<ShortenResponse> = test::read_body_json(resp).await;
    assert_eq!(body.code, ErrorCode::Success as i32);

    let links = body.data.unwrap().links;
    assert_eq!(links.len(), 1);
    let link = &links[0];
    assert_eq!(link.url, "https://example.com");
    assert!(is_generated_code(&link.shortcode), "got {}", link.shortcode);
    assert_eq!(link.expires_at - link.created_at, TimeDelta::minutes(30));
    assert!(link.clicks.is_empty());
    assert_eq!(link.click_count, 0);
    assert_eq!(
        link.short_url,
        format!("http://localhost:3000/{}", link.shortcode)
    );

    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, LogLevel::Info);
    assert_eq!(events[0].message, "Shorten URLs submitted.");
    assert_eq!(events[0].stack, "frontend");
    assert_eq!(events[0].package, "shortener");
}

#[actix_rt::test]
async fn test_shorten_missing_validity_defaults_to_30() {
    let (service, _sink) = setup();
    let app = init_app!(service);

    let req = TestRequest::post()
        .uri("/api/shorten")
        .set_json(json!({ "entries": [{ "url": "https://example.com/a" }] }))
        .to_request();
    let body: ApiResponse<ShortenResponse> = test::call_and_read_body_json(&app, req).await;

    let link = &body.data.unwrap().links[0];
    assert_eq!(link.validity_minutes, 30);
    assert_eq!(link.expires_at - link.created_at, TimeDelta::minutes(30));
}

#[actix_rt::test]
async fn test_shorten_custom_code_and_zero_validity() {
    let (service, _sink) = setup();
    let app = init_app!(service);

    let req = TestRequest::post()
        .uri("/api/shorten")
        .set_json(json!({
            "entries": [
                { "url": "https://a.example.com", "validity": 0, "shortcode": "promo1" },
                { "url": "https://b.example.com", "validity": 120 }
            ]
        }))
        .to_request();
    let body: ApiResponse<ShortenResponse> = test::call_and_read_body_json(&app, req).await;

    let links = body.data.unwrap().links;
    assert_eq!(links.len(), 2);
    assert_eq!(links[0].shortcode, "promo1");
    assert_eq!(links[0].validity_minutes, 30);
    assert_eq!(links[0].expires_at - links[0].created_at, TimeDelta::minutes(30));
    assert_eq!(links[1].url, "https://b.example.com");
    assert_eq!(links[1].expires_at - links[1].created_at, TimeDelta::minutes(120));
    assert_eq!(links[0].created_at, links[1].created_at);
}

#[actix_rt::test]
async fn test_shorten_invalid_url_rejects_batch() {
    let (service, sink) = setup();
    let app = init_app!(service);

    let req = TestRequest::post()
        .uri("/api/shorten")
        .set_json(json!({
            "entries": [
                { "url": "https://fine.example.com" },
                { "url": "not-a-url", "validity": 30 }
            ]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ApiResponse<Value> = test::read_body_json(resp).await;
    assert_eq!(body.code, ErrorCode::LinkInvalidUrl as i32);
    assert_eq!(body.message, "Please enter a valid URL for all inputs.");
    assert!(body.data.is_none());
    assert!(service.is_empty());

    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, LogLevel::Error);
    assert_eq!(events[0].message, "Invalid URL input.");
}

#[actix_rt::test]
async fn test_shorten_invalid_shortcode_rejects_batch() {
    let (service, sink) = setup();
    let app = init_app!(service);

    let req = TestRequest::post()
        .uri("/api/shorten")
        .set_json(json!({
            "entries": [{ "url": "https://example.com", "validity": 30, "shortcode": "bad code!" }]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ApiResponse<Value> = test::read_body_json(resp).await;
    assert_eq!(body.code, ErrorCode::LinkInvalidShortcode as i32);
    assert_eq!(body.message, "Shortcode must be alphanumeric.");
    assert!(service.is_empty());

    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].message, "Invalid shortcode input.");
}

#[actix_rt::test]
async fn test_shorten_six_entries_rejected() {
    let (service, sink) = setup();
    let app = init_app!(service);

    let entries: Vec<Value> = (0..6)
        .map(|i| json!({ "url": format!("https://site{}.example.com", i) }))
        .collect();
    let req = TestRequest::post()
        .uri("/api/shorten")
        .set_json(json!({ "entries": entries }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ApiResponse<Value> = test::read_body_json(resp).await;
    assert_eq!(body.code, ErrorCode::BatchSizeTooLarge as i32);
    assert!(service.is_empty());
    assert!(sink.events().is_empty());
}

#[actix_rt::test]
async fn test_shorten_five_entries_accepted() {
    let (service, _sink) = setup();
    let app = init_app!(service);

    let entries: Vec<Value> = (0..5)
        .map(|i| json!({ "url": format!("https://site{}.example.com", i) }))
        .collect();
    let req = TestRequest::post()
        .uri("/api/shorten")
        .set_json(json!({ "entries": entries }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(service.len(), 5);
}

#[actix_rt::test]
async fn test_shorten_empty_batch_rejected() {
    let (service, sink) = setup();
    let app = init_app!(service);

    let req = TestRequest::post()
        .uri("/api/shorten")
        .set_json(json!({ "entries": [] }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ApiResponse<Value> = test::read_body_json(resp).await;
    assert_eq!(body.code, ErrorCode::EmptyBatch as i32);
    assert!(sink.events().is_empty());
}

#[actix_rt::test]
async fn test_shorten_malformed_body() {
    let (service, _sink) = setup();
    let app = init_app!(service);

    let req = TestRequest::post()
        .uri("/api/shorten")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{\"entries\": [")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ApiResponse<Value> = test::read_body_json(resp).await;
    assert_eq!(body.code, ErrorCode::BadRequest as i32);
    assert!(body.message.starts_with("Invalid request body"));
}

// =============================================================================
// GET /api/links
// =============================================================================

#[actix_rt::test]
async fn test_list_links_in_append_order() {
    let (service, _sink) = setup();
    let app = init_app!(service);

    for batch in [
        json!([{ "url": "https://first.example.com" }, { "url": "https://second.example.com" }]),
        json!([{ "url": "https://third.example.com", "shortcode": "third3" }]),
    ] {
        let req = TestRequest::post()
            .uri("/api/shorten")
            .set_json(json!({ "entries": batch }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    let req = TestRequest::get().uri("/api/links").to_request();
    let body: ApiResponse<LinksResponse> = test::call_and_read_body_json(&app, req).await;
    let data = body.data.unwrap();

    assert_eq!(data.total, 3);
    let urls: Vec<_> = data.links.iter().map(|l| l.url.as_str()).collect();
    assert_eq!(
        urls,
        [
            "https://first.example.com",
            "https://second.example.com",
            "https://third.example.com"
        ]
    );
    assert_eq!(data.links[2].shortcode, "third3");
}

#[actix_rt::test]
async fn test_list_links_empty() {
    let (service, _sink) = setup();
    let app = init_app!(service);

    let req = TestRequest::get().uri("/api/links").to_request();
    let body: ApiResponse<LinksResponse> = test::call_and_read_body_json(&app, req).await;
    let data = body.data.unwrap();
    assert_eq!(data.total, 0);
    assert!(data.links.is_empty());
}

// =============================================================================
// Health
// =============================================================================

#[actix_rt::test]
async fn test_health_reports_link_count() {
    let (service, _sink) = setup();
    let app = init_app!(service);

    let req = TestRequest::post()
        .uri("/api/shorten")
        .set_json(json!({ "entries": [{ "url": "https://example.com" }] }))
        .to_request();
    test::call_service(&app, req).await;

    let req = TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: ApiResponse<HealthResponse> = test::read_body_json(resp).await;
    let health = body.data.unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.links_count, 1);
    assert_eq!(health.telemetry, "Recording");
}

#[actix_rt::test]
async fn test_readiness_and_liveness() {
    let (service, _sink) = setup();
    let app = init_app!(service);

    let req = TestRequest::get().uri("/health/ready").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = TestRequest::get().uri("/health/live").to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NO_CONTENT
    );
}
