//! Health Check Handlers
//!
//! - `GET /` - 원래의 평문 생존 응답
//! - `GET /health` - 모니터링용 JSON 상태 문서

use actix_web::{get, HttpResponse, Responder};
use serde_json::json;

/// 평문 생존 응답
pub const LIVENESS_MESSAGE: &str = "Hello, the service is live!";

/// 서비스 생존 확인
///
/// 상태를 읽지 않으며 부수 효과가 없습니다.
///
/// # Endpoint
/// `GET /`
#[get("/")]
pub async fn liveness() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(LIVENESS_MESSAGE)
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// # Endpoint
/// `GET /health`
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "form_sheet_relay",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z"
/// }
/// ```
#[get("/health")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
