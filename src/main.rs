//! 폼 → 스프레드시트 릴레이 서버 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 릴레이 상태를 초기화합니다.
//! 토큰이 아직 없다면 먼저 `relay_admin authorize`로 발급받아야 합니다.

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use log::{error, info, warn};
use form_sheet_relay::config::env_loader::bootstrap;
use form_sheet_relay::config::{CorsConfig, RateLimitConfig, RelayConfig, ServerConfig};
use form_sheet_relay::core::AppState;
use form_sheet_relay::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    bootstrap("info,actix_web=debug");

    info!("🚀 폼 릴레이 서비스 시작중...");

    let state = web::Data::new(AppState::from_config().map_err(|e| {
        error!("릴레이 상태 초기화 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?);

    let target = state.submissions.target();
    info!("📄 대상 스프레드시트: {} ({})", target.spreadsheet_id, target.range);
    info!("📮 제출 모드: {}", state.mode.as_str());

    if !RelayConfig::token_path().exists() {
        warn!(
            "⚠️ 토큰 파일 없음 ({}). `relay_admin authorize` 실행 전까지 POST / 는 503을 반환합니다",
            RelayConfig::token_path().display()
        );
    }

    // HTTP 서버 시작
    start_http_server(state).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(state: web::Data<AppState>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::load();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();
    if allowed_origins.is_empty() {
        info!("🌍 CORS: 모든 Origin 허용");
    } else {
        info!("🌍 CORS 허용 Origin: {:?}", allowed_origins);
    }

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(state.clone())
            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// CORS 설정을 구성합니다
///
/// 허용 Origin 목록이 비어 있으면 모든 Origin을 허용합니다.
/// 폼은 브라우저에서 직접 전송되므로 자격 증명(쿠키)은 요구하지 않습니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    let cors = if allowed_origins.is_empty() {
        Cors::default().allow_any_origin()
    } else {
        allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors
        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        // 허용할 헤더
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
