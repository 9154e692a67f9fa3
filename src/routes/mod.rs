//! API 라우트 설정 모듈
//!
//! 릴레이 서비스의 엔드포인트는 루트 경로에 모여 있습니다.
//!
//! | 메서드 | 경로 | 핸들러 |
//! |--------|------|--------|
//! | GET | `/` | [`handlers::health::liveness`] |
//! | GET | `/health` | [`handlers::health::health_check`] |
//! | POST | `/` | [`handlers::submissions::submit_form`] |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(state))
//!     .configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;

/// 모든 라우트를 설정합니다
///
/// `POST /` 핸들러는 `web::Data<AppState>`가 등록되어 있어야 합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoints
    cfg.service(handlers::health::liveness);
    cfg.service(handlers::health::health_check);

    configure_submission_routes(cfg);
}

/// 폼 제출 라우트를 설정합니다
///
/// ```bash
/// curl -X POST http://localhost:3000/ \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Ann","email":"a@x.com"}'
/// ```
fn configure_submission_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::submissions::submit_form);
}
