//! HTTP 요청 핸들러 모듈
//!
//! # Modules
//!
//! - [`health`] - 서비스 생존 확인 (`GET /`, `GET /health`)
//! - [`submissions`] - 폼 제출을 시트 행으로 릴레이 (`POST /`)
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! 에러는 `AppError`의 `ResponseError` 구현으로 JSON 응답이 됩니다.

pub mod health;
pub mod submissions;
