//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 폼 릴레이 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 에러 분류
//!
//! | 분류 | 변형 | HTTP 상태 |
//! |------|------|-----------|
//! | 요청 검증 | `ValidationError` | 400 |
//! | 로컬 파일 I/O (credentials) | `CredentialsError` | 500 |
//! | 로컬 파일 I/O (token) | `TokenStoreError` | 500 |
//! | 토큰 없음/갱신 실패 | `NotAuthorized` | 503 |
//! | OAuth 토큰 엔드포인트 | `IdentityProviderError` | 502 |
//! | Sheets API | `ExternalServiceError` | 502 |
//! | 그 외 | `InternalError` | 500 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::{AppError, AppResult};
//!
//! async fn load(path: &Path) -> AppResult<String> {
//!     tokio::fs::read_to_string(path)
//!         .await
//!         .map_err(|e| AppError::CredentialsError(e.to_string()))
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 릴레이 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 핸들러에서 반환되면 자동으로 HTTP 응답으로 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// `credentials.json` 로드/파싱 에러 (500 Internal Server Error)
    #[error("Error loading client secret file: {0}")]
    CredentialsError(String),

    /// 토큰 저장소 읽기/쓰기 에러 (500 Internal Server Error)
    #[error("Token store error: {0}")]
    TokenStoreError(String),

    /// 사용 가능한 OAuth 토큰이 없음 (503 Service Unavailable)
    ///
    /// 요청 경로에서는 대화형 인증을 수행하지 않으므로,
    /// 운영자가 `relay_admin authorize`를 실행해야 합니다.
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    /// OAuth 토큰 엔드포인트 에러 (502 Bad Gateway)
    #[error("Identity provider error: {0}")]
    IdentityProviderError(String),

    /// 외부 서비스(Sheets API) 에러 (502 Bad Gateway)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotAuthorized(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::IdentityProviderError(_) | AppError::ExternalServiceError(_) => {
                StatusCode::BAD_GATEWAY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
