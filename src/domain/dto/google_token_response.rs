//! Google OAuth 토큰 엔드포인트 응답 DTO 모듈
//!
//! Authorization Code 교환(`grant_type=authorization_code`)과
//! 리프레시(`grant_type=refresh_token`) 양쪽에서 같은 형식의 응답을 받습니다.

use serde::Deserialize;

/// Google OAuth 2.0 토큰 응답
///
/// 리프레시 응답에는 보통 `refresh_token`이 포함되지 않습니다.
#[derive(Debug, Deserialize)]
pub struct GoogleTokenResponse {
    /// Google OAuth 액세스 토큰
    pub access_token: String,
    /// 토큰 타입 (항상 "Bearer")
    #[serde(default)]
    pub token_type: Option<String>,
    /// 토큰 만료 시간 (초 단위)
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// 리프레시 토큰 (`access_type=offline` 최초 동의 시에만 발급)
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// 부여된 권한 범위
    #[serde(default)]
    pub scope: Option<String>,
}

/// Google OAuth 2.0 에러 응답
///
/// | 에러 코드 | 설명 |
/// |-----------|------|
/// | `invalid_grant` | 코드 만료/사용됨, 또는 리프레시 토큰 폐기됨 |
/// | `invalid_client` | 클라이언트 설정 오류 |
/// | `invalid_request` | 잘못된 요청 형식 |
#[derive(Debug, Deserialize)]
pub struct OAuthErrorResponse {
    pub error: String,
    #[serde(default)]
    pub error_description: Option<String>,
}

impl std::fmt::Display for OAuthErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.error_description {
            Some(description) => write!(f, "{} ({})", self.error, description),
            None => write!(f, "{}", self.error),
        }
    }
}
