//! # Google OAuth 2.0 인증 서비스
//!
//! 스프레드시트 쓰기 권한을 위임받기 위한 Authorization Code 플로우와
//! 리프레시 토큰 갱신을 담당합니다.
//!
//! ## OAuth 2.0 Authorization Code Flow (대화형, `relay_admin authorize`)
//!
//! ```text
//! ┌──────────────┐                     ┌──────────────┐                    ┌─────────────────┐
//! │   운영자       │                     │ relay_admin  │                    │  Google OAuth   │
//! └──────────────┘                     └──────────────┘                    └─────────────────┘
//!        │                                     │                                    │
//!        │                                     │ 1. build authorization URL         │
//!        │ 2. URL 출력                           │                                    │
//!        │◄────────────────────────────────────┤                                    │
//!        │ 3. 브라우저에서 동의 후 코드 복사             │                                    │
//!        ├────────────────────────────────────────────────────────────────────────►│
//!        │ 4. stdin으로 코드 입력                    │                                    │
//!        ├────────────────────────────────────►│                                    │
//!        │                                     │ 5. POST /token (authorization_code)│
//!        │                                     ├───────────────────────────────────►│
//!        │                                     │ 6. access/refresh token            │
//!        │                                     │◄───────────────────────────────────┤
//!        │                                     │ 7. token.json 저장                  │
//! ```
//!
//! ## 사용하는 Google API 엔드포인트
//!
//! | 용도 | 엔드포인트 | 메서드 |
//! |------|------------|--------|
//! | **Authorization** | `https://accounts.google.com/o/oauth2/auth` | GET |
//! | **Token Exchange / Refresh** | `https://oauth2.googleapis.com/token` | POST |
//!
//! 두 엔드포인트 모두 `credentials.json`의 `auth_uri`/`token_uri` 값을 우선 사용합니다.

use async_trait::async_trait;
use chrono::Utc;
use crate::config::GoogleOAuthConfig;
use crate::domain::dto::google_token_response::{GoogleTokenResponse, OAuthErrorResponse};
use crate::domain::models::credentials::StoredCredentials;
use crate::domain::models::token::OAuthToken;
use crate::errors::errors::{AppError, AppResult, ErrorContext};

/// OAuth 2.0 ID 공급자 (토큰 엔드포인트)
///
/// 요청 경로와 관리 CLI 모두 이 trait을 통해 토큰을 얻으므로,
/// 테스트에서는 네트워크 없이 가짜 구현으로 교체할 수 있습니다.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Authorization Code를 토큰으로 교환합니다.
    async fn exchange_code(&self, credentials: &StoredCredentials, code: &str) -> AppResult<OAuthToken>;

    /// 리프레시 토큰으로 새 액세스 토큰을 발급받습니다.
    async fn refresh_token(&self, credentials: &StoredCredentials, refresh_token: &str) -> AppResult<OAuthToken>;
}

/// 스프레드시트 스코프로 인증 URL을 생성합니다.
///
/// # 생성되는 URL 구조
///
/// ```text
/// https://accounts.google.com/o/oauth2/auth?
///   access_type=offline&
///   scope=https%3A%2F%2Fwww.googleapis.com%2Fauth%2Fspreadsheets&
///   response_type=code&
///   client_id=YOUR_CLIENT_ID&
///   redirect_uri=YOUR_REDIRECT_URI
/// ```
///
/// `access_type=offline`이 있어야 최초 동의 시 리프레시 토큰이 발급됩니다.
pub fn authorization_url(credentials: &StoredCredentials) -> String {
    let params = [
        ("access_type", "offline"),
        ("scope", GoogleOAuthConfig::SPREADSHEETS_SCOPE),
        ("response_type", "code"),
        ("client_id", credentials.client_id.as_str()),
        ("redirect_uri", credentials.redirect_uri.as_str()),
    ];

    let query_string = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    let separator = if credentials.auth_uri.contains('?') { '&' } else { '?' };
    format!("{}{}{}", credentials.auth_uri, separator, query_string)
}

/// Google 토큰 엔드포인트 클라이언트
pub struct GoogleAuthService {
    http: reqwest::Client,
}

impl GoogleAuthService {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// 설정된 타임아웃으로 HTTP 클라이언트를 만들어 서비스를 생성합니다.
    pub fn from_config() -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(GoogleOAuthConfig::http_timeout())
            .build()
            .context("HTTP 클라이언트 생성 실패")?;

        Ok(Self::new(http))
    }

    /// 토큰 엔드포인트에 form 요청을 보내고 응답을 토큰으로 변환합니다.
    ///
    /// # 요청 형식
    ///
    /// ```text
    /// POST https://oauth2.googleapis.com/token
    /// Content-Type: application/x-www-form-urlencoded
    ///
    /// grant_type=authorization_code&code=...&client_id=...&client_secret=...&redirect_uri=...
    /// grant_type=refresh_token&refresh_token=...&client_id=...&client_secret=...
    /// ```
    async fn request_token(&self, token_uri: &str, params: &[(&str, &str)]) -> AppResult<OAuthToken> {
        let response = self
            .http
            .post(token_uri)
            .form(params)
            .send()
            .await
            .map_err(|e| AppError::IdentityProviderError(format!("Google 토큰 요청 실패: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<OAuthErrorResponse>(&error_text)
                .map(|e| e.to_string())
                .unwrap_or(error_text);

            return Err(AppError::IdentityProviderError(format!(
                "Google 토큰 엔드포인트 응답 {}: {}", status, detail
            )));
        }

        let token_response = response
            .json::<GoogleTokenResponse>()
            .await
            .map_err(|e| AppError::IdentityProviderError(format!("Google 토큰 응답 파싱 실패: {}", e)))?;

        Ok(OAuthToken::from_token_response(token_response, Utc::now()))
    }
}

#[async_trait]
impl IdentityProvider for GoogleAuthService {
    async fn exchange_code(&self, credentials: &StoredCredentials, code: &str) -> AppResult<OAuthToken> {
        let params = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
            ("redirect_uri", credentials.redirect_uri.as_str()),
        ];

        self.request_token(&credentials.token_uri, &params).await
    }

    async fn refresh_token(&self, credentials: &StoredCredentials, refresh_token: &str) -> AppResult<OAuthToken> {
        let params = [
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
        ];

        self.request_token(&credentials.token_uri, &params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> StoredCredentials {
        StoredCredentials {
            client_id: "client id".to_string(),
            client_secret: "secret".to_string(),
            redirect_uri: "http://localhost:3000/oauth2callback".to_string(),
            auth_uri: "https://accounts.google.com/o/oauth2/auth".to_string(),
            token_uri: "https://oauth2.googleapis.com/token".to_string(),
        }
    }

    #[test]
    fn test_authorization_url_has_exactly_spreadsheet_scope() {
        let url = authorization_url(&credentials());

        assert!(url.starts_with("https://accounts.google.com/o/oauth2/auth?"));
        assert!(url.contains("scope=https%3A%2F%2Fwww.googleapis.com%2Fauth%2Fspreadsheets&"));
        assert_eq!(url.matches("scope=").count(), 1);
        assert!(url.contains("access_type=offline"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("client_id=client%20id"));
        assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Foauth2callback"));
    }

    #[test]
    fn test_authorization_url_appends_to_existing_query() {
        let mut creds = credentials();
        creds.auth_uri = "https://idp.example/auth?tenant=a".to_string();

        let url = authorization_url(&creds);
        assert!(url.starts_with("https://idp.example/auth?tenant=a&access_type=offline"));
    }

    #[test]
    fn test_oauth_error_display() {
        let error: OAuthErrorResponse =
            serde_json::from_str(r#"{"error":"invalid_grant","error_description":"Bad Request"}"#).unwrap();
        assert_eq!(error.to_string(), "invalid_grant (Bad Request)");
    }
}
