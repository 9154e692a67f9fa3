//! OAuth 토큰 모델
//!
//! `token.json`에 저장되는 토큰 구조체입니다. 기존에 발급되어 있던 파일과
//! 호환되도록 `expiry_date`는 epoch 밀리초로 저장합니다.
//!
//! ```json
//! {
//!   "access_token": "ya29.a0AfH6SMC...",
//!   "refresh_token": "1//04z...",
//!   "scope": "https://www.googleapis.com/auth/spreadsheets",
//!   "token_type": "Bearer",
//!   "expiry_date": 1735689600000
//! }
//! ```

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::dto::google_token_response::GoogleTokenResponse;

/// 캐시되는 OAuth 토큰
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OAuthToken {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    /// 만료 시각 (Unix epoch 밀리초)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<i64>,
}

impl OAuthToken {
    /// 토큰 엔드포인트 응답으로부터 토큰을 생성합니다.
    ///
    /// `expires_in`(초)을 `issued_at` 기준의 절대 만료 시각으로 변환합니다.
    /// 표현할 수 없는 `expires_in`은 만료 시각 없음으로 처리합니다.
    pub fn from_token_response(response: GoogleTokenResponse, issued_at: DateTime<Utc>) -> Self {
        let expiry_date = response
            .expires_in
            .and_then(Duration::try_seconds)
            .and_then(|ttl| issued_at.checked_add_signed(ttl))
            .map(|expires_at| expires_at.timestamp_millis());

        Self {
            access_token: response.access_token,
            refresh_token: response.refresh_token,
            scope: response.scope,
            token_type: response.token_type,
            expiry_date,
        }
    }

    /// 만료 시각
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expiry_date.and_then(DateTime::from_timestamp_millis)
    }

    /// `now + skew` 시점에 만료되었는지 확인합니다.
    ///
    /// 만료 시각이 기록되지 않은 토큰은 만료되지 않은 것으로 봅니다.
    pub fn is_expired_at(&self, now: DateTime<Utc>, skew: Duration) -> bool {
        match self.expires_at() {
            Some(expires_at) => now
                .checked_add_signed(skew)
                .is_none_or(|deadline| expires_at <= deadline),
            None => false,
        }
    }

    /// 갱신 응답에 리프레시 토큰이 없으면 이전 토큰의 값을 이어받습니다.
    pub fn inherit_refresh_token(mut self, previous: &OAuthToken) -> Self {
        if self.refresh_token.is_none() {
            self.refresh_token = previous.refresh_token.clone();
        }
        self
    }
}

/// 인증이 완료된 API 클라이언트 자격
///
/// Sheets API 호출 시 Bearer 토큰으로 사용됩니다.
#[derive(Clone)]
pub struct AuthorizedClient {
    access_token: String,
}

impl AuthorizedClient {
    pub fn new(token: &OAuthToken) -> Self {
        Self {
            access_token: token.access_token.clone(),
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

impl std::fmt::Debug for AuthorizedClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthorizedClient")
            .field("access_token", &"***")
            .finish()
    }
}
