//! # Authentication Configuration Module
//!
//! Google OAuth 2.0 엔드포인트와 Sheets API 호출에 필요한 설정을 관리하는 모듈입니다.
//! 클라이언트 ID/시크릿은 환경 변수가 아니라 `credentials.json` 파일에서 읽으며,
//! 이 모듈은 엔드포인트 URI, 스코프, HTTP 타임아웃처럼 배포 환경에 따라
//! 달라질 수 있는 값만 다룹니다.
//!
//! ## 환경 변수 설정
//!
//! ```bash
//! # 기본값이 있으므로 보통은 설정할 필요가 없습니다
//! export GOOGLE_AUTH_URI="https://accounts.google.com/o/oauth2/auth"
//! export GOOGLE_TOKEN_URI="https://oauth2.googleapis.com/token"
//! export SHEETS_API_BASE="https://sheets.googleapis.com"
//! export HTTP_TIMEOUT_SECONDS="30"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::GoogleOAuthConfig;
//!
//! let scope = GoogleOAuthConfig::SPREADSHEETS_SCOPE;
//! let token_uri = GoogleOAuthConfig::token_uri();
//! ```

use std::env;
use std::time::Duration;

/// Google OAuth 2.0 / Sheets API 설정
pub struct GoogleOAuthConfig;

impl GoogleOAuthConfig {
    /// 스프레드시트 읽기/쓰기 권한 스코프
    ///
    /// 이 스코프를 변경하면 기존 `token.json`을 삭제하고 다시 인증해야 합니다.
    pub const SPREADSHEETS_SCOPE: &'static str = "https://www.googleapis.com/auth/spreadsheets";

    /// Google OAuth 인증 엔드포인트 URI를 반환합니다.
    ///
    /// `credentials.json`에 `auth_uri`가 없을 때 사용하는 기본값입니다.
    ///
    /// # 기본값
    ///
    /// `https://accounts.google.com/o/oauth2/auth`
    pub fn auth_uri() -> String {
        env::var("GOOGLE_AUTH_URI")
            .unwrap_or_else(|_| "https://accounts.google.com/o/oauth2/auth".to_string())
    }

    /// Google OAuth 토큰 교환 엔드포인트 URI를 반환합니다.
    ///
    /// 인증 코드 교환과 리프레시 토큰 갱신에 모두 사용됩니다.
    /// `credentials.json`에 `token_uri`가 없을 때 사용하는 기본값입니다.
    ///
    /// # 기본값
    ///
    /// `https://oauth2.googleapis.com/token`
    pub fn token_uri() -> String {
        env::var("GOOGLE_TOKEN_URI")
            .unwrap_or_else(|_| "https://oauth2.googleapis.com/token".to_string())
    }

    /// Google Sheets REST API 기본 URL을 반환합니다.
    ///
    /// 테스트 환경에서 로컬 목 서버로 교체할 때 사용합니다.
    /// 끝의 `/`는 제거됩니다.
    ///
    /// # 기본값
    ///
    /// `https://sheets.googleapis.com`
    pub fn sheets_api_base() -> String {
        env::var("SHEETS_API_BASE")
            .unwrap_or_else(|_| "https://sheets.googleapis.com".to_string())
            .trim_end_matches('/')
            .to_string()
    }

    /// 외부 HTTP 호출(토큰 교환, Sheets API)의 타임아웃을 반환합니다.
    ///
    /// # 기본값
    ///
    /// 30초
    pub fn http_timeout() -> Duration {
        let seconds = env::var("HTTP_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                log::warn!("HTTP_TIMEOUT_SECONDS 파싱 실패: {}. 기본값 30 사용", e);
                30
            });

        Duration::from_secs(seconds)
    }

    /// 토큰 만료 판단 시 적용할 여유 시간(초)
    ///
    /// 만료 직전 토큰으로 요청이 나가는 것을 막기 위해 이 시간만큼 미리 만료로 간주합니다.
    /// 0 ~ [`Self::MAX_EXPIRY_SKEW_SECONDS`] 범위를 벗어나면 기본값 60을 사용합니다.
    pub fn expiry_skew_seconds() -> i64 {
        Self::parse_expiry_skew(&env::var("TOKEN_EXPIRY_SKEW_SECONDS").unwrap_or_default())
    }

    /// 여유 시간 상한 (1일)
    pub const MAX_EXPIRY_SKEW_SECONDS: i64 = 86_400;

    pub fn parse_expiry_skew(raw: &str) -> i64 {
        raw.trim()
            .parse::<i64>()
            .ok()
            .filter(|secs| (0..=Self::MAX_EXPIRY_SKEW_SECONDS).contains(secs))
            .unwrap_or(60)
    }
}
