//! 릴레이 동작 설정 모듈
//!
//! 로컬 파일 경로, 대상 스프레드시트, 제출 처리 방식을 관리합니다.

use std::env;
use std::path::PathBuf;

/// 폼 제출 처리 방식
///
/// 핸들러가 시트 기록 결과를 기다릴지 여부를 명시적으로 선택합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionMode {
    /// 시트 기록을 백그라운드로 넘기고 즉시 200을 응답합니다 (기본값)
    FireAndForget,
    /// 시트 기록 완료를 기다린 뒤 결과를 HTTP 상태로 돌려줍니다
    Confirmed,
}

impl SubmissionMode {
    /// 문자열에서 SubmissionMode를 생성합니다.
    ///
    /// 알 수 없는 값은 `FireAndForget`으로 처리합니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "confirmed" | "sync" | "await" => SubmissionMode::Confirmed,
            _ => SubmissionMode::FireAndForget,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionMode::FireAndForget => "fire_and_forget",
            SubmissionMode::Confirmed => "confirmed",
        }
    }
}

/// 릴레이 설정
///
/// # Environment Variables
///
/// | 변수 | 기본값 |
/// |------|--------|
/// | `CREDENTIALS_PATH` | `credentials.json` |
/// | `TOKEN_PATH` | `token.json` |
/// | `SPREADSHEET_ID` | 고정 대상 시트 ID |
/// | `SHEET_RANGE` | `Sheet2` |
/// | `SUBMISSION_MODE` | `fire_and_forget` |
pub struct RelayConfig;

impl RelayConfig {
    /// 기본 대상 스프레드시트 ID
    pub const DEFAULT_SPREADSHEET_ID: &'static str = "1PUBAErPVfhRe-eRjDMUJNps9x46DunQMQYs2oSMtirE";

    /// 기본 대상 범위
    pub const DEFAULT_RANGE: &'static str = "Sheet2";

    /// OAuth 클라이언트 시크릿 파일 경로
    pub fn credentials_path() -> PathBuf {
        env::var("CREDENTIALS_PATH")
            .unwrap_or_else(|_| "credentials.json".to_string())
            .into()
    }

    /// 캐시된 OAuth 토큰 파일 경로
    pub fn token_path() -> PathBuf {
        env::var("TOKEN_PATH")
            .unwrap_or_else(|_| "token.json".to_string())
            .into()
    }

    pub fn spreadsheet_id() -> String {
        env::var("SPREADSHEET_ID").unwrap_or_else(|_| Self::DEFAULT_SPREADSHEET_ID.to_string())
    }

    pub fn sheet_range() -> String {
        env::var("SHEET_RANGE").unwrap_or_else(|_| Self::DEFAULT_RANGE.to_string())
    }

    pub fn submission_mode() -> SubmissionMode {
        env::var("SUBMISSION_MODE")
            .map(|s| SubmissionMode::from_str(&s))
            .unwrap_or(SubmissionMode::FireAndForget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_mode_from_string() {
        assert_eq!(SubmissionMode::from_str("confirmed"), SubmissionMode::Confirmed);
        assert_eq!(SubmissionMode::from_str(" SYNC "), SubmissionMode::Confirmed);
        assert_eq!(SubmissionMode::from_str("fire_and_forget"), SubmissionMode::FireAndForget);
        assert_eq!(SubmissionMode::from_str("whatever"), SubmissionMode::FireAndForget);
    }

    #[test]
    fn test_submission_mode_as_str() {
        assert_eq!(SubmissionMode::Confirmed.as_str(), "confirmed");
        assert_eq!(SubmissionMode::FireAndForget.as_str(), "fire_and_forget");
    }

    #[test]
    fn test_relay_config_defaults() {
        if env::var("CREDENTIALS_PATH").is_err() {
            assert_eq!(RelayConfig::credentials_path(), PathBuf::from("credentials.json"));
        }

        if env::var("TOKEN_PATH").is_err() {
            assert_eq!(RelayConfig::token_path(), PathBuf::from("token.json"));
        }

        if env::var("SHEET_RANGE").is_err() {
            assert_eq!(RelayConfig::sheet_range(), "Sheet2");
        }
    }
}
