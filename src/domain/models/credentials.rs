//! OAuth 클라이언트 자격 증명 모델
//!
//! Google Cloud Console에서 내려받은 `credentials.json`(클라이언트 시크릿 파일)을
//! 표현합니다. 파일은 최상위에 `"web"` 또는 `"installed"` 객체를 가지며,
//! 이 시스템은 읽기만 하고 생성하지 않습니다.
//!
//! ```json
//! {
//!   "web": {
//!     "client_id": "xxx.apps.googleusercontent.com",
//!     "client_secret": "xxx",
//!     "redirect_uris": ["http://localhost"],
//!     "auth_uri": "https://accounts.google.com/o/oauth2/auth",
//!     "token_uri": "https://oauth2.googleapis.com/token"
//!   }
//! }
//! ```

use serde::Deserialize;
use crate::config::GoogleOAuthConfig;
use crate::errors::errors::{AppError, AppResult};

/// 저장된 OAuth 클라이언트 자격 증명
#[derive(Debug, Clone, PartialEq)]
pub struct StoredCredentials {
    pub client_id: String,
    pub client_secret: String,
    /// `redirect_uris`의 첫 번째 항목
    pub redirect_uri: String,
    pub auth_uri: String,
    pub token_uri: String,
}

#[derive(Debug, Deserialize)]
struct ClientSecretFile {
    web: Option<ClientSecretEntry>,
    installed: Option<ClientSecretEntry>,
}

#[derive(Debug, Deserialize)]
struct ClientSecretEntry {
    client_id: String,
    client_secret: String,
    #[serde(default)]
    redirect_uris: Vec<String>,
    auth_uri: Option<String>,
    token_uri: Option<String>,
}

impl StoredCredentials {
    /// 클라이언트 시크릿 JSON 문서를 파싱합니다.
    ///
    /// `"web"` 항목을 우선 사용하고, 없으면 `"installed"` 항목을 사용합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::CredentialsError` - JSON 형식 오류, 두 항목 모두 없음,
    ///   또는 `redirect_uris`가 비어 있는 경우
    pub fn from_json(content: &str) -> AppResult<Self> {
        let file: ClientSecretFile = serde_json::from_str(content)
            .map_err(|e| AppError::CredentialsError(format!("invalid JSON: {}", e)))?;

        let entry = file
            .web
            .or(file.installed)
            .ok_or_else(|| {
                AppError::CredentialsError("expected a \"web\" or \"installed\" client entry".to_string())
            })?;

        let redirect_uri = entry
            .redirect_uris
            .into_iter()
            .next()
            .ok_or_else(|| AppError::CredentialsError("redirect_uris is empty".to_string()))?;

        Ok(Self {
            client_id: entry.client_id,
            client_secret: entry.client_secret,
            redirect_uri,
            auth_uri: entry.auth_uri.unwrap_or_else(GoogleOAuthConfig::auth_uri),
            token_uri: entry.token_uri.unwrap_or_else(GoogleOAuthConfig::token_uri),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_web_credentials() {
        let json = r#"{
            "web": {
                "client_id": "id-123",
                "client_secret": "secret",
                "redirect_uris": ["http://localhost:3000/cb", "http://other"],
                "auth_uri": "https://auth.example/auth",
                "token_uri": "https://auth.example/token"
            }
        }"#;

        let creds = StoredCredentials::from_json(json).unwrap();
        assert_eq!(creds.client_id, "id-123");
        assert_eq!(creds.client_secret, "secret");
        assert_eq!(creds.redirect_uri, "http://localhost:3000/cb");
        assert_eq!(creds.auth_uri, "https://auth.example/auth");
        assert_eq!(creds.token_uri, "https://auth.example/token");
    }

    #[test]
    fn test_parse_installed_credentials_with_default_endpoints() {
        let json = r#"{"installed": {"client_id": "a", "client_secret": "b", "redirect_uris": ["urn:ietf:wg:oauth:2.0:oob"]}}"#;

        let creds = StoredCredentials::from_json(json).unwrap();
        assert_eq!(creds.redirect_uri, "urn:ietf:wg:oauth:2.0:oob");
        assert_eq!(creds.auth_uri, GoogleOAuthConfig::auth_uri());
        assert_eq!(creds.token_uri, GoogleOAuthConfig::token_uri());
    }

    #[test]
    fn test_missing_client_entry_is_rejected() {
        let result = StoredCredentials::from_json(r#"{"other": {}}"#);
        assert!(matches!(result, Err(AppError::CredentialsError(_))));
    }

    #[test]
    fn test_empty_redirect_uris_is_rejected() {
        let json = r#"{"web": {"client_id": "a", "client_secret": "b", "redirect_uris": []}}"#;
        let result = StoredCredentials::from_json(json);
        assert!(matches!(result, Err(AppError::CredentialsError(msg)) if msg.contains("redirect_uris")));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(matches!(
            StoredCredentials::from_json("{not json"),
            Err(AppError::CredentialsError(_))
        ));
    }
}
