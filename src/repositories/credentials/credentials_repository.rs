use std::path::{Path, PathBuf};
use crate::config::RelayConfig;
use crate::domain::models::credentials::StoredCredentials;
use crate::errors::errors::{AppError, AppResult};

/// `credentials.json` 파일 로더
///
/// 요청마다 파일을 새로 읽어 운영 중 교체된 시크릿이 바로 반영됩니다.
#[derive(Debug, Clone)]
pub struct CredentialsRepository {
    path: PathBuf,
}

impl CredentialsRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config() -> Self {
        Self::new(RelayConfig::credentials_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 자격 증명 파일을 읽고 파싱합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::CredentialsError` - 파일이 없거나 읽을 수 없는 경우, 또는 형식 오류
    pub async fn load(&self) -> AppResult<StoredCredentials> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| AppError::CredentialsError(format!("{}: {}", self.path.display(), e)))?;

        StoredCredentials::from_json(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"web":{{"client_id":"cid","client_secret":"cs","redirect_uris":["http://localhost"]}}}}"#
        )
        .unwrap();

        let repo = CredentialsRepository::new(file.path());
        let creds = repo.load().await.unwrap();
        assert_eq!(creds.client_id, "cid");
        assert_eq!(creds.redirect_uri, "http://localhost");
    }

    #[tokio::test]
    async fn test_missing_file_is_credentials_error() {
        let dir = tempfile::tempdir().unwrap();
        let repo = CredentialsRepository::new(dir.path().join("credentials.json"));

        let result = repo.load().await;
        assert!(matches!(result, Err(AppError::CredentialsError(msg)) if msg.contains("credentials.json")));
    }
}
