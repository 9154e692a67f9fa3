use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use async_trait::async_trait;
use tokio::sync::Mutex;
use crate::config::RelayConfig;
use crate::domain::models::token::OAuthToken;
use crate::errors::errors::{AppError, AppResult};

/// 현재 OAuth 토큰을 보관하는 저장소
///
/// 한 번에 하나의 토큰만 보관합니다. `set_current`는 이전 토큰을 덮어씁니다.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// 저장소 이름 (로그용)
    fn name(&self) -> &str;

    /// 현재 토큰을 반환합니다. 저장된 토큰이 없으면 `Ok(None)`.
    async fn get_current(&self) -> AppResult<Option<OAuthToken>>;

    /// 현재 토큰을 교체합니다.
    async fn set_current(&self, token: &OAuthToken) -> AppResult<()>;
}

/// `token.json` 파일 기반 토큰 저장소
///
/// 쓰기는 같은 디렉터리의 임시 파일에 기록한 뒤 rename 하므로,
/// 읽는 쪽이 반쯤 쓰인 파일을 보는 일이 없습니다.
/// 같은 프로세스 안의 동시 쓰기는 내부 뮤텍스로 직렬화됩니다.
pub struct FileTokenStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn from_config() -> Self {
        Self::new(RelayConfig::token_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut file_name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "token.json".into());
        file_name.push(".tmp");
        self.path.with_file_name(file_name)
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    fn name(&self) -> &str {
        "file"
    }

    /// 파일이 없거나 읽을 수 없거나 형식이 깨진 경우 모두 "토큰 없음"으로 처리합니다.
    async fn get_current(&self) -> AppResult<Option<OAuthToken>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("토큰 파일 없음: {}", self.path.display());
                return Ok(None);
            }
            Err(e) => {
                log::warn!("토큰 파일 읽기 실패 ({}): {}", self.path.display(), e);
                return Ok(None);
            }
        };

        match serde_json::from_str::<OAuthToken>(&content) {
            Ok(token) => Ok(Some(token)),
            Err(e) => {
                log::warn!("토큰 파일 파싱 실패 ({}): {}", self.path.display(), e);
                Ok(None)
            }
        }
    }

    async fn set_current(&self, token: &OAuthToken) -> AppResult<()> {
        let json = serde_json::to_string(token)
            .map_err(|e| AppError::TokenStoreError(format!("토큰 직렬화 실패: {}", e)))?;

        let _guard = self.write_lock.lock().await;
        let temp_path = self.temp_path();

        tokio::fs::write(&temp_path, json)
            .await
            .map_err(|e| AppError::TokenStoreError(format!("{}: {}", temp_path.display(), e)))?;

        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| AppError::TokenStoreError(format!("{}: {}", self.path.display(), e)))?;

        log::info!("Token stored to {}", self.path.display());
        Ok(())
    }
}

/// 메모리 기반 토큰 저장소
///
/// 프로세스가 종료되면 토큰이 사라집니다. 테스트 더블로도 사용합니다.
#[derive(Default)]
pub struct InMemoryTokenStore {
    token: RwLock<Option<OAuthToken>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: OAuthToken) -> Self {
        Self {
            token: RwLock::new(Some(token)),
        }
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn get_current(&self) -> AppResult<Option<OAuthToken>> {
        let guard = self
            .token
            .read()
            .map_err(|e| AppError::TokenStoreError(format!("lock poisoned: {}", e)))?;
        Ok(guard.clone())
    }

    async fn set_current(&self, token: &OAuthToken) -> AppResult<()> {
        let mut guard = self
            .token
            .write()
            .map_err(|e| AppError::TokenStoreError(format!("lock poisoned: {}", e)))?;
        *guard = Some(token.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_token(access: &str) -> OAuthToken {
        OAuthToken {
            access_token: access.to_string(),
            refresh_token: Some("refresh".to_string()),
            scope: Some("https://www.googleapis.com/auth/spreadsheets".to_string()),
            token_type: Some("Bearer".to_string()),
            expiry_date: Some(1_900_000_000_000),
        }
    }

    #[tokio::test]
    async fn test_file_store_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("token.json"));

        assert_eq!(store.get_current().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_store_overwrites_previous_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("token.json"));

        store.set_current(&sample_token("first")).await.unwrap();
        store.set_current(&sample_token("second")).await.unwrap();

        let current = store.get_current().await.unwrap().unwrap();
        assert_eq!(current.access_token, "second");
        assert!(!dir.path().join("token.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_file_store_corrupt_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = FileTokenStore::new(&path);
        assert_eq!(store.get_current().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_store_write_failure_is_token_store_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("missing-dir").join("token.json"));

        let result = store.set_current(&sample_token("a")).await;
        assert!(matches!(result, Err(AppError::TokenStoreError(_))));
    }

    #[tokio::test]
    async fn test_in_memory_store() {
        let store = InMemoryTokenStore::new();
        assert_eq!(store.get_current().await.unwrap(), None);

        store.set_current(&sample_token("mem")).await.unwrap();
        assert_eq!(store.get_current().await.unwrap().unwrap().access_token, "mem");
        assert_eq!(store.name(), "memory");
    }
}
