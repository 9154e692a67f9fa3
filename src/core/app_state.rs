use std::sync::Arc;
use crate::config::{RelayConfig, SubmissionMode};
use crate::domain::models::spreadsheet::SpreadsheetTarget;
use crate::errors::errors::AppResult;
use crate::repositories::credentials::CredentialsRepository;
use crate::repositories::tokens::{FileTokenStore, TokenStore};
use crate::services::auth::{CredentialManager, GoogleAuthService, IdentityProvider};
use crate::services::sheets::{GoogleSheetsService, SpreadsheetApi, SubmissionService};

/// 핸들러가 공유하는 애플리케이션 상태
///
/// `web::Data<AppState>`로 등록되어 모든 워커가 같은 인스턴스를 공유합니다.
/// 토큰 저장소, ID 공급자, Sheets API는 trait 객체이므로 테스트에서 교체할 수 있습니다.
pub struct AppState {
    pub credentials: CredentialsRepository,
    pub credential_manager: Arc<CredentialManager>,
    pub submissions: Arc<SubmissionService>,
    pub mode: SubmissionMode,
}

impl AppState {
    pub fn new(
        credentials: CredentialsRepository,
        token_store: Arc<dyn TokenStore>,
        identity: Arc<dyn IdentityProvider>,
        sheets: Arc<dyn SpreadsheetApi>,
        target: SpreadsheetTarget,
        mode: SubmissionMode,
    ) -> Self {
        Self {
            credentials,
            credential_manager: Arc::new(CredentialManager::new(token_store, identity)),
            submissions: Arc::new(SubmissionService::new(sheets, target)),
            mode,
        }
    }

    /// 환경 변수 설정으로 운영용 상태를 구성합니다.
    ///
    /// - 토큰 저장소: `TOKEN_PATH` 파일
    /// - ID 공급자: Google OAuth 토큰 엔드포인트
    /// - Sheets API: `SHEETS_API_BASE`
    pub fn from_config() -> AppResult<Self> {
        let token_store = Arc::new(FileTokenStore::from_config());
        let identity = Arc::new(GoogleAuthService::from_config()?);
        let sheets = Arc::new(GoogleSheetsService::from_config()?);

        Ok(Self::new(
            CredentialsRepository::from_config(),
            token_store,
            identity,
            sheets,
            SpreadsheetTarget::from_config(),
            RelayConfig::submission_mode(),
        ))
    }
}
