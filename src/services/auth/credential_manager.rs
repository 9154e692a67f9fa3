//! # Credential Manager
//!
//! 저장된 클라이언트 자격 증명과 캐시된 토큰으로 인증된 클라이언트를 만들어 줍니다.
//!
//! ## 토큰 생명주기
//!
//! ```text
//! obtain_client(credentials)
//!           │
//!           ▼
//!   token_store.get_current()
//!           │
//!           ├─ 없음 ─────────────────────────────► NotAuthorized
//!           │
//!           ├─ 유효함 ───────────────────────────► AuthorizedClient
//!           │
//!           └─ 만료됨
//!                 │
//!                 ├─ refresh_token 없음 ─────────► NotAuthorized
//!                 │
//!                 └─ identity.refresh_token()
//!                          │
//!                          ├─ 실패 ──────────────► NotAuthorized
//!                          │
//!                          └─ 성공 → set_current() → AuthorizedClient
//! ```
//!
//! 요청 경로에서는 절대 사람의 입력을 기다리지 않습니다.
//! 대화형 인증(`authorize_interactively`)은 관리 CLI 전용입니다.

use std::io::Write;
use std::sync::Arc;
use chrono::{DateTime, Duration, Utc};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use crate::config::GoogleOAuthConfig;
use crate::domain::models::credentials::StoredCredentials;
use crate::domain::models::token::{AuthorizedClient, OAuthToken};
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::tokens::TokenStore;
use crate::services::auth::google_auth_service::{authorization_url, IdentityProvider};

const REAUTHORIZE_HINT: &str = "run `relay_admin authorize` to provision a token";

/// 토큰 획득/재사용/갱신을 담당하는 서비스
pub struct CredentialManager {
    token_store: Arc<dyn TokenStore>,
    identity: Arc<dyn IdentityProvider>,
    expiry_skew: Duration,
}

impl CredentialManager {
    pub fn new(token_store: Arc<dyn TokenStore>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            token_store,
            identity,
            expiry_skew: Duration::try_seconds(GoogleOAuthConfig::expiry_skew_seconds())
                .unwrap_or_else(|| Duration::seconds(60)),
        }
    }

    pub fn with_expiry_skew(mut self, skew: Duration) -> Self {
        self.expiry_skew = skew;
        self
    }

    /// 캐시된 토큰으로 인증된 클라이언트를 반환합니다.
    ///
    /// 만료된 토큰은 리프레시 토큰으로 갱신해 저장한 뒤 사용합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotAuthorized` - 토큰이 없거나, 만료됐는데 갱신할 수 없는 경우
    /// * `AppError::TokenStoreError` - 저장소 자체를 조회할 수 없는 경우
    pub async fn obtain_client(&self, credentials: &StoredCredentials) -> AppResult<AuthorizedClient> {
        self.obtain_client_at(credentials, Utc::now()).await
    }

    /// `now` 시점을 기준으로 만료 여부를 판단하는 `obtain_client`
    pub async fn obtain_client_at(
        &self,
        credentials: &StoredCredentials,
        now: DateTime<Utc>,
    ) -> AppResult<AuthorizedClient> {
        let token = self.token_store.get_current().await?.ok_or_else(|| {
            log::warn!("캐시된 토큰 없음 ({} store)", self.token_store.name());
            AppError::NotAuthorized(format!("no cached token; {}", REAUTHORIZE_HINT))
        })?;

        if !token.is_expired_at(now, self.expiry_skew) {
            return Ok(AuthorizedClient::new(&token));
        }

        let refreshed = self.refresh(credentials, &token).await?;
        Ok(AuthorizedClient::new(&refreshed))
    }

    async fn refresh(&self, credentials: &StoredCredentials, expired: &OAuthToken) -> AppResult<OAuthToken> {
        let refresh_token = expired.refresh_token.as_deref().ok_or_else(|| {
            log::warn!("토큰이 만료되었고 refresh_token이 없습니다");
            AppError::NotAuthorized(format!("token expired without refresh token; {}", REAUTHORIZE_HINT))
        })?;

        log::info!("🔄 만료된 액세스 토큰 갱신 중...");

        let refreshed = self
            .identity
            .refresh_token(credentials, refresh_token)
            .await
            .map_err(|e| {
                log::error!("토큰 갱신 실패: {}", e);
                AppError::NotAuthorized(format!("token refresh failed ({}); {}", e, REAUTHORIZE_HINT))
            })?
            .inherit_refresh_token(expired);

        self.persist(&refreshed).await;
        log::info!("✅ 액세스 토큰 갱신 완료");

        Ok(refreshed)
    }

    /// 대화형 인증 플로우를 실행합니다.
    ///
    /// 1. 스프레드시트 스코프로 인증 URL 생성
    /// 2. `output`에 URL 출력
    /// 3. `input`에서 인증 코드 한 줄 읽기
    /// 4. 코드 → 토큰 교환 (실패 시 중단, 토큰 저장 없음)
    /// 5. 토큰 저장 (실패해도 이미 얻은 인증은 유지)
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 입력이 비어 있거나 EOF인 경우
    /// * `AppError::IdentityProviderError` - 코드 교환 실패
    /// * `AppError::InternalError` - 입출력 스트림 에러
    pub async fn authorize_interactively<R, W>(
        &self,
        credentials: &StoredCredentials,
        mut input: R,
        output: &mut W,
    ) -> AppResult<AuthorizedClient>
    where
        R: AsyncBufRead + Unpin + Send,
        W: Write + Send,
    {
        let auth_url = authorization_url(credentials);

        writeln!(output, "Authorize this app by visiting this url: {}", auth_url)
            .and_then(|_| write!(output, "Enter the code from that page here: "))
            .and_then(|_| output.flush())
            .map_err(|e| AppError::InternalError(format!("프롬프트 출력 실패: {}", e)))?;

        let mut line = String::new();
        input
            .read_line(&mut line)
            .await
            .map_err(|e| AppError::InternalError(format!("인증 코드 읽기 실패: {}", e)))?;

        let code = line.trim();
        if code.is_empty() {
            return Err(AppError::ValidationError("no authorization code entered".to_string()));
        }

        let token = self
            .identity
            .exchange_code(credentials, code)
            .await
            .inspect_err(|e| log::error!("Error while trying to retrieve access token: {}", e))?;

        self.persist(&token).await;

        Ok(AuthorizedClient::new(&token))
    }

    /// 토큰 저장 실패는 로그만 남기고 진행합니다.
    async fn persist(&self, token: &OAuthToken) {
        if let Err(e) = self.token_store.set_current(token).await {
            log::error!("토큰 저장 실패 ({} store): {}", self.token_store.name(), e);
        }
    }
}
