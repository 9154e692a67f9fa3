//! `POST /` 와 `GET /` 엔드투엔드 테스트
//!
//! 네트워크 없이 토큰 저장소, ID 공급자, Sheets API를 가짜 구현으로 교체해
//! 라우트 → 핸들러 → 서비스 전체 흐름을 확인합니다.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use async_trait::async_trait;
use serde_json::Value;
use tempfile::TempDir;
use form_sheet_relay::config::SubmissionMode;
use form_sheet_relay::core::AppState;
use form_sheet_relay::domain::models::credentials::StoredCredentials;
use form_sheet_relay::domain::models::spreadsheet::{AppendOutcome, SpreadsheetTarget, ValueInputOption};
use form_sheet_relay::domain::models::token::{AuthorizedClient, OAuthToken};
use form_sheet_relay::errors::errors::{AppError, AppResult};
use form_sheet_relay::repositories::credentials::CredentialsRepository;
use form_sheet_relay::repositories::tokens::{InMemoryTokenStore, TokenStore};
use form_sheet_relay::routes::configure_all_routes;
use form_sheet_relay::services::auth::IdentityProvider;
use form_sheet_relay::services::sheets::SpreadsheetApi;

const CREDENTIALS_JSON: &str = r#"{
    "installed": {
        "client_id": "client-1",
        "client_secret": "secret-1",
        "redirect_uris": ["urn:ietf:wg:oauth:2.0:oob"]
    }
}"#;

const ANN: &str = r#"{"name":"Ann","sub":"Math","email":"a@x.com","phone":"555","more_inf":"none"}"#;

/// 호출 횟수를 세는 토큰 저장소
struct CountingTokenStore {
    inner: InMemoryTokenStore,
    reads: AtomicUsize,
}

impl CountingTokenStore {
    fn new(token: Option<OAuthToken>) -> Self {
        Self {
            inner: token.map(InMemoryTokenStore::with_token).unwrap_or_default(),
            reads: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl TokenStore for CountingTokenStore {
    fn name(&self) -> &str {
        "counting"
    }

    async fn get_current(&self) -> AppResult<Option<OAuthToken>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.get_current().await
    }

    async fn set_current(&self, token: &OAuthToken) -> AppResult<()> {
        self.inner.set_current(token).await
    }
}

/// 갱신 요청에 고정 토큰을 돌려주는 ID 공급자
#[derive(Default)]
struct FakeIdentity {
    refreshed_with: Mutex<Vec<String>>,
}

#[async_trait]
impl IdentityProvider for FakeIdentity {
    async fn exchange_code(&self, _: &StoredCredentials, _: &str) -> AppResult<OAuthToken> {
        Err(AppError::IdentityProviderError("not used".to_string()))
    }

    async fn refresh_token(&self, _: &StoredCredentials, refresh_token: &str) -> AppResult<OAuthToken> {
        self.refreshed_with.lock().unwrap().push(refresh_token.to_string());
        Ok(OAuthToken {
            access_token: "fresh-access".to_string(),
            refresh_token: None,
            scope: None,
            token_type: Some("Bearer".to_string()),
            expiry_date: Some(chrono::Utc::now().timestamp_millis() + 3_600_000),
        })
    }
}

/// append 호출을 기록하는 Sheets API
#[derive(Default)]
struct RecordingSheets {
    appended: Mutex<Vec<(String, SpreadsheetTarget, Vec<Vec<Option<String>>>, ValueInputOption)>>,
    attempts: AtomicUsize,
    fail: bool,
}

#[async_trait]
impl SpreadsheetApi for RecordingSheets {
    async fn append_rows(
        &self,
        client: &AuthorizedClient,
        target: &SpreadsheetTarget,
        rows: Vec<Vec<Option<String>>>,
        input_option: ValueInputOption,
    ) -> AppResult<AppendOutcome> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AppError::ExternalServiceError("quota exceeded".to_string()));
        }
        self.appended.lock().unwrap().push((
            client.access_token().to_string(),
            target.clone(),
            rows,
            input_option,
        ));
        Ok(AppendOutcome {
            updated_cells: 5,
            updated_range: format!("{}!A7:E7", target.range),
        })
    }

    async fn get_values(&self, _: &AuthorizedClient, _: &SpreadsheetTarget) -> AppResult<Vec<Vec<Value>>> {
        Ok(Vec::new())
    }
}

fn valid_token() -> OAuthToken {
    OAuthToken {
        access_token: "cached-access".to_string(),
        refresh_token: Some("refresh-1".to_string()),
        scope: Some("https://www.googleapis.com/auth/spreadsheets".to_string()),
        token_type: Some("Bearer".to_string()),
        expiry_date: Some(chrono::Utc::now().timestamp_millis() + 3_600_000),
    }
}

struct Fixture {
    _dir: TempDir,
    tokens: Arc<CountingTokenStore>,
    identity: Arc<FakeIdentity>,
    sheets: Arc<RecordingSheets>,
    state: web::Data<AppState>,
}

fn fixture(token: Option<OAuthToken>, with_credentials: bool, sheets: RecordingSheets, mode: SubmissionMode) -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let credentials_path = dir.path().join("credentials.json");
    if with_credentials {
        std::fs::write(&credentials_path, CREDENTIALS_JSON).unwrap();
    }

    let tokens = Arc::new(CountingTokenStore::new(token));
    let identity = Arc::new(FakeIdentity::default());
    let sheets = Arc::new(sheets);

    let state = web::Data::new(AppState::new(
        CredentialsRepository::new(credentials_path),
        tokens.clone(),
        identity.clone(),
        sheets.clone(),
        SpreadsheetTarget::default(),
        mode,
    ));

    Fixture {
        _dir: dir,
        tokens,
        identity,
        sheets,
        state,
    }
}

/// 백그라운드 append가 시도될 때까지 잠시 기다립니다.
async fn wait_for_appends(sheets: &RecordingSheets, expected: usize) {
    for _ in 0..50 {
        if sheets.attempts.load(Ordering::SeqCst) >= expected {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

#[actix_rt::test]
async fn test_get_root_returns_greeting() {
    let app = test::init_service(App::new().configure(configure_all_routes)).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "Hello, the service is live!".as_bytes());
}

#[actix_rt::test]
async fn test_valid_submission_is_accepted_and_appended() {
    let fx = fixture(Some(valid_token()), true, RecordingSheets::default(), SubmissionMode::FireAndForget);
    let app = test::init_service(App::new().app_data(fx.state.clone()).configure(configure_all_routes)).await;

    let req = test::TestRequest::post()
        .uri("/")
        .insert_header(("Content-Type", "application/json"))
        .set_payload(ANN)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "Data write process initiated".as_bytes());

    wait_for_appends(&fx.sheets, 1).await;
    let appended = fx.sheets.appended.lock().unwrap();
    assert_eq!(appended.len(), 1);

    let (access_token, target, rows, option) = &appended[0];
    assert_eq!(access_token, "cached-access");
    assert_eq!(target.spreadsheet_id, "1PUBAErPVfhRe-eRjDMUJNps9x46DunQMQYs2oSMtirE");
    assert_eq!(target.range, "Sheet2");
    assert_eq!(*option, ValueInputOption::Raw);
    assert_eq!(
        rows,
        &vec![vec![
            Some("Ann".to_string()),
            Some("Math".to_string()),
            Some("a@x.com".to_string()),
            Some("555".to_string()),
            Some("none".to_string()),
        ]]
    );
}

#[actix_rt::test]
async fn test_null_body_is_rejected_before_any_state_is_read() {
    // credentials.json이 없어도 400이어야 합니다
    let fx = fixture(Some(valid_token()), false, RecordingSheets::default(), SubmissionMode::FireAndForget);
    let app = test::init_service(App::new().app_data(fx.state.clone()).configure(configure_all_routes)).await;

    for payload in ["null", "", "{not json", "[1,2]"] {
        let req = test::TestRequest::post().uri("/").set_payload(payload).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "payload: {:?}", payload);
    }

    assert_eq!(fx.tokens.reads.load(Ordering::SeqCst), 0);
    assert!(fx.sheets.appended.lock().unwrap().is_empty());
}

#[actix_rt::test]
async fn test_missing_credentials_returns_500_without_append() {
    let fx = fixture(Some(valid_token()), false, RecordingSheets::default(), SubmissionMode::FireAndForget);
    let app = test::init_service(App::new().app_data(fx.state.clone()).configure(configure_all_routes)).await;

    let req = test::TestRequest::post().uri("/").set_payload(ANN).to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().starts_with("Error loading client secret file"));

    assert_eq!(fx.tokens.reads.load(Ordering::SeqCst), 0);
    assert!(fx.sheets.appended.lock().unwrap().is_empty());
}

#[actix_rt::test]
async fn test_missing_token_fails_fast_with_503() {
    let fx = fixture(None, true, RecordingSheets::default(), SubmissionMode::FireAndForget);
    let app = test::init_service(App::new().app_data(fx.state.clone()).configure(configure_all_routes)).await;

    let req = test::TestRequest::post().uri("/").set_payload(ANN).to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(fx.sheets.appended.lock().unwrap().is_empty());
    assert!(fx.identity.refreshed_with.lock().unwrap().is_empty());
}

#[actix_rt::test]
async fn test_expired_token_is_refreshed_before_append() {
    let expired = OAuthToken {
        expiry_date: Some(chrono::Utc::now().timestamp_millis() - 60_000),
        ..valid_token()
    };
    let fx = fixture(Some(expired), true, RecordingSheets::default(), SubmissionMode::FireAndForget);
    let app = test::init_service(App::new().app_data(fx.state.clone()).configure(configure_all_routes)).await;

    let req = test::TestRequest::post().uri("/").set_payload(ANN).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    wait_for_appends(&fx.sheets, 1).await;
    assert_eq!(fx.sheets.appended.lock().unwrap()[0].0, "fresh-access");
    assert_eq!(*fx.identity.refreshed_with.lock().unwrap(), vec!["refresh-1".to_string()]);

    let stored = fx.tokens.get_current().await.unwrap().unwrap();
    assert_eq!(stored.access_token, "fresh-access");
    assert_eq!(stored.refresh_token.as_deref(), Some("refresh-1"));
}

#[actix_rt::test]
async fn test_fire_and_forget_hides_append_failure() {
    let sheets = RecordingSheets {
        fail: true,
        ..Default::default()
    };
    let fx = fixture(Some(valid_token()), true, sheets, SubmissionMode::FireAndForget);
    let app = test::init_service(App::new().app_data(fx.state.clone()).configure(configure_all_routes)).await;

    let req = test::TestRequest::post().uri("/").set_payload(ANN).to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    wait_for_appends(&fx.sheets, 1).await;
    assert_eq!(fx.sheets.attempts.load(Ordering::SeqCst), 1);
    assert!(fx.sheets.appended.lock().unwrap().is_empty());
}

#[actix_rt::test]
async fn test_confirmed_mode_reports_append_result() {
    let fx = fixture(Some(valid_token()), true, RecordingSheets::default(), SubmissionMode::Confirmed);
    let app = test::init_service(App::new().app_data(fx.state.clone()).configure(configure_all_routes)).await;

    let req = test::TestRequest::post().uri("/").set_payload(ANN).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["updated_cells"], 5);
    assert_eq!(body["updated_range"], "Sheet2!A7:E7");
    assert_eq!(fx.sheets.appended.lock().unwrap().len(), 1);
}

#[actix_rt::test]
async fn test_confirmed_mode_returns_502_on_append_failure() {
    let sheets = RecordingSheets {
        fail: true,
        ..Default::default()
    };
    let fx = fixture(Some(valid_token()), true, sheets, SubmissionMode::Confirmed);
    let app = test::init_service(App::new().app_data(fx.state.clone()).configure(configure_all_routes)).await;

    let req = test::TestRequest::post().uri("/").set_payload(ANN).to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(fx.sheets.attempts.load(Ordering::SeqCst), 1);
}
