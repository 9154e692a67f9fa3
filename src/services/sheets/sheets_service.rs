//! # Google Sheets API v4 클라이언트
//!
//! | 용도 | 엔드포인트 | 메서드 |
//! |------|------------|--------|
//! | **values.append** | `/v4/spreadsheets/{id}/values/{range}:append` | POST |
//! | **values.get** | `/v4/spreadsheets/{id}/values/{range}` | GET |
//!
//! 모든 호출은 `Authorization: Bearer <access_token>` 헤더를 사용합니다.

use async_trait::async_trait;
use serde_json::Value;
use crate::config::GoogleOAuthConfig;
use crate::domain::dto::sheets_response::{AppendValuesRequest, AppendValuesResponse, ValueRange};
use crate::domain::models::spreadsheet::{AppendOutcome, SpreadsheetTarget, ValueInputOption};
use crate::domain::models::token::AuthorizedClient;
use crate::errors::errors::{AppError, AppResult, ErrorContext};

/// 스프레드시트 값 API
#[async_trait]
pub trait SpreadsheetApi: Send + Sync {
    /// 대상 범위 뒤에 행들을 추가합니다.
    async fn append_rows(
        &self,
        client: &AuthorizedClient,
        target: &SpreadsheetTarget,
        rows: Vec<Vec<Option<String>>>,
        input_option: ValueInputOption,
    ) -> AppResult<AppendOutcome>;

    /// 대상 범위의 값을 읽습니다.
    async fn get_values(
        &self,
        client: &AuthorizedClient,
        target: &SpreadsheetTarget,
    ) -> AppResult<Vec<Vec<Value>>>;
}

/// reqwest 기반 Sheets REST 클라이언트
pub struct GoogleSheetsService {
    http: reqwest::Client,
    base_url: String,
}

impl GoogleSheetsService {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn from_config() -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(GoogleOAuthConfig::http_timeout())
            .build()
            .context("HTTP 클라이언트 생성 실패")?;

        Ok(Self::new(http, GoogleOAuthConfig::sheets_api_base()))
    }

    /// `{base}/v4/spreadsheets/{id}/values/{range}` (ID와 범위는 percent-encoding)
    pub fn values_url(&self, target: &SpreadsheetTarget) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}",
            self.base_url,
            urlencoding::encode(&target.spreadsheet_id),
            urlencoding::encode(&target.range)
        )
    }

    async fn error_from(response: reqwest::Response, operation: &str) -> AppError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        AppError::ExternalServiceError(format!("Sheets {} 실패 ({}): {}", operation, status, body))
    }
}

#[async_trait]
impl SpreadsheetApi for GoogleSheetsService {
    async fn append_rows(
        &self,
        client: &AuthorizedClient,
        target: &SpreadsheetTarget,
        rows: Vec<Vec<Option<String>>>,
        input_option: ValueInputOption,
    ) -> AppResult<AppendOutcome> {
        let url = format!("{}:append", self.values_url(target));

        let response = self
            .http
            .post(&url)
            .query(&[("valueInputOption", input_option.as_str())])
            .bearer_auth(client.access_token())
            .json(&AppendValuesRequest::rows(rows))
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Sheets append 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::error_from(response, "append").await);
        }

        let body = response
            .json::<AppendValuesResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Sheets append 응답 파싱 실패: {}", e)))?;

        let updates = body.updates.ok_or_else(|| {
            AppError::ExternalServiceError("Sheets append 응답에 updates가 없습니다".to_string())
        })?;

        Ok(AppendOutcome {
            updated_cells: updates.updated_cells.unwrap_or(0),
            updated_range: updates.updated_range.unwrap_or_default(),
        })
    }

    async fn get_values(
        &self,
        client: &AuthorizedClient,
        target: &SpreadsheetTarget,
    ) -> AppResult<Vec<Vec<Value>>> {
        let response = self
            .http
            .get(self.values_url(target))
            .bearer_auth(client.access_token())
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Sheets get 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::error_from(response, "get").await);
        }

        let range = response
            .json::<ValueRange>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Sheets get 응답 파싱 실패: {}", e)))?;

        Ok(range.values)
    }
}
