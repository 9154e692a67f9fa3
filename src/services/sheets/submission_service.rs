use std::sync::Arc;
use crate::domain::models::spreadsheet::{AppendOutcome, SpreadsheetTarget, ValueInputOption};
use crate::domain::models::submission::SubmissionRecord;
use crate::domain::models::token::AuthorizedClient;
use crate::errors::errors::AppResult;
use crate::services::sheets::sheets_service::SpreadsheetApi;

/// 폼 제출을 고정 대상 시트에 한 행으로 기록하는 서비스
///
/// 재시도는 하지 않습니다. 결과는 로그로 남기고 호출자에게 그대로 돌려줍니다.
pub struct SubmissionService {
    sheets: Arc<dyn SpreadsheetApi>,
    target: SpreadsheetTarget,
}

impl SubmissionService {
    pub fn new(sheets: Arc<dyn SpreadsheetApi>, target: SpreadsheetTarget) -> Self {
        Self { sheets, target }
    }

    pub fn target(&self) -> &SpreadsheetTarget {
        &self.target
    }

    /// `[name, sub, email, phone, more_inf]` 한 행을 `RAW` 옵션으로 추가합니다.
    pub async fn append_submission(
        &self,
        client: &AuthorizedClient,
        record: &SubmissionRecord,
    ) -> AppResult<AppendOutcome> {
        let result = self
            .sheets
            .append_rows(client, &self.target, vec![record.to_row()], ValueInputOption::Raw)
            .await;

        match &result {
            Ok(outcome) => log::info!(
                "{} cells updated on range: {}",
                outcome.updated_cells,
                outcome.updated_range
            ),
            Err(e) => log::error!(
                "시트 기록 실패 ({} / {}): {}",
                self.target.spreadsheet_id,
                self.target.range,
                e
            ),
        }

        result
    }
}
