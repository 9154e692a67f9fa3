//! Form Submission Handler
//!
//! 폼 제출(JSON 객체)을 받아 고정 스프레드시트에 한 행으로 추가합니다.
//!
//! # 처리 순서
//!
//! 1. 본문 검증 - 비었거나 `null`, 잘못된 JSON이면 400 (파일을 읽기 전에 거절)
//! 2. `credentials.json` 로드 - 실패 시 500
//! 3. 저장된 토큰 확보 (만료 시 갱신) - 토큰이 없으면 503
//! 4. 행 추가
//!    - `fire_and_forget`: 백그라운드 작업으로 넘기고 즉시 200
//!    - `confirmed`: 결과를 기다려 200 또는 502
//!
//! 대화형 인증은 요청 경로에서 절대 수행하지 않습니다.

use actix_web::{post, web, HttpResponse};
use serde_json::json;
use uuid::Uuid;
use crate::config::SubmissionMode;
use crate::core::AppState;
use crate::domain::models::submission::SubmissionRecord;
use crate::errors::errors::AppError;

/// fire-and-forget 모드의 즉시 응답 본문
pub const WRITE_INITIATED_MESSAGE: &str = "Data write process initiated";

/// 폼 제출 핸들러
///
/// # Endpoint
/// `POST /`
///
/// ```bash
/// curl -X POST http://localhost:3000/ \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Ann","sub":"Math","email":"a@x.com","phone":"555","more_inf":"none"}'
/// ```
#[post("/")]
pub async fn submit_form(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let record = SubmissionRecord::from_json_body(&body).map_err(|e| {
        log::warn!("폼 제출 거절: {}", e);
        e
    })?;

    let submission_id = Uuid::new_v4();
    log::info!("📥 [{}] 폼 제출 수신", submission_id);
    log::debug!("[{}] {:?}", submission_id, record);

    let credentials = state.credentials.load().await.map_err(|e| {
        log::error!("[{}] {}", submission_id, e);
        e
    })?;

    let client = state
        .credential_manager
        .obtain_client(&credentials)
        .await
        .map_err(|e| {
            log::error!("[{}] 토큰 확보 실패: {}", submission_id, e);
            e
        })?;

    match state.mode {
        SubmissionMode::FireAndForget => {
            let submissions = state.submissions.clone();

            actix_web::rt::spawn(async move {
                // 결과는 로그로만 남습니다
                if submissions.append_submission(&client, &record).await.is_ok() {
                    log::info!("✅ [{}] 시트 기록 완료", submission_id);
                } else {
                    log::error!("❌ [{}] 시트 기록 실패", submission_id);
                }
            });

            Ok(HttpResponse::Ok()
                .content_type("text/plain; charset=utf-8")
                .body(WRITE_INITIATED_MESSAGE))
        }
        SubmissionMode::Confirmed => {
            let outcome = state
                .submissions
                .append_submission(&client, &record)
                .await
                .map_err(|e| match e {
                    AppError::ExternalServiceError(_) => e,
                    other => AppError::ExternalServiceError(other.to_string()),
                })?;

            log::info!("✅ [{}] 시트 기록 완료", submission_id);

            Ok(HttpResponse::Ok().json(json!({
                "message": "Data written",
                "submission_id": submission_id.to_string(),
                "updated_range": outcome.updated_range,
                "updated_cells": outcome.updated_cells
            })))
        }
    }
}
