//! 스프레드시트 서비스 모듈
//!
//! Google Sheets REST API 호출과 폼 제출 → 행 추가 로직을 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::sheets::{GoogleSheetsService, SubmissionService};
//!
//! let sheets = Arc::new(GoogleSheetsService::from_config()?);
//! let submissions = SubmissionService::new(sheets, SpreadsheetTarget::from_config());
//! let outcome = submissions.append_submission(&client, &record).await?;
//! ```

pub mod sheets_service;
pub mod submission_service;

pub use sheets_service::*;
pub use submission_service::*;
