//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 도메인별로 모듈화되어 OAuth 토큰 관리와 스프레드시트 기록을 담당합니다.
//!
//! # Features
//!
//! - OAuth 2.0 토큰 획득, 캐시 재사용, 갱신
//! - Google Sheets 값 추가/조회
//! - 폼 제출 → 시트 행 매핑
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{auth::CredentialManager, sheets::SubmissionService};
//!
//! let client = credential_manager.obtain_client(&credentials).await?;
//! submissions.append_submission(&client, &record).await?;
//! ```

pub mod auth;
pub mod sheets;
