//! # Domain Layer Module
//!
//! 릴레이 서비스의 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Models  - 자격 증명, 토큰, 폼 제출, 시트 대상
//! └── DTOs    - Google OAuth / Sheets API와 주고받는 JSON 계약
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories: credentials.json, token.json)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`models`] - 도메인 모델
//!
//! | 모델 | 설명 |
//! |------|------|
//! | [`StoredCredentials`] | `credentials.json`의 OAuth 클라이언트 정보 |
//! | [`OAuthToken`] | `token.json`에 저장되는 토큰 (만료 시각은 epoch ms) |
//! | [`SubmissionRecord`] | 폼 필드 5개 → 시트 한 행 |
//! | [`SpreadsheetTarget`] | 고정 스프레드시트 ID와 범위 |
//!
//! ### [`dto`] - 외부 API 계약
//!
//! Google 토큰 엔드포인트 응답과 Sheets `values.append` / `values.get`
//! 요청·응답 본문입니다. 필드 이름은 Google API의 camelCase를 따릅니다.

pub mod dto;
pub mod models;

pub use models::*;
