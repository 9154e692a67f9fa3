//! 도메인 모델 모듈
//!
//! - [`credentials`] - OAuth 클라이언트 자격 증명
//! - [`token`] - 저장된 OAuth 토큰과 인증된 클라이언트
//! - [`submission`] - 폼 제출 레코드
//! - [`spreadsheet`] - 시트 대상과 append 결과

pub mod credentials;
pub mod token;
pub mod submission;
pub mod spreadsheet;

pub use credentials::*;
pub use token::*;
pub use submission::*;
pub use spreadsheet::*;
