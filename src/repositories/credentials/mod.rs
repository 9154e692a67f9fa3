//! OAuth 클라이언트 자격 증명 리포지토리 모듈
//!
//! 외부에서 미리 배치된 `credentials.json`을 읽기 전용으로 로드합니다.

pub mod credentials_repository;

pub use credentials_repository::*;
