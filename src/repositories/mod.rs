//! # Repository Layer
//!
//! 로컬 파일에 보관되는 두 가지 상태에 대한 접근 계층입니다.
//!
//! | 리포지토리 | 파일 | 접근 |
//! |------------|------|------|
//! | [`credentials::CredentialsRepository`] | `credentials.json` | 읽기 전용, 요청마다 다시 읽음 |
//! | [`tokens::FileTokenStore`] | `token.json` | 읽기/쓰기 (임시 파일 + rename) |
//!
//! 토큰 저장소는 [`tokens::TokenStore`] trait 뒤에 있으므로,
//! 테스트에서는 [`tokens::InMemoryTokenStore`]로 교체합니다.

pub mod credentials;
pub mod tokens;
