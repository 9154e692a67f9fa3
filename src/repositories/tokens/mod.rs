//! OAuth 토큰 저장소 모듈
//!
//! 캐시된 OAuth 토큰을 읽고 쓰는 `TokenStore` 추상화와 구현체를 제공합니다.
//!
//! # Features
//!
//! - **FileTokenStore**: `token.json` 파일 기반 저장 (운영용)
//! - **InMemoryTokenStore**: 프로세스 메모리 저장 (테스트/임시용)
//! - **단일 토큰**: 한 번에 하나의 토큰만 캐시하며, 새 토큰이 이전 토큰을 덮어씀
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::repositories::tokens::{FileTokenStore, TokenStore};
//!
//! let store = FileTokenStore::new("token.json");
//!
//! if let Some(token) = store.get_current().await? {
//!     println!("cached token expires at {:?}", token.expires_at());
//! }
//!
//! store.set_current(&new_token).await?;
//! ```

pub mod token_repository;

pub use token_repository::*;
