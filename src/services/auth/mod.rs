//! 인증 서비스 모듈
//!
//! Google OAuth 2.0 위임 자격으로 스프레드시트 API를 호출하기 위한 토큰을 관리합니다.
//!
//! # Features
//!
//! - 스프레드시트 스코프 인증 URL 생성
//! - Authorization Code → 토큰 교환 (관리 CLI 전용)
//! - 만료된 액세스 토큰의 자동 갱신
//! - 토큰이 없을 때 요청 경로의 즉시 실패 (`NotAuthorized`)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{CredentialManager, GoogleAuthService};
//!
//! let manager = CredentialManager::new(token_store, Arc::new(GoogleAuthService::from_config()?));
//! let client = manager.obtain_client(&credentials).await?;
//! ```

pub mod google_auth_service;
pub mod credential_manager;

pub use google_auth_service::*;
pub use credential_manager::*;
