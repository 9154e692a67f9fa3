//! # Form Sheet Relay
//!
//! 웹 폼 제출(JSON)을 받아 고정된 Google 스프레드시트에 한 행으로 추가하는
//! HTTP 릴레이 서비스입니다. 스프레드시트 API는 운영자가 한 번 위임한
//! OAuth 2.0 토큰으로 호출합니다.
//!
//! ## 구성
//!
//! ```text
//! HTTP (handlers, routes)
//!   │
//!   ▼
//! AppState (core)
//!   ├── CredentialsRepository ── credentials.json
//!   ├── CredentialManager ────── TokenStore (token.json) + IdentityProvider (Google OAuth)
//!   └── SubmissionService ────── SpreadsheetApi (Sheets v4 REST)
//! ```
//!
//! ## 토큰 발급
//!
//! 요청 경로에서는 대화형 인증을 하지 않습니다. 토큰이 없으면 `POST /`는 503을
//! 반환하며, 운영자가 `relay_admin authorize`로 토큰을 발급해야 합니다.

pub mod core;
pub mod config;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
