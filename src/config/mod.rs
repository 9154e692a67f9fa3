//! # Configuration Module
//!
//! 릴레이 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`server_config`] - HTTP 서버, Rate Limiting, CORS 설정
//! - [`auth_config`] - Google OAuth 엔드포인트, 스코프, HTTP 타임아웃
//! - [`relay_config`] - 로컬 파일 경로, 대상 시트, 제출 처리 방식
//! - [`env_loader`] - `.env` 파일 로딩과 로거 초기화
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="3000"
//!
//! # 로컬 상태 파일
//! export CREDENTIALS_PATH="credentials.json"
//! export TOKEN_PATH="token.json"
//!
//! # 대상 시트 (시작 시 한 번만 읽음)
//! export SPREADSHEET_ID="1PUBAErPVfhRe-eRjDMUJNps9x46DunQMQYs2oSMtirE"
//! export SHEET_RANGE="Sheet2"
//!
//! # fire_and_forget | confirmed
//! export SUBMISSION_MODE="fire_and_forget"
//! ```

pub mod server_config;
pub mod auth_config;
pub mod relay_config;
pub mod env_loader;

pub use server_config::*;
pub use auth_config::*;
pub use relay_config::*;
