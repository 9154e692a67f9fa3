//! 애플리케이션 핵심 구성 모듈
//!
//! 서비스 인스턴스를 한 곳에서 조립해 `AppState`로 제공합니다.
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::core::AppState;
//!
//! let state = web::Data::new(AppState::from_config()?);
//! App::new().app_data(state.clone());
//! ```

pub mod app_state;

pub use app_state::*;
