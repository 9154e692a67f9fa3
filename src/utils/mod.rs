//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`display_terminal`] - 관리 CLI의 터미널 출력 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::display_terminal::{print_boxed_title, print_rows};
//!
//! let mut out = std::io::stdout();
//! print_boxed_title(&mut out, "Relay Admin")?;
//! print_rows(&mut out, &rows)?;
//! ```

pub mod display_terminal;
