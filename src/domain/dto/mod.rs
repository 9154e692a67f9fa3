//! 외부 API(Google OAuth, Sheets)와 주고받는 DTO

pub mod google_token_response;
pub mod sheets_response;

pub use google_token_response::*;
pub use sheets_response::*;
