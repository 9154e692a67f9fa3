//! 환경 설정 파일 로딩 및 로깅 초기화
//!
//! 서버(`form_sheet_relay`)와 관리 CLI(`relay_admin`)가 같은 방식으로
//! `.env` 파일과 로거를 초기화하도록 공유합니다.

use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전에 호출되므로 로그는 `RUST_LOG`가 .env에 있어도 반영됩니다.
/// 로드 결과는 반환값으로 돌려주고, 호출자가 로거 초기화 후 출력합니다.
pub fn load_env_file() -> String {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => format!("{}: .env.prod 파일 로드 됨", profile),
            Err(e) => format!("{}: .env.prod 파일 로드 실패: {}", profile, e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => format!("{}: .env.dev 파일 로드 됨", profile),
            Err(e) => format!("{}: .env.dev 파일 로드 실패: {}", profile, e),
        },
        _ => {
            dotenv().ok();
            format!("{}: 기본 .env 파일 로드", profile)
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: 인자로 전달된 필터)
///
/// # Examples
///
/// ```bash
/// RUST_LOG=form_sheet_relay::services=debug cargo run
/// ```
pub fn init_logging(default_filter: &str) {
    env_logger::init_from_env(Env::default().default_filter_or(default_filter));
}

/// `.env` 로드와 로거 초기화를 한 번에 수행합니다
pub fn bootstrap(default_filter: &str) {
    let env_status = load_env_file();
    init_logging(default_filter);

    if env_status.contains("실패") {
        error!("Current profile {}", env_status);
    } else {
        info!("Current profile {}", env_status);
    }
}
