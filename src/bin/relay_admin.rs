//! 릴레이 관리 CLI
//!
//! 서버 요청 경로 밖에서 OAuth 토큰을 발급하고, 대상 시트를 읽어 확인합니다.
//!
//! ```bash
//! # 최초 1회: 인증 URL을 열고 코드를 붙여넣어 token.json 생성
//! relay_admin authorize
//!
//! # 대상 범위의 A열/E열 출력
//! relay_admin list --range "Sheet2!A2:E"
//! ```

use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;
use clap::{Parser, Subcommand};
use tokio::io::BufReader;
use form_sheet_relay::config::env_loader::bootstrap;
use form_sheet_relay::domain::models::spreadsheet::SpreadsheetTarget;
use form_sheet_relay::errors::errors::{AppError, AppResult};
use form_sheet_relay::repositories::credentials::CredentialsRepository;
use form_sheet_relay::repositories::tokens::FileTokenStore;
use form_sheet_relay::services::auth::{CredentialManager, GoogleAuthService};
use form_sheet_relay::services::sheets::{GoogleSheetsService, SpreadsheetApi};
use form_sheet_relay::utils::display_terminal::{
    print_boxed_title, print_rows, print_step_complete, print_step_start,
};

#[derive(Parser)]
#[clap(name = "relay_admin", about = "Form sheet relay administration", version)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Runs the interactive OAuth consent flow and stores the token.
    Authorize,
    /// Prints columns A and E of each row in the target range.
    List {
        /// Range to read instead of the configured one (e.g. "Sheet2!A2:E").
        #[clap(long, env = "LIST_RANGE")]
        range: Option<String>,
    },
}

#[actix_web::main]
async fn main() -> ExitCode {
    bootstrap("warn");

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Authorize => authorize().await,
        Commands::List { range } => list(range).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("✗ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn credential_manager() -> AppResult<(CredentialManager, Arc<FileTokenStore>)> {
    let token_store = Arc::new(FileTokenStore::from_config());
    let identity = Arc::new(GoogleAuthService::from_config()?);
    Ok((CredentialManager::new(token_store.clone(), identity), token_store))
}

fn terminal_error(e: std::io::Error) -> AppError {
    AppError::InternalError(format!("터미널 출력 실패: {}", e))
}

async fn authorize() -> AppResult<()> {
    let mut out = std::io::stdout();
    print_boxed_title(&mut out, "Authorize Form Sheet Relay").map_err(terminal_error)?;

    let repository = CredentialsRepository::from_config();
    print_step_start(&mut out, 1, "Loading client credentials").map_err(terminal_error)?;
    let credentials = repository.load().await?;
    print_step_complete(&mut out, 1, "Client credentials loaded", &repository.path().display().to_string())
        .map_err(terminal_error)?;

    let (manager, token_store) = credential_manager()?;
    print_step_start(&mut out, 2, "Requesting user consent").map_err(terminal_error)?;
    manager
        .authorize_interactively(&credentials, BufReader::new(tokio::io::stdin()), &mut out)
        .await?;

    print_step_complete(&mut out, 2, "Token stored", &token_store.path().display().to_string())
        .map_err(terminal_error)?;
    out.flush().map_err(terminal_error)
}

async fn list(range: Option<String>) -> AppResult<()> {
    let credentials = CredentialsRepository::from_config().load().await?;
    let (manager, _) = credential_manager()?;
    let client = manager.obtain_client(&credentials).await?;

    let target = match range {
        Some(range) => SpreadsheetTarget::from_config().with_range(range),
        None => SpreadsheetTarget::from_config(),
    };

    let sheets = GoogleSheetsService::from_config()?;
    let rows = sheets.get_values(&client, &target).await?;

    let mut out = std::io::stdout();
    print_rows(&mut out, &rows).map_err(terminal_error)
}
