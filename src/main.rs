use error_stack::ResultExt;
use thiserror::Error;
use tokio::io::AsyncBufReadExt;
use tracing_subscriber::EnvFilter;

use attendance::adapters::sheets::auth;
use attendance::adapters::sheets::http_client::http_client;
use attendance::adapters::sheets::spreadsheet_manager::{sheets_hub, SpreadsheetManager};
use attendance::application::locator::Prompt;
use attendance::application::{date_column, locator, recorder};
use attendance::config::AppConfig;
use attendance::terminal::Console;

#[derive(Error, Debug)]
enum AppError {
    #[error("Failed to load configuration")]
    Config,
    #[error("Authentication failed")]
    Auth,
    #[error("Could not resolve the spreadsheet to record into")]
    Locate,
    #[error("Could not resolve today's column")]
    DateColumn,
    #[error("Recording attendance failed")]
    Record,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("attendance=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(report) = run().await {
        tracing::error!("{report:?}");
        std::process::exit(1);
    }
}

async fn run() -> error_stack::Result<(), AppError> {
    let config = AppConfig::load().change_context(AppError::Config)?;

    let client = http_client();
    let authenticator = auth::authenticate(&config, client.clone())
        .await
        .change_context(AppError::Auth)?;
    let backend = SpreadsheetManager::new(sheets_hub(client, authenticator));

    let mut console = Console::new();

    let spreadsheet = locator::resolve_spreadsheet(&backend, &mut console, &config.saved_ref_file)
        .await
        .change_context(AppError::Locate)?;
    let sheet = locator::select_sheet(&backend, &spreadsheet, &mut console)
        .await
        .change_context(AppError::Locate)?;

    let (column, today) = date_column::locate_today_column(&backend, &spreadsheet, &sheet)
        .await
        .change_context(AppError::DateColumn)?;
    date_column::write_date_header(&backend, &spreadsheet, &sheet, column, &today)
        .await
        .change_context(AppError::DateColumn)?;

    console
        .show("Enter 7-digit attendance IDs (Ctrl+D to finish):")
        .change_context(AppError::Record)?;

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    let interrupt = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    let count = recorder::record_entries(
        &backend,
        &spreadsheet,
        &sheet,
        column,
        &mut lines,
        interrupt,
        &mut console,
    )
    .await
    .change_context(AppError::Record)?;

    println!("Finished. Wrote {count} IDs.");
    Ok(())
}
