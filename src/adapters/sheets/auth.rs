use error_stack::{Report, ResultExt};
use google_sheets4::oauth2::authenticator::Authenticator;
use google_sheets4::oauth2::{self, InstalledFlowAuthenticator, InstalledFlowReturnMethod};
use google_sheets4::{hyper, hyper_rustls};
use thiserror::Error;
use tracing::info;

use super::http_client::HttpsClient;
use crate::config::AppConfig;

pub type SheetsAuthenticator =
    Authenticator<hyper_rustls::HttpsConnector<hyper::client::HttpConnector>>;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error(
        "Client secret file '{0}' not found, see \
         https://developers.google.com/workspace/sheets/api/quickstart \
         to set up an OAuth client and download it"
    )]
    ConfigMissing(String),
    #[error("Failed to read the client secret file")]
    BadClientSecret,
    #[error("Failed to complete the authorization flow")]
    FlowFailed,
}

/// Builds an authenticator for the Sheets API. The token cache on disk is
/// reloaded when present, refreshed in place when expired, and rewritten
/// after every successful acquisition; only when neither works does the
/// interactive browser flow run.
pub async fn authenticate(
    config: &AppConfig,
    client: HttpsClient,
) -> error_stack::Result<SheetsAuthenticator, AuthError> {
    let secret_path = &config.credentials_file;
    if !secret_path.exists() {
        return Err(Report::new(AuthError::ConfigMissing(
            secret_path.display().to_string(),
        )));
    }

    let secret = oauth2::read_application_secret(secret_path)
        .await
        .change_context(AuthError::BadClientSecret)
        .attach_printable_lazy(|| format!("path: {}", secret_path.display()))?;

    info!(
        "Authenticating with token cache at {}",
        config.token_cache_file.display()
    );

    InstalledFlowAuthenticator::with_client(secret, InstalledFlowReturnMethod::HTTPRedirect, client)
        .persist_tokens_to_disk(config.token_cache_file.clone())
        .build()
        .await
        .change_context(AuthError::FlowFailed)
}
