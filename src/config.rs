use std::path::PathBuf;

use config::{Config, ConfigError, File};

/// File locations used by the program. Defaults match the conventional
/// working-directory layout; an optional `attendance.toml` overrides them.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct AppConfig {
    /// OAuth installed-app client secret, downloaded from the Google console.
    pub credentials_file: PathBuf,
    /// Cached access/refresh tokens, rewritten after every acquisition.
    pub token_cache_file: PathBuf,
    /// Last-used spreadsheet reference, one trimmed line.
    pub saved_ref_file: PathBuf,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("credentials_file", "credentials.json")?
            .set_default("token_cache_file", "token.json")?
            .set_default("saved_ref_file", ".prev.txt")?
            .add_source(File::with_name("attendance").required(false))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::load().unwrap();
        assert_eq!(config.credentials_file, PathBuf::from("credentials.json"));
        assert_eq!(config.token_cache_file, PathBuf::from("token.json"));
        assert_eq!(config.saved_ref_file, PathBuf::from(".prev.txt"));
    }
}
