//! Application configuration.
//!
//! Settings come from an optional TOML file plus environment overrides. The
//! config file is genuinely optional: a missing file yields the defaults, so
//! a bare `itemhive` run works out of the box with the bundled seed.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

/// Default location of the persisted store blob.
const DEFAULT_DATA_PATH: &str = "data/itemhive.json";

/// Top-level application configuration.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AppConfig {
    /// Where the versioned store blob lives
    pub data_path: PathBuf,
    /// Seed CSV to use instead of the bundled one
    pub seed_path: Option<PathBuf>,
    /// HTTP endpoint for emailing CSV exports
    pub email_endpoint: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            seed_path: None,
            email_endpoint: None,
        }
    }
}

/// Parses an `AppConfig` from a TOML file.
///
/// # Errors
/// Returns a `Config` error if the file cannot be read or parsed.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path_ref:?}: {e}"),
    })?;
    let config: AppConfig = toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse TOML from config file {path_ref:?}: {e}"),
    })?;
    Ok(config)
}

/// Loads the application configuration: `ITEMHIVE_CONFIG` (or `config.toml`
/// if present) for the file layer, then environment overrides
/// `ITEMHIVE_DATA_PATH`, `ITEMHIVE_SEED_PATH`, and `EMAIL_FUNCTION_URL`.
///
/// # Errors
/// Returns an error if an explicitly named config file is unreadable or
/// malformed. A missing default `config.toml` is not an error.
pub fn load_app_configuration() -> Result<AppConfig> {
    let mut config = match env::var("ITEMHIVE_CONFIG") {
        Ok(path) => load_config(path)?,
        Err(_) => {
            if Path::new("config.toml").exists() {
                load_config("config.toml")?
            } else {
                AppConfig::default()
            }
        }
    };

    if let Ok(path) = env::var("ITEMHIVE_DATA_PATH") {
        config.data_path = PathBuf::from(path);
    }
    if let Ok(path) = env::var("ITEMHIVE_SEED_PATH") {
        config.seed_path = Some(PathBuf::from(path));
    }
    if let Ok(endpoint) = env::var(crate::email::ENDPOINT_ENV) {
        config.email_endpoint = Some(endpoint);
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.data_path, PathBuf::from(DEFAULT_DATA_PATH));
        assert!(config.seed_path.is_none());
        assert!(config.email_endpoint.is_none());
    }

    #[test]
    fn test_load_config_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "data_path = \"/tmp/hive.json\"").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.data_path, PathBuf::from("/tmp/hive.json"));
        assert!(config.seed_path.is_none());
    }

    #[test]
    fn test_load_config_full_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "data_path = \"/tmp/hive.json\"").unwrap();
        writeln!(file, "seed_path = \"/tmp/seed.csv\"").unwrap();
        writeln!(file, "email_endpoint = \"https://example.com/send\"").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.seed_path, Some(PathBuf::from("/tmp/seed.csv")));
        assert_eq!(
            config.email_endpoint.as_deref(),
            Some("https://example.com/send")
        );
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("/definitely/not/here.toml");
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_load_config_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "data_path = [not toml").unwrap();

        let result = load_config(file.path());
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
