//! Configuration loader for tourchat.
//!
//! Reads `config.toml` from the data directory (`~/.tourchat/` unless
//! `TOURCHAT_DATA_DIR` is set) or from an explicit path, and deserializes it
//! into [`AssistantConfig`]. Falls back to defaults when the file is missing
//! or malformed.

use std::path::{Path, PathBuf};

use tourchat_types::config::AssistantConfig;
use tourchat_types::error::ConfigError;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "TOURCHAT_DATA_DIR";

const CONFIG_FILE: &str = "config.toml";

/// Resolve the data directory: `$TOURCHAT_DATA_DIR`, else `~/.tourchat`.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".tourchat"))
        .ok_or(ConfigError::NoHomeDir)
}

/// `{data_dir}/config.toml`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(data_dir()?.join(CONFIG_FILE))
}

/// Read and parse a config file.
///
/// `Ok(None)` means the file does not exist.
pub async fn try_load_config(path: &Path) -> Result<Option<AssistantConfig>, ConfigError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(ConfigError::Read {
                path: path.display().to_string(),
                message: err.to_string(),
            });
        }
    };

    toml::from_str::<AssistantConfig>(&content)
        .map(Some)
        .map_err(|err| ConfigError::Parse {
            path: path.display().to_string(),
            message: err.to_string(),
        })
}

/// Load configuration from `path`, or from the default location when `None`.
///
/// - Missing file: returns [`AssistantConfig::default()`].
/// - Unreadable or malformed file: logs a warning and returns the default.
pub async fn load_config(path: Option<&Path>) -> AssistantConfig {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Ok(path) => path,
            Err(err) => {
                tracing::warn!("{err}, using default configuration");
                return AssistantConfig::default();
            }
        },
    };

    match try_load_config(&path).await {
        Ok(Some(config)) => {
            tracing::debug!("Loaded configuration from {}", path.display());
            config
        }
        Ok(None) => {
            tracing::debug!("No config.toml found at {}, using defaults", path.display());
            AssistantConfig::default()
        }
        Err(err) => {
            tracing::warn!("{err}, using defaults");
            AssistantConfig::default()
        }
    }
}
