pub mod model;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub use model::{AppConfig, LoggingConfig, UiConfig, UserConfig};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cozychat")
        .join("config.toml")
}

/// Load the config file, falling back to full defaults when it is absent.
/// A file that exists but cannot be read or parsed is an error.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let path = config_path();
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let config = toml::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })?;
    Ok(config)
}
