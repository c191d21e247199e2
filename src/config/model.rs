//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML; every field has a
//! default so the application works with no config file present.

use crate::app::seed;
use crate::ui::theme::ThemeMode;
use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub user: UserConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default = "default_channels")]
    pub channels: Vec<String>,
    #[serde(default = "default_users")]
    pub users: Vec<String>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            user: UserConfig::default(),
            ui: UiConfig::default(),
            channels: default_channels(),
            users: default_users(),
            logging: LoggingConfig::default(),
        }
    }
}

/// The fixed local identity used as the author of every submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default = "default_nickname")]
    pub nickname: String,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            nickname: default_nickname(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    #[serde(default = "default_nick_column_width")]
    pub nick_column_width: usize,
    #[serde(default)]
    pub theme: ThemeMode,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
            nick_column_width: default_nick_column_width(),
            theme: ThemeMode::default(),
        }
    }
}

/// Diagnostic log settings. Chat content is never persisted; this only
/// controls the tracing output file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_nickname() -> String {
    seed::DEFAULT_LOCAL_NICK.to_string()
}

fn default_channels() -> Vec<String> {
    seed::DEFAULT_CHANNELS.iter().map(|s| s.to_string()).collect()
}

fn default_users() -> Vec<String> {
    seed::DEFAULT_USERS.iter().map(|s| s.to_string()).collect()
}

fn default_timestamp_format() -> String {
    "%H:%M".to_string()
}

fn default_nick_column_width() -> usize {
    8
}

fn default_log_dir() -> String {
    "~/.local/share/cozychat/logs".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_full_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.user.nickname, "you");
        assert_eq!(config.channels, ["#general", "#random", "#cozy-outpost"]);
        assert_eq!(config.users, ["alice", "bob", "carol", "dave"]);
        assert_eq!(config.ui.timestamp_format, "%H:%M");
        assert_eq!(config.ui.nick_column_width, 8);
        assert_eq!(config.ui.theme, ThemeMode::Dark);
        assert!(!config.logging.enabled);
    }

    #[test]
    fn test_partial_toml_overrides_only_named_fields() {
        let config: AppConfig = toml::from_str(
            r#"
            [user]
            nickname = "guest"

            [ui]
            theme = "light"
            "#,
        )
        .unwrap();
        assert_eq!(config.user.nickname, "guest");
        assert_eq!(config.ui.theme, ThemeMode::Light);
        assert_eq!(config.ui.nick_column_width, 8);
        assert_eq!(config.channels.len(), 3);
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = AppConfig::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.channels, config.channels);
        assert_eq!(parsed.user.nickname, config.user.nickname);
    }
}
