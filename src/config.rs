use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Key of the persisted slot holding the reminder list.
pub const DEFAULT_REMINDERS_KEY: &str = "thrive_reminders_v1";

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ThriveConfig {
    pub storage: StorageConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub db_path: String,
    pub reminders_key: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    /// Number of reminders shown on the home preview.
    pub preview_len: usize,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_level: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        let db_path = default_thrive_dir()
            .join("thrive.db")
            .to_string_lossy()
            .into_owned();
        Self {
            db_path,
            reminders_key: DEFAULT_REMINDERS_KEY.into(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { preview_len: 3 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".into(),
        }
    }
}

/// Returns `~/.thrive/`, or `./.thrive/` when no home directory is known.
pub fn default_thrive_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".thrive")
}

/// Returns the default config file path: `~/.thrive/config.toml`
pub fn default_config_path() -> PathBuf {
    default_thrive_dir().join("config.toml")
}

impl ThriveConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            ThriveConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (THRIVE_DB, THRIVE_LOG_LEVEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("THRIVE_DB") {
            self.storage.db_path = val;
        }
        if let Ok(val) = std::env::var("THRIVE_LOG_LEVEL") {
            self.logging.log_level = val;
        }
    }

    /// Resolve the database path, expanding `~` if needed.
    pub fn resolved_db_path(&self) -> PathBuf {
        expand_tilde(&self.storage.db_path)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ThriveConfig::default();
        assert_eq!(config.logging.log_level, "warn");
        assert_eq!(config.storage.reminders_key, "thrive_reminders_v1");
        assert_eq!(config.display.preview_len, 3);
        assert!(config.storage.db_path.ends_with("thrive.db"));
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
[logging]
log_level = "debug"

[storage]
db_path = "/tmp/thrive-test.db"

[display]
preview_len = 5
"#;
        let config: ThriveConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.logging.log_level, "debug");
        assert_eq!(config.storage.db_path, "/tmp/thrive-test.db");
        assert_eq!(config.display.preview_len, 5);
        // defaults still apply for unset fields
        assert_eq!(config.storage.reminders_key, DEFAULT_REMINDERS_KEY);
    }

    #[test]
    fn env_overrides_apply() {
        let mut config = ThriveConfig::default();
        std::env::set_var("THRIVE_DB", "/tmp/override.db");
        std::env::set_var("THRIVE_LOG_LEVEL", "trace");

        config.apply_env_overrides();

        assert_eq!(config.storage.db_path, "/tmp/override.db");
        assert_eq!(config.logging.log_level, "trace");

        std::env::remove_var("THRIVE_DB");
        std::env::remove_var("THRIVE_LOG_LEVEL");
    }

    #[test]
    fn expand_tilde_leaves_absolute_paths() {
        assert_eq!(expand_tilde("/var/lib/thrive.db"), PathBuf::from("/var/lib/thrive.db"));
    }

    #[test]
    fn missing_config_file_falls_back_to_defaults() {
        let config = ThriveConfig::load_from("/nonexistent/thrive/config.toml").unwrap();
        assert_eq!(config.display.preview_len, 3);
    }
}
