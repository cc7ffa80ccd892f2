use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TomeConfig {
    pub log_level: String,
    pub storage: StorageConfig,
    pub assist: AssistConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub db_path: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AssistConfig {
    /// Gemini API key. Empty disables the assistant entirely.
    pub api_key: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for TomeConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            storage: StorageConfig::default(),
            assist: AssistConfig::default(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let db_path = default_tome_dir()
            .join("kb.db")
            .to_string_lossy()
            .into_owned();
        Self { db_path }
    }
}

impl Default for AssistConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "gemini-2.5-flash".into(),
            timeout_secs: 30,
        }
    }
}

/// Returns `~/.tome/`
pub fn default_tome_dir() -> PathBuf {
    dirs::home_dir()
        .expect("home directory must exist")
        .join(".tome")
}

/// Returns the default config file path: `~/.tome/config.toml`
pub fn default_config_path() -> PathBuf {
    default_tome_dir().join("config.toml")
}

impl TomeConfig {
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
            TomeConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (TOME_DB, TOME_API_KEY, TOME_LOG_LEVEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("TOME_DB") {
            self.storage.db_path = val;
        }
        if let Ok(val) = std::env::var("TOME_API_KEY") {
            self.assist.api_key = val;
        }
        if let Ok(val) = std::env::var("TOME_LOG_LEVEL") {
            self.log_level = val;
        }
    }

    /// Resolve the database path, expanding `~` if needed.
    pub fn resolved_db_path(&self) -> PathBuf {
        expand_tilde(&self.storage.db_path)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        dirs::home_dir()
            .expect("home directory must exist")
            .join(rest)
    } else {
        PathBuf::from(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = TomeConfig::default();
        assert_eq!(config.log_level, "info");
        assert!(config.assist.api_key.is_empty());
        assert_eq!(config.assist.model, "gemini-2.5-flash");
        assert!(config.storage.db_path.ends_with("kb.db"));
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
log_level = "debug"

[storage]
db_path = "/tmp/test.db"

[assist]
api_key = "k-123"
timeout_secs = 10
"#;
        let config: TomeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.storage.db_path, "/tmp/test.db");
        assert_eq!(config.assist.api_key, "k-123");
        assert_eq!(config.assist.timeout_secs, 10);
        // defaults still apply for unset fields
        assert_eq!(config.assist.model, "gemini-2.5-flash");
    }

    #[test]
    fn env_overrides_apply() {
        let mut config = TomeConfig::default();
        std::env::set_var("TOME_DB", "/tmp/override.db");
        std::env::set_var("TOME_API_KEY", "env-key");
        std::env::set_var("TOME_LOG_LEVEL", "trace");

        config.apply_env_overrides();

        assert_eq!(config.storage.db_path, "/tmp/override.db");
        assert_eq!(config.assist.api_key, "env-key");
        assert_eq!(config.log_level, "trace");

        // Clean up
        std::env::remove_var("TOME_DB");
        std::env::remove_var("TOME_API_KEY");
        std::env::remove_var("TOME_LOG_LEVEL");
    }
}
