//! Configuration module for tipster
//!
//! Settings live in `~/.config/tipster/config.toml` (platform-specific). A
//! missing file is replaced with the defaults on first run. Command-line flags
//! override individual settings after loading.

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TipsterConfig {
    /// Location of the tips file (defaults to the user data directory)
    pub store_path: Option<PathBuf>,

    /// Show the loading spinner before a tip
    pub animation: bool,

    /// Clear the terminal before showing a fresh tip
    pub clear_screen: bool,

    /// Seed for reproducible random picks
    pub seed: Option<u64>,

    /// Logging settings
    pub logs: LogsConfig,
}

/// Configuration settings for application logging
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LogsConfig {
    /// Whether logs are written to the data directory
    pub enabled: bool,

    /// `tracing-subscriber` env-filter directive, e.g. `info` or `tipster=debug`
    pub filter: String,
}

impl Default for TipsterConfig {
    fn default() -> Self {
        Self {
            store_path: None,
            animation: true,
            clear_screen: true,
            seed: None,
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            filter: "info".to_string(),
        }
    }
}

impl TipsterConfig {
    /// Get the path to the default config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("tipster").join("config.toml"))
    }

    /// Directory for application data (tips file, logs)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system data directory cannot be determined.
    pub fn data_dir() -> Result<PathBuf, ConfigError> {
        dirs::data_local_dir()
            .map(|dir| dir.join("tipster"))
            .ok_or_else(|| ConfigError::Message("Could not determine data directory".to_string()))
    }

    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config path cannot be determined or the file
    /// cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing the defaults there if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            if let Err(err) = default_config.save_to(path) {
                tracing::warn!("Couldn't write default config: {err}");
            }
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(path.to_path_buf()).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// The tips file to use: the configured one or `<data dir>/tips.json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no path is configured and the data directory
    /// cannot be determined.
    pub fn resolved_store_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.store_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::data_dir()?.join("tips.json")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = TipsterConfig::default();
        assert!(config.store_path.is_none());
        assert!(config.animation);
        assert!(config.clear_screen);
        assert!(config.seed.is_none());
        assert!(!config.logs.enabled);
        assert_eq!(config.logs.filter, "info");
    }

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tipster").join("config.toml");

        let config = TipsterConfig::load_from(&path).unwrap();

        assert_eq!(config, TipsterConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_partial_file_uses_defaults_for_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "animation = false\nseed = 42\n\n[logs]\nenabled = true\n").unwrap();

        let config = TipsterConfig::load_from(&path).unwrap();

        assert!(!config.animation);
        assert!(config.clear_screen);
        assert_eq!(config.seed, Some(42));
        assert!(config.logs.enabled);
        assert_eq!(config.logs.filter, "info");
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = TipsterConfig {
            store_path: Some(PathBuf::from("/srv/tips.json")),
            animation: false,
            ..TipsterConfig::default()
        };

        config.save_to(&path).unwrap();

        assert_eq!(TipsterConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_resolved_store_path_prefers_configured() {
        let config = TipsterConfig {
            store_path: Some(PathBuf::from("custom.json")),
            ..TipsterConfig::default()
        };
        assert_eq!(config.resolved_store_path().unwrap(), PathBuf::from("custom.json"));
    }
}
