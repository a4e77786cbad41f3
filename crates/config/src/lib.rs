//! Configuration management for mirage.
//!
//! Settings live in a TOML file under the XDG config directory. Missing keys
//! are filled in with defaults and the normalized file is written back.

mod settings;
mod xdg;

pub use settings::{ColorMode, Config, EditorSettings, LoggingSettings, UiSettings};
pub use xdg::{get_cache_dir, get_config_dir};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Default values as constants
pub mod defaults {
    pub const WORD_WRAP: bool = true;
    pub const LINE_NUMBERS: bool = true;
    pub const DEFAULT_FILE_NAME: &str = "untitled.txt";
    pub const MAX_FILE_SIZE_MB: u64 = 50;
    pub const TICK_RATE_MS: u64 = 100;
    pub const QUIT_CONFIRM_MS: u64 = 3000;
    pub const MIN_LOG_LEVEL: &str = "info";
    pub const LOG_FILE_NAME: &str = "mirage.log";
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// On first run, creates the config file with default values.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from a specific file.
    ///
    /// Creates the file with defaults if it does not exist and rewrites it
    /// when keys had to be filled in.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let original_content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = Self::validate_content(&original_content)
            .with_context(|| format!("Invalid config: {}", path.display()))?;

        let normalized_content = toml::to_string_pretty(&config)?;
        if original_content != normalized_content {
            config.save_to(path)?;
        }

        Ok(config)
    }

    /// Save configuration to a specific file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Get path to config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(get_config_dir()?.join("config.toml"))
    }

    /// Parse config content.
    pub fn validate_content(content: &str) -> Result<Config> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("{}", e))
    }

    /// Log file location: the configured path, or the cache directory.
    pub fn log_file_path(&self) -> PathBuf {
        match self.logging.file_path.as_deref() {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => get_cache_dir()
                .unwrap_or_else(|_| std::env::temp_dir())
                .join(defaults::LOG_FILE_NAME),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_first_load_writes_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert!(config.editor.word_wrap);
        assert_eq!(config.editor.default_file_name, defaults::DEFAULT_FILE_NAME);
    }

    #[test]
    fn test_missing_keys_are_filled_in() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[editor]\nword_wrap = false\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(!config.editor.word_wrap);
        assert!(config.editor.line_numbers);
        assert_eq!(config.ui.quit_confirm_ms, defaults::QUIT_CONFIRM_MS);

        let rewritten = std::fs::read_to_string(&path).unwrap();
        assert!(rewritten.contains("line_numbers = true"));
        assert!(rewritten.contains("[logging]"));
    }

    #[test]
    fn test_invalid_content_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[editor\nword_wrap = ").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_explicit_log_file_path() {
        let mut config = Config::default();
        config.logging.file_path = Some("/tmp/custom.log".to_string());
        assert_eq!(config.log_file_path(), PathBuf::from("/tmp/custom.log"));
    }

    #[test]
    fn test_default_log_file_name() {
        let config = Config::default();
        assert!(config.log_file_path().ends_with(defaults::LOG_FILE_NAME));
    }
}
