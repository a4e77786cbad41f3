//! Configuration structures for mirage settings.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Application configuration with nested sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Editor settings
    #[serde(default)]
    pub editor: EditorSettings,

    /// Terminal and display settings
    #[serde(default)]
    pub ui: UiSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Editor settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Soft-wrap long lines at startup
    #[serde(default = "default_word_wrap")]
    pub word_wrap: bool,

    /// Show the line number gutter at startup
    #[serde(default = "default_line_numbers")]
    pub line_numbers: bool,

    /// File opened when no path is given on the command line
    #[serde(default = "default_file_name")]
    pub default_file_name: String,

    /// Files larger than this are not loaded
    #[serde(default = "default_max_file_size_mb")]
    pub max_file_size_mb: u64,
}

/// Color handling for the terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Use colors when the terminal reports support for them
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Monochrome: reverse video and bold only
    Never,
}

/// Terminal and display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    /// Color support detection
    #[serde(default)]
    pub color: ColorMode,

    /// Optional TOML theme file
    #[serde(default)]
    pub theme_file: Option<String>,

    /// Input poll timeout between frames in ms
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// How long a second quit key is awaited when there are unsaved changes, in ms
    #[serde(default = "default_quit_confirm_ms")]
    pub quit_confirm_ms: u64,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file path (optional)
    #[serde(default)]
    pub file_path: Option<String>,

    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "default_min_level")]
    pub min_level: String,
}

// Default value functions for serde
fn default_word_wrap() -> bool {
    defaults::WORD_WRAP
}

fn default_line_numbers() -> bool {
    defaults::LINE_NUMBERS
}

fn default_file_name() -> String {
    defaults::DEFAULT_FILE_NAME.to_string()
}

fn default_max_file_size_mb() -> u64 {
    defaults::MAX_FILE_SIZE_MB
}

fn default_tick_rate_ms() -> u64 {
    defaults::TICK_RATE_MS
}

fn default_quit_confirm_ms() -> u64 {
    defaults::QUIT_CONFIRM_MS
}

fn default_min_level() -> String {
    defaults::MIN_LOG_LEVEL.to_string()
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            word_wrap: default_word_wrap(),
            line_numbers: default_line_numbers(),
            default_file_name: default_file_name(),
            max_file_size_mb: default_max_file_size_mb(),
        }
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            theme_file: None,
            tick_rate_ms: default_tick_rate_ms(),
            quit_confirm_ms: default_quit_confirm_ms(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file_path: None,
            min_level: default_min_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.editor.word_wrap);
        assert!(config.editor.line_numbers);
        assert_eq!(config.ui.color, ColorMode::Auto);
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.logging.min_level, "info");
    }

    #[test]
    fn test_color_mode_parsing() {
        let config: Config = toml::from_str("[ui]\ncolor = \"never\"\n").unwrap();
        assert_eq!(config.ui.color, ColorMode::Never);

        let err = toml::from_str::<Config>("[ui]\ncolor = \"sometimes\"\n");
        assert!(err.is_err());
    }
}
