//! Editor session configuration.

use std::time::Duration;

use mirage_config::{defaults, Config};

use crate::constants::MEGABYTE;

/// Settings an editor session starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorConfig {
    /// Soft-wrap long lines
    pub word_wrap: bool,
    /// Show the line number gutter
    pub line_numbers: bool,
    /// Larger files are not loaded, in bytes
    pub max_file_size: u64,
    /// Input poll timeout between frames
    pub tick_rate: Duration,
    /// Window for the second quit key when there are unsaved changes
    pub quit_confirm: Duration,
}

impl EditorConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            word_wrap: config.editor.word_wrap,
            line_numbers: config.editor.line_numbers,
            max_file_size: config.editor.max_file_size_mb.saturating_mul(MEGABYTE),
            tick_rate: Duration::from_millis(config.ui.tick_rate_ms.max(1)),
            quit_confirm: Duration::from_millis(config.ui.quit_confirm_ms),
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            word_wrap: defaults::WORD_WRAP,
            line_numbers: defaults::LINE_NUMBERS,
            max_file_size: defaults::MAX_FILE_SIZE_MB * MEGABYTE,
            tick_rate: Duration::from_millis(defaults::TICK_RATE_MS),
            quit_confirm: Duration::from_millis(defaults::QUIT_CONFIRM_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.editor.word_wrap = false;
        config.editor.max_file_size_mb = 2;
        config.ui.tick_rate_ms = 0;
        config.ui.quit_confirm_ms = 1500;

        let editor = EditorConfig::from_config(&config);
        assert!(!editor.word_wrap);
        assert!(editor.line_numbers);
        assert_eq!(editor.max_file_size, 2 * MEGABYTE);
        assert_eq!(editor.tick_rate, Duration::from_millis(1));
        assert_eq!(editor.quit_confirm, Duration::from_millis(1500));
    }

    #[test]
    fn test_default_matches_config_defaults() {
        assert_eq!(EditorConfig::default(), EditorConfig::from_config(&Config::default()));
    }
}
