mod app;
mod event;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    style::available_color_count,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};

use mirage_config::{ColorMode, Config};
use mirage_editor::{Editor, EditorConfig};
use mirage_logger::LogLevel;
use mirage_theme::{builtin_theme, select_theme, Theme};

use crate::app::App;

/// Terminals reporting fewer colors are treated as monochrome
const MIN_COLORS: u16 = 8;

/// Mirage: a small terminal text editor
#[derive(Debug, Parser)]
#[command(name = "mirage", version, about)]
struct Cli {
    /// File to edit (default: editor.default_file_name in the current directory)
    file: Option<PathBuf>,

    /// Use this configuration file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Minimum log level: debug, info, warn, error
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<LogLevel>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config problems must not keep the editor from starting
    let config = load_config(cli.config.as_deref());

    let log_level = cli
        .log_level
        .unwrap_or_else(|| config.logging.min_level.parse().unwrap_or(LogLevel::Info));
    mirage_logger::init(config.log_file_path(), log_level);
    log::info!("Mirage {} starting", env!("CARGO_PKG_VERSION"));

    let theme = resolve_theme(&config);
    let path = cli
        .file
        .unwrap_or_else(|| PathBuf::from(&config.editor.default_file_name));
    let editor = Editor::open(path, EditorConfig::from_config(&config));

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();

    // Kitty protocol lets Ctrl+Cyrillic hotkeys through in terminals that support it
    let keyboard_enhanced = supports_keyboard_enhancement().unwrap_or(false);

    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    if keyboard_enhanced {
        let _ = execute!(
            stdout,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_ALTERNATE_KEYS
            )
        );
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            return Err(e.into());
        }
    };
    terminal.hide_cursor()?;

    // Run application
    let mut app = App::new(editor, theme);
    let result = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    if keyboard_enhanced {
        let _ = execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags);
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Print error if there was one
    if let Err(err) = result {
        log::error!("Event loop failed: {:#}", err);
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Load configuration, falling back to defaults with a warning.
fn load_config(path: Option<&Path>) -> Config {
    let loaded = match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };

    loaded.unwrap_or_else(|e| {
        eprintln!("Warning: {:#}. Using default configuration.", e);
        Config::default()
    })
}

/// Decide whether to draw in color.
fn use_color(mode: ColorMode, available_colors: u16) -> bool {
    match mode {
        ColorMode::Auto => available_colors >= MIN_COLORS,
        ColorMode::Always => true,
        ColorMode::Never => false,
    }
}

/// Pick the session theme, falling back to the built-in one.
fn resolve_theme(config: &Config) -> Theme {
    let color = use_color(config.ui.color, available_color_count());
    let theme_file = config
        .ui
        .theme_file
        .as_deref()
        .filter(|path| !path.is_empty())
        .map(Path::new);

    match select_theme(color, theme_file) {
        Ok(theme) => {
            log::info!("Using theme '{}'", theme.name);
            theme
        }
        Err(e) => {
            log::warn!("{:#}. Using built-in theme.", e);
            builtin_theme()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_use_color() {
        assert!(use_color(ColorMode::Auto, 256));
        assert!(use_color(ColorMode::Auto, 8));
        assert!(!use_color(ColorMode::Auto, 2));
        assert!(use_color(ColorMode::Always, 0));
        assert!(!use_color(ColorMode::Never, 256));
    }

    #[test]
    fn test_resolve_theme() {
        let mut config = Config::default();
        config.ui.color = ColorMode::Never;
        assert!(resolve_theme(&config).is_monochrome());

        config.ui.color = ColorMode::Always;
        config.ui.theme_file = Some("/nonexistent/theme.toml".to_string());
        assert_eq!(resolve_theme(&config).name, "default");
    }

    #[test]
    fn test_load_config_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[editor\n").unwrap();
        let config = load_config(Some(&path));
        assert_eq!(config.editor.default_file_name, "untitled.txt");

        let path = dir.path().join("fresh.toml");
        let config = load_config(Some(&path));
        assert!(path.exists());
        assert!(config.editor.word_wrap);
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["mirage", "notes.txt", "--log-level", "debug"]);
        assert_eq!(cli.file, Some(PathBuf::from("notes.txt")));
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
        assert_eq!(cli.config, None);

        assert!(Cli::try_parse_from(["mirage", "--log-level", "loud"]).is_err());
    }
}
