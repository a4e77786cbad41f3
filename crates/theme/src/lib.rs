//! Theme system for mirage.
//!
//! Provides the screen palette, a built-in default theme, user TOML themes,
//! and monochrome styles for terminals without color support.

mod colors;
mod loader;

pub use colors::{Palette, Theme};
pub use loader::{load_theme, load_theme_from_str};

use std::path::Path;

use anyhow::Result;

// Embed the default theme at compile time
const THEME_DEFAULT_TOML: &str = include_str!("../themes/default.toml");

/// Built-in color theme.
///
/// Falls back to the hardcoded palette if the embedded TOML fails to parse.
pub fn builtin_theme() -> Theme {
    load_theme_from_str(THEME_DEFAULT_TOML).unwrap_or_else(|_| Theme {
        name: "default".to_string(),
        palette: Some(Palette::default()),
    })
}

/// Pick the theme for this session.
///
/// Monochrome when colors are unavailable; otherwise the user theme file if
/// given, else the built-in theme. A broken user theme is reported to the
/// caller, which decides whether to continue with the built-in one.
pub fn select_theme(use_color: bool, theme_file: Option<&Path>) -> Result<Theme> {
    if !use_color {
        return Ok(Theme::monochrome());
    }
    match theme_file {
        Some(path) => load_theme(path),
        None => Ok(builtin_theme()),
    }
}
