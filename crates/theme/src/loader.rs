//! Theme loading from TOML files.

use anyhow::{Context, Result};
use ratatui::style::Color;
use serde::Deserialize;
use std::path::Path;

use crate::{Palette, Theme};

/// Color representation in TOML.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TomlColor {
    Named(String),
    Rgb { rgb: [u8; 3] },
}

impl TomlColor {
    fn to_color(&self) -> Result<Color> {
        match self {
            TomlColor::Named(name) => match name.as_str() {
                "Reset" => Ok(Color::Reset),
                "Black" => Ok(Color::Black),
                "Red" => Ok(Color::Red),
                "Green" => Ok(Color::Green),
                "Yellow" => Ok(Color::Yellow),
                "Blue" => Ok(Color::Blue),
                "Magenta" => Ok(Color::Magenta),
                "Cyan" => Ok(Color::Cyan),
                "Gray" => Ok(Color::Gray),
                "DarkGray" => Ok(Color::DarkGray),
                "LightRed" => Ok(Color::LightRed),
                "LightGreen" => Ok(Color::LightGreen),
                "LightYellow" => Ok(Color::LightYellow),
                "LightBlue" => Ok(Color::LightBlue),
                "LightMagenta" => Ok(Color::LightMagenta),
                "LightCyan" => Ok(Color::LightCyan),
                "White" => Ok(Color::White),
                other => anyhow::bail!("Unknown color name: {}", other),
            },
            TomlColor::Rgb { rgb } => Ok(Color::Rgb(rgb[0], rgb[1], rgb[2])),
        }
    }
}

/// TOML theme colors structure.
#[derive(Debug, Clone, Deserialize)]
struct TomlColors {
    header_fg: TomlColor,
    header_bg: TomlColor,
    line_number: TomlColor,
    cursor: TomlColor,
    success_fg: TomlColor,
    success_bg: TomlColor,
    error_fg: TomlColor,
    error_bg: TomlColor,
    help: TomlColor,
}

impl TomlColors {
    fn to_palette(&self) -> Result<Palette> {
        Ok(Palette {
            header_fg: self.header_fg.to_color()?,
            header_bg: self.header_bg.to_color()?,
            line_number: self.line_number.to_color()?,
            cursor: self.cursor.to_color()?,
            success_fg: self.success_fg.to_color()?,
            success_bg: self.success_bg.to_color()?,
            error_fg: self.error_fg.to_color()?,
            error_bg: self.error_bg.to_color()?,
            help: self.help.to_color()?,
        })
    }
}

/// TOML theme structure.
#[derive(Debug, Clone, Deserialize)]
struct TomlTheme {
    name: String,
    colors: TomlColors,
}

/// Load theme from TOML file.
pub fn load_theme(path: &Path) -> Result<Theme> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read theme: {}", path.display()))?;
    load_theme_from_str(&content).with_context(|| format!("Invalid theme: {}", path.display()))
}

/// Load theme from TOML string.
pub fn load_theme_from_str(content: &str) -> Result<Theme> {
    let toml_theme: TomlTheme = toml::from_str(content)?;

    Ok(Theme {
        name: toml_theme.name,
        palette: Some(toml_theme.colors.to_palette()?),
    })
}
