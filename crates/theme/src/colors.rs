//! Theme color definitions.

use ratatui::style::{Color, Modifier, Style};

/// Colors used by the editor screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    // === Header, footer hint bar, info messages ===
    pub header_fg: Color,
    pub header_bg: Color,

    // === Gutter ===
    /// Line numbers and continuation markers
    pub line_number: Color,

    /// Cursor glyph
    pub cursor: Color,

    // === Status severities ===
    pub success_fg: Color,
    pub success_bg: Color,
    pub error_fg: Color,
    pub error_bg: Color,

    /// Help overlay
    pub help: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            header_fg: Color::White,
            header_bg: Color::Blue,
            line_number: Color::Cyan,
            cursor: Color::Yellow,
            success_fg: Color::Black,
            success_bg: Color::Green,
            error_fg: Color::White,
            error_bg: Color::Red,
            help: Color::Magenta,
        }
    }
}

/// Screen theme: a palette, or monochrome when the terminal has no colors.
///
/// Without a palette every style degrades to reverse video and bold.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Theme name for display
    pub name: String,
    /// `None` selects monochrome styles
    pub palette: Option<Palette>,
}

impl Theme {
    /// Attribute-only theme for terminals without color support
    pub fn monochrome() -> Self {
        Self {
            name: "monochrome".to_string(),
            palette: None,
        }
    }

    /// Check if styles use attributes only
    pub fn is_monochrome(&self) -> bool {
        self.palette.is_none()
    }

    /// Header line and key-hint bar
    pub fn header(&self) -> Style {
        match &self.palette {
            Some(p) => Style::default()
                .fg(p.header_fg)
                .bg(p.header_bg)
                .add_modifier(Modifier::BOLD),
            None => Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
        }
    }

    /// Footer hint bar and info messages
    pub fn info(&self) -> Style {
        match &self.palette {
            Some(p) => Style::default().fg(p.header_fg).bg(p.header_bg),
            None => Style::default().add_modifier(Modifier::REVERSED),
        }
    }

    /// Success status message
    pub fn success(&self) -> Style {
        match &self.palette {
            Some(p) => Style::default()
                .fg(p.success_fg)
                .bg(p.success_bg)
                .add_modifier(Modifier::BOLD),
            None => Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
        }
    }

    /// Error status message
    pub fn error(&self) -> Style {
        match &self.palette {
            Some(p) => Style::default()
                .fg(p.error_fg)
                .bg(p.error_bg)
                .add_modifier(Modifier::BOLD),
            None => Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
        }
    }

    /// Line number on the first segment of a logical line
    pub fn line_number(&self) -> Style {
        match &self.palette {
            Some(p) => Style::default()
                .fg(p.line_number)
                .add_modifier(Modifier::BOLD),
            None => Style::default(),
        }
    }

    /// Marker on continuation segments of a wrapped line
    pub fn continuation(&self) -> Style {
        match &self.palette {
            Some(p) => Style::default().fg(p.line_number).add_modifier(Modifier::DIM),
            None => Style::default(),
        }
    }

    /// Document text
    pub fn text(&self) -> Style {
        Style::default()
    }

    /// Cursor glyph
    pub fn cursor(&self) -> Style {
        match &self.palette {
            Some(p) => Style::default().fg(p.cursor).add_modifier(Modifier::BOLD),
            None => Style::default().add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),
        }
    }

    /// Help overlay box
    pub fn help(&self) -> Style {
        match &self.palette {
            Some(p) => Style::default().fg(p.help).add_modifier(Modifier::BOLD),
            None => Style::default().add_modifier(Modifier::BOLD),
        }
    }

    /// Glyph drawn at the cursor position
    pub fn cursor_glyph(&self) -> char {
        if self.is_monochrome() {
            '|'
        } else {
            '│'
        }
    }

    /// Gutter marker for continuation segments
    pub fn continuation_marker(&self) -> char {
        if self.is_monochrome() {
            '>'
        } else {
            '·'
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        crate::builtin_theme()
    }
}
