//! Frame rendering.
//!
//! Draws header, text area, footer, cursor glyph and the help overlay into a
//! ratatui [`Buffer`]. All cell writes are bounds-checked.

mod canvas;
mod cursor_renderer;
mod help;
mod text_area;

pub use help::help_lines;

use std::time::Instant;

use mirage_theme::Theme;
use ratatui::{buffer::Buffer, style::Style};

use crate::{
    constants::{APP_TITLE, KEY_HINTS, QUIT_WARNING},
    core::Editor,
    input::Mode,
    layout::FramePlan,
    status::Severity,
};

impl Editor {
    /// Draw the frame planned by [`Editor::prepare_frame`].
    pub fn render(&self, buf: &mut Buffer, plan: &FramePlan, theme: &Theme, now: Instant) {
        let layout = &plan.layout;
        let area = layout.area;

        for y in area.top()..area.bottom() {
            canvas::fill_row(buf, area.x, y, area.width, Style::default());
        }
        if layout.is_too_small() {
            return;
        }

        canvas::put_bar(buf, area.x, area.y, area.width, &self.header_text(), theme.header());
        text_area::render_text(buf, &self.document, plan, self.wrap_enabled, theme);

        let (footer, style) = self.footer_content(theme, now);
        canvas::put_bar(buf, area.x, layout.footer_y, area.width, &footer, style);

        cursor_renderer::render_cursor(buf, plan, theme);

        if self.mode == Mode::Help {
            help::render_help(buf, area, theme);
        }
    }

    /// Header: app name, file name, modified and wrap markers
    pub fn header_text(&self) -> String {
        let modified = if self.is_modified() { " [+]" } else { "" };
        let wrap = if self.wrap_enabled { " [W]" } else { "" };
        format!(" {} - {}{}{}", APP_TITLE, self.title(), modified, wrap)
    }

    /// Footer text and style: quit warning, status message, or key hints
    pub fn footer_content(&self, theme: &Theme, now: Instant) -> (String, Style) {
        if let Some(seconds) = self.quit_seconds_left(now) {
            return (format!(" {} ({}s)", QUIT_WARNING, seconds), theme.error());
        }

        match &self.status {
            Some(status) if status.frames_left() > 0 => {
                let style = match status.severity() {
                    Severity::Info => theme.info(),
                    Severity::Success => theme.success(),
                    Severity::Error => theme.error(),
                };
                (format!(" {}", status.text()), style)
            }
            _ => (KEY_HINTS.to_string(), theme.info()),
        }
    }
}
