//! Cursor glyph rendering.

use mirage_theme::Theme;
use ratatui::buffer::Buffer;

use super::canvas::put_char;
use crate::layout::FramePlan;

/// Draw the cursor glyph if its display row is inside the text area.
pub(crate) fn render_cursor(buf: &mut Buffer, plan: &FramePlan, theme: &Theme) {
    if let Some((x, y)) = plan.cursor_cell() {
        put_char(buf, x, y, theme.cursor_glyph(), theme.cursor());
    }
}
