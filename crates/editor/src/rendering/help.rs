//! Help overlay listing the key bindings.

use mirage_theme::Theme;
use ratatui::{buffer::Buffer, layout::Rect};
use unicode_width::UnicodeWidthStr;

use super::canvas::put_str;
use crate::constants::HELP_WIDTH;

const HELP_TITLE: &str = "MIRAGE EDITOR - HELP GUIDE";

/// Body rows of the help box; `None` is a separator.
const HELP_BODY: &[Option<&str>] = &[
    None,
    Some(" Navigation:"),
    Some("   ↑↓←→        Move cursor"),
    Some("   Home/End    Start/End of line"),
    Some("   Ctrl+A/E    Alternative Home/End"),
    Some(""),
    Some(" Editing:"),
    Some("   Enter       New line"),
    Some("   Backspace   Delete before cursor"),
    Some("   Delete      Delete at cursor (Ctrl+D)"),
    Some(""),
    Some(" Commands:"),
    Some("   Ctrl+S      Save file"),
    Some("   Ctrl+Q      Quit (warns if unsaved)"),
    Some("   Ctrl+W      Toggle line wrapping"),
    Some("   Ctrl+L      Toggle line numbers"),
    Some("   F1          Show this help"),
    Some(""),
    Some("      Press any key to continue..."),
];

/// Lines of the boxed help panel, each `HELP_WIDTH` columns wide.
pub fn help_lines() -> Vec<String> {
    let inner = HELP_WIDTH as usize - 2;
    let rule = "─".repeat(inner);

    let mut lines = Vec::with_capacity(HELP_BODY.len() + 3);
    lines.push(format!("┌{}┐", rule));
    lines.push(format!("│{:^inner$}│", HELP_TITLE));
    for row in HELP_BODY {
        match row {
            Some(text) => {
                let pad = inner.saturating_sub(text.width());
                lines.push(format!("│{}{}│", text, " ".repeat(pad)));
            }
            None => lines.push(format!("├{}┤", rule)),
        }
    }
    lines.push(format!("└{}┘", rule));
    lines
}

/// Draw the help box centred in `area`, clipped to it.
pub(crate) fn render_help(buf: &mut Buffer, area: Rect, theme: &Theme) {
    let lines = help_lines();
    let top = area.y + area.height.saturating_sub(lines.len() as u16) / 2;
    let left = area.x + area.width.saturating_sub(HELP_WIDTH) / 2;
    let max_width = area.right().saturating_sub(left);

    for (i, line) in lines.iter().enumerate() {
        let y = top + i as u16;
        if y >= area.bottom() {
            break;
        }
        put_str(buf, left, y, line, max_width, theme.help());
    }
}
