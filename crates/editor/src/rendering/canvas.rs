//! Bounds-checked drawing into a ratatui buffer.
//!
//! Every write goes through `Buffer::cell_mut`; cells outside the buffer are
//! dropped, so a shrinking terminal never aborts a frame.

use ratatui::{buffer::Buffer, style::Style};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::constants::ELLIPSIS;

/// Draw `text` at (x, y), using at most `max_width` columns.
///
/// Control characters are drawn as a blank cell. Returns the number of
/// columns used.
pub(crate) fn put_str(
    buf: &mut Buffer,
    x: u16,
    y: u16,
    text: &str,
    max_width: u16,
    style: Style,
) -> u16 {
    let mut used: u16 = 0;

    for ch in text.chars() {
        let (ch, width) = if ch.is_control() {
            (' ', 1)
        } else {
            (ch, ch.width().unwrap_or(0) as u16)
        };
        if width == 0 {
            continue;
        }
        if used + width > max_width {
            break;
        }

        let Some(cx) = x.checked_add(used) else { break };
        put_char(buf, cx, y, ch, style);
        // Cells covered by a wide char
        for offset in 1..width {
            if let Some(cell) = cx.checked_add(offset).and_then(|px| buf.cell_mut((px, y))) {
                cell.reset();
                cell.set_style(style);
            }
        }
        used += width;
    }

    used
}

/// Draw a single character.
pub(crate) fn put_char(buf: &mut Buffer, x: u16, y: u16, ch: char, style: Style) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_char(ch).set_style(style);
    }
}

/// Blank `width` cells of a row starting at `x`.
pub(crate) fn fill_row(buf: &mut Buffer, x: u16, y: u16, width: u16, style: Style) {
    for offset in 0..width {
        let Some(px) = x.checked_add(offset) else { break };
        put_char(buf, px, y, ' ', style);
    }
}

/// Fit `text` into `width` columns, ending with `...` when cut.
pub(crate) fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }

    let budget = width.saturating_sub(ELLIPSIS.len());
    let mut result = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > budget {
            break;
        }
        used += ch_width;
        result.push(ch);
    }

    if width >= ELLIPSIS.len() {
        result.push_str(ELLIPSIS);
    }
    result
}

/// Draw a full-width bar: filled with `style`, text truncated to fit.
pub(crate) fn put_bar(buf: &mut Buffer, x: u16, y: u16, width: u16, text: &str, style: Style) {
    fill_row(buf, x, y, width, style);
    let text = truncate_to_width(text, width as usize);
    put_str(buf, x, y, &text, width, style);
}
