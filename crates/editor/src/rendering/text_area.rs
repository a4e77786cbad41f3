//! Line numbers and wrapped document text.

use mirage_buffer::Document;
use mirage_theme::Theme;
use ratatui::buffer::Buffer;

use super::canvas::put_str;
use crate::layout::{visible_segments, DisplaySegment, FramePlan};

/// Draw the visible display segments with their gutter.
pub(crate) fn render_text(
    buf: &mut Buffer,
    document: &Document,
    plan: &FramePlan,
    wrap: bool,
    theme: &Theme,
) {
    let layout = &plan.layout;
    let x = layout.area.x;
    let segments = visible_segments(
        document,
        layout.text_width,
        wrap,
        plan.scroll,
        layout.text_height as usize,
    );

    for (row, segment) in segments.iter().enumerate() {
        let y = layout.text_top + row as u16;

        if layout.gutter_width > 0 {
            let (label, style) = gutter_label(segment, layout.gutter_width, theme);
            put_str(buf, x, y, &label, layout.gutter_width, style);
        }

        let text_x = x + layout.gutter_width;
        put_str(buf, text_x, y, &segment.text, layout.text_width as u16, theme.text());
    }
}

/// Right-aligned line number on a line's first segment, marker on the rest.
fn gutter_label(
    segment: &DisplaySegment,
    gutter_width: u16,
    theme: &Theme,
) -> (String, ratatui::style::Style) {
    let digits = gutter_width.saturating_sub(1) as usize;
    if segment.is_first() {
        (
            format!("{:>digits$} ", segment.line + 1),
            theme.line_number(),
        )
    } else {
        (
            format!("{:>digits$} ", theme.continuation_marker()),
            theme.continuation(),
        )
    }
}
