//! Screen layout and the mapping between logical and display coordinates.
//!
//! Everything here is recomputed from the document, cursor and terminal size
//! on every frame. Nothing is cached between frames.

use mirage_buffer::{segment_count, wrap_line, Cursor, Document};
use ratatui::layout::Rect;

use crate::constants::{MIN_GUTTER_DIGITS, MIN_SCREEN_HEIGHT, MIN_SCREEN_WIDTH};

/// Position in display space: row counted over all wrapped segments of the
/// document, column inside the segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayPos {
    pub row: usize,
    pub col: usize,
}

/// One wrapped slice of a logical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySegment {
    /// Source logical line
    pub line: usize,
    /// Segment index within the line
    pub index: usize,
    pub text: String,
}

impl DisplaySegment {
    /// First segment of its logical line (carries the line number)
    pub fn is_first(&self) -> bool {
        self.index == 0
    }
}

/// Regions of the screen for one frame.
///
/// Header on the first row, footer on the last, text rows between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub area: Rect,
    /// First text row
    pub text_top: u16,
    /// Number of text rows
    pub text_height: u16,
    pub footer_y: u16,
    /// Line number column plus separator, 0 when hidden
    pub gutter_width: u16,
    /// Wrap width for document text, at least 1
    pub text_width: usize,
}

impl ScreenLayout {
    pub fn compute(area: Rect, line_count: usize, show_line_numbers: bool) -> Self {
        let gutter_width = gutter_width(line_count, show_line_numbers);
        let text_width = (area.width as usize)
            .saturating_sub(gutter_width as usize + 1)
            .max(1);

        Self {
            area,
            text_top: area.y.saturating_add(1),
            text_height: area.height.saturating_sub(2),
            footer_y: area.bottom().saturating_sub(1),
            gutter_width,
            text_width,
        }
    }

    /// Terminal too small for anything but a cleared screen
    pub fn is_too_small(&self) -> bool {
        self.area.width < MIN_SCREEN_WIDTH || self.area.height < MIN_SCREEN_HEIGHT
    }

    /// Rows used for scroll accounting, at least 1
    pub fn visible_rows(&self) -> usize {
        (self.text_height as usize).max(1)
    }
}

/// Layout and cursor placement computed before drawing a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePlan {
    pub layout: ScreenLayout,
    /// Cursor in display space
    pub cursor: DisplayPos,
    /// First visible display row
    pub scroll: usize,
}

impl FramePlan {
    /// Screen cell for the cursor glyph, or `None` when scrolled out of view
    pub fn cursor_cell(&self) -> Option<(u16, u16)> {
        let layout = &self.layout;
        let rows = layout.text_height as usize;
        if self.cursor.row < self.scroll || self.cursor.row >= self.scroll + rows {
            return None;
        }

        let max_x = layout.area.width.saturating_sub(1) as usize;
        let x = (layout.gutter_width as usize + self.cursor.col).min(max_x);
        let y = layout.text_top as usize + (self.cursor.row - self.scroll);
        Some((layout.area.x + x as u16, y as u16))
    }
}

/// Gutter width for a document of `line_count` lines.
pub fn gutter_width(line_count: usize, show_line_numbers: bool) -> u16 {
    if !show_line_numbers {
        return 0;
    }
    let digits = line_count.max(1).to_string().len();
    (digits.max(MIN_GUTTER_DIGITS) + 1) as u16
}

/// Map a logical cursor to display space.
///
/// The row is the number of display rows taken by all earlier lines, plus the
/// segment the column falls in when wrapping. Without wrapping the column is
/// pinned to the last visible column.
pub fn logical_to_display(
    document: &Document,
    cursor: &Cursor,
    width: usize,
    wrap: bool,
) -> DisplayPos {
    let width = width.max(1);
    let base: usize = (0..cursor.line)
        .map(|line| segment_count(document.line_len(line), width, wrap))
        .sum();

    if wrap {
        DisplayPos {
            row: base + cursor.column / width,
            col: cursor.column % width,
        }
    } else {
        DisplayPos {
            row: base,
            col: cursor.column.min(width - 1),
        }
    }
}

/// Map a display position back to the logical cursor it shows.
///
/// Rows past the end land at the end of the last line; columns are clamped
/// into the line.
#[cfg(test)]
fn display_to_logical(document: &Document, pos: DisplayPos, width: usize, wrap: bool) -> Cursor {
    let width = width.max(1);
    let mut row = pos.row;

    for line in 0..document.line_count() {
        let len = document.line_len(line);
        let segments = segment_count(len, width, wrap);
        if row < segments {
            let column = if wrap { row * width + pos.col } else { pos.col };
            return Cursor::at(line, column.min(len));
        }
        row -= segments;
    }

    let last = document.line_count().saturating_sub(1);
    Cursor::at(last, document.line_len(last))
}

/// Total display rows of the document.
#[cfg(test)]
fn total_display_rows(document: &Document, width: usize, wrap: bool) -> usize {
    (0..document.line_count())
        .map(|line| segment_count(document.line_len(line), width, wrap))
        .sum()
}

/// All display segments of the document, in order.
pub fn display_segments(document: &Document, width: usize, wrap: bool) -> Vec<DisplaySegment> {
    visible_segments(document, width, wrap, 0, usize::MAX)
}

/// Display segments in the window `[scroll, scroll + height)`.
///
/// Lines wholly above the window are skipped by counting, without wrapping.
pub fn visible_segments(
    document: &Document,
    width: usize,
    wrap: bool,
    scroll: usize,
    height: usize,
) -> Vec<DisplaySegment> {
    let mut segments = Vec::new();
    let mut row = 0;

    for line in 0..document.line_count() {
        if segments.len() >= height {
            break;
        }

        let count = segment_count(document.line_len(line), width, wrap);
        if row + count <= scroll {
            row += count;
            continue;
        }

        let text = document.line(line).unwrap_or_default();
        let skip = scroll.saturating_sub(row);
        for (index, piece) in wrap_line(&text, width, wrap).into_iter().enumerate().skip(skip) {
            if segments.len() >= height {
                break;
            }
            segments.push(DisplaySegment {
                line,
                index,
                text: piece.to_string(),
            });
        }
        row += count;
    }

    segments
}
