use std::cmp::min;

/// Logical cursor position in a document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Line index (0-based)
    pub line: usize,
    /// Position in line in chars (0-based, may equal the line length)
    pub column: usize,
}

impl Cursor {
    /// Create a new cursor at position (0, 0)
    pub fn new() -> Self {
        Self { line: 0, column: 0 }
    }

    /// Create cursor at specified position
    pub fn at(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Move cursor up, staying on the first line
    pub fn move_up(&mut self, lines: usize) {
        self.line = self.line.saturating_sub(lines);
    }

    /// Move cursor down, stopping at `max_line`
    pub fn move_down(&mut self, lines: usize, max_line: usize) {
        self.line = min(self.line + lines, max_line);
    }

    /// Move cursor one char left, wrapping to the end of the previous line.
    ///
    /// After wrapping the column is `usize::MAX`; callers clamp it to the
    /// previous line's length.
    pub fn move_left(&mut self) {
        if self.column > 0 {
            self.column -= 1;
        } else if self.line > 0 {
            self.line -= 1;
            self.column = usize::MAX;
        }
    }

    /// Move cursor one char right, wrapping to the start of the next line
    pub fn move_right(&mut self, line_len: usize, max_line: usize) {
        if self.column < line_len {
            self.column += 1;
        } else if self.line < max_line {
            self.line += 1;
            self.column = 0;
        }
    }

    /// Clamp column to maximum line length
    pub fn clamp_column(&mut self, max_column: usize) {
        self.column = min(self.column, max_column);
    }
}
