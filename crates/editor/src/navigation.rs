//! Cursor movement over logical lines.

use crate::core::Editor;

impl Editor {
    /// Bring the cursor back into the document.
    ///
    /// Runs before every frame and after every input, since line merges can
    /// leave the cursor past the end.
    pub fn clamp_cursor(&mut self) {
        let max_line = self.document.line_count().saturating_sub(1);
        self.cursor.line = self.cursor.line.min(max_line);
        self.clamp_column();
    }

    fn clamp_column(&mut self) {
        let len = self.document.line_len(self.cursor.line);
        self.cursor.clamp_column(len);
    }

    fn max_line(&self) -> usize {
        self.document.line_count().saturating_sub(1)
    }

    pub(crate) fn move_up(&mut self) {
        self.cursor.move_up(1);
        self.clamp_column();
    }

    pub(crate) fn move_down(&mut self) {
        self.cursor.move_down(1, self.max_line());
        self.clamp_column();
    }

    pub(crate) fn move_left(&mut self) {
        self.cursor.move_left();
        // Wrapping to the previous line leaves the column past its end
        self.clamp_column();
    }

    pub(crate) fn move_right(&mut self) {
        let len = self.document.line_len(self.cursor.line);
        self.cursor.move_right(len, self.max_line());
    }

    pub(crate) fn move_to_line_start(&mut self) {
        self.cursor.column = 0;
    }

    pub(crate) fn move_to_line_end(&mut self) {
        self.cursor.column = self.document.line_len(self.cursor.line);
    }
}
