//! Text editing operations at the cursor.

use crate::{core::Editor, status::StatusMessage};

impl Editor {
    /// Insert a printable character and advance the cursor.
    pub(crate) fn insert_char(&mut self, ch: char) {
        match self.document.insert_char(&self.cursor, ch) {
            Ok(cursor) => self.cursor = cursor,
            Err(e) => self.report_edit_error(e),
        }
    }

    /// Split the line at the cursor (Enter).
    pub(crate) fn insert_newline(&mut self) {
        match self.document.split_line(&self.cursor) {
            Ok(cursor) => self.cursor = cursor,
            Err(e) => self.report_edit_error(e),
        }
    }

    /// Backspace: no-op at the very start of the document.
    pub(crate) fn delete_backward(&mut self) {
        match self.document.delete_backward(&self.cursor) {
            Ok(Some(cursor)) => self.cursor = cursor,
            Ok(None) => {}
            Err(e) => self.report_edit_error(e),
        }
    }

    /// Delete: no-op at the very end of the document.
    pub(crate) fn delete_forward(&mut self) {
        if let Err(e) = self.document.delete_forward(&self.cursor) {
            self.report_edit_error(e);
        }
    }

    fn report_edit_error(&mut self, e: anyhow::Error) {
        log::error!("Edit at {:?} failed: {:#}", self.cursor, e);
        self.set_status(StatusMessage::error(format!("Edit failed: {}", e)));
        self.clamp_cursor();
    }
}
