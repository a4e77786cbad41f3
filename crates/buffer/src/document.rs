use anyhow::{Context, Result};
use ropey::Rope;
use std::io;
use std::path::Path;

use crate::Cursor;

/// Editable document: an ordered, never empty sequence of logical lines.
///
/// Lines are stored in a rope joined by `\n`, without a trailing terminator,
/// so the rope's line structure is exactly the document's line sequence.
#[derive(Debug, Clone)]
pub struct Document {
    rope: Rope,
    /// Unsaved edits exist
    modified: bool,
}

impl Document {
    /// Create a document holding a single empty line
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            modified: false,
        }
    }

    /// Build a document from file contents.
    ///
    /// One trailing `\n` is dropped, so `"a\nb\n"` becomes the lines
    /// `["a", "b"]`. A `\r` stays in the line it belongs to.
    pub fn from_text(contents: &str) -> Self {
        let body = contents.strip_suffix('\n').unwrap_or(contents);

        Self {
            rope: Rope::from_str(body),
            modified: false,
        }
    }

    /// Load a file.
    ///
    /// A missing file is not an error: it yields an empty document.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(contents) => Ok(Self::from_text(&contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::new()),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to read file: {}", path.display()))
            }
        }
    }

    /// Write every line followed by `\n`, replacing the file.
    ///
    /// Clears the modified flag only when the write succeeds.
    pub fn save_to<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut contents = String::with_capacity(self.rope.len_bytes() + 1);
        for chunk in self.rope.chunks() {
            contents.push_str(chunk);
        }
        contents.push('\n');

        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        self.modified = false;
        Ok(())
    }

    /// Number of logical lines (always at least 1)
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Line text without its terminator
    pub fn line(&self, index: usize) -> Option<String> {
        if index >= self.line_count() {
            return None;
        }
        let text = self.rope.line(index).to_string();
        Some(match text.strip_suffix('\n') {
            Some(stripped) => stripped.to_string(),
            None => text,
        })
    }

    /// Line length in chars, without the terminator. Zero for lines past the end.
    pub fn line_len(&self, index: usize) -> usize {
        if index >= self.line_count() {
            return 0;
        }
        let line = self.rope.line(index);
        let len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    /// Iterate over all lines without terminators
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.line_count()).filter_map(|idx| self.line(idx))
    }

    /// Whole document joined by `\n`, without a trailing terminator
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Insert a character at cursor position.
    ///
    /// Returns the cursor placed after the inserted character. A `'\n'`
    /// splits the line instead.
    pub fn insert_char(&mut self, cursor: &Cursor, ch: char) -> Result<Cursor> {
        if ch == '\n' {
            return self.split_line(cursor);
        }

        let char_idx = self.cursor_to_char_idx(cursor)?;
        self.rope.insert_char(char_idx, ch);
        self.modified = true;
        Ok(Cursor::at(cursor.line, cursor.column + 1))
    }

    /// Split the line at cursor position (Enter).
    ///
    /// Returns the cursor at the start of the new line.
    pub fn split_line(&mut self, cursor: &Cursor) -> Result<Cursor> {
        let char_idx = self.cursor_to_char_idx(cursor)?;
        self.rope.insert_char(char_idx, '\n');
        self.modified = true;
        Ok(Cursor::at(cursor.line + 1, 0))
    }

    /// Delete the character before cursor (Backspace).
    ///
    /// At column 0 the line is merged into the previous one. Returns the new
    /// cursor, or `None` at the very start of the document.
    pub fn delete_backward(&mut self, cursor: &Cursor) -> Result<Option<Cursor>> {
        let char_idx = self.cursor_to_char_idx(cursor)?;
        if char_idx == 0 {
            return Ok(None);
        }

        let new_cursor = if cursor.column > 0 {
            Cursor::at(cursor.line, cursor.column - 1)
        } else {
            Cursor::at(cursor.line - 1, self.line_len(cursor.line - 1))
        };

        self.rope.remove(char_idx - 1..char_idx);
        self.modified = true;
        Ok(Some(new_cursor))
    }

    /// Delete the character at cursor (Delete).
    ///
    /// At the end of a line the next line is merged into it. Returns false
    /// at the very end of the document.
    pub fn delete_forward(&mut self, cursor: &Cursor) -> Result<bool> {
        let char_idx = self.cursor_to_char_idx(cursor)?;
        if char_idx >= self.rope.len_chars() {
            return Ok(false);
        }

        self.rope.remove(char_idx..char_idx + 1);
        self.modified = true;
        Ok(true)
    }

    /// Check if buffer has unsaved edits
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Set modified flag
    pub fn set_modified(&mut self, modified: bool) {
        self.modified = modified;
    }

    /// Convert cursor position to char index in the rope
    fn cursor_to_char_idx(&self, cursor: &Cursor) -> Result<usize> {
        if cursor.line >= self.line_count() {
            anyhow::bail!("Line {} out of range", cursor.line);
        }
        let line_len = self.line_len(cursor.line);
        if cursor.column > line_len {
            anyhow::bail!(
                "Column {} out of range for line {} (length {})",
                cursor.column,
                cursor.line,
                line_len
            );
        }
        Ok(self.rope.line_to_char(cursor.line) + cursor.column)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::tempdir;

    fn lines_of(doc: &Document) -> Vec<String> {
        doc.lines().collect()
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::new();
        assert_eq!(doc.line_count(), 1);
        assert_eq!(doc.line(0).unwrap(), "");
        assert!(!doc.is_modified());
    }

    #[test]
    fn test_from_text_strips_single_trailing_newline() {
        assert_eq!(lines_of(&Document::from_text("a\nb\n")), vec!["a", "b"]);
        assert_eq!(lines_of(&Document::from_text("a\n\n")), vec!["a", ""]);
        assert_eq!(lines_of(&Document::from_text("a")), vec!["a"]);
        assert_eq!(lines_of(&Document::from_text("")), vec![""]);
    }

    #[test]
    fn test_carriage_return_is_not_a_line_break() {
        let doc = Document::from_text("a\rb\n");
        assert_eq!(doc.line_count(), 1);
        assert_eq!(doc.line_len(0), 3);
    }

    #[test]
    fn test_crlf_keeps_carriage_returns_in_lines() {
        let doc = Document::from_text("one\r\ntwo\r\n");
        assert_eq!(lines_of(&doc), vec!["one\r", "two\r"]);
    }

    #[test]
    fn test_insert_char() {
        let mut doc = Document::new();
        let cursor = doc.insert_char(&Cursor::at(0, 0), 'a').unwrap();
        assert_eq!(cursor, Cursor::at(0, 1));
        assert_eq!(doc.text(), "a");
        assert!(doc.is_modified());
    }

    #[test]
    fn test_insert_multibyte_char_counts_one_column() {
        let mut doc = Document::from_text("ab");
        let cursor = doc.insert_char(&Cursor::at(0, 1), 'ж').unwrap();
        assert_eq!(cursor, Cursor::at(0, 2));
        assert_eq!(doc.line(0).unwrap(), "aжb");
        assert_eq!(doc.line_len(0), 3);
    }

    #[test]
    fn test_split_line() {
        let mut doc = Document::from_text("hello");
        let cursor = doc.split_line(&Cursor::at(0, 2)).unwrap();
        assert_eq!(cursor, Cursor::at(1, 0));
        assert_eq!(lines_of(&doc), vec!["he", "llo"]);
    }

    #[test]
    fn test_split_line_at_end_adds_empty_line() {
        let mut doc = Document::from_text("hi");
        doc.split_line(&Cursor::at(0, 2)).unwrap();
        assert_eq!(lines_of(&doc), vec!["hi", ""]);
    }

    #[test]
    fn test_delete_backward_within_line() {
        let mut doc = Document::from_text("hello");
        let cursor = doc.delete_backward(&Cursor::at(0, 5)).unwrap().unwrap();
        assert_eq!(cursor, Cursor::at(0, 4));
        assert_eq!(doc.text(), "hell");
    }

    #[test]
    fn test_delete_backward_merges_lines() {
        let mut doc = Document::from_text("a\nb");
        let cursor = doc.delete_backward(&Cursor::at(1, 0)).unwrap().unwrap();
        assert_eq!(cursor, Cursor::at(0, 1));
        assert_eq!(lines_of(&doc), vec!["ab"]);
    }

    #[test]
    fn test_delete_backward_at_document_start_is_noop() {
        let mut doc = Document::from_text("abc");
        assert_eq!(doc.delete_backward(&Cursor::at(0, 0)).unwrap(), None);
        assert_eq!(doc.text(), "abc");
        assert!(!doc.is_modified());
    }

    #[test]
    fn test_delete_forward_within_line() {
        let mut doc = Document::from_text("hello");
        assert!(doc.delete_forward(&Cursor::at(0, 0)).unwrap());
        assert_eq!(doc.text(), "ello");
    }

    #[test]
    fn test_delete_forward_merges_next_line() {
        let mut doc = Document::from_text("ab\ncd");
        assert!(doc.delete_forward(&Cursor::at(0, 2)).unwrap());
        assert_eq!(lines_of(&doc), vec!["abcd"]);
    }

    #[test]
    fn test_delete_forward_at_document_end_is_noop() {
        let mut doc = Document::from_text("ab\ncd");
        assert!(!doc.delete_forward(&Cursor::at(1, 2)).unwrap());
        assert_eq!(lines_of(&doc), vec!["ab", "cd"]);
        assert!(!doc.is_modified());
    }

    #[test]
    fn test_deleting_everything_keeps_one_line() {
        let mut doc = Document::from_text("x\n");
        doc.delete_forward(&Cursor::at(0, 0)).unwrap();
        assert_eq!(doc.line_count(), 1);
        assert_eq!(doc.line(0).unwrap(), "");
    }

    #[test]
    fn test_out_of_range_cursor_is_error() {
        let mut doc = Document::from_text("ab");
        assert!(doc.insert_char(&Cursor::at(3, 0), 'x').is_err());
        assert!(doc.insert_char(&Cursor::at(0, 5), 'x').is_err());
        assert_eq!(doc.text(), "ab");
    }

    #[test]
    fn test_load_missing_file_starts_empty() {
        let dir = tempdir().unwrap();
        let doc = Document::load(dir.path().join("absent.txt")).unwrap();
        assert_eq!(lines_of(&doc), vec![""]);
        assert!(!doc.is_modified());
    }

    #[test]
    fn test_load_directory_is_error() {
        let dir = tempdir().unwrap();
        assert!(Document::load(dir.path()).is_err());
    }

    #[test]
    fn test_save_appends_newline_to_every_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");

        let mut doc = Document::from_text("line 1\nline 2");
        doc.set_modified(true);
        doc.save_to(&path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "line 1\nline 2\n");
        assert!(!doc.is_modified());
    }

    #[test]
    fn test_save_preserves_crlf() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dos.txt");

        let mut doc = Document::from_text("a\r\nb\r\n");
        doc.save_to(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\r\nb\r\n");
    }

    #[test]
    fn test_save_keeps_mixed_line_endings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mixed.txt");

        let mut doc = Document::from_text("a\r\nb\nc\n");
        doc.save_to(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\r\nb\nc\n");
    }

    #[test]
    fn test_trailing_carriage_return_survives_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cr.txt");

        let mut doc = Document::from_text("x\r");
        assert_eq!(lines_of(&doc), vec!["x\r"]);
        doc.save_to(&path).unwrap();

        let loaded = Document::load(&path).unwrap();
        assert_eq!(lines_of(&loaded), vec!["x\r"]);
    }

    #[test]
    fn test_save_failure_keeps_modified() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");

        let mut doc = Document::new();
        doc.insert_char(&Cursor::new(), 'x').unwrap();
        assert!(doc.save_to(&path).is_err());
        assert!(doc.is_modified());
    }

    #[test]
    fn test_save_load_cycle() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cycle.txt");

        let mut doc = Document::from_text("1\n\n3\n");
        doc.save_to(&path).unwrap();
        let loaded = Document::load(&path).unwrap();

        assert_eq!(lines_of(&loaded), lines_of(&doc));
        assert_eq!(lines_of(&loaded), vec!["1", "", "3"]);
    }

    proptest! {
        #[test]
        fn save_then_load_reproduces_lines(
            lines in prop::collection::vec("[a-z \t\r]{0,12}", 1..8)
        ) {
            let dir = tempdir().unwrap();
            let path = dir.path().join("prop.txt");

            let mut doc = Document::from_text(&format!("{}\n", lines.join("\n")));
            doc.save_to(&path).unwrap();
            let loaded = Document::load(&path).unwrap();

            prop_assert_eq!(lines_of(&loaded), lines);
        }
    }
}
