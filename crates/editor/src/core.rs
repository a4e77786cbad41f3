use std::path::{Path, PathBuf};

use mirage_buffer::{Cursor, Document};
use ratatui::layout::Rect;

use crate::{
    config::EditorConfig,
    file_io,
    input::Mode,
    layout::{self, FramePlan, ScreenLayout},
    status::StatusMessage,
    viewport::Viewport,
};

/// Editing session over a single file.
///
/// Owns the document, cursor, scroll state and display flags for the
/// lifetime of the session. Nothing is written to disk except by an
/// explicit save.
pub struct Editor {
    // === Core editing state ===
    /// Document being edited
    pub(crate) document: Document,
    /// Logical cursor
    pub(crate) cursor: Cursor,
    /// Vertical scroll
    pub(crate) viewport: Viewport,
    /// Session configuration
    pub(crate) config: EditorConfig,

    // === File ===
    /// Save target
    file_path: PathBuf,
    /// File name for the header
    title: String,

    // === UI state ===
    pub(crate) wrap_enabled: bool,
    pub(crate) show_line_numbers: bool,
    /// Footer message, dropped when its countdown runs out
    pub(crate) status: Option<StatusMessage>,
    /// Normal editing, help overlay or quit confirmation
    pub(crate) mode: Mode,
}

impl Editor {
    /// Open a file for editing.
    ///
    /// Never fails: a missing file starts an empty document, and an oversized
    /// or unreadable file starts an empty document with an error message.
    pub fn open(path: impl Into<PathBuf>, config: EditorConfig) -> Self {
        let path = path.into();

        let (document, status) = match Self::load_document(&path, &config) {
            Ok((document, status)) => (document, status),
            Err(e) => {
                log::error!("Failed to open {}: {:#}", path.display(), e);
                (Document::new(), Some(StatusMessage::error(format!("{:#}", e))))
            }
        };

        let mut editor = Self::from_document(document, path, config);
        editor.status = status;
        editor
    }

    /// Start a session on an in-memory document.
    pub fn from_document(
        document: Document,
        path: impl Into<PathBuf>,
        config: EditorConfig,
    ) -> Self {
        let file_path = path.into();
        let title = file_io::path_to_title(&file_path);

        Self {
            document,
            cursor: Cursor::new(),
            viewport: Viewport::new(),
            config,
            file_path,
            title,
            wrap_enabled: config.word_wrap,
            show_line_numbers: config.line_numbers,
            status: None,
            mode: Mode::Normal,
        }
    }

    fn load_document(
        path: &Path,
        config: &EditorConfig,
    ) -> anyhow::Result<(Document, Option<StatusMessage>)> {
        file_io::check_file_size(path, config.max_file_size)?;

        if !path.exists() {
            log::info!("New file: {}", path.display());
            return Ok((Document::new(), Some(StatusMessage::info("New file"))));
        }

        let document = Document::load(path)?;
        log::info!("Opened {} ({} lines)", path.display(), document.line_count());

        let status = file_io::is_file_readonly(path)
            .then(|| StatusMessage::info("File is read-only"));
        Ok((document, status))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Move the cursor, clamped into the document
    pub fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
        self.clamp_cursor();
    }

    /// File name shown in the header
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_modified(&self) -> bool {
        self.document.is_modified()
    }

    pub fn wrap_enabled(&self) -> bool {
        self.wrap_enabled
    }

    pub fn show_line_numbers(&self) -> bool {
        self.show_line_numbers
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn scroll(&self) -> usize {
        self.viewport.scroll()
    }

    /// Active footer message, if any
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }

    /// Count one rendered frame against the status message
    pub fn tick_status(&mut self) {
        if let Some(status) = self.status.as_mut() {
            if !status.tick() {
                self.status = None;
            }
        }
    }

    /// Write the document to its file.
    ///
    /// Failures become an error message; the modified flag stays set.
    pub fn save(&mut self) -> bool {
        match self.document.save_to(&self.file_path) {
            Ok(()) => {
                log::info!("Saved {}", self.file_path.display());
                self.set_status(StatusMessage::success(format!(
                    "Saved to {}",
                    self.file_path.display()
                )));
                true
            }
            Err(e) => {
                log::error!("Save failed: {:#}", e);
                self.set_status(StatusMessage::error(format!("Save failed: {:#}", e)));
                false
            }
        }
    }

    /// Clamp, map and scroll before drawing a frame.
    ///
    /// Brings the cursor back into the document, maps it to display space for
    /// the current terminal size, and scrolls just enough to keep it visible.
    pub fn prepare_frame(&mut self, area: Rect) -> FramePlan {
        self.clamp_cursor();

        let layout =
            ScreenLayout::compute(area, self.document.line_count(), self.show_line_numbers);
        let cursor = layout::logical_to_display(
            &self.document,
            &self.cursor,
            layout.text_width,
            self.wrap_enabled,
        );
        self.viewport.adjust(cursor.row, layout.visible_rows());

        FramePlan {
            layout,
            cursor,
            scroll: self.viewport.scroll(),
        }
    }
}
