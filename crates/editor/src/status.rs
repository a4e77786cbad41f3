//! Transient status messages shown in the footer.

use crate::constants::{ERROR_FRAMES, INFO_FRAMES, SUCCESS_FRAMES};

/// Message severity, selects footer style and lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    /// Number of frames a message of this severity stays visible
    pub fn frames(self) -> u16 {
        match self {
            Severity::Info => INFO_FRAMES,
            Severity::Success => SUCCESS_FRAMES,
            Severity::Error => ERROR_FRAMES,
        }
    }
}

/// Footer message with a countdown in rendered frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    text: String,
    severity: Severity,
    frames_left: u16,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            text: text.into(),
            severity,
            frames_left: severity.frames(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Info)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Error)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn frames_left(&self) -> u16 {
        self.frames_left
    }

    /// Count one rendered frame. Returns false once the message has expired.
    pub fn tick(&mut self) -> bool {
        self.frames_left = self.frames_left.saturating_sub(1);
        self.frames_left > 0
    }
}
