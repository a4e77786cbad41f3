//! Editor session for mirage.
//!
//! Maps the logical document onto the screen (soft wrapping, gutter,
//! scrolling), dispatches logical input events through a small mode machine,
//! and renders each frame into a ratatui buffer.

mod config;
pub mod constants;
mod core;
mod file_io;
mod input;
pub mod layout;
mod navigation;
pub mod rendering;
pub mod status;
mod text_editing;
pub mod viewport;

// Re-export main types
pub use config::EditorConfig;
pub use crate::core::Editor;
pub use input::{Flow, Mode};
pub use layout::{DisplayPos, DisplaySegment, FramePlan, ScreenLayout};
pub use status::{Severity, StatusMessage};
pub use viewport::Viewport;
