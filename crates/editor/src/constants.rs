//! Constants for the editor.

/// One megabyte in bytes.
pub const MEGABYTE: u64 = 1024 * 1024;

/// Application name shown in the header.
pub const APP_TITLE: &str = "✨ Mirage";

/// Smallest terminal that gets a full frame.
pub const MIN_SCREEN_WIDTH: u16 = 10;
pub const MIN_SCREEN_HEIGHT: u16 = 3;

/// Minimum digits reserved for line numbers in the gutter.
pub const MIN_GUTTER_DIGITS: usize = 3;

/// Marker appended to truncated header and footer text.
pub const ELLIPSIS: &str = "...";

/// Key-hint bar shown when no status message is active.
pub const KEY_HINTS: &str = " ^S Save | ^Q Quit | ^W Wrap | ^L Lines | F1 Help";

/// Footer warning while a second quit key is awaited.
pub const QUIT_WARNING: &str = "Unsaved changes! Press Ctrl+Q again to quit";

/// Status message lifetimes in rendered frames.
pub const INFO_FRAMES: u16 = 15;
pub const SUCCESS_FRAMES: u16 = 20;
pub const ERROR_FRAMES: u16 = 30;

/// Outer width of the help overlay box.
pub const HELP_WIDTH: u16 = 46;
