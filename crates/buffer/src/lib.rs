//! Document buffer for mirage.
//!
//! Stores the edited text as a rope of logical lines, tracks the logical
//! cursor, and splits lines into display segments for soft wrapping.

mod cursor;
mod document;
mod wrap;

pub use cursor::Cursor;
pub use document::Document;
pub use wrap::{segment_count, wrap_line};
