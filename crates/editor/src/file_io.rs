//! File checks performed before a document is opened.

use std::path::Path;

use anyhow::Result;

use crate::constants::MEGABYTE;

/// Reject files larger than `max_size` bytes.
///
/// Missing files and metadata errors pass; loading reports them.
pub(crate) fn check_file_size(path: &Path, max_size: u64) -> Result<()> {
    match std::fs::metadata(path) {
        Ok(metadata) if metadata.is_file() && metadata.len() > max_size => {
            anyhow::bail!(
                "File is too large to open ({:.1} MB, limit {} MB)",
                metadata.len() as f64 / MEGABYTE as f64,
                max_size / MEGABYTE
            )
        }
        Ok(_) => Ok(()),
        Err(e) => {
            log::debug!("Metadata check skipped for {}: {}", path.display(), e);
            Ok(())
        }
    }
}

/// Check if file is read-only.
pub(crate) fn is_file_readonly(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|m| m.permissions().readonly())
        .unwrap_or(false)
}

/// Extract filename from path for title display.
pub(crate) fn path_to_title(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
