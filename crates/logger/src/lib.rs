//! Logging infrastructure for mirage.
//!
//! The editor owns the terminal while it runs, so nothing may be printed to
//! stdout or stderr. This crate installs a `log` backend that appends
//! timestamped lines to a file instead.

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::PathBuf;
use std::sync::Mutex;

/// Log level accepted in configuration and on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Convert log level to string
    pub fn to_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    /// Matching filter for the `log` facade
    pub fn to_filter(self) -> LevelFilter {
        match self {
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Unknown log level: {}", s)),
        }
    }
}

/// File-backed `log` implementation
#[derive(Debug)]
pub struct FileLogger {
    /// Minimum level to record
    min_level: LevelFilter,
    /// Open log file; `None` when the file could not be created
    file: Mutex<Option<File>>,
    /// Log file path
    file_path: PathBuf,
}

impl FileLogger {
    /// Create the logger, truncating the log file.
    pub fn new(file_path: PathBuf, min_level: LogLevel) -> Self {
        if let Some(parent) = file_path.parent() {
            let _ = fs::create_dir_all(parent);
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&file_path)
            .ok()
            .map(|mut file| {
                let _ = writeln!(file, "=== Mirage Log Start ===");
                file
            });

        Self {
            min_level: min_level.to_filter(),
            file: Mutex::new(file),
            file_path,
        }
    }

    /// Path the logger writes to
    #[cfg(test)]
    fn file_path(&self) -> &std::path::Path {
        &self.file_path
    }

    fn format_line(record: &Record<'_>) -> String {
        format!(
            "[{}] {} {}: {}",
            Local::now().format("%H:%M:%S"),
            level_label(record.level()),
            record.target(),
            record.args()
        )
    }
}

fn level_label(level: Level) -> &'static str {
    match level {
        Level::Trace | Level::Debug => LogLevel::Debug.to_str(),
        Level::Info => LogLevel::Info.to_str(),
        Level::Warn => LogLevel::Warn.to_str(),
        Level::Error => LogLevel::Error.to_str(),
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.min_level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = Self::format_line(record);
        if let Ok(mut guard) = self.file.lock() {
            if let Some(file) = guard.as_mut() {
                let _ = writeln!(file, "{}", line);
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut guard) = self.file.lock() {
            if let Some(file) = guard.as_mut() {
                let _ = file.flush();
            }
        }
    }
}

/// Install the file logger as the global `log` backend.
///
/// Must be called once at application startup. Subsequent calls are ignored.
pub fn init(file_path: PathBuf, min_level: LogLevel) {
    let logger = FileLogger::new(file_path, min_level);
    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(min_level.to_filter());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn record_at(logger: &FileLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .args(format_args!("{}", message))
                .level(level)
                .target("mirage::test")
                .build(),
        );
        logger.flush();
    }

    #[test]
    fn test_parse_levels() {
        assert_eq!("debug".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert_eq!("WARNING".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_writes_formatted_line() {
        let dir = tempdir().unwrap();
        let logger = FileLogger::new(dir.path().join("logs").join("m.log"), LogLevel::Info);

        record_at(&logger, Level::Error, "save failed");

        let content = fs::read_to_string(logger.file_path()).unwrap();
        assert!(content.starts_with("=== Mirage Log Start ==="));
        assert!(content.contains("] ERROR mirage::test: save failed"));
    }

    #[test]
    fn test_filters_below_min_level() {
        let dir = tempdir().unwrap();
        let logger = FileLogger::new(dir.path().join("m.log"), LogLevel::Warn);

        record_at(&logger, Level::Info, "ignored");
        record_at(&logger, Level::Warn, "kept");

        let content = fs::read_to_string(logger.file_path()).unwrap();
        assert!(!content.contains("ignored"));
        assert!(content.contains("] WARN mirage::test: kept"));
    }
}
