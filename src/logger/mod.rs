//! Internal logger module
//!
//! Lightweight leveled logging with a global runtime level and an optional
//! append-mode file sink. `error!` and `warn!` go to stderr, `info!` and
//! `debug!` to stdout; every emitted message is mirrored to the log file
//! when one is configured.

use std::fmt::Arguments;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{LazyLock, Mutex};

/// Logging levels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Error-level messages (always emitted).
    Error = 1,
    /// Warning-level messages (always emitted).
    Warn = 2,
    /// Info-level messages.
    Info = 3,
    /// Debug-level messages.
    Debug = 4,
}

/// Global storage for the current log level.
static LOG_LEVEL: AtomicU8 = AtomicU8::new(Level::Warn as u8);

/// Global storage for the log file handle.
static LOG_FILE: LazyLock<Mutex<Option<File>>> = LazyLock::new(|| Mutex::new(None));

/// Set the global log level.
pub fn set_level(level: Level) {
    LOG_LEVEL.store(level as u8, Ordering::SeqCst);
}

/// Parse and set level from a string (case-insensitive). Returns true on success.
#[must_use]
pub fn set_level_from_str(level: &str) -> bool {
    match level.to_ascii_lowercase().as_str() {
        "error" | "err" => set_level(Level::Error),
        "warn" | "warning" => set_level(Level::Warn),
        "info" => set_level(Level::Info),
        "debug" => set_level(Level::Debug),
        _ => return false,
    }
    true
}

/// Returns the current global log level.
#[must_use]
pub fn current_level() -> Level {
    match LOG_LEVEL.load(Ordering::SeqCst) {
        1 => Level::Error,
        3 => Level::Info,
        4 => Level::Debug,
        _ => Level::Warn,
    }
}

/// Open `path` for appending and route subsequent log messages to it as
/// well. Returns true on success.
pub fn init_file_logging(path: &Path) -> bool {
    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => {
            if let Ok(mut guard) = LOG_FILE.lock() {
                *guard = Some(file);
                return true;
            }
            false
        }
        Err(_) => false,
    }
}

fn write_to_file(tag: &str, args: &Arguments<'_>) {
    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(file) = guard.as_mut() {
            let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
            let _ = writeln!(file, "[{timestamp}] {tag} {args}");
        }
    }
}

/// Emit a message at the given level. Used by the logging macros; prefer
/// those at call sites.
pub fn log(level: Level, args: Arguments<'_>) {
    if (level as u8) > LOG_LEVEL.load(Ordering::SeqCst) {
        return;
    }

    match level {
        Level::Error => {
            eprintln!("[ERROR] {args}");
            write_to_file("[ERROR]", &args);
        }
        Level::Warn => {
            eprintln!("[WARN] {args}");
            write_to_file("[WARN]", &args);
        }
        Level::Info => {
            println!("[INFO] {args}");
            write_to_file("[INFO]", &args);
        }
        Level::Debug => {
            println!("[DEBUG] {args}");
            write_to_file("[DEBUG]", &args);
        }
    }
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::Level::Error, format_args!($($arg)*))
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::Level::Warn, format_args!($($arg)*))
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::Level::Info, format_args!($($arg)*))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::Level::Debug, format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_level_from_str() {
        assert!(set_level_from_str("debug"));
        assert_eq!(current_level(), Level::Debug);

        assert!(set_level_from_str("WARN"));
        assert_eq!(current_level(), Level::Warn);

        assert!(!set_level_from_str("nope"));
    }

    #[test]
    fn test_level_ordering() {
        assert!(Level::Error < Level::Warn);
        assert!(Level::Warn < Level::Info);
        assert!(Level::Info < Level::Debug);
    }
}
