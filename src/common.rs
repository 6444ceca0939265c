// src/common.rs
//
// common imports, type aliases, and other globals (avoids circular imports)

use std::fmt;
use std::io::Error;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// file-handling
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub use std::fs::File;

/// `F`ake `Path` or `F`ile `Path`
pub type FPath = String;

/// File Size in bytes
pub type FileSz = u64;

/// A general-purpose counting type
pub type Count = u64;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// custom Error enum for loading a log file
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Ways loading a log file can fail.
///
/// The missing-file case is carried separately from other I/O failures
/// because the user-facing message differs; see the `Display`
/// implementation. A line that does not fit the expected log layout,
/// [`InvalidFormat`], aborts the entire load; there is no partial-success
/// mode.
///
/// [`InvalidFormat`]: LogFileError::InvalidFormat
#[derive(Debug)]
pub enum LogFileError {
    /// The passed file path did not resolve to an existing file.
    FileNotFound(FPath),
    /// The file exists but opening or reading it failed.
    Io(Error),
    /// A line had too few fields to be a log record.
    /// Holds the offending line.
    InvalidFormat(String),
}

impl fmt::Display for LogFileError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        match self {
            LogFileError::FileNotFound(path) => write!(f, "File not found: {}", path),
            LogFileError::Io(err) => write!(f, "Error reading file: {}", err),
            LogFileError::InvalidFormat(line) => write!(f, "Invalid log line format: {}", line),
        }
    }
}

impl std::error::Error for LogFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LogFileError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl LogFileError {
    /// Is this the missing-file case?
    pub const fn is_not_found(&self) -> bool {
        matches!(*self, LogFileError::FileNotFound(_))
    }

    /// Is this the malformed-line case?
    pub const fn is_invalid_format(&self) -> bool {
        matches!(*self, LogFileError::InvalidFormat(_))
    }
}

/// [`Result`] alias for fallible log-file operations.
///
/// [`Result`]: std::result::Result
pub type ResultLogFile<T> = Result<T, LogFileError>;
