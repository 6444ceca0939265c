// src/data/logrecord.rs

//! Implement [`LogRecord`], one parsed log entry.
//!
//! [`LogRecord`]: crate::data::logrecord::LogRecord

use crate::common::{LogFileError, ResultLogFile};

use std::fmt;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A severity level token. Case is preserved from the input.
pub type Level = String;

/// An ordered sequence of [`LogRecord`].
pub type LogRecords = Vec<LogRecord>;

/// Count of fields in a log line; `DATE TIME LEVEL MESSAGE`.
const FIELD_COUNT: usize = 4;

/// The field separator within a log line.
///
/// A single space, not arbitrary whitespace; consecutive spaces yield
/// empty fields instead of being collapsed.
const FIELD_SEP: char = ' ';

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// LogRecord
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One parsed log entry.
///
/// Created by [`from_line`] for each non-blank input line, immutable
/// thereafter. The `message` is the entire remainder of the line after the
/// third field separator, embedded spaces preserved verbatim.
///
/// [`from_line`]: LogRecord::from_line
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LogRecord {
    /// first field; date token
    pub date: String,
    /// second field; time token
    pub time: String,
    /// third field; severity level token, case preserved
    pub level: Level,
    /// remainder of the line after the third field separator
    pub message: String,
}

impl LogRecord {
    /// Parse one raw text line (trailing newline already stripped) into a
    /// `LogRecord`.
    ///
    /// The line is trimmed of leading and trailing whitespace then split on
    /// [`FIELD_SEP`] into at most [`FIELD_COUNT`] fields. A line yielding
    /// fewer fields fails with [`LogFileError::InvalidFormat`] carrying the
    /// offending line.
    pub fn from_line(line: &str) -> ResultLogFile<LogRecord> {
        let trimmed: &str = line.trim();
        let mut fields = trimmed.splitn(FIELD_COUNT, FIELD_SEP);
        match (fields.next(), fields.next(), fields.next(), fields.next()) {
            (Some(date), Some(time), Some(level), Some(message)) => {
                defñ!("line {:?} parsed; level {:?}", line, level);
                Ok(LogRecord {
                    date: String::from(date),
                    time: String::from(time),
                    level: Level::from(level),
                    message: String::from(message),
                })
            }
            _ => {
                defñ!("line {:?} has too few fields; return InvalidFormat", line);
                Err(LogFileError::InvalidFormat(String::from(line)))
            }
        }
    }
}

impl fmt::Display for LogRecord {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        write!(f, "{} {} {} {}", self.date, self.time, self.level, self.message)
    }
}
