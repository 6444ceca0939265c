// src/data/mod.rs

//! The `data` module is specialized data containers for log analysis.
//!
//! ## Definitions of data
//!
//! ### LogRecord
//!
//! A "log record" is one parsed log entry; a line of text that:
//!
//! * holds a date field, a time field, and a severity level field,
//!   each separated by a single space.
//! * ends with a free-form message; the remainder of the line, which may
//!   itself contain spaces.
//!
//! A "log record" is represented by a [`LogRecord`] and collected from a
//! file by a [`LogReader`].
//!
//! ### Level
//!
//! A "level" is the free-form severity token of a log record, e.g. `INFO`,
//! `ERROR`. It is not a closed enumeration; any token in the third field
//! position is a level.
//!
//! Per-level occurrence counts are held by a [`LevelCounts`].
//!
//! [`LogRecord`]: crate::data::logrecord::LogRecord
//! [`LogReader`]: crate::readers::logreader::LogReader
//! [`LevelCounts`]: crate::data::levels::LevelCounts

pub mod levels;
pub mod logrecord;
