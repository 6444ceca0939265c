// src/tests/common.rs

//! Common helpers for tests.

use crate::common::FPath;
use crate::data::logrecord::LogRecord;
use crate::readers::helpers::path_to_fpath;

use std::io::Write;

use ::tempfile::NamedTempFile;

/// Small log file content used by several tests.
pub const LOG_DATA_3_LINES: &str = "\
2024-01-01 10:00:00 INFO Service started
2024-01-01 10:05:00 ERROR Disk full
2024-01-01 10:06:00 INFO Retrying
";

/// Create a `NamedTempFile` holding `data`.
///
/// The file is removed when the returned value drops.
pub fn create_temp_file(data: &str) -> NamedTempFile {
    let mut ntf = NamedTempFile::new().unwrap();
    ntf.write_all(data.as_bytes()).unwrap();

    ntf
}

/// The `FPath` of a `NamedTempFile`.
pub fn ntf_fpath(ntf: &NamedTempFile) -> FPath {
    path_to_fpath(ntf.path())
}

/// Shorthand `LogRecord` constructor for tests.
pub fn record(
    date: &str,
    time: &str,
    level: &str,
    message: &str,
) -> LogRecord {
    LogRecord {
        date: String::from(date),
        time: String::from(time),
        level: String::from(level),
        message: String::from(message),
    }
}
