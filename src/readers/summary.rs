// src/readers/summary.rs

//! Processing statistics of one [`LogReader`] run.
//!
//! [`LogReader`]: crate::readers::logreader::LogReader

use crate::common::{Count, FPath, FileSz};

/// Accumulated statistics of loading one log file.
///
/// Built by [`LogReader::summary`] after a successful load, printed by
/// [`print_summary`] when the user passes `--summary`.
///
/// [`LogReader::summary`]: crate::readers::logreader::LogReader::summary
/// [`print_summary`]: crate::printer::summary::print_summary
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    /// file path as passed by the user
    pub path: FPath,
    /// size of the file in bytes
    pub filesz: FileSz,
    /// count of lines read, including blank lines
    pub count_lines: Count,
    /// count of blank lines skipped
    pub count_lines_blank: Count,
    /// count of parsed records
    pub count_records: Count,
}
