// src/readers/logreader.rs

//! Implement [`LogReader`], the file loader.
//!
//! [`LogReader`]: crate::readers::logreader::LogReader

use crate::common::{Count, FPath, File, FileSz, LogFileError, ResultLogFile};
use crate::data::logrecord::{LogRecord, LogRecords};
use crate::readers::helpers::{fpath_to_path, path_filesz};
use crate::readers::summary::Summary;

use std::fmt;
use std::io::{BufRead, BufReader, ErrorKind};

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};
use ::more_asserts::debug_assert_ge;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// LogReader
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A `LogReader` reads one log file and owns the parsed [`LogRecords`].
///
/// The entire file is consumed during [`new`]; the file handle is dropped
/// before `new` returns, on success and on failure. Loading is strict:
/// a malformed line fails the whole load rather than being skipped.
///
/// [`LogRecords`]: crate::data::logrecord::LogRecords
/// [`new`]: LogReader::new
pub struct LogReader {
    /// file path as passed by the user
    path: FPath,
    /// size of the file in bytes, `0` if it could not be queried
    filesz: FileSz,
    /// all records of the file, in file order
    records: LogRecords,
    /// count of lines read, including blank lines
    count_lines: Count,
    /// count of blank (whitespace-only) lines, skipped without parsing
    count_lines_blank: Count,
}

impl fmt::Debug for LogReader {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.debug_struct("LogReader")
            .field("path", &self.path)
            .field("filesz", &self.filesz)
            .field("count_lines", &self.count_lines)
            .field("count_lines_blank", &self.count_lines_blank)
            .field("records", &self.records.len())
            .finish()
    }
}

impl LogReader {
    /// Open the file at `path` and load every non-blank line as a
    /// [`LogRecord`].
    ///
    /// A missing file returns [`LogFileError::FileNotFound`]. Any other
    /// open or read failure returns [`LogFileError::Io`]. A line with too
    /// few fields returns [`LogFileError::InvalidFormat`] and discards
    /// everything loaded so far.
    ///
    /// [`LogRecord`]: crate::data::logrecord::LogRecord
    pub fn new(path: FPath) -> ResultLogFile<LogReader> {
        defn!("({:?})", path);
        let file: File = match File::open(fpath_to_path(&path)) {
            Ok(val) => val,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                defx!("File::open({:?}) error NotFound", path);
                return Err(LogFileError::FileNotFound(path));
            }
            Err(err) => {
                defx!("File::open({:?}) error {}", path, err);
                return Err(LogFileError::Io(err));
            }
        };
        let filesz: FileSz = path_filesz(fpath_to_path(&path)).unwrap_or(0);
        let mut records = LogRecords::new();
        let mut count_lines: Count = 0;
        let mut count_lines_blank: Count = 0;
        let reader = BufReader::new(file);
        for line_result in reader.lines() {
            let line: String = match line_result {
                Ok(val) => val,
                Err(err) => {
                    defx!("reader.lines() error {}", err);
                    return Err(LogFileError::Io(err));
                }
            };
            count_lines += 1;
            if line.trim().is_empty() {
                defo!("line {} is blank, skip", count_lines);
                count_lines_blank += 1;
                continue;
            }
            let record: LogRecord = LogRecord::from_line(&line)?;
            records.push(record);
        }
        debug_assert_ge!(count_lines, count_lines_blank, "blank line count exceeds line count");
        defx!(
            "return LogReader; {} lines, {} blank, {} records",
            count_lines,
            count_lines_blank,
            records.len()
        );

        Ok(LogReader {
            path,
            filesz,
            records,
            count_lines,
            count_lines_blank,
        })
    }

    /// All records of the file, in file order.
    pub fn records(&self) -> &LogRecords {
        &self.records
    }

    pub fn path(&self) -> &FPath {
        &self.path
    }

    pub fn filesz(&self) -> FileSz {
        self.filesz
    }

    pub fn count_lines(&self) -> Count {
        self.count_lines
    }

    pub fn count_lines_blank(&self) -> Count {
        self.count_lines_blank
    }

    pub fn count_records(&self) -> Count {
        self.records.len() as Count
    }

    /// Statistics of this load, for `--summary` printing.
    pub fn summary(&self) -> Summary {
        defñ!();

        Summary {
            path: self.path.clone(),
            filesz: self.filesz,
            count_lines: self.count_lines,
            count_lines_blank: self.count_lines_blank,
            count_records: self.count_records(),
        }
    }
}
