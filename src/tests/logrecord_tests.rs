// src/tests/logrecord_tests.rs

//! tests for `logrecord.rs` functions

use crate::data::logrecord::LogRecord;

use ::test_case::test_case;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test_case(
    "2024-01-01 10:00:00 INFO Service started",
    "2024-01-01", "10:00:00", "INFO", "Service started";
    "typical line"
)]
#[test_case("D T L M", "D", "T", "L", "M"; "minimal four fields")]
#[test_case("a b c d e f", "a", "b", "c", "d e f"; "message keeps spaces")]
#[test_case("  a b c d  ", "a", "b", "c", "d"; "surrounding whitespace trimmed")]
#[test_case("a b c  d", "a", "b", "c", " d"; "double separator preserved in message")]
#[test_case("2024-01-01 10:00 error lowercase kept", "2024-01-01", "10:00", "error", "lowercase kept"; "level case preserved")]
fn test_from_line(
    line: &str,
    date: &str,
    time: &str,
    level: &str,
    message: &str,
) {
    let record: LogRecord = LogRecord::from_line(line).unwrap();
    assert_eq!(record.date, date);
    assert_eq!(record.time, time);
    assert_eq!(record.level, level);
    assert_eq!(record.message, message);
}

#[test_case(""; "empty line")]
#[test_case("     "; "whitespace only")]
#[test_case("one"; "one field")]
#[test_case("one two"; "two fields")]
#[test_case("one two three"; "three fields")]
#[test_case("a\tb c d"; "tabs are not field separators")]
fn test_from_line_invalid(line: &str) {
    let result = LogRecord::from_line(line);
    let err = result.unwrap_err();
    assert!(err.is_invalid_format(), "expected InvalidFormat error, got {:?}", err);
}

#[test]
fn test_from_line_invalid_message_carries_line() {
    let err = LogRecord::from_line("one two three").unwrap_err();
    assert_eq!(err.to_string(), "Invalid log line format: one two three");
}

#[test]
fn test_display() {
    let record: LogRecord = LogRecord::from_line("2024-01-01 10:05:00 ERROR Disk full").unwrap();
    assert_eq!(record.to_string(), "2024-01-01 10:05:00 ERROR Disk full");
}
