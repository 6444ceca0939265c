// src/tests/levels_tests.rs

//! tests for `levels.rs` functions

use crate::data::levels::{count_records_by_level, filter_records_by_level, LevelCounts};
use crate::data::logrecord::{LogRecord, LogRecords};
use crate::tests::common::record;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

fn records_mixed_case() -> LogRecords {
    vec![
        record("2024-01-01", "10:00", "ERROR", "a"),
        record("2024-01-01", "10:01", "error", "b"),
    ]
}

fn records_four() -> LogRecords {
    vec![
        record("2024-01-01", "10:00", "INFO", "one"),
        record("2024-01-01", "10:01", "ERROR", "two"),
        record("2024-01-01", "10:02", "INFO", "three"),
        record("2024-01-01", "10:03", "DEBUG", "four"),
    ]
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn test_levelcounts_new_is_empty() {
    let counts = LevelCounts::new();
    assert!(counts.is_empty());
    assert_eq!(counts.len(), 0);
}

#[test]
fn test_levelcounts_increment_and_get() {
    let mut counts = LevelCounts::new();
    counts.increment("INFO");
    counts.increment("INFO");
    counts.increment("ERROR");
    assert_eq!(counts.get("INFO"), 2);
    assert_eq!(counts.get("ERROR"), 1);
}

#[test]
fn test_levelcounts_get_unseen_is_zero() {
    let mut counts = LevelCounts::new();
    counts.increment("INFO");
    assert_eq!(counts.get("WARNING"), 0);
}

#[test]
fn test_count_case_sensitive() {
    let counts = count_records_by_level(&records_mixed_case());
    assert_eq!(counts.len(), 2, "ERROR and error must count as distinct keys");
    assert_eq!(counts.get("ERROR"), 1);
    assert_eq!(counts.get("error"), 1);
}

#[test]
fn test_count_first_seen_order() {
    let counts = count_records_by_level(&records_four());
    let pairs: Vec<(String, u64)> = counts
        .iter()
        .cloned()
        .collect();
    assert_eq!(
        pairs,
        vec![
            (String::from("INFO"), 2),
            (String::from("ERROR"), 1),
            (String::from("DEBUG"), 1),
        ],
    );
}

#[test]
fn test_count_no_records() {
    let counts = count_records_by_level(&[]);
    assert!(counts.is_empty());
}

#[test]
fn test_filter_case_insensitive() {
    let records = records_mixed_case();
    let matched: Vec<&LogRecord> = filter_records_by_level(&records, "Error");
    assert_eq!(matched.len(), 2, "filtering must match levels case-insensitively");
    assert_eq!(matched[0].message, "a");
    assert_eq!(matched[1].message, "b");
}

#[test]
fn test_filter_preserves_order() {
    let records = records_four();
    let matched: Vec<&LogRecord> = filter_records_by_level(&records, "info");
    let messages: Vec<&str> = matched
        .iter()
        .map(|r| r.message.as_str())
        .collect();
    assert_eq!(messages, vec!["one", "three"]);
}

#[test]
fn test_filter_no_match() {
    let records = records_four();
    let matched: Vec<&LogRecord> = filter_records_by_level(&records, "WARNING");
    assert!(matched.is_empty());
}
