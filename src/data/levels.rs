// src/data/levels.rs

//! Count [`LogRecord`]s per severity level and select records of one level.
//!
//! Counting is case-sensitive; levels `"ERROR"` and `"error"` are distinct
//! keys. Selection is case-insensitive; requesting `"Error"` matches both.
//! The asymmetry is long-standing observed behavior and is kept.
//!
//! [`LogRecord`]: crate::data::logrecord::LogRecord

use crate::common::Count;
use crate::data::logrecord::{Level, LogRecord};

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// LevelCounts
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Occurrence count per severity level, in first-seen order.
///
/// A `Vec` of pairs rather than a map; iteration order must be the order
/// levels were first seen, and the level cardinality of a log file is small
/// enough that linear scans win over hashing.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LevelCounts {
    counts: Vec<(Level, Count)>,
}

impl LevelCounts {
    pub fn new() -> LevelCounts {
        LevelCounts { counts: Vec::new() }
    }

    /// Add one occurrence of `level`. The comparison against known levels
    /// is case-sensitive; an unseen level is appended.
    pub fn increment(
        &mut self,
        level: &str,
    ) {
        match self
            .counts
            .iter_mut()
            .find(|(level_, _)| level_ == level)
        {
            Some((_, count)) => *count += 1,
            None => self
                .counts
                .push((Level::from(level), 1)),
        }
    }

    /// Occurrence count of exactly `level`, `0` if never seen.
    pub fn get(
        &self,
        level: &str,
    ) -> Count {
        self.counts
            .iter()
            .find(|(level_, _)| level_ == level)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    /// Iterate `(level, count)` pairs in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, (Level, Count)> {
        self.counts.iter()
    }

    /// Number of distinct levels.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// counting and selecting
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Count the records of each severity level.
///
/// Level keys are the exact `level` strings of the records; no case
/// normalization.
pub fn count_records_by_level(records: &[LogRecord]) -> LevelCounts {
    defn!("({} records)", records.len());
    let mut counts = LevelCounts::new();
    for record in records.iter() {
        counts.increment(&record.level);
    }
    defx!("return {} levels", counts.len());

    counts
}

/// Select the records whose level matches `level`, compared
/// case-insensitively (Unicode lowercasing), preserving record order.
pub fn filter_records_by_level<'a>(
    records: &'a [LogRecord],
    level: &str,
) -> Vec<&'a LogRecord> {
    defn!("({} records, level {:?})", records.len(), level);
    let level_lower: String = level.to_lowercase();
    let matched: Vec<&LogRecord> = records
        .iter()
        .filter(|record| record.level.to_lowercase() == level_lower)
        .collect();
    defx!("return {} records", matched.len());

    matched
}
