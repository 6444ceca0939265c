// src/printer/summary.rs

//! CLI option `--summary` printing functions.
//! Only used by `lla.rs`.

use crate::data::levels::LevelCounts;
use crate::readers::summary::Summary;

use std::time::Instant;

use ::chrono::Local;
use ::si_trace_print::defñ;

/// For printing various levels of indentation.
const OPT_SUMMARY_PRINT_INDENT1: &str = "  ";

/// datetime format for printing of datetime
const DATETIMEFMT: &str = "%Y-%m-%d %H:%M:%S %:z";

/// Print a summary of the processing run to stderr.
///
/// Printed to stderr so the stdout report remains clean for piping.
pub fn print_summary(
    summary: &Summary,
    counts: &LevelCounts,
    start_instant: Instant,
) {
    defñ!();
    let datetime_now = Local::now().format(DATETIMEFMT);
    eprintln!("Summary:");
    eprintln!("{}File: {:?} (size {} bytes)", OPT_SUMMARY_PRINT_INDENT1, summary.path, summary.filesz);
    eprintln!(
        "{}Lines: {} ({} blank, skipped)",
        OPT_SUMMARY_PRINT_INDENT1, summary.count_lines, summary.count_lines_blank,
    );
    eprintln!("{}Log Records: {}", OPT_SUMMARY_PRINT_INDENT1, summary.count_records);
    eprintln!("{}Distinct Levels: {}", OPT_SUMMARY_PRINT_INDENT1, counts.len());
    eprintln!("{}Datetime Now: {}", OPT_SUMMARY_PRINT_INDENT1, datetime_now);
    eprintln!(
        "{}Program Run Time: {:.3} (s)",
        OPT_SUMMARY_PRINT_INDENT1,
        start_instant.elapsed().as_secs_f64(),
    );
}
