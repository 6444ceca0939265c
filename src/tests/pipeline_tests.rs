// src/tests/pipeline_tests.rs

//! end-to-end tests of load → count → filter → rendered rows

use crate::data::levels::{count_records_by_level, filter_records_by_level};
use crate::printer::printers::{
    format_count_row,
    format_detail_row,
    format_details_header,
    format_no_records_found,
};
use crate::readers::logreader::LogReader;
use crate::tests::common::{create_temp_file, ntf_fpath, LOG_DATA_3_LINES};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn test_level_requested_with_matches() {
    let ntf = create_temp_file(LOG_DATA_3_LINES);
    let logreader = LogReader::new(ntf_fpath(&ntf)).unwrap();

    let counts = count_records_by_level(logreader.records());
    let rows: Vec<String> = counts
        .iter()
        .map(|(level, count)| format_count_row(level, *count))
        .collect();
    assert_eq!(
        rows,
        vec![
            String::from("INFO             | 2"),
            String::from("ERROR            | 1"),
        ],
        "counts rows must list INFO then ERROR, first-seen order",
    );

    let matched = filter_records_by_level(logreader.records(), "ERROR");
    assert_eq!(matched.len(), 1);
    assert_eq!(format_details_header("ERROR"), "Деталі логів для рівня 'ERROR':");
    assert_eq!(format_detail_row(matched[0]), "2024-01-01 10:05:00 - Disk full");
}

#[test]
fn test_level_requested_without_matches() {
    let ntf = create_temp_file(LOG_DATA_3_LINES);
    let logreader = LogReader::new(ntf_fpath(&ntf)).unwrap();

    let matched = filter_records_by_level(logreader.records(), "WARNING");
    assert!(matched.is_empty(), "WARNING must match no record; the no-match message is printed");
    assert_eq!(format_no_records_found("WARNING"), "No logs found for level 'WARNING'.");
}

#[test]
fn test_mixed_case_counts_and_filter_asymmetry() {
    let data = "\
2024-01-01 10:00 ERROR a
2024-01-01 10:01 error b
";
    let ntf = create_temp_file(data);
    let logreader = LogReader::new(ntf_fpath(&ntf)).unwrap();

    // counted apart…
    let counts = count_records_by_level(logreader.records());
    assert_eq!(counts.get("ERROR"), 1);
    assert_eq!(counts.get("error"), 1);
    // …but filtered together
    let matched = filter_records_by_level(logreader.records(), "Error");
    assert_eq!(matched.len(), 2);
}
