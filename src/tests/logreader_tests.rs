// src/tests/logreader_tests.rs

//! tests for `logreader.rs` functions

#![allow(non_snake_case)]

use crate::common::AnalysisError;
use crate::data::datetime::ymdhms;
use crate::readers::logreader::read_records;
use crate::tests::common::{create_temp_file, ntf_fpath, record};

#[test]
fn test_read_records_well_formed_file() {
    let ntf = create_temp_file(
        "192.168.1.10:2024-04-01 10:35:09\n\
         10.0.0.1:2024-04-02 00:00:00\n",
    );
    let records = read_records(&ntf_fpath(&ntf)).unwrap();
    assert_eq!(
        records,
        vec![
            record("192.168.1.10", ymdhms(2024, 4, 1, 10, 35, 9)),
            record("10.0.0.1", ymdhms(2024, 4, 2, 0, 0, 0)),
        ],
    );
}

// the split is at the first ':'; the timestamp keeps its own colons
#[test]
fn test_read_records_splits_at_first_colon() {
    let ntf = create_temp_file("10.0.0.1:2024-04-01 10:35:09\n");
    let records = read_records(&ntf_fpath(&ntf)).unwrap();
    assert_eq!(records, vec![record("10.0.0.1", ymdhms(2024, 4, 1, 10, 35, 9))]);
}

#[test]
fn test_read_records_timestamp_surrounding_whitespace_trimmed() {
    let ntf = create_temp_file("10.0.0.1:  2024-04-01 10:35:09 \n");
    let records = read_records(&ntf_fpath(&ntf)).unwrap();
    assert_eq!(records, vec![record("10.0.0.1", ymdhms(2024, 4, 1, 10, 35, 9))]);
}

#[test]
fn test_read_records_skips_malformed_lines() {
    let ntf = create_temp_file(
        "line with no separator\n\
         not-an-address:2024-04-01 10:35:09\n\
         10.0.0.1:not a datetime\n\
         10.0.0.2:2024-04-01 10:35:09\n",
    );
    let records = read_records(&ntf_fpath(&ntf)).unwrap();
    assert_eq!(records, vec![record("10.0.0.2", ymdhms(2024, 4, 1, 10, 35, 9))]);
}

#[test]
fn test_read_records_empty_file() {
    let ntf = create_temp_file("");
    let records = read_records(&ntf_fpath(&ntf)).unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_read_records_missing_file_is_NotFound() {
    let path = String::from("/nonexistent/path/to/log.txt");
    let err = read_records(&path).unwrap_err();
    match err {
        AnalysisError::NotFound(ref path_) => assert_eq!(path_, &path),
        other => panic!("expected NotFound, got {:?}", other),
    }
}
