// src/tests/results_tests.rs

//! tests for `results.rs` functions

#![allow(non_snake_case)]

use crate::analysis::counter::AddressCounts;
use crate::printer::results::write_results;
use crate::tests::common::{addr, create_temp_file, ntf_fpath};

fn counts(pairs: &[(&str, u64)]) -> AddressCounts {
    pairs
        .iter()
        .map(|(address, count)| (addr(address), *count))
        .collect()
}

#[test]
fn test_write_results_one_line_per_address_sorted() {
    let ntf = create_temp_file("");
    let path = ntf_fpath(&ntf);
    write_results(
        &path,
        &counts(&[("10.0.0.10", 3), ("9.0.0.1", 2), ("10.0.0.2", 1)]),
    )
    .unwrap();
    let content = std::fs::read_to_string(path.as_str()).unwrap();
    // sorted by address octets, not lexicographically
    assert_eq!(content, "9.0.0.1 - 2\n10.0.0.2 - 1\n10.0.0.10 - 3\n");
}

#[test]
fn test_write_results_overwrites_existing_content() {
    let ntf = create_temp_file("stale content that must disappear\n");
    let path = ntf_fpath(&ntf);
    write_results(&path, &counts(&[("10.0.0.1", 1)])).unwrap();
    let content = std::fs::read_to_string(path.as_str()).unwrap();
    assert_eq!(content, "10.0.0.1 - 1\n");
}

#[test]
fn test_write_results_empty_counts_empty_file() {
    let ntf = create_temp_file("stale\n");
    let path = ntf_fpath(&ntf);
    write_results(&path, &AddressCounts::new()).unwrap();
    let content = std::fs::read_to_string(path.as_str()).unwrap();
    assert!(content.is_empty());
}
