// src/tests/datetime_tests.rs

//! tests for `datetime.rs` functions

#![allow(non_snake_case)]

use crate::data::datetime::{
    datetime_parse_filter_date,
    datetime_parse_record,
    ymdhms,
    DATETIME_MAX,
    DATETIME_MIN,
};

use ::more_asserts::assert_lt;
use ::test_case::test_case;

#[test]
fn test_datetime_parse_record_valid() {
    assert_eq!(
        datetime_parse_record("2024-04-01 10:35:09"),
        Some(ymdhms(2024, 4, 1, 10, 35, 9)),
    );
}

#[test_case(""; "empty")]
#[test_case("2024-04-01"; "date_only")]
#[test_case("10:35:09"; "time_only")]
#[test_case("2024-13-01 00:00:00"; "month_13")]
#[test_case("01.04.2024 10:35:09"; "wrong_date_separator")]
#[test_case("not a datetime"; "garbage")]
fn test_datetime_parse_record_invalid(value: &str) {
    assert_eq!(datetime_parse_record(value), None);
}

#[test]
fn test_datetime_parse_filter_date_is_midnight() {
    assert_eq!(
        datetime_parse_filter_date("01.04.2024"),
        Some(ymdhms(2024, 4, 1, 0, 0, 0)),
    );
}

#[test_case(""; "empty")]
#[test_case("01-04-2024"; "wrong_separator")]
#[test_case("2024.04.01"; "year_first")]
#[test_case("31.02.2024"; "nonexistent_day")]
#[test_case("01.04.2024 10:35:09"; "trailing_time")]
#[test_case("tomorrow"; "garbage")]
fn test_datetime_parse_filter_date_invalid(value: &str) {
    assert_eq!(datetime_parse_filter_date(value), None);
}

#[test]
fn test_DATETIME_MIN_MAX_bracket_every_parseable_instant() {
    let dt = datetime_parse_record("2024-04-01 10:35:09").unwrap();
    assert_lt!(DATETIME_MIN, dt);
    assert_lt!(dt, DATETIME_MAX);
}
