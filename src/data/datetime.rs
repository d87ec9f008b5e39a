// src/data/datetime.rs

//! Datetime type and chrono [`strftime`] parse patterns.
//!
//! Two fixed patterns occur in this program:
//! - [`DTP_RECORD`] — the timestamp of one log record,
//!   e.g. `2024-04-01 10:35:09`
//! - [`DTP_FILTER_DATE`] — the date accepted by the `--time-start` and
//!   `--time-end` parameters, e.g. `01.04.2024`, interpreted as midnight
//!   of that day
//!
//! [`strftime`]: https://docs.rs/chrono/0.4.40/chrono/format/strftime/index.html

#![allow(non_camel_case_types)]

#[doc(hidden)]
pub use ::chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Crate `chrono` [`strftime`] formatting pattern, passed to
/// [`NaiveDateTime::parse_from_str`].
///
/// [`strftime`]: https://docs.rs/chrono/0.4.40/chrono/format/strftime/index.html
/// [`NaiveDateTime::parse_from_str`]: https://docs.rs/chrono/0.4.40/chrono/naive/struct.NaiveDateTime.html#method.parse_from_str
pub type DateTimePattern_str = str;

/// The chrono datetime type used throughout _iplalib_.
///
/// Log timestamps carry no timezone offset so the "naive" chrono type is the
/// honest representation.
pub type DateTimeL = NaiveDateTime;
pub type DateTimeLOpt = Option<DateTimeL>;

/// Pattern of the timestamp within one log record line.
pub const DTP_RECORD: &DateTimePattern_str = "%Y-%m-%d %H:%M:%S";

/// Pattern of a `--time-start`/`--time-end` value; zero-padded day and month.
pub const DTP_FILTER_DATE: &DateTimePattern_str = "%d.%m.%Y";

/// Human-readable rendition of [`DTP_FILTER_DATE`] for help and error text.
pub const DTP_FILTER_DATE_HUMAN: &str = "DD.MM.YYYY";

/// The minimum representable instant; earlier than any log timestamp.
pub const DATETIME_MIN: DateTimeL = NaiveDateTime::MIN;

/// The maximum representable instant; later than any log timestamp.
pub const DATETIME_MAX: DateTimeL = NaiveDateTime::MAX;

/// Parse the timestamp of one log record line, pattern [`DTP_RECORD`].
pub fn datetime_parse_record(value: &str) -> DateTimeLOpt {
    NaiveDateTime::parse_from_str(value, DTP_RECORD).ok()
}

/// Parse a `--time-start`/`--time-end` value, pattern [`DTP_FILTER_DATE`],
/// as midnight of that day.
pub fn datetime_parse_filter_date(value: &str) -> DateTimeLOpt {
    NaiveDate::parse_from_str(value, DTP_FILTER_DATE)
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// Build a `DateTimeL` from year, month, day, hour, minute, second.
///
/// Panics on out-of-range values so only call with known-good values
/// (intended for tests).
#[doc(hidden)]
pub fn ymdhms(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    min: u32,
    sec: u32,
) -> DateTimeL {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, min, sec)
        .unwrap()
}
