// src/tests/common.rs

//! Helpers shared by the tests under `src/tests/`.

use crate::common::FPath;
use crate::data::datetime::{ymdhms, DateTimeL};
use crate::data::record::{Address, LogRecord};

use std::io::Write;

use ::tempfile::NamedTempFile;

/// Parse a dotted-quad literal; panics on bad input (test helper).
pub fn addr(value: &str) -> Address {
    value.parse::<Address>().unwrap()
}

/// A `LogRecord` from literal parts; panics on bad input (test helper).
pub fn record(
    address: &str,
    dt: DateTimeL,
) -> LogRecord {
    LogRecord::new(addr(address), dt)
}

/// An arbitrary daytime instant used where the exact value is irrelevant.
pub fn dt_noon_2024_04_02() -> DateTimeL {
    ymdhms(2024, 4, 2, 12, 0, 0)
}

/// Create a `NamedTempFile` holding `data`.
pub fn create_temp_file(data: &str) -> NamedTempFile {
    let mut ntf = NamedTempFile::new().unwrap();
    ntf.write_all(data.as_bytes()).unwrap();
    ntf.flush().unwrap();

    ntf
}

/// The `FPath` of a `NamedTempFile`.
pub fn ntf_fpath(ntf: &NamedTempFile) -> FPath {
    ntf.path().to_str().unwrap().to_owned()
}
