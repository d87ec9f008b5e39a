// src/readers/logreader.rs

//! Read [`LogRecord`s] from a line-oriented log file of
//! `<ipv4-address>:<timestamp>` records.
//!
//! [`LogRecord`s]: crate::data::record::LogRecord

use crate::common::{AnalysisError, FPath, ResultAnalysis};
use crate::data::datetime::{datetime_parse_record, DateTimeL};
use crate::data::record::{Address, LogRecord, LogRecords};
use crate::e_wrn;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ::si_trace_print::{defn, defo, defx};

/// Read every well-formed `<ipv4-address>:<timestamp>` record from the file
/// at `path`, in file order.
///
/// Fails with [`AnalysisError::NotFound`] if `path` is not an existing
/// file.
///
/// Each line is split at the _first_ `:`; the timestamp itself contains
/// colons. A line with no separator, an unparsable address, or an
/// unparsable timestamp is skipped with one warning to stderr; the read
/// continues. Skipped lines are not represented in the returned sequence.
pub fn read_records(path: &FPath) -> ResultAnalysis<LogRecords> {
    defn!("({:?})", path);
    if !Path::new(path.as_str()).is_file() {
        defx!("not a file");
        return Err(AnalysisError::NotFound(path.clone()));
    }
    let file: File = File::open(path.as_str())?;
    let mut records = LogRecords::new();
    for line in BufReader::new(file).lines() {
        let line: String = line?;
        let (value_address, value_dt) = match line.split_once(':') {
            Some(split) => split,
            None => {
                e_wrn!("log line has no ':' separator, skipping {:?}", line);
                continue;
            }
        };
        let address: Address = match value_address.parse::<Address>() {
            Ok(address) => address,
            Err(_) => {
                e_wrn!("cannot parse the IP address of log line, skipping {:?}", line);
                continue;
            }
        };
        let dt: DateTimeL = match datetime_parse_record(value_dt.trim()) {
            Some(dt) => dt,
            None => {
                e_wrn!("cannot parse the datetime of log line, skipping {:?}", line);
                continue;
            }
        };
        defo!("record {:?} {:?}", address, dt);
        records.push(LogRecord::new(address, dt));
    }
    defx!("return {} records", records.len());

    Ok(records)
}
