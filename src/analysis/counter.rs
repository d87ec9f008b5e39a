// src/analysis/counter.rs

//! Count log records per distinct address.

use crate::common::Count;
use crate::data::record::{Address, LogRecord};

use std::collections::HashMap;

use ::si_trace_print::{defn, defx};

/// Per-address occurrence counts; one entry per distinct address.
///
/// A `HashMap`, so iteration order is unspecified; a deterministic output
/// order is imposed by the result writer, not here.
pub type AddressCounts = HashMap<Address, Count>;

/// Count the records per distinct address. An empty input yields an empty
/// map.
pub fn count_addresses(records: &[LogRecord]) -> AddressCounts {
    defn!("({} records)", records.len());
    let mut counts = AddressCounts::new();
    for record in records.iter() {
        *counts
            .entry(record.address)
            .or_insert(0) += 1;
    }
    defx!("return {} distinct addresses", counts.len());

    counts
}
