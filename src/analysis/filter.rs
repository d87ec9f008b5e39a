// src/analysis/filter.rs

//! Keep the log records within the requested address range and datetime
//! window.

use crate::data::datetime::DateTimeL;
use crate::data::record::{
    address_in_range,
    AddressMask,
    AddressMaskOpt,
    AddressOpt,
    LogRecords,
    MASK_HOST,
};

use ::si_trace_print::{defn, defx};

/// Keep the records that pass both predicates:
/// - address: no `address_start` requested, or the record address is within
///   the masked range of `address_start`; an absent mask means the full
///   [`MASK_HOST`] mask, so exact-address match
/// - time: `time_start ≤ record.dt ≤ time_end`, inclusive both ends
///
/// Stable: output order is input order. The caller guarantees the
/// parameters invariant `address_mask` present ⇒ `address_start` present;
/// it is not re-checked here.
pub fn filter_records(
    records: LogRecords,
    address_start: AddressOpt,
    address_mask: AddressMaskOpt,
    time_start: DateTimeL,
    time_end: DateTimeL,
) -> LogRecords {
    defn!(
        "({} records, {:?}, {:?}, {:?}, {:?})",
        records.len(),
        address_start,
        address_mask,
        time_start,
        time_end,
    );
    let mask: AddressMask = address_mask.unwrap_or(MASK_HOST);
    let filtered: LogRecords = records
        .into_iter()
        .filter(|record| {
            let pass_address: bool = match address_start {
                Some(ref start) => address_in_range(&record.address, start, &mask),
                None => true,
            };

            pass_address && time_start <= record.dt && record.dt <= time_end
        })
        .collect();
    defx!("return {} records", filtered.len());

    filtered
}
