// src/lib.rs

//! Library _iplalib_ for the _ipla_ program.
//!
//! Filters a line-oriented log of `<ipv4-address>:<timestamp>` records by
//! subnet-range membership and datetime-window inclusion, then counts
//! matching records per distinct address.
//!
//! The processing pipeline, in call order:
//! 1. [`resolve_args`] or [`resolve_config`] turn raw command-line tokens or
//!    a configuration key lookup into validated [`FilterParameters`].
//! 2. [`read_records`] reads [`LogRecord`s] from the log file.
//! 3. [`filter_records`] keeps records within the address range and
//!    datetime window.
//! 4. [`count_addresses`] counts the kept records per distinct address.
//! 5. [`write_results`] writes one `<address> - <count>` line per address.
//!
//! [`resolve_args`]: crate::parse::parameters::resolve_args
//! [`resolve_config`]: crate::parse::parameters::resolve_config
//! [`FilterParameters`]: crate::parse::parameters::FilterParameters
//! [`read_records`]: crate::readers::logreader::read_records
//! [`LogRecord`s]: crate::data::record::LogRecord
//! [`filter_records`]: crate::analysis::filter::filter_records
//! [`count_addresses`]: crate::analysis::counter::count_addresses
//! [`write_results`]: crate::printer::results::write_results

pub mod analysis;
pub mod common;
pub mod data;
pub mod parse;
pub mod printer;
pub mod readers;
#[cfg(test)]
pub mod tests;
