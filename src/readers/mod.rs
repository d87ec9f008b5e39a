// src/readers/mod.rs

//! The file-reading boundary of _iplalib_:
//! - module [`logreader`] — read [`LogRecord`s] from the source log file
//! - module [`configreader`] — load the optional JSON configuration file
//!
//! [`logreader`]: crate::readers::logreader
//! [`configreader`]: crate::readers::configreader
//! [`LogRecord`s]: crate::data::record::LogRecord

pub mod configreader;
pub mod logreader;
