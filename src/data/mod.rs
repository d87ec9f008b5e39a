// src/data/mod.rs

//! The data definitions used by _iplalib_:
//! - module [`datetime`] — datetime type, parse patterns, and parse helpers
//! - module [`record`] — network address types, the masked range comparison,
//!   and the [`LogRecord`] read from the log file
//!
//! [`datetime`]: crate::data::datetime
//! [`record`]: crate::data::record
//! [`LogRecord`]: crate::data::record::LogRecord

pub mod datetime;
pub mod record;
