// src/printer/mod.rs

//! The file-writing boundary of _iplalib_:
//! - module [`results`] — write per-address counts to the output file
//!
//! [`results`]: crate::printer::results

pub mod results;
