// src/analysis/mod.rs

//! The pure in-memory transformations of _iplalib_:
//! - module [`filter`] — keep records within the address range and
//!   datetime window
//! - module [`counter`] — count the kept records per distinct address
//!
//! Both are single-threaded, non-blocking, and consume their input once.
//!
//! [`filter`]: crate::analysis::filter
//! [`counter`]: crate::analysis::counter

pub mod counter;
pub mod filter;
