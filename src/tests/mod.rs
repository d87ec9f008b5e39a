// src/tests/mod.rs

//! Tests for _iplalib_.
//!
//! Tests are placed at `src/tests/`, inside the `iplalib` crate, so they
//! keep crate-internal visibility (the same trade-off of separation and
//! access the layout is borrowed from).

pub mod common;
pub mod datetime_tests;
pub mod logreader_tests;
pub mod pipeline_tests;
pub mod results_tests;
