// src/parse/mod.rs

//! Turn raw user input — command-line tokens or a configuration key lookup —
//! into validated [`FilterParameters`].
//!
//! [`FilterParameters`]: crate::parse::parameters::FilterParameters

pub mod parameters;
