// src/common.rs
//
// common type aliases, command-line flag names, the crate error type,
// and stderr print macros (avoids circular imports)

use crate::data::datetime::DTP_FILTER_DATE_HUMAN;

use ::const_format::concatcp;
use ::thiserror::Error;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// file-handling, command-line parsing
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `F`ake `Path` or `F`ile `Path`
pub type FPath = String;

/// A general-purpose counting type
pub type Count = u64;

/// Command-line flag for the log file path (required).
pub const CLI_FLAG_FILE_LOG: &str = "--file-log";
/// Command-line flag for the result output file path (required).
pub const CLI_FLAG_FILE_OUTPUT: &str = "--file-output";
/// Command-line flag for the range reference address (optional).
pub const CLI_FLAG_ADDRESS_START: &str = "--address-start";
/// Command-line flag for the range mask (optional; requires
/// [`CLI_FLAG_ADDRESS_START`]).
pub const CLI_FLAG_ADDRESS_MASK: &str = "--address-mask";
/// Command-line flag for the earliest accepted datetime (optional).
pub const CLI_FLAG_TIME_START: &str = "--time-start";
/// Command-line flag for the latest accepted datetime (optional).
pub const CLI_FLAG_TIME_END: &str = "--time-end";

/// Command-line usage synopsis, embedded in
/// [`AnalysisError::InsufficientArguments`].
pub const CLI_USAGE: &str = concatcp!(
    CLI_FLAG_FILE_LOG, " <path> ",
    CLI_FLAG_FILE_OUTPUT, " <path>",
    " [", CLI_FLAG_ADDRESS_START, " <address>]",
    " [", CLI_FLAG_ADDRESS_MASK, " <mask>]",
    " [", CLI_FLAG_TIME_START, " <", DTP_FILTER_DATE_HUMAN, ">]",
    " [", CLI_FLAG_TIME_END, " <", DTP_FILTER_DATE_HUMAN, ">]",
);

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// the crate-wide error type
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Any failure of the parse→validate→read→filter→count→write pipeline.
///
/// Three kinds of failure, all fatal, all surfaced immediately as values:
/// - argument errors: structurally invalid or missing required input
///   (`InsufficientArguments`, `UnknownFlag`, `MissingValue`, `MissingPath`,
///   `MaskWithoutAddress`, `TimeStartAfterEnd`)
/// - format errors: a present value fails its grammar
///   (`AddressFormat`, `TimeFormat`, `ConfigFormat`)
/// - I/O boundary errors (`NotFound`, `Io`)
///
/// Per-line defects while reading the log file are _not_ represented here;
/// those are non-fatal, printed once per defective line via [`e_wrn!`].
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("not enough arguments; usage: {}", CLI_USAGE)]
    InsufficientArguments,
    #[error("unknown parameter {0:?}")]
    UnknownFlag(String),
    #[error("missing value after parameter {0}")]
    MissingValue(String),
    #[error("parameter {} or {} was not supplied", CLI_FLAG_FILE_LOG, CLI_FLAG_FILE_OUTPUT)]
    MissingPath,
    #[error("parameter {} may only be used together with {}", CLI_FLAG_ADDRESS_MASK, CLI_FLAG_ADDRESS_START)]
    MaskWithoutAddress,
    #[error("parameter {} must not be later than {}", CLI_FLAG_TIME_START, CLI_FLAG_TIME_END)]
    TimeStartAfterEnd,
    #[error("bad IP address {value:?} for parameter {name}")]
    AddressFormat { name: String, value: String },
    #[error("bad datetime {value:?} for parameter {name}; expected {}", DTP_FILTER_DATE_HUMAN)]
    TimeFormat { name: String, value: String },
    #[error("bad configuration file {path:?}: {mesg}")]
    ConfigFormat { path: FPath, mesg: String },
    #[error("log file not found {0:?}")]
    NotFound(FPath),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Shorthand `Result` for pipeline functions.
pub type ResultAnalysis<T> = std::result::Result<T, AnalysisError>;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// stderr printing
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `e`println! an `err`or
#[macro_export]
macro_rules! e_err {
    (
        $($args:tt)*
    ) => {
        {
            eprint!("ERROR: ");
            eprintln!($($args)*)
        }
    }
}
pub use e_err;

/// `e`println! a `warn`ing
#[macro_export]
macro_rules! e_wrn {
    (
        $($args:tt)*
    ) => {
        {
            eprint!("WARNING: ");
            eprintln!($($args)*)
        }
    }
}
pub use e_wrn;
