// src/parse/parameters.rs

//! The [`FilterParameters`] controlling one analysis run, the per-field
//! validators, and the two resolvers that build `FilterParameters` from
//! command-line tokens ([`resolve_args`]) or from a configuration key
//! lookup ([`resolve_config`]).
//!
//! Both resolvers share one final validation pass, `validate_parameters`,
//! which enforces the cross-field invariants:
//! - log path and output path are present and non-empty
//! - a mask requires a start address
//! - `time_start ≤ time_end` after unset times default to the minimum and
//!   maximum representable instants
//!
//! An "unset" time is an explicit [`None`] throughout resolution; the
//! min/max defaulting happens exactly once, inside the final validation
//! pass.
//!
//! [`FilterParameters`]: self::FilterParameters
//! [`resolve_args`]: self::resolve_args
//! [`resolve_config`]: self::resolve_config

use crate::common::{
    AnalysisError,
    FPath,
    ResultAnalysis,
    CLI_FLAG_ADDRESS_MASK,
    CLI_FLAG_ADDRESS_START,
    CLI_FLAG_FILE_LOG,
    CLI_FLAG_FILE_OUTPUT,
    CLI_FLAG_TIME_END,
    CLI_FLAG_TIME_START,
};
use crate::data::datetime::{
    datetime_parse_filter_date,
    DateTimeL,
    DateTimeLOpt,
    DATETIME_MAX,
    DATETIME_MIN,
};
use crate::data::record::{Address, AddressMaskOpt, AddressOpt};

use std::collections::HashMap;

use ::phf::phf_map;
use ::si_trace_print::{defn, defo, defx};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// FilterParameters
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The validated inputs controlling which log records are selected.
///
/// Built once per run by [`resolve_args`] or [`resolve_config`], never
/// mutated afterward. `time_start`/`time_end` hold concrete instants;
/// unset values were already defaulted to [`DATETIME_MIN`]/[`DATETIME_MAX`]
/// during validation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FilterParameters {
    pub path_log: FPath,
    pub path_output: FPath,
    pub address_start: AddressOpt,
    pub address_mask: AddressMaskOpt,
    pub time_start: DateTimeL,
    pub time_end: DateTimeL,
}

/// Accumulates raw field values during a resolver scan, before the
/// cross-field validation pass. Every field is optional here.
#[derive(Debug, Default)]
struct RawParameters {
    path_log: Option<FPath>,
    path_output: Option<FPath>,
    address_start: AddressOpt,
    address_mask: AddressMaskOpt,
    time_start: DateTimeLOpt,
    time_end: DateTimeLOpt,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// per-field validators
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Validate one optional address-valued field.
///
/// An absent value is not an error. A present value that is not a
/// dotted-quad IPv4 literal fails with [`AnalysisError::AddressFormat`]
/// naming the field.
pub fn validate_address(
    name: &str,
    value: Option<&str>,
) -> ResultAnalysis<AddressOpt> {
    let value: &str = match value {
        Some(value) => value,
        None => return Ok(None),
    };
    match value.parse::<Address>() {
        Ok(address) => Ok(Some(address)),
        Err(_) => Err(AnalysisError::AddressFormat {
            name: name.to_owned(),
            value: value.to_owned(),
        }),
    }
}

/// Validate one optional datetime-valued field.
///
/// An absent value is `Ok(None)`, meaning "unset" — defaulting to the
/// minimum or maximum instant is the concern of the final validation pass,
/// not of this function. A present value that does not match
/// [`DTP_FILTER_DATE`] fails with [`AnalysisError::TimeFormat`] naming the
/// field.
///
/// [`DTP_FILTER_DATE`]: crate::data::datetime::DTP_FILTER_DATE
pub fn validate_time(
    name: &str,
    value: Option<&str>,
) -> ResultAnalysis<DateTimeLOpt> {
    let value: &str = match value {
        Some(value) => value,
        None => return Ok(None),
    };
    match datetime_parse_filter_date(value) {
        Some(dt) => Ok(Some(dt)),
        None => Err(AnalysisError::TimeFormat {
            name: name.to_owned(),
            value: value.to_owned(),
        }),
    }
}

/// The shared final validation pass; enforces cross-field invariants and
/// defaults unset times.
///
/// The `time_end` defaulting precedes the ordering check, so an explicit
/// `time_start` is compared against the maximum instant when `time_end`
/// was left unset.
fn validate_parameters(raw: RawParameters) -> ResultAnalysis<FilterParameters> {
    defn!("({:?})", raw);
    let path_log: FPath = match raw.path_log {
        Some(path) if !path.is_empty() => path,
        _ => {
            defx!("missing path_log");
            return Err(AnalysisError::MissingPath);
        }
    };
    let path_output: FPath = match raw.path_output {
        Some(path) if !path.is_empty() => path,
        _ => {
            defx!("missing path_output");
            return Err(AnalysisError::MissingPath);
        }
    };
    if raw.address_mask.is_some() && raw.address_start.is_none() {
        defx!("mask without start address");
        return Err(AnalysisError::MaskWithoutAddress);
    }
    let time_end: DateTimeL = raw.time_end.unwrap_or(DATETIME_MAX);
    let time_start: DateTimeL = raw.time_start.unwrap_or(DATETIME_MIN);
    if time_start > time_end {
        defx!("time_start {:?} > time_end {:?}", time_start, time_end);
        return Err(AnalysisError::TimeStartAfterEnd);
    }
    defx!();

    Ok(FilterParameters {
        path_log,
        path_output,
        address_start: raw.address_start,
        address_mask: raw.address_mask,
        time_start,
        time_end,
    })
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// command-line token resolver
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The closed set of recognized flags; each consumes exactly one following
/// token as its value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum FlagKind {
    FileLog,
    FileOutput,
    AddressStart,
    AddressMask,
    TimeStart,
    TimeEnd,
}

/// Static flag-token to [`FlagKind`] map. Keys must match the `CLI_FLAG_*`
/// constants in [`crate::common`] (asserted by test).
static FLAG_KINDS: phf::Map<&'static str, FlagKind> = phf_map! {
    "--file-log" => FlagKind::FileLog,
    "--file-output" => FlagKind::FileOutput,
    "--address-start" => FlagKind::AddressStart,
    "--address-mask" => FlagKind::AddressMask,
    "--time-start" => FlagKind::TimeStart,
    "--time-end" => FlagKind::TimeEnd,
};

/// Minimum token count; both required path flags with their values.
const CLI_TOKENS_MIN: usize = 4;

/// Store one flag's validated value into the accumulating `RawParameters`.
fn apply_flag(
    raw: &mut RawParameters,
    kind: FlagKind,
    name: &str,
    value: &str,
) -> ResultAnalysis<()> {
    defo!("({:?}, {:?})", name, value);
    match kind {
        FlagKind::FileLog => raw.path_log = Some(value.to_owned()),
        FlagKind::FileOutput => raw.path_output = Some(value.to_owned()),
        FlagKind::AddressStart => raw.address_start = validate_address(name, Some(value))?,
        FlagKind::AddressMask => raw.address_mask = validate_address(name, Some(value))?,
        FlagKind::TimeStart => raw.time_start = validate_time(name, Some(value))?,
        FlagKind::TimeEnd => raw.time_end = validate_time(name, Some(value))?,
    }

    Ok(())
}

/// Resolve command-line tokens into validated [`FilterParameters`].
///
/// Tokens are scanned left to right; flags may appear in any order. A token
/// that is not a recognized flag fails with [`AnalysisError::UnknownFlag`];
/// a flag appearing as the last token fails with
/// [`AnalysisError::MissingValue`]. Fewer than `CLI_TOKENS_MIN` tokens
/// overall fails with [`AnalysisError::InsufficientArguments`] before any
/// per-flag parsing. Absence of either required path flag is caught by the
/// final validation pass, not by the scan.
pub fn resolve_args(tokens: &[String]) -> ResultAnalysis<FilterParameters> {
    defn!("({} tokens)", tokens.len());
    if tokens.len() < CLI_TOKENS_MIN {
        defx!("too few tokens");
        return Err(AnalysisError::InsufficientArguments);
    }
    let mut raw = RawParameters::default();
    let mut i: usize = 0;
    while i < tokens.len() {
        let token: &str = tokens[i].as_str();
        let kind: FlagKind = match FLAG_KINDS.get(token) {
            Some(kind) => *kind,
            None => {
                defx!("unknown flag {:?}", token);
                return Err(AnalysisError::UnknownFlag(token.to_owned()));
            }
        };
        let value: &str = match tokens.get(i + 1) {
            Some(value) => value.as_str(),
            None => {
                defx!("flag {:?} is the last token", token);
                return Err(AnalysisError::MissingValue(token.to_owned()));
            }
        };
        apply_flag(&mut raw, kind, token, value)?;
        i += 2;
    }
    let parameters = validate_parameters(raw)?;
    defx!("{:?}", parameters);

    Ok(parameters)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// configuration key lookup resolver
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One key of a configuration lookup, as `Option<&str>`.
fn get<'a>(
    lookup: &'a HashMap<String, String>,
    key: &str,
) -> Option<&'a str> {
    lookup.get(key).map(String::as_str)
}

/// Resolve a configuration key→value lookup into validated
/// [`FilterParameters`]; identical validation semantics to
/// [`resolve_args`]. Keys are the six flag names verbatim; unrelated keys
/// are ignored.
pub fn resolve_config(lookup: &HashMap<String, String>) -> ResultAnalysis<FilterParameters> {
    defn!("({} keys)", lookup.len());
    let raw = RawParameters {
        path_log: get(lookup, CLI_FLAG_FILE_LOG).map(str::to_owned),
        path_output: get(lookup, CLI_FLAG_FILE_OUTPUT).map(str::to_owned),
        address_start: validate_address(CLI_FLAG_ADDRESS_START, get(lookup, CLI_FLAG_ADDRESS_START))?,
        address_mask: validate_address(CLI_FLAG_ADDRESS_MASK, get(lookup, CLI_FLAG_ADDRESS_MASK))?,
        time_start: validate_time(CLI_FLAG_TIME_START, get(lookup, CLI_FLAG_TIME_START))?,
        time_end: validate_time(CLI_FLAG_TIME_END, get(lookup, CLI_FLAG_TIME_END))?,
    };
    let parameters = validate_parameters(raw)?;
    defx!("{:?}", parameters);

    Ok(parameters)
}

#[cfg(test)]
pub(crate) fn flag_kinds_len() -> usize {
    FLAG_KINDS.len()
}

#[cfg(test)]
pub(crate) fn flag_kinds_contains(token: &str) -> bool {
    FLAG_KINDS.contains_key(token)
}
