// src/readers/configreader.rs

//! Load the optional JSON configuration file, a flat object of string keys
//! and string values. The keys are the six flag names of
//! [`crate::common`], verbatim.

use crate::common::{AnalysisError, FPath, ResultAnalysis};

use std::collections::HashMap;
use std::path::Path;

use ::si_trace_print::{defn, defx};

/// Configuration file looked for in the working directory when the program
/// receives zero command-line arguments.
pub const CONFIG_DEFAULT_PATH: &str = "config.json";

/// Load the configuration file at `path` into a key→value lookup.
///
/// The file is optional: a path that is not an existing file yields an
/// empty lookup (required-field enforcement is the concern of parameter
/// validation, which will then fail with a missing-path error).
/// A file that is not a flat JSON object of strings fails with
/// [`AnalysisError::ConfigFormat`].
pub fn read_config(path: &FPath) -> ResultAnalysis<HashMap<String, String>> {
    defn!("({:?})", path);
    if !Path::new(path.as_str()).is_file() {
        defx!("no configuration file; empty lookup");
        return Ok(HashMap::new());
    }
    let content: String = std::fs::read_to_string(path.as_str())?;
    match serde_json::from_str::<HashMap<String, String>>(&content) {
        Ok(lookup) => {
            defx!("{} keys", lookup.len());
            Ok(lookup)
        }
        Err(err) => {
            defx!("bad JSON: {}", err);
            Err(AnalysisError::ConfigFormat {
                path: path.clone(),
                mesg: err.to_string(),
            })
        }
    }
}
