// src/bin/ipla.rs

//! Driver program _ipla_ drives the [_iplalib_].
//!
//! Passed command-line tokens, resolves them into
//! [`FilterParameters`]; passed zero tokens, loads the optional
//! `config.json` from the working directory instead. Then runs the
//! pipeline: read log records, filter by address range and datetime
//! window, count per address, write the counts.
//!
//! On any failure the error is printed to stderr and the process exits
//! non-zero. On success the output path is printed to stdout.
//!
//! [_iplalib_]: iplalib
//! [`FilterParameters`]: iplalib::parse::parameters::FilterParameters

use std::process::ExitCode;

use ::iplalib::analysis::counter::{count_addresses, AddressCounts};
use ::iplalib::analysis::filter::filter_records;
use ::iplalib::common::{FPath, ResultAnalysis};
use ::iplalib::data::record::LogRecords;
use ::iplalib::e_err;
use ::iplalib::parse::parameters::{resolve_args, resolve_config, FilterParameters};
use ::iplalib::printer::results::write_results;
use ::iplalib::readers::configreader::{read_config, CONFIG_DEFAULT_PATH};
use ::iplalib::readers::logreader::read_records;
use ::si_trace_print::{defn, defx};

/// Run the whole pipeline; return the output path written.
fn run(args: &[String]) -> ResultAnalysis<FPath> {
    defn!("({:?})", args);
    let parameters: FilterParameters = if args.is_empty() {
        let lookup = read_config(&CONFIG_DEFAULT_PATH.to_owned())?;
        resolve_config(&lookup)?
    } else {
        resolve_args(args)?
    };
    let records: LogRecords = read_records(&parameters.path_log)?;
    let filtered: LogRecords = filter_records(
        records,
        parameters.address_start,
        parameters.address_mask,
        parameters.time_start,
        parameters.time_end,
    );
    let counts: AddressCounts = count_addresses(&filtered);
    write_results(&parameters.path_output, &counts)?;
    defx!("wrote {:?}", parameters.path_output);

    Ok(parameters.path_output)
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(path_output) => {
            println!("Analysis complete. Results written to {:?}", path_output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            e_err!("{}", err);
            ExitCode::FAILURE
        }
    }
}
