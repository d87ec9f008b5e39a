// src/printer/results.rs

//! Write the per-address counts to the result file.

use crate::analysis::counter::AddressCounts;
use crate::common::{Count, FPath, ResultAnalysis};
use crate::data::record::Address;

use std::fs::File;
use std::io::{BufWriter, Write};

use ::si_trace_print::{defn, defx};

/// Write one `<dotted-quad> - <count>` line per distinct address to the
/// file at `path`, overwriting any existing file.
///
/// Entries are written sorted by address octets; the counter makes no
/// ordering promise so the deterministic order is imposed here.
pub fn write_results(
    path: &FPath,
    counts: &AddressCounts,
) -> ResultAnalysis<()> {
    defn!("({:?}, {} entries)", path, counts.len());
    let mut entries: Vec<(&Address, &Count)> = counts.iter().collect();
    entries.sort_unstable_by_key(|(address, _count)| address.octets());
    let mut writer = BufWriter::new(File::create(path.as_str())?);
    for (address, count) in entries.into_iter() {
        writeln!(writer, "{} - {}", address, count)?;
    }
    writer.flush()?;
    defx!();

    Ok(())
}
