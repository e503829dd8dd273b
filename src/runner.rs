//! One full run: compute, save CSV, print the console table.
//!
//! Nothing is written until the whole table exists; a failed computation
//! leaves no file behind.

use std::io::Write;

use tracing::debug;

use crate::config::RunConfig;
use crate::error::Result;
use crate::mechanics::{end_budget, partition};
use crate::output::{render_table, save_stats_csv};
use crate::systems::{ProgressionTable, compute_progression};

/// Line printed after the table.
pub const DONE: &str = "Done!";

/// Run `cfg`, sending console output to `out`. Returns the computed table.
pub fn run<W: Write>(cfg: &RunConfig, out: &mut W) -> Result<ProgressionTable> {
    if cfg.verbose {
        writeln!(out, "curve: {}", cfg.curve)?;
        writeln!(out, "{:#?}", cfg)?;
        writeln!(out, "end_budget: {}", end_budget(&cfg.start_stats, &cfg.end_stats))?;
        writeln!(out, "partition: {:?}", partition(&cfg.start_stats, &cfg.end_stats))?;
    }

    let table = compute_progression(&cfg.curve, &cfg.start_stats, &cfg.end_stats)?;

    if cfg.verbose {
        writeln!(out, "{:#?}", table)?;
    }

    let path = save_stats_csv(&table, &cfg.output_path())?;
    debug!(path = %path.display(), "csv saved");

    out.write_all(render_table(&table).as_bytes())?;
    writeln!(out, "{DONE}")?;
    out.flush()?;
    Ok(table)
}
