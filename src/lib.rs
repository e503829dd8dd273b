/*!
`stat_table` — per-level stat progression from a budget curve.

What it does
- Takes a budget curve (polynomial or `k + a·exp(l·x)`), start stats and end
  stats over five attributes (`agi, int, spi, sta, str`).
- Derives the end budget `Σ(end − start)` and a fixed partition
  `(end − start) / end_budget`.
- For levels 1..=60 evaluates `budget(L) = curve(L) · end_budget`, splits it by
  the partition, rounds each share (ties to even) and adds the start stats.
- Writes the table as CSV (`stats/<comment>.csv`) and as a fixed-width console
  table.

How to use (call surface only)
- Pure computation: `compute_progression(&curve, &start, &end) -> Result<ProgressionTable>`.
- Whole run with file + console output: build a `RunConfig` and call
  `run(&cfg, &mut stdout)`.

What it does NOT do
- No level ranges other than 1..=60, no incremental recomputation, no
  persistence beyond the flat CSV.
*/

pub mod config;
pub mod error;
pub mod mechanics;
pub mod output;
pub mod runner;
pub mod systems;

pub use config::RunConfig;
pub use error::{Result, StatTableError};
pub use mechanics::{CurveSpec, Stat, StatVector};
pub use runner::run;
pub use systems::{LEVELS, LevelRow, ProgressionTable, compute_progression};
