//! Stat table generator.
//!
//! Example:
//!   stat_table --endstats 65 100 110 69 62 --startstats 25 22 22 19 18 -c druid
//!
//! `--es`/`--ss` are long aliases; single-dash `-es` parses as `-e s`.

mod cli;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_directive = if cli.verbose { "stat_table=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with_writer(io::stderr)
        .init();

    let cfg = cli.into_config()?;
    let path = cfg.output_path();

    let stdout = io::stdout();
    stat_table::run(&cfg, &mut stdout.lock())
        .with_context(|| format!("failed to generate stats table {}", path.display()))?;
    Ok(())
}
