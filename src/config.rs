//! Run configuration: everything one invocation needs, fixed up front.

use std::path::PathBuf;

use crate::mechanics::{CurveSpec, StatVector};

/// Directory the CSV lands in unless overridden.
pub const DEFAULT_OUT_DIR: &str = "stats";

#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    pub curve: CurveSpec,
    pub start_stats: StatVector,
    pub end_stats: StatVector,
    /// Output filename stem; may be empty.
    pub comment: String,
    pub out_dir: PathBuf,
    /// Dump derived values to the console sink.
    pub verbose: bool,
}

impl RunConfig {
    /// Default curve, zero start stats, no comment, `stats/` output.
    pub fn new(end_stats: StatVector) -> Self {
        Self {
            curve: CurveSpec::default(),
            start_stats: StatVector::ZERO,
            end_stats,
            comment: String::new(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            verbose: false,
        }
    }

    pub fn with_curve(mut self, curve: CurveSpec) -> Self {
        self.curve = curve;
        self
    }

    pub fn with_start_stats(mut self, start: StatVector) -> Self {
        self.start_stats = start;
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn with_out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = dir.into();
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// `<out_dir>/<comment>.csv`
    pub fn output_path(&self) -> PathBuf {
        self.out_dir.join(format!("{}.csv", self.comment))
    }
}
