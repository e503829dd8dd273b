//! Command-line surface.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};

use stat_table::{CurveSpec, RunConfig, StatVector};

/// Generates stats table from curve and end level stats
#[derive(Parser, Debug)]
#[command(name = "stat_table")]
#[command(about = "Generates stats table from curve and end level stats", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Custom n-degree polynomial curve for budget vs level, highest degree first
    #[arg(
        short = 'p',
        long,
        num_args = 1..,
        value_name = "COEF",
        allow_negative_numbers = true,
        action = ArgAction::Set,
        conflicts_with = "exp"
    )]
    pub poly: Option<Vec<f64>>,

    /// Custom exponential curve for budget vs level (y = k + a*exp(l*x))
    #[arg(
        short = 'e',
        long,
        num_args = 3,
        value_names = ["K", "A", "L"],
        allow_negative_numbers = true,
        action = ArgAction::Set
    )]
    pub exp: Option<Vec<f64>>,

    /// End level stats (long form only: `--endstats` or `--es`)
    #[arg(
        long,
        visible_alias = "es",
        required = true,
        num_args = 5,
        value_names = ["AGI", "INT", "SPI", "STA", "STR"],
        allow_negative_numbers = true,
        action = ArgAction::Set
    )]
    pub endstats: Vec<f64>,

    /// Start stats, default all zero (long form only: `--startstats` or `--ss`)
    #[arg(
        long,
        visible_alias = "ss",
        num_args = 5,
        value_names = ["AGI", "INT", "SPI", "STA", "STR"],
        allow_negative_numbers = true,
        action = ArgAction::Set
    )]
    pub startstats: Option<Vec<f64>>,

    /// Filename comment (output goes to stats/<comment>.csv)
    #[arg(short = 'c', long, default_value = "")]
    pub comment: String,

    /// Increase output verbosity
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve parsed flags into a run description.
    pub fn into_config(self) -> Result<RunConfig> {
        let curve = match (self.poly, self.exp) {
            (Some(coefs), _) => CurveSpec::Polynomial(coefs),
            (None, Some(e)) => {
                let [k, a, l] = fixed::<3>(e).context("--exp takes exactly 3 values")?;
                CurveSpec::exponential(k, a, l)
            }
            (None, None) => CurveSpec::default(),
        };
        let end = fixed::<5>(self.endstats).context("--endstats takes exactly 5 values")?;
        let start = match self.startstats {
            Some(s) => StatVector(fixed::<5>(s).context("--startstats takes exactly 5 values")?),
            None => StatVector::ZERO,
        };

        Ok(RunConfig::new(StatVector(end))
            .with_curve(curve)
            .with_start_stats(start)
            .with_comment(self.comment)
            .with_verbose(self.verbose))
    }
}

fn fixed<const N: usize>(values: Vec<f64>) -> Result<[f64; N]> {
    let len = values.len();
    values
        .try_into()
        .map_err(|_| anyhow::anyhow!("expected {N} values, got {len}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> clap::error::Result<Cli> {
        Cli::try_parse_from(std::iter::once("stat_table").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_to_exponential_curve_and_zero_start() {
        let cfg = parse(&["--endstats", "65", "100", "110", "69", "62"])
            .unwrap()
            .into_config()
            .unwrap();
        assert!(cfg.curve.is_default());
        assert_eq!(cfg.start_stats, StatVector::ZERO);
        assert_eq!(cfg.end_stats, StatVector::new(65.0, 100.0, 110.0, 69.0, 62.0));
        assert_eq!(cfg.comment, "");
        assert!(!cfg.verbose);
    }

    #[test]
    fn short_aliases_match_original_usage() {
        let cfg = parse(&[
            "--es", "65", "100", "110", "69", "62", "--ss", "25", "22", "22", "19", "18", "-c",
            "druid", "-v",
        ])
        .unwrap()
        .into_config()
        .unwrap();
        assert_eq!(cfg.start_stats, StatVector::new(25.0, 22.0, 22.0, 19.0, 18.0));
        assert_eq!(cfg.comment, "druid");
        assert!(cfg.verbose);
    }

    #[test]
    fn single_dash_stat_aliases_are_not_flags() {
        // `-es` reads as `-e s`, not as `--es`.
        assert!(parse(&["-es", "65", "100", "110", "69", "62"]).is_err());
        assert!(parse(&["--ss", "1", "1", "1", "1", "1", "--es", "2", "2", "2", "2", "2"]).is_ok());
    }

    #[test]
    fn negative_exponential_coefficients_parse() {
        let cfg = parse(&["-e", "-0.5", "0.5", "0.01", "--endstats", "1", "1", "1", "1", "1"])
            .unwrap()
            .into_config()
            .unwrap();
        assert_eq!(cfg.curve, CurveSpec::exponential(-0.5, 0.5, 0.01));
    }

    #[test]
    fn polynomial_takes_any_positive_arity() {
        let cfg = parse(&["--poly", "2", "0", "-3", "--endstats", "1", "1", "1", "1", "1"])
            .unwrap()
            .into_config()
            .unwrap();
        assert_eq!(cfg.curve, CurveSpec::polynomial([2.0, 0.0, -3.0]));
    }

    #[test]
    fn poly_and_exp_are_mutually_exclusive() {
        let err = parse(&[
            "--poly", "1", "--exp", "0", "1", "0", "--endstats", "1", "1", "1", "1", "1",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn rejects_wrong_arity_and_missing_endstats() {
        assert!(parse(&["--endstats", "1", "2", "3"]).is_err());
        assert!(parse(&["--exp", "1", "2", "--endstats", "1", "1", "1", "1", "1"]).is_err());
        assert_eq!(
            parse(&[]).unwrap_err().kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
        assert!(parse(&["--endstats", "1", "x", "1", "1", "1"]).is_err());
    }
}
