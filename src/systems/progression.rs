//! # Progression system
//!
//! Turns a budget curve plus start/end stats into a table of stat values for
//! every level in [`LEVELS`].
//!
//! Per level `L`:
//! - `budget(L) = curve(L) * end_budget`
//! - `stat(L)[i] = round(budget(L) * partition[i]) + start[i]`
//!
//! The table is computed once, fully, and never updated afterwards. Rounding is
//! per stat, so the five deltas may miss `round(budget(L))` by a point or two.

use std::ops::RangeInclusive;

use tracing::{debug, trace};

use crate::error::{Result, StatTableError};
use crate::mechanics::{CurveSpec, Stat, StatVector, distribute, end_budget, partition};

/// Levels covered by every table.
pub const LEVELS: RangeInclusive<u32> = 1..=60;

/// One computed level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LevelRow {
    pub level: u32,
    pub budget: f64,
    pub stats: StatVector,
}

/// Immutable result of [`compute_progression`].
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressionTable {
    curve: CurveSpec,
    start: StatVector,
    end: StatVector,
    end_budget: f64,
    partition: StatVector,
    rows: Vec<LevelRow>,
}

impl ProgressionTable {
    pub fn curve(&self) -> &CurveSpec {
        &self.curve
    }

    pub fn start_stats(&self) -> &StatVector {
        &self.start
    }

    pub fn end_stats(&self) -> &StatVector {
        &self.end
    }

    pub fn end_budget(&self) -> f64 {
        self.end_budget
    }

    pub fn partition(&self) -> &StatVector {
        &self.partition
    }

    /// Rows in ascending level order.
    pub fn rows(&self) -> &[LevelRow] {
        &self.rows
    }

    pub fn row(&self, level: u32) -> Option<&LevelRow> {
        if !LEVELS.contains(&level) {
            return None;
        }
        self.rows.get((level - LEVELS.start()) as usize)
    }

    pub fn budgets(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|r| r.budget)
    }

    /// One stat's trajectory across all levels.
    pub fn stat_column(&self, stat: Stat) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(move |r| r.stats[stat])
    }
}

/// Compute the full table. Fails on an empty polynomial, non-finite input or
/// budget, or a zero end budget.
pub fn compute_progression(
    curve: &CurveSpec,
    start: &StatVector,
    end: &StatVector,
) -> Result<ProgressionTable> {
    if matches!(curve, CurveSpec::Polynomial(coefs) if coefs.is_empty()) {
        return Err(StatTableError::EmptyPolynomial);
    }

    ensure_finite("curve coefficients", curve.coefficients())?;
    ensure_finite("start stats", start.0)?;
    ensure_finite("end stats", end.0)?;

    let budget_total = end_budget(start, end);
    ensure_finite("end budget", [budget_total])?;
    let part = partition(start, end).ok_or(StatTableError::DegenerateBudget {
        start: *start,
        end: *end,
    })?;
    ensure_finite("partition", part.0)?;
    debug!(curve = %curve, end_budget = budget_total, partition = ?part, "progression setup");

    let rows = LEVELS
        .map(|level| {
            let budget = curve.eval(level) * budget_total;
            ensure_finite(&format!("budget at level {level}"), [budget])?;
            let stats = distribute(budget, &part, start);
            trace!(level, budget, stats = ?stats, "level computed");
            Ok(LevelRow { level, budget, stats })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ProgressionTable {
        curve: curve.clone(),
        start: *start,
        end: *end,
        end_budget: budget_total,
        partition: part,
        rows,
    })
}

fn ensure_finite(what: &str, values: impl IntoIterator<Item = f64>) -> Result<()> {
    if values.into_iter().all(f64::is_finite) {
        Ok(())
    } else {
        Err(StatTableError::NonFiniteInput { what: what.to_string() })
    }
}
