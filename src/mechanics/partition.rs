/// Partition mechanics: end budget, fractional split, per-level distribution.
use crate::mechanics::stats::StatVector;

/// Total stat points gained between start and end: sum(end - start).
#[inline]
pub fn end_budget(start: &StatVector, end: &StatVector) -> f64 {
    (*end - *start).sum()
}

/// Fraction of the budget owed to each stat: (end - start) / end_budget.
/// Returns `None` when the budget is zero.
#[inline]
pub fn partition(start: &StatVector, end: &StatVector) -> Option<StatVector> {
    let budget = end_budget(start, end);
    if budget == 0.0 {
        return None;
    }
    Some((*end - *start).map(|d| d / budget))
}

/// Round to nearest integer, ties to even.
#[inline]
pub fn round_stat(x: f64) -> f64 {
    x.round_ties_even()
}

/// Split `budget` by `partition`, round each share, then offset by `start`.
#[inline]
pub fn distribute(budget: f64, partition: &StatVector, start: &StatVector) -> StatVector {
    partition
        .map(|p| round_stat(budget * p))
        .zip_with(*start, |share, base| share + base)
}
