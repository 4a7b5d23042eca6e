//! Step/trace reconstruction
//!
//! Turns a DP split table into the ordered list of merges it implies:
//!
//! 1. Post-order walk of the split table (left part, right part, then the
//!    merge at this level) yields abstract merges `([l, k], [k+1, r])`.
//! 2. Replay those merges on a simulated [`PileRow`] starting from singleton
//!    piles. Operands are located by their exact original-index bounds, so a
//!    step always names the *current* row slots it merges.

mod replay;
mod step;

pub use replay::Replay;
pub use step::MergeStep;

use thiserror::Error;
use tracing::trace;

use crate::piles::{Interval, PileRow};
use crate::solver::Table;

/// Errors raised for split tables that do not describe a valid merge order.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TraceError {
    /// Split table side does not match the number of piles.
    #[error("split table is {table}x{table} but there are {piles} piles")]
    DimensionMismatch {
        /// Side length of the split table.
        table: usize,
        /// Number of piles.
        piles: usize,
    },

    /// Split point outside `[left, right)`.
    #[error("split point {split} is outside {range}")]
    InvalidSplit {
        /// Interval being split.
        range: Interval,
        /// Offending split point.
        split: usize,
    },

    /// No pile in the current row covers the required interval exactly.
    ///
    /// Not produced by any table that passes the split bounds check: such a
    /// table describes a binary tree over `[0, n-1]`, and its post-order
    /// merges always find both operands side by side in the row.
    #[error("no current pile covers {range} next to its partner")]
    UnmatchedRange {
        /// Interval that could not be located.
        range: Interval,
    },
}

/// Ordered merges implied by `split` for `piles`.
///
/// A single pile (or none) yields no steps.
pub fn reconstruct_steps(piles: &[u64], split: &Table<usize>) -> Result<Vec<MergeStep>, TraceError> {
    let n = piles.len();
    if split.size() != n {
        return Err(TraceError::DimensionMismatch {
            table: split.size(),
            piles: n,
        });
    }
    if n <= 1 {
        return Ok(Vec::new());
    }

    let mut plan = Vec::with_capacity(n - 1);
    collect_merges(split, Interval::new(0, n - 1), &mut plan)?;

    let mut row = PileRow::from_weights(piles);
    let mut steps = Vec::with_capacity(plan.len());
    let mut total = 0u64;

    for (range, k) in plan {
        let (left, right) = range.split(k);
        let slot = row
            .position_of(left)
            .ok_or(TraceError::UnmatchedRange { range: left })?;
        match row.get(slot + 1) {
            Some(pile) if pile.range == right => {}
            _ => return Err(TraceError::UnmatchedRange { range: right }),
        }

        let step = MergeStep::apply(&mut row, slot, total, Some(k))
            .ok_or(TraceError::UnmatchedRange { range: right })?;
        trace!(%left, %right, slot, cost = step.cost, "replayed dp merge");
        total = step.running_total;
        steps.push(step);
    }

    Ok(steps)
}

fn collect_merges(
    split: &Table<usize>,
    range: Interval,
    plan: &mut Vec<(Interval, usize)>,
) -> Result<(), TraceError> {
    if range.is_single() {
        return Ok(());
    }

    let k = split.get(range.left, range.right);
    if k < range.left || k >= range.right {
        return Err(TraceError::InvalidSplit { range, split: k });
    }

    let (left, right) = range.split(k);
    collect_merges(split, left, plan)?;
    collect_merges(split, right, plan)?;
    plan.push((range, k));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::IntervalDp;

    #[test]
    fn test_post_order_steps() {
        let piles = [1, 3, 3, 2, 4];
        let tables = IntervalDp::solve(&piles);
        let steps = reconstruct_steps(&piles, &tables.split).unwrap();

        assert_eq!(steps.len(), 4);
        // split[0][4] = 2: [0, 2] is built first, then [3, 4], then the root
        let ranges: Vec<Interval> = steps.iter().map(|s| s.range()).collect();
        assert_eq!(
            ranges,
            vec![
                Interval::new(0, 1),
                Interval::new(0, 2),
                Interval::new(3, 4),
                Interval::new(0, 4),
            ]
        );
        let slots: Vec<usize> = steps.iter().map(|s| s.slot).collect();
        assert_eq!(slots, vec![0, 0, 1, 0]);
        assert_eq!(steps.last().unwrap().running_total, tables.total_cost());
        assert_eq!(steps.last().unwrap().split, Some(2));
    }

    #[test]
    fn test_single_pile() {
        let tables = IntervalDp::solve(&[5]);
        assert!(reconstruct_steps(&[5], &tables.split).unwrap().is_empty());
    }

    #[test]
    fn test_dimension_mismatch() {
        let tables = IntervalDp::solve(&[1, 2, 3]);
        assert_eq!(
            reconstruct_steps(&[1, 2], &tables.split),
            Err(TraceError::DimensionMismatch { table: 3, piles: 2 })
        );
    }

    #[test]
    fn test_invalid_split() {
        let mut split: Table<usize> = Table::new(3);
        split.set(0, 2, 2);
        assert_eq!(
            reconstruct_steps(&[1, 2, 3], &split),
            Err(TraceError::InvalidSplit {
                range: Interval::new(0, 2),
                split: 2
            })
        );
    }
}
