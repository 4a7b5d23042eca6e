//! Discrete merge steps with before/after snapshots

use std::fmt;

use crate::piles::{Interval, Pile, PileRow};

/// One pairwise merge, replayable front to back.
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeStep {
    /// Current-row position of the left operand; the right one is `slot + 1`.
    pub slot: usize,
    /// Left operand.
    pub left: Pile,
    /// Right operand.
    pub right: Pile,
    /// Resulting pile.
    pub merged: Pile,
    /// Cost of this merge.
    pub cost: u64,
    /// Accumulated cost including this merge.
    pub running_total: u64,
    /// DP split point `k` that produced this merge, if it came from a split table.
    pub split: Option<usize>,
    /// Row before the merge.
    pub before: Vec<Pile>,
    /// Row after the merge.
    pub after: Vec<Pile>,
}

impl MergeStep {
    /// Merge `slot` and `slot + 1` in `row`, recording the step.
    ///
    /// `total_before` is the accumulated cost prior to this merge. Returns
    /// `None` without touching `row` if the pair does not exist.
    pub fn apply(
        row: &mut PileRow,
        slot: usize,
        total_before: u64,
        split: Option<usize>,
    ) -> Option<Self> {
        let before = row.piles().to_vec();
        let merge = row.merge_adjacent(slot)?;
        let cost = merge.cost();

        Some(Self {
            slot: merge.slot,
            left: merge.left,
            right: merge.right,
            merged: merge.merged,
            cost,
            running_total: total_before + cost,
            split,
            before,
            after: row.piles().to_vec(),
        })
    }

    /// Slots to highlight in the "before" row.
    pub fn highlight(&self) -> [usize; 2] {
        [self.slot, self.slot + 1]
    }

    /// Original-index range covered by the merged pile.
    pub fn range(&self) -> Interval {
        self.merged.range
    }

    /// Weights of the row after this merge.
    pub fn values_after(&self) -> Vec<u64> {
        self.after.iter().map(|pile| pile.value).collect()
    }
}

impl fmt::Display for MergeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "merge {} ({}) + {} ({}) at slots {}-{}, cost {}, total {}",
            self.left.range,
            self.left.value,
            self.right.range,
            self.right.value,
            self.slot,
            self.slot + 1,
            self.cost,
            self.running_total
        )
    }
}
