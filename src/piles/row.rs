//! Runtime pile row
//!
//! The current left-to-right list of piles while merges are being applied.
//! Every component that merges (trace replay, greedy, interactive session)
//! goes through [`PileRow::merge_adjacent`], so the adjacency and cost rule
//! lives in exactly one place.

use super::Interval;

/// One pile in the current row: its weight and the original indices it covers
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pile {
    /// Combined weight
    pub value: u64,

    /// Original-index provenance
    pub range: Interval,
}

impl Pile {
    /// Singleton pile at original position `index`
    pub fn original(index: usize, value: u64) -> Self {
        Self {
            value,
            range: Interval::single(index),
        }
    }
}

/// Result of merging the piles at `slot` and `slot + 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Merge {
    /// Position of the left operand in the row before the merge
    pub slot: usize,
    /// Left operand
    pub left: Pile,
    /// Right operand
    pub right: Pile,
    /// Pile that replaced both operands at `slot`
    pub merged: Pile,
}

impl Merge {
    /// Cost charged for this merge (sum of both operands)
    pub fn cost(&self) -> u64 {
        self.merged.value
    }
}

/// Ordered list of current piles
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PileRow {
    piles: Vec<Pile>,
}

impl PileRow {
    /// Row of singleton piles, one per weight
    pub fn from_weights(weights: &[u64]) -> Self {
        Self {
            piles: weights
                .iter()
                .enumerate()
                .map(|(index, &value)| Pile::original(index, value))
                .collect(),
        }
    }

    /// Number of piles currently in the row
    pub fn len(&self) -> usize {
        self.piles.len()
    }

    /// Whether the row holds no piles at all
    pub fn is_empty(&self) -> bool {
        self.piles.is_empty()
    }

    /// Whether everything has been merged into a single pile
    pub fn is_merged(&self) -> bool {
        self.piles.len() <= 1
    }

    /// Pile at `slot`
    pub fn get(&self, slot: usize) -> Option<&Pile> {
        self.piles.get(slot)
    }

    /// All piles, left to right
    pub fn piles(&self) -> &[Pile] {
        &self.piles
    }

    /// Current weights, left to right
    pub fn values(&self) -> Vec<u64> {
        self.piles.iter().map(|pile| pile.value).collect()
    }

    /// Current provenance intervals, left to right
    pub fn ranges(&self) -> Vec<Interval> {
        self.piles.iter().map(|pile| pile.range).collect()
    }

    /// Slot whose pile covers exactly `range`
    pub fn position_of(&self, range: Interval) -> Option<usize> {
        self.piles.iter().position(|pile| pile.range == range)
    }

    /// Cost of merging `slot` with `slot + 1`, if that pair exists
    pub fn pair_cost(&self, slot: usize) -> Option<u64> {
        let left = self.piles.get(slot)?;
        let right = self.piles.get(slot + 1)?;
        Some(left.value + right.value)
    }

    /// Merge the piles at `slot` and `slot + 1` in place
    ///
    /// Returns `None` (and leaves the row untouched) when `slot + 1` is out
    /// of range.
    pub fn merge_adjacent(&mut self, slot: usize) -> Option<Merge> {
        if slot + 1 >= self.piles.len() {
            return None;
        }

        let left = self.piles[slot];
        let right = self.piles[slot + 1];
        debug_assert!(
            left.range.is_followed_by(&right.range),
            "row piles {} and {} are not contiguous",
            left.range,
            right.range
        );

        let merged = Pile {
            value: left.value + right.value,
            range: left.range.join(&right.range),
        };
        self.piles[slot] = merged;
        self.piles.remove(slot + 1);

        Some(Merge {
            slot,
            left,
            right,
            merged,
        })
    }
}
