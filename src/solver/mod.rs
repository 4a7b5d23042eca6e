//! Solvers for the stone merge problem
//!
//! Four independent strategies for the same optimisation problem:
//!
//! - [`IntervalDp`]: bottom-up tabulation, O(n³) time, O(n²) space
//! - [`Memoized`]: top-down recursion with a cache, same complexity
//! - [`Naive`]: top-down recursion without a cache, exponential
//! - [`Greedy`]: cheapest adjacent pair first, O(n²), not optimal
//!
//! Every solver is a pure function of the input and allocates its own
//! tables, so hosts can run them in any order or side by side.

mod calls;
mod greedy;
mod interval_dp;
mod memoized;
mod naive;

pub use calls::{CallGraph, CallRecord, GraphStats, RecordId, RecursionOutcome};
pub use greedy::{Greedy, GreedyOutcome};
pub use interval_dp::{DpTables, IntervalDp};
pub use memoized::Memoized;
pub use naive::Naive;

/// Common surface shared by every strategy.
pub trait Solver {
    /// Full result type (tables, call graph, steps...).
    type Output;

    /// Short identifier used in reports and CLI output.
    fn name(&self) -> &'static str;

    /// One-line human description.
    fn description(&self) -> &'static str;

    /// Run the strategy on `piles`.
    fn solve(&self, piles: &[u64]) -> Self::Output;

    /// Total merge cost reported by an output of this strategy.
    fn total_cost(&self, output: &Self::Output) -> u64;
}

/// Square table indexed `[i][j]` for `0 <= i, j < n`
///
/// Only the upper triangle (`i <= j`) carries meaning for interval problems.
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Copy + Default> Table<T> {
    /// Table of `size × size` default cells.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![T::default(); size * size],
        }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell `[i][j]`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        self.cells[i * self.size + j]
    }

    /// Overwrite cell `[i][j]`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        self.cells[i * self.size + j] = value;
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> &[T] {
        &self.cells[i * self.size..(i + 1) * self.size]
    }

    /// Rows as nested vectors, for hosts that render a grid.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        (0..self.size).map(|i| self.row(i).to_vec()).collect()
    }
}
