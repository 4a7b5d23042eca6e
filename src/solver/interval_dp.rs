//! Bottom-up interval DP
//!
//! cost[i][i] = 0
//! cost[i][j] = min_{i <= k < j} cost[i][k] + cost[k+1][j] + sum(i..=j)
//!
//! Intervals are filled strictly by increasing length, so both halves of any
//! split are final before the longer interval reads them.

use bitvec::prelude::*;
use tracing::debug;

use super::{Solver, Table};
use crate::piles::PrefixSums;

/// Bottom-up interval DP solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalDp;

/// Cost and split tables produced by [`IntervalDp`].
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpTables {
    /// Prefix sums the recurrence was evaluated with.
    pub prefix: PrefixSums,
    /// `cost[i][j]`: minimum cost to merge piles i..=j.
    pub cost: Table<u64>,
    /// `split[i][j]`: first k achieving `cost[i][j]` in ascending scan.
    pub split: Table<usize>,
}

impl DpTables {
    /// Number of piles.
    pub fn pile_count(&self) -> usize {
        self.cost.size()
    }

    /// Optimal total, `cost[0][n-1]` (0 for a single pile).
    pub fn total_cost(&self) -> u64 {
        match self.pile_count() {
            0 => 0,
            n => self.cost.get(0, n - 1),
        }
    }

    /// Optimal cost of merging piles i..=j.
    pub fn cost_of(&self, i: usize, j: usize) -> u64 {
        self.cost.get(i, j)
    }

    /// Split point chosen for i..=j (meaningless when i == j).
    pub fn split_of(&self, i: usize, j: usize) -> usize {
        self.split.get(i, j)
    }
}

impl IntervalDp {
    /// Fill the cost and split tables for `piles`.
    pub fn solve(piles: &[u64]) -> DpTables {
        let n = piles.len();
        let prefix = PrefixSums::build(piles);
        let mut cost: Table<u64> = Table::new(n);
        let mut split: Table<usize> = Table::new(n);

        // finalized[i * n + j] is set once cost[i][j] will never change again
        let mut finalized = bitvec![0; n * n];
        for i in 0..n {
            finalized.set(i * n + i, true);
        }

        for len in 2..=n {
            for i in 0..=(n - len) {
                let j = i + len - 1;
                let range_sum = prefix.range_sum(i, j);
                let mut best = u64::MAX;
                let mut best_k = i;

                for k in i..j {
                    debug_assert!(finalized[i * n + k] && finalized[(k + 1) * n + j]);
                    let candidate = cost.get(i, k) + cost.get(k + 1, j) + range_sum;
                    if candidate < best {
                        best = candidate;
                        best_k = k;
                    }
                }

                cost.set(i, j, best);
                split.set(i, j, best_k);
                finalized.set(i * n + j, true);
            }
        }

        let tables = DpTables {
            prefix,
            cost,
            split,
        };
        debug!(piles = n, total = tables.total_cost(), "interval dp solved");
        tables
    }
}

impl Solver for IntervalDp {
    type Output = DpTables;

    fn name(&self) -> &'static str {
        "interval-dp"
    }

    fn description(&self) -> &'static str {
        "bottom-up interval DP by increasing length, O(n^3) time, O(n^2) space"
    }

    fn solve(&self, piles: &[u64]) -> Self::Output {
        IntervalDp::solve(piles)
    }

    fn total_cost(&self, output: &Self::Output) -> u64 {
        output.total_cost()
    }
}
