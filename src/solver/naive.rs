//! Top-down recursion without a cache
//!
//! Exists only as the contrast baseline for the memoized solver: every
//! invocation rescans all split points and owns a fresh call record, so the
//! graph is the literal recursion tree with repeated sub-ranges.

use std::time::Instant;

use tracing::debug;

use super::calls::{CallGraph, RecordId, RecursionOutcome};
use super::Solver;
use crate::piles::{Interval, PrefixSums};

/// Uncached recursive solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct Naive;

impl Naive {
    /// Solve `piles` by plain recursion. Exponential in `piles.len()`.
    pub fn solve(piles: &[u64]) -> RecursionOutcome {
        let n = piles.len();
        let mut run = NaiveRun {
            prefix: PrefixSums::build(piles),
            graph: CallGraph::new(),
            calls: 0,
        };

        let start = Instant::now();
        let total_cost = if n == 0 { 0 } else { run.visit(0, n - 1, 0, None) };
        let elapsed = start.elapsed();

        debug!(
            piles = n,
            total = total_cost,
            calls = run.calls,
            "naive recursion solved"
        );

        RecursionOutcome {
            total_cost,
            call_count: run.calls,
            graph: run.graph,
            elapsed,
        }
    }
}

struct NaiveRun {
    prefix: PrefixSums,
    graph: CallGraph,
    calls: u64,
}

impl NaiveRun {
    fn visit(&mut self, i: usize, j: usize, depth: usize, parent: Option<RecordId>) -> u64 {
        self.calls += 1;

        let id = self.graph.push_record(Interval::new(i, j), depth);
        self.graph.record_mut(id).count = 1;
        if let Some(parent) = parent {
            self.graph.link(parent, id);
        }

        if i == j {
            self.graph.record_mut(id).result = Some(0);
            return 0;
        }

        let range_sum = self.prefix.range_sum(i, j);
        let mut best = u64::MAX;
        for k in i..j {
            let left = self.visit(i, k, depth + 1, Some(id));
            let right = self.visit(k + 1, j, depth + 1, Some(id));
            let candidate = left + right + range_sum;
            if candidate < best {
                best = candidate;
            }
        }

        self.graph.record_mut(id).result = Some(best);
        best
    }
}

impl Solver for Naive {
    type Output = RecursionOutcome;

    fn name(&self) -> &'static str {
        "naive"
    }

    fn description(&self) -> &'static str {
        "top-down recursion without caching, exponential call count"
    }

    fn solve(&self, piles: &[u64]) -> Self::Output {
        Naive::solve(piles)
    }

    fn total_cost(&self, output: &Self::Output) -> u64 {
        output.total_cost
    }
}
