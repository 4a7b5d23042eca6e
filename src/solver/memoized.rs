//! Top-down recursion with memoization
//!
//! Same recurrence as the interval DP, evaluated on demand. Each distinct
//! range owns exactly one call record, found through a two-dimensional index;
//! every invocation (leaf, cache hit, or fresh) bumps both the global call
//! counter and that record's count.

use std::time::Instant;

use bitvec::prelude::*;
use tracing::debug;

use super::calls::{CallGraph, RecordId, RecursionOutcome};
use super::{Solver, Table};
use crate::piles::{Interval, PrefixSums};

/// Memoized recursive solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct Memoized;

impl Memoized {
    /// Solve `piles` top-down, recording every invocation.
    pub fn solve(piles: &[u64]) -> RecursionOutcome {
        let n = piles.len();
        if n == 0 {
            return RecursionOutcome {
                total_cost: 0,
                call_count: 0,
                graph: CallGraph::new(),
                elapsed: Default::default(),
            };
        }

        let mut run = MemoRun {
            n,
            prefix: PrefixSums::build(piles),
            cache: Table::new(n),
            solved: bitvec![0; n * n],
            index: vec![None; n * n],
            graph: CallGraph::new(),
            calls: 0,
        };

        let start = Instant::now();
        let total_cost = run.visit(0, n - 1, 0, None);
        let elapsed = start.elapsed();

        debug!(
            piles = n,
            total = total_cost,
            calls = run.calls,
            records = run.graph.len(),
            "memoized recursion solved"
        );

        RecursionOutcome {
            total_cost,
            call_count: run.calls,
            graph: run.graph,
            elapsed,
        }
    }
}

struct MemoRun {
    n: usize,
    prefix: PrefixSums,
    cache: Table<u64>,
    solved: BitVec,
    index: Vec<Option<RecordId>>,
    graph: CallGraph,
    calls: u64,
}

impl MemoRun {
    fn record_for(&mut self, i: usize, j: usize, depth: usize) -> RecordId {
        let slot = i * self.n + j;
        match self.index[slot] {
            Some(id) => id,
            None => {
                let id = self.graph.push_record(Interval::new(i, j), depth);
                self.index[slot] = Some(id);
                id
            }
        }
    }

    fn visit(&mut self, i: usize, j: usize, depth: usize, parent: Option<RecordId>) -> u64 {
        self.calls += 1;

        let id = self.record_for(i, j, depth);
        if let Some(parent) = parent {
            self.graph.link(parent, id);
        }
        self.graph.record_mut(id).count += 1;

        if i == j {
            self.graph.record_mut(id).result = Some(0);
            return 0;
        }

        if self.solved[i * self.n + j] {
            return self.cache.get(i, j);
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

        self.cache.set(i, j, best);
        self.solved.set(i * self.n + j, true);
        self.graph.record_mut(id).result = Some(best);
        best
    }
}

impl Solver for Memoized {
    type Output = RecursionOutcome;

    fn name(&self) -> &'static str {
        "memoized"
    }

    fn description(&self) -> &'static str {
        "top-down recursion with a per-range cache, O(n^3) time"
    }

    fn solve(&self, piles: &[u64]) -> Self::Output {
        Memoized::solve(piles)
    }

    fn total_cost(&self, output: &Self::Output) -> u64 {
        output.total_cost
    }
}
