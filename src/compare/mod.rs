//! Side-by-side strategy reports
//!
//! - [`ComplexityReport`]: memoized vs naive recursion (call counts, timings,
//!   call graphs) to show the effect of caching overlapping sub-ranges.
//! - [`GreedyReport`]: greedy total vs the DP optimum and the extra cost.
//! - [`leaderboard`]: one [`StrategySummary`] per strategy for the same input.

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::piles::PileSequence;
use crate::solver::{
    DpTables, Greedy, GreedyOutcome, IntervalDp, Memoized, Naive, RecursionOutcome, Solver,
};
use crate::{AnalysisConfig, AnalysisError};

/// Cost and timing of one strategy.
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategySummary {
    /// Strategy identifier.
    pub name: &'static str,
    /// Human description.
    pub description: &'static str,
    /// Total cost reported.
    pub total_cost: u64,
    /// Wall-clock time of the solve.
    pub elapsed: Duration,
}

/// Run `solver` once and summarize it.
pub fn summarize<S: Solver>(solver: &S, piles: &[u64]) -> StrategySummary {
    let start = Instant::now();
    let output = solver.solve(piles);
    let elapsed = start.elapsed();
    StrategySummary {
        name: solver.name(),
        description: solver.description(),
        total_cost: solver.total_cost(&output),
        elapsed,
    }
}

/// Summaries for every strategy. The naive solver is left out when the input
/// exceeds `config.recursive_pile_limit` or naive runs are disabled.
pub fn leaderboard(piles: &PileSequence, config: &AnalysisConfig) -> Vec<StrategySummary> {
    let mut board = vec![
        summarize(&IntervalDp, piles),
        summarize(&Memoized, piles),
    ];
    if config.allows_naive(piles.len()) {
        board.push(summarize(&Naive, piles));
    } else {
        warn!(
            piles = piles.len(),
            limit = config.recursive_pile_limit,
            "naive solver skipped"
        );
    }
    board.push(summarize(&Greedy, piles));
    board
}

/// Memoized vs naive recursion on the same input.
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
#[derive(Debug, Clone)]
pub struct ComplexityReport {
    /// Number of piles compared.
    pub pile_count: usize,
    /// Memoized run.
    pub memoized: RecursionOutcome,
    /// Naive run.
    pub naive: RecursionOutcome,
}

impl ComplexityReport {
    /// Run both recursive solvers. Inputs above the recursive limit are rejected.
    pub fn run(piles: &PileSequence, config: &AnalysisConfig) -> Result<Self, AnalysisError> {
        config.validate()?;
        if piles.len() > config.recursive_pile_limit {
            return Err(AnalysisError::TooManyPiles {
                count: piles.len(),
                max: config.recursive_pile_limit,
            });
        }

        let memoized = Memoized::solve(piles);
        let naive = Naive::solve(piles);
        debug!(
            memoized = memoized.call_count,
            naive = naive.call_count,
            "complexity comparison"
        );

        Ok(Self {
            pile_count: piles.len(),
            memoized,
            naive,
        })
    }

    /// Whether both solvers found the same total.
    pub fn costs_agree(&self) -> bool {
        self.memoized.total_cost == self.naive.total_cost
    }

    /// Calls avoided by caching.
    pub fn calls_saved(&self) -> u64 {
        self.naive.call_count.saturating_sub(self.memoized.call_count)
    }

    /// `naive calls / memoized calls` (1.0 when there were no calls).
    pub fn savings_ratio(&self) -> f64 {
        if self.memoized.call_count == 0 {
            return 1.0;
        }
        self.naive.call_count as f64 / self.memoized.call_count as f64
    }

    /// Number of distinct sub-ranges, `n(n+1)/2`.
    pub fn distinct_states(&self) -> usize {
        self.pile_count * (self.pile_count + 1) / 2
    }
}

/// Greedy total against the DP optimum.
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreedyReport {
    /// Optimal cost from the interval DP.
    pub optimal: u64,
    /// Greedy run.
    pub greedy: GreedyOutcome,
}

impl GreedyReport {
    /// Solve both strategies for `piles`.
    pub fn run(piles: &[u64]) -> Self {
        Self::from_parts(&IntervalDp::solve(piles), Greedy::solve(piles))
    }

    /// Build from an existing DP table and greedy outcome.
    pub fn from_parts(dp: &DpTables, greedy: GreedyOutcome) -> Self {
        Self {
            optimal: dp.total_cost(),
            greedy,
        }
    }

    /// Greedy total minus the optimum.
    pub fn extra_cost(&self) -> u64 {
        self.greedy.total_cost.saturating_sub(self.optimal)
    }

    /// Whether greedy happened to find an optimal order.
    pub fn is_optimal(&self) -> bool {
        self.greedy.total_cost == self.optimal
    }
}
