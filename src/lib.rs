//! # Stone Merge: Interval DP, Instrumented
//!
//! Given an ordered row of pile weights, merge adjacent piles until one
//! remains; each merge costs the sum of the two piles. This crate computes
//! the minimum total cost four different ways and records enough about each
//! run for a presentation layer to animate and compare them.
//!
//! ## Strategies
//!
//! 1. **Interval DP**: fill `cost[i][j]` by increasing interval length
//! 2. **Memoized recursion**: same recurrence top-down, one record per range
//! 3. **Naive recursion**: no cache, exponential call tree
//! 4. **Greedy**: cheapest adjacent pair first, not optimal
//!
//! The DP split table is replayed into concrete [`MergeStep`]s; the
//! [`MergeSession`] validates hand-made merges against the same rule.
//!
//! ## Usage Example
//!
//! ```
//! use stone_merge::{parse_piles, Analysis, AnalysisConfig};
//!
//! let piles = parse_piles("1, 3, 3, 2, 4").unwrap();
//! let analysis = Analysis::run(piles, &AnalysisConfig::default()).unwrap();
//! assert_eq!(analysis.optimal_cost(), 30);
//! assert_eq!(analysis.steps().len(), 4);
//! assert_eq!(analysis.greedy_report().extra_cost(), 1);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules
pub mod piles; // Pile sequences, intervals, prefix sums, runtime rows
pub mod solver; // DP, memoized, naive and greedy solvers
pub mod trace; // Split-table replay into merge steps
pub mod session; // Interactive merge validation
pub mod compare; // Strategy comparison reports
mod workbench; // Atomic reload of analysis + session

// Re-exports for convenience
pub use piles::{parse_piles, parse_piles_with_limit, InputError, Interval, Pile, PileRow, PileSequence};
pub use solver::{DpTables, Greedy, GreedyOutcome, IntervalDp, Memoized, Naive, RecursionOutcome, Solver};
pub use trace::{reconstruct_steps, MergeStep, Replay, TraceError};
pub use session::{MergeSession, SelectionError, Verdict};
pub use compare::{ComplexityReport, GreedyReport};
pub use workbench::Workbench;

use thiserror::Error;
use tracing::{info, warn};

/// Configuration parameters for an analysis run
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Largest pile count accepted at all
    pub max_piles: usize,

    /// Largest pile count for which the naive solver (and the complexity
    /// comparison) is run; its call count grows exponentially
    pub recursive_pile_limit: usize,

    /// Run the naive solver when within the limit
    pub run_naive: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_piles: piles::DEFAULT_MAX_PILES,
            recursive_pile_limit: 10,
            run_naive: true,
        }
    }
}

impl AnalysisConfig {
    /// Set the overall pile limit.
    pub fn with_max_piles(mut self, max_piles: usize) -> Self {
        self.max_piles = max_piles;
        self
    }

    /// Set the pile limit for naive recursion.
    pub fn with_recursive_limit(mut self, limit: usize) -> Self {
        self.recursive_pile_limit = limit;
        self
    }

    /// Enable or disable the naive solver.
    pub fn with_naive(mut self, enabled: bool) -> Self {
        self.run_naive = enabled;
        self
    }

    /// Reject limits that make every input invalid.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.max_piles == 0 {
            return Err(AnalysisError::InvalidConfiguration(
                "max piles must be > 0".to_string(),
            ));
        }
        if self.recursive_pile_limit == 0 {
            return Err(AnalysisError::InvalidConfiguration(
                "recursive pile limit must be > 0".to_string(),
            ));
        }
        if self.recursive_pile_limit > self.max_piles {
            return Err(AnalysisError::InvalidConfiguration(format!(
                "recursive pile limit {} exceeds max piles {}",
                self.recursive_pile_limit, self.max_piles
            )));
        }
        Ok(())
    }

    /// Whether the naive solver should run for `pile_count` piles.
    pub fn allows_naive(&self, pile_count: usize) -> bool {
        self.run_naive && pile_count <= self.recursive_pile_limit
    }
}

/// Errors that can occur during analysis
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Malformed pile input
    #[error("invalid input: {0}")]
    Input(#[from] InputError),

    /// Split table could not be replayed
    #[error("trace reconstruction failed: {0}")]
    Trace(#[from] TraceError),

    /// Pile count above a configured limit
    #[error("too many piles: {count} > {max}")]
    TooManyPiles {
        /// Number of piles supplied
        count: usize,
        /// Limit that was exceeded
        max: usize,
    },

    /// Inconsistent configuration
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Everything derived from one pile sequence
///
/// Built in one go by [`Analysis::run`]; never updated incrementally.
#[derive(Debug, Clone)]
pub struct Analysis {
    piles: PileSequence,
    dp: DpTables,
    steps: Vec<MergeStep>,
    greedy: GreedyOutcome,
    memoized: RecursionOutcome,
    naive: Option<RecursionOutcome>,
}

impl Analysis {
    /// Run every strategy on `piles`
    ///
    /// Orchestrates:
    /// 1. Interval DP tables and their step trace
    /// 2. Greedy merge sequence
    /// 3. Memoized recursion, and naive recursion when within the limit
    pub fn run(piles: PileSequence, config: &AnalysisConfig) -> Result<Self, AnalysisError> {
        config.validate()?;
        if piles.len() > config.max_piles {
            return Err(AnalysisError::TooManyPiles {
                count: piles.len(),
                max: config.max_piles,
            });
        }

        let dp = IntervalDp::solve(&piles);
        let steps = reconstruct_steps(&piles, &dp.split)?;
        let greedy = Greedy::solve(&piles);
        let memoized = Memoized::solve(&piles);

        let naive = if config.allows_naive(piles.len()) {
            Some(Naive::solve(&piles))
        } else {
            warn!(
                piles = piles.len(),
                limit = config.recursive_pile_limit,
                "naive solver skipped"
            );
            None
        };

        debug_assert_eq!(dp.total_cost(), memoized.total_cost);
        debug_assert!(naive
            .as_ref()
            .map_or(true, |n| n.total_cost == dp.total_cost()));

        info!(
            piles = piles.len(),
            optimal = dp.total_cost(),
            greedy = greedy.total_cost,
            memoized_calls = memoized.call_count,
            naive_calls = naive.as_ref().map(|n| n.call_count),
            "analysis complete"
        );

        Ok(Self {
            piles,
            dp,
            steps,
            greedy,
            memoized,
            naive,
        })
    }

    /// Input sequence.
    pub fn piles(&self) -> &PileSequence {
        &self.piles
    }

    /// Minimum total merge cost.
    pub fn optimal_cost(&self) -> u64 {
        self.dp.total_cost()
    }

    /// DP cost/split tables.
    pub fn dp(&self) -> &DpTables {
        &self.dp
    }

    /// Merge steps implied by the DP split table.
    pub fn steps(&self) -> &[MergeStep] {
        &self.steps
    }

    /// Greedy run.
    pub fn greedy(&self) -> &GreedyOutcome {
        &self.greedy
    }

    /// Memoized recursion run.
    pub fn memoized(&self) -> &RecursionOutcome {
        &self.memoized
    }

    /// Naive recursion run, if it was within the limit.
    pub fn naive(&self) -> Option<&RecursionOutcome> {
        self.naive.as_ref()
    }

    /// Greedy vs optimal comparison.
    pub fn greedy_report(&self) -> GreedyReport {
        GreedyReport::from_parts(&self.dp, self.greedy.clone())
    }

    /// Cursor over the DP step trace.
    pub fn replay(&self) -> Replay<'_> {
        Replay::new(self.piles.initial_row(), &self.steps)
    }

    /// Cursor over the greedy step trace.
    pub fn greedy_replay(&self) -> Replay<'_> {
        Replay::new(self.piles.initial_row(), &self.greedy.steps)
    }

    /// Fresh hand-merge session judged against this analysis' optimum.
    pub fn session(&self) -> MergeSession {
        MergeSession::new(&self.piles, self.optimal_cost())
    }
}
