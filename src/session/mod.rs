//! Interactive merge validation
//!
//! A [`MergeSession`] lets a user merge piles by hand. Selections are checked
//! against the same adjacency rule the solvers use; rejected selections never
//! change the session. Once a single pile remains the accumulated cost is
//! compared with the optimum.

use std::fmt;

use thiserror::Error;
use tracing::{debug, info};

use crate::piles::{Pile, PileRow, PileSequence};
use crate::trace::MergeStep;

/// Rejected user selection. The session is left unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// Anything other than exactly two piles was selected.
    #[error("select exactly two piles to merge (got {selected})")]
    WrongCount {
        /// Number of selected positions.
        selected: usize,
    },

    /// A position does not exist in the current row.
    #[error("pile position {index} is out of range (row has {len} piles)")]
    OutOfRange {
        /// Offending position.
        index: usize,
        /// Current row length.
        len: usize,
    },

    /// The two positions are not neighbours.
    #[error("piles must be adjacent (selected {first} and {second})")]
    NotAdjacent {
        /// Smaller selected position.
        first: usize,
        /// Larger selected position.
        second: usize,
    },

    /// Everything is already merged.
    #[error("all piles are already merged")]
    AlreadyComplete,
}

/// How a finished session compares with the optimum.
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The user matched the optimal cost.
    Optimal,
    /// The user spent less than the DP optimum (cannot happen for a correct optimum).
    BelowOptimal {
        /// Amount below the optimum.
        saved: u64,
    },
    /// The user spent more than necessary.
    AboveOptimal {
        /// Amount above the optimum.
        extra: u64,
    },
}

impl Verdict {
    /// Compare a finished total with the optimum.
    pub fn judge(total: u64, optimal: u64) -> Self {
        if total > optimal {
            Verdict::AboveOptimal {
                extra: total - optimal,
            }
        } else if total < optimal {
            Verdict::BelowOptimal {
                saved: optimal - total,
            }
        } else {
            Verdict::Optimal
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Optimal => write!(f, "optimal"),
            Verdict::BelowOptimal { saved } => write!(f, "{} below the optimum", saved),
            Verdict::AboveOptimal { extra } => write!(f, "{} above the optimum", extra),
        }
    }
}

/// Stateful hand-merge session over one pile sequence.
#[derive(Debug, Clone)]
pub struct MergeSession {
    initial: PileRow,
    row: PileRow,
    history: Vec<MergeStep>,
    total: u64,
    optimal: u64,
}

impl MergeSession {
    /// Start a session on `piles`, judged against `optimal`.
    pub fn new(piles: &PileSequence, optimal: u64) -> Self {
        let initial = piles.initial_row();
        Self {
            row: initial.clone(),
            initial,
            history: Vec::new(),
            total: 0,
            optimal,
        }
    }

    /// Merge whatever positions are selected; exactly two are required.
    pub fn merge_selection(&mut self, selected: &[usize]) -> Result<&MergeStep, SelectionError> {
        match *selected {
            [a, b] => self.merge(a, b),
            _ => Err(SelectionError::WrongCount {
                selected: selected.len(),
            }),
        }
    }

    /// Merge the piles at positions `a` and `b` (any order).
    pub fn merge(&mut self, a: usize, b: usize) -> Result<&MergeStep, SelectionError> {
        if self.row.is_merged() {
            return Err(SelectionError::AlreadyComplete);
        }

        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        let len = self.row.len();
        if second >= len {
            return Err(SelectionError::OutOfRange { index: second, len });
        }
        if second - first != 1 {
            return Err(SelectionError::NotAdjacent { first, second });
        }

        let step = MergeStep::apply(&mut self.row, first, self.total, None)
            .ok_or(SelectionError::OutOfRange { index: second, len })?;
        debug!(slot = first, cost = step.cost, total = step.running_total, "user merge");
        self.total = step.running_total;
        self.history.push(step);

        if let Some(verdict) = self.verdict() {
            info!(total = self.total, optimal = self.optimal, %verdict, "session complete");
        }

        Ok(&self.history[self.history.len() - 1])
    }

    /// Current row.
    pub fn piles(&self) -> &[Pile] {
        self.row.piles()
    }

    /// Merges made so far.
    pub fn history(&self) -> &[MergeStep] {
        &self.history
    }

    /// Accumulated user cost.
    pub fn total_cost(&self) -> u64 {
        self.total
    }

    /// Optimal cost this session is judged against.
    pub fn optimal_cost(&self) -> u64 {
        self.optimal
    }

    /// Whether a single pile remains.
    pub fn is_complete(&self) -> bool {
        self.row.is_merged()
    }

    /// Comparison with the optimum, once complete.
    pub fn verdict(&self) -> Option<Verdict> {
        self.is_complete()
            .then(|| Verdict::judge(self.total, self.optimal))
    }

    /// Discard all progress and start over.
    pub fn reset(&mut self) {
        self.row = self.initial.clone();
        self.history.clear();
        self.total = 0;
    }
}
