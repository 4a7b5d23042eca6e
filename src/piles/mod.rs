//! Pile sequences and the runtime pile model
//!
//! The only algorithm input is an ordered list of non-negative weights.
//! Everything derived from it (prefix sums, tables, call graphs, traces)
//! refers back to original indices through [`Interval`].

mod interval;
mod prefix;
mod row;

pub use interval::Interval;
pub use prefix::PrefixSums;
pub use row::{Merge, Pile, PileRow};

use std::ops::Deref;

use thiserror::Error;

/// Default upper bound on the number of piles accepted from text input.
pub const DEFAULT_MAX_PILES: usize = 64;

/// Errors raised while turning user text into a pile sequence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    /// No weights were supplied.
    #[error("pile sequence is empty")]
    Empty,

    /// A token could not be read as a non-negative integer.
    #[error("invalid pile weight '{token}' at position {position}")]
    InvalidToken {
        /// Zero-based token position in the input.
        position: usize,
        /// Offending token text.
        token: String,
    },

    /// More piles than the configured limit.
    #[error("too many piles: {count} > {max}")]
    TooManyPiles {
        /// Number of piles supplied.
        count: usize,
        /// Configured maximum.
        max: usize,
    },

    /// Weights large enough that a merge total could exceed `u64`.
    #[error("pile weights too large: {count} piles cannot be merged without overflowing u64")]
    WeightOverflow {
        /// Number of piles supplied.
        count: usize,
    },
}

/// Validated, immutable pile sequence (length >= 1)
///
/// Any merge order costs at most `total_weight * (len - 1)`; construction
/// rejects weights for which that bound does not fit in a `u64`, so every
/// prefix sum, table cell and running total stays in range.
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PileSequence {
    weights: Vec<u64>,
}

impl PileSequence {
    /// Wrap a weight vector, rejecting empty input and overflowing weights.
    pub fn new(weights: Vec<u64>) -> Result<Self, InputError> {
        if weights.is_empty() {
            return Err(InputError::Empty);
        }
        if cost_bound(&weights).is_none() {
            return Err(InputError::WeightOverflow {
                count: weights.len(),
            });
        }
        Ok(Self { weights })
    }

    /// Number of piles.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Always false for a constructed sequence; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Borrow the weights.
    pub fn weights(&self) -> &[u64] {
        &self.weights
    }

    /// Sum of all weights (the value of the final merged pile).
    pub fn total_weight(&self) -> u64 {
        self.weights.iter().sum()
    }

    /// Singleton row for simulation.
    pub fn initial_row(&self) -> PileRow {
        PileRow::from_weights(&self.weights)
    }
}

impl Deref for PileSequence {
    type Target = [u64];

    fn deref(&self) -> &Self::Target {
        &self.weights
    }
}

impl TryFrom<Vec<u64>> for PileSequence {
    type Error = InputError;

    fn try_from(weights: Vec<u64>) -> Result<Self, Self::Error> {
        Self::new(weights)
    }
}

/// Upper bound on the total cost of any merge order, `None` on overflow.
fn cost_bound(weights: &[u64]) -> Option<u64> {
    let total = weights
        .iter()
        .try_fold(0u64, |acc, &weight| acc.checked_add(weight))?;
    total.checked_mul(weights.len() as u64 - 1)
}

/// Parse comma and/or whitespace separated weights, e.g. `"1, 3, 3, 2, 4"`.
pub fn parse_piles(text: &str) -> Result<PileSequence, InputError> {
    parse_piles_with_limit(text, DEFAULT_MAX_PILES)
}

/// Parse weights, rejecting more than `max_piles` entries.
pub fn parse_piles_with_limit(text: &str, max_piles: usize) -> Result<PileSequence, InputError> {
    let weights = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            token.parse::<u64>().map_err(|_| InputError::InvalidToken {
                position,
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if weights.len() > max_piles {
        return Err(InputError::TooManyPiles {
            count: weights.len(),
            max: max_piles,
        });
    }

    PileSequence::new(weights)
}
