//! Greedy heuristic: always merge the cheapest adjacent pair
//!
//! Each round scans adjacent pairs left to right and keeps the first pair
//! with the minimum sum. Terminates after exactly n - 1 merges but is not
//! optimal in general; [1, 3, 3, 2, 4] costs 31 greedily against 30.

use tracing::{debug, trace};

use super::Solver;
use crate::piles::PileRow;
use crate::trace::MergeStep;

/// Greedy solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greedy;

/// Result of the greedy strategy.
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreedyOutcome {
    /// Sum of all merge costs.
    pub total_cost: u64,
    /// Merges in the order they were made.
    pub steps: Vec<MergeStep>,
}

impl Greedy {
    /// Run the greedy merge loop on `piles`.
    pub fn solve(piles: &[u64]) -> GreedyOutcome {
        let mut row = PileRow::from_weights(piles);
        let mut steps = Vec::with_capacity(piles.len().saturating_sub(1));
        let mut total_cost = 0u64;

        while let Some(slot) = cheapest_pair(&row) {
            let Some(step) = MergeStep::apply(&mut row, slot, total_cost, None) else {
                break;
            };
            trace!(slot, cost = step.cost, "greedy merge");
            total_cost = step.running_total;
            steps.push(step);
        }

        debug!(piles = piles.len(), total = total_cost, "greedy solved");
        GreedyOutcome { total_cost, steps }
    }
}

/// Left slot of the first adjacent pair with the minimum sum.
fn cheapest_pair(row: &PileRow) -> Option<usize> {
    let mut best: Option<(usize, u64)> = None;
    for slot in 0..row.len().saturating_sub(1) {
        let Some(cost) = row.pair_cost(slot) else {
            continue;
        };
        match best {
            Some((_, best_cost)) if cost >= best_cost => {}
            _ => best = Some((slot, cost)),
        }
    }
    best.map(|(slot, _)| slot)
}

impl Solver for Greedy {
    type Output = GreedyOutcome;

    fn name(&self) -> &'static str {
        "greedy"
    }

    fn description(&self) -> &'static str {
        "merge the cheapest adjacent pair each round, O(n^2), not optimal"
    }

    fn solve(&self, piles: &[u64]) -> Self::Output {
        Greedy::solve(piles)
    }

    fn total_cost(&self, output: &Self::Output) -> u64 {
        output.total_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_trace() {
        let outcome = Greedy::solve(&[1, 3, 3, 2, 4]);
        let slots: Vec<usize> = outcome.steps.iter().map(|s| s.slot).collect();
        let costs: Vec<u64> = outcome.steps.iter().map(|s| s.cost).collect();
        assert_eq!(slots, vec![0, 1, 0, 0]);
        assert_eq!(costs, vec![4, 5, 9, 13]);
        assert_eq!(outcome.total_cost, 31);
        assert_eq!(outcome.steps.last().unwrap().running_total, 31);
    }

    #[test]
    fn ties_pick_leftmost_pair() {
        let outcome = Greedy::solve(&[2, 2, 2, 2]);
        assert_eq!(outcome.steps[0].slot, 0);
    }

    #[test]
    fn single_pile_has_no_steps() {
        let outcome = Greedy::solve(&[9]);
        assert_eq!(outcome.total_cost, 0);
        assert!(outcome.steps.is_empty());
    }

    #[test]
    fn exactly_n_minus_one_steps() {
        for n in 1usize..10 {
            let piles: Vec<u64> = (0..n).map(|i| (i * 7 % 5) as u64).collect();
            assert_eq!(Greedy::solve(&piles).steps.len(), n.saturating_sub(1));
        }
    }
}
