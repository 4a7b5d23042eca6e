//! Step-through cursor over a merge trace
//!
//! Position `None` is the initial row; position `Some(i)` shows the row
//! right after step `i`.

use super::MergeStep;
use crate::piles::{Pile, PileRow};

/// Forward/backward cursor over a list of merge steps.
#[derive(Debug, Clone)]
pub struct Replay<'a> {
    initial: PileRow,
    steps: &'a [MergeStep],
    position: Option<usize>,
}

impl<'a> Replay<'a> {
    /// Cursor positioned before the first step.
    pub fn new(initial: PileRow, steps: &'a [MergeStep]) -> Self {
        Self {
            initial,
            steps,
            position: None,
        }
    }

    /// Index of the last applied step, `None` before the first.
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Apply the next step, returning it; `None` once finished.
    pub fn advance(&mut self) -> Option<&'a MergeStep> {
        let next = self.position.map_or(0, |p| p + 1);
        let step = self.steps.get(next)?;
        self.position = Some(next);
        Some(step)
    }

    /// Undo the last applied step. Returns false at the start.
    pub fn back(&mut self) -> bool {
        match self.position {
            None => false,
            Some(0) => {
                self.position = None;
                true
            }
            Some(p) => {
                self.position = Some(p - 1);
                true
            }
        }
    }

    /// Return to the initial row.
    pub fn reset(&mut self) {
        self.position = None;
    }

    /// Last applied step.
    pub fn current_step(&self) -> Option<&'a MergeStep> {
        self.position.and_then(|p| self.steps.get(p))
    }

    /// Step that `advance` would apply next.
    pub fn peek(&self) -> Option<&'a MergeStep> {
        self.steps.get(self.position.map_or(0, |p| p + 1))
    }

    /// Row as of the current position.
    pub fn current_piles(&self) -> &[Pile] {
        match self.current_step() {
            Some(step) => &step.after,
            None => self.initial.piles(),
        }
    }

    /// Cost accumulated up to the current position.
    pub fn accumulated_cost(&self) -> u64 {
        self.current_step().map_or(0, |step| step.running_total)
    }

    /// Whether every step has been applied.
    pub fn is_finished(&self) -> bool {
        self.peek().is_none()
    }

    /// Number of steps not yet applied.
    pub fn remaining(&self) -> usize {
        self.steps.len() - self.position.map_or(0, |p| p + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Greedy;

    #[test]
    fn test_forward_and_back() {
        let piles = [1, 3, 3, 2, 4];
        let outcome = Greedy::solve(&piles);
        let mut replay = Replay::new(PileRow::from_weights(&piles), &outcome.steps);

        assert_eq!(replay.current_piles().len(), 5);
        assert_eq!(replay.remaining(), 4);
        assert!(!replay.back());

        let first = replay.advance().unwrap();
        assert_eq!(first.cost, 4);
        assert_eq!(replay.current_piles().len(), 4);
        assert_eq!(replay.accumulated_cost(), 4);

        while replay.advance().is_some() {}
        assert!(replay.is_finished());
        assert_eq!(replay.current_piles().len(), 1);
        assert_eq!(replay.accumulated_cost(), 31);

        assert!(replay.back());
        assert_eq!(replay.position(), Some(2));
        replay.reset();
        assert_eq!(replay.position(), None);
        assert_eq!(replay.accumulated_cost(), 0);
    }

    #[test]
    fn test_empty_trace() {
        let mut replay = Replay::new(PileRow::from_weights(&[3]), &[]);
        assert!(replay.is_finished());
        assert!(replay.advance().is_none());
        assert_eq!(replay.current_piles()[0].value, 3);
    }
}
