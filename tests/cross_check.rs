//! Cross-algorithm properties over random pile sequences

mod common;

use proptest::prelude::*;
use stone_merge::solver::Table;
use stone_merge::{
    reconstruct_steps, Analysis, AnalysisConfig, Greedy, IntervalDp, Memoized, Naive,
    SelectionError,
};

fn weights(max_len: usize) -> impl Strategy<Value = Vec<u64>> {
    proptest::collection::vec(0u64..50, 1..=max_len)
}

proptest! {
    #[test]
    fn exact_solvers_agree(piles in weights(8)) {
        let dp = IntervalDp::solve(&piles).total_cost();
        prop_assert_eq!(Memoized::solve(&piles).total_cost, dp);
        prop_assert_eq!(Naive::solve(&piles).total_cost, dp);
    }

    #[test]
    fn greedy_never_beats_dp(piles in weights(12)) {
        let dp = IntervalDp::solve(&piles).total_cost();
        let greedy = Greedy::solve(&piles);
        prop_assert!(greedy.total_cost >= dp);
        prop_assert_eq!(greedy.steps.len(), piles.len() - 1);
    }

    #[test]
    fn memoization_never_costs_more_calls(piles in weights(8)) {
        let memo = Memoized::solve(&piles).call_count;
        let naive = Naive::solve(&piles).call_count;
        prop_assert!(memo <= naive);
        if piles.len() >= 4 {
            prop_assert!(memo < naive);
        }
    }

    #[test]
    fn trace_replays_to_optimum(piles in weights(16)) {
        let tables = IntervalDp::solve(&piles);
        let steps = reconstruct_steps(&piles, &tables.split).expect("dp split table replays");
        prop_assert_eq!(steps.len(), piles.len() - 1);

        let step_total: u64 = steps.iter().map(|s| s.cost).sum();
        prop_assert_eq!(step_total, tables.total_cost());

        if let Some(last) = steps.last() {
            prop_assert_eq!(last.after.len(), 1);
            prop_assert_eq!(last.after[0].value, piles.iter().sum::<u64>());
            prop_assert_eq!(last.running_total, tables.total_cost());
        }
        for step in &steps {
            prop_assert_eq!(step.before.len(), step.after.len() + 1);
            prop_assert!(step.left.range.is_followed_by(&step.right.range));
        }
    }

    #[test]
    fn any_in_range_split_table_replays(
        piles in weights(10),
        seeds in proptest::collection::vec(any::<usize>(), 100),
    ) {
        let n = piles.len();
        let mut split: Table<usize> = Table::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                split.set(i, j, i + seeds[i * n + j] % (j - i));
            }
        }

        let steps = reconstruct_steps(&piles, &split).expect("in-range splits always replay");
        prop_assert_eq!(steps.len(), n - 1);
        if let Some(last) = steps.last() {
            prop_assert_eq!(last.after.len(), 1);
            prop_assert_eq!(last.after[0].value, piles.iter().sum::<u64>());
        }
    }

    #[test]
    fn any_complete_session_is_at_least_optimal(
        piles in weights(10),
        choices in proptest::collection::vec(any::<usize>(), 10),
    ) {
        let analysis = Analysis::run(common::piles(&piles), &AnalysisConfig::default())
            .expect("analysis succeeds");
        let mut session = analysis.session();

        for choice in choices.iter().take(piles.len() - 1) {
            let slot = choice % (session.piles().len() - 1);
            session.merge(slot, slot + 1).expect("adjacent merge accepted");
        }

        prop_assert!(session.is_complete());
        prop_assert!(session.total_cost() >= analysis.optimal_cost());
        prop_assert_eq!(session.history().len(), piles.len() - 1);
    }

    #[test]
    fn non_adjacent_selection_is_rejected(piles in weights(10), gap in 2usize..6) {
        let analysis = Analysis::run(common::piles(&piles), &AnalysisConfig::default())
            .expect("analysis succeeds");
        let mut session = analysis.session();
        let before = session.piles().to_vec();

        if gap < piles.len() {
            let err = session.merge(0, gap).unwrap_err();
            prop_assert_eq!(err, SelectionError::NotAdjacent { first: 0, second: gap });
        }
        prop_assert_eq!(session.piles(), before.as_slice());
        prop_assert_eq!(session.total_cost(), 0);
    }

    #[test]
    fn solvers_are_idempotent(piles in weights(8)) {
        prop_assert_eq!(IntervalDp::solve(&piles), IntervalDp::solve(&piles));
        prop_assert_eq!(Greedy::solve(&piles), Greedy::solve(&piles));

        let (a, b) = (Memoized::solve(&piles), Memoized::solve(&piles));
        prop_assert_eq!(a.total_cost, b.total_cost);
        prop_assert_eq!(a.call_count, b.call_count);
        prop_assert_eq!(a.graph, b.graph);
    }
}
