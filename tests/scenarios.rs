//! Concrete inputs with hand-checked results

mod common;

use common::*;
use stone_merge::compare::{ComplexityReport, GreedyReport};
use stone_merge::{Analysis, AnalysisConfig, Greedy, IntervalDp, Memoized, Naive};
use test_case::test_case;

#[test_case(&[1, 3, 3, 2, 4], 30 ; "five piles")]
#[test_case(&[1, 3, 3, 2, 3, 5], 43 ; "six piles")]
#[test_case(&[4, 1, 1, 4], 18 ; "symmetric")]
#[test_case(&[1, 2, 3, 4], 19 ; "increasing")]
#[test_case(&[3, 1, 2], 9 ; "three piles")]
#[test_case(&[5, 6], 11 ; "two piles")]
#[test_case(&[7], 0 ; "single pile")]
#[test_case(&[0, 0, 0], 0 ; "zero weights")]
fn all_exact_solvers_agree(weights: &[u64], expected: u64) {
    assert_eq!(IntervalDp::solve(weights).total_cost(), expected);
    assert_eq!(Memoized::solve(weights).total_cost, expected);
    assert_eq!(Naive::solve(weights).total_cost, expected);
    assert!(Greedy::solve(weights).total_cost >= expected);
}

#[test]
fn six_pile_call_blow_up() {
    let report = ComplexityReport::run(&piles(&[1, 3, 3, 2, 3, 5]), &AnalysisConfig::default())
        .expect("within recursive limit");

    assert!(report.costs_agree());
    assert_eq!(report.memoized.total_cost, 43);
    assert_eq!(report.memoized.call_count, 71);
    assert_eq!(report.naive.call_count, 243);
    assert!(report.memoized.call_count < report.naive.call_count);
    // well past 2^(n-2)
    assert!(report.naive.call_count > 1 << (6 - 2));
    assert_eq!(report.memoized.graph.len(), report.distinct_states());
}

#[test]
fn greedy_trace_on_five_piles() {
    let report = GreedyReport::run(&[1, 3, 3, 2, 4]);
    assert_eq!(report.greedy.total_cost, 31);
    assert_eq!(report.optimal, 30);
    assert_eq!(report.extra_cost(), 1);
    assert_snapshot("greedy_trace_1_3_3_2_4.txt", &render_steps(&report.greedy.steps));
}

#[test]
fn dp_trace_on_five_piles() {
    let analysis = Analysis::run(piles(&[1, 3, 3, 2, 4]), &AnalysisConfig::default())
        .expect("analysis succeeds");
    assert_snapshot("dp_trace_1_3_3_2_4.txt", &render_steps(analysis.steps()));
}

#[test]
fn memoized_graph_rendering() {
    let outcome = Memoized::solve(&[1, 2, 3]);
    assert_snapshot("memoized_graph_1_2_3.txt", &outcome.graph.render(usize::MAX));
}

#[test]
fn memoized_strictly_cheaper_from_four_piles() {
    for n in 1..=8usize {
        let weights: Vec<u64> = (1..=n as u64).collect();
        let memo = Memoized::solve(&weights).call_count;
        let naive = Naive::solve(&weights).call_count;
        if n >= 4 {
            assert!(memo < naive, "n = {}: {} vs {}", n, memo, naive);
        } else {
            assert_eq!(memo, naive, "n = {}", n);
        }
    }
}
