//! End-to-end controller properties over arbitrary inputs.

use proptest::prelude::*;

use sortviz_core::{AlgorithmKind, Statistics};
use sortviz_engine::{AnimationController, ControllerConfig, RunState};
use sortviz_test_utils::{reference_counts, NoopPacer, RecordingRenderer};

fn controller_with(values: Vec<u32>) -> AnimationController {
    let mut controller = AnimationController::with_pacer(
        ControllerConfig::default(),
        Box::new(RecordingRenderer::new()),
        Box::new(NoopPacer),
    );
    controller.load(values);
    controller
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn runs_sort_and_count_like_the_reference(
        kind in prop::sample::select(AlgorithmKind::ALL.to_vec()),
        input in prop::collection::vec(0u32..400, 0..32),
    ) {
        let mut controller = controller_with(input.clone());
        let report = controller.run(kind);
        prop_assert!(report.is_completed());
        prop_assert_eq!(controller.run_state(), RunState::Idle);

        let mut expected = input.clone();
        let (comparisons, swaps) = reference_counts(kind, &mut expected);
        prop_assert_eq!(controller.sequence(), expected.as_slice());
        prop_assert_eq!(report.statistics.comparisons, comparisons);
        prop_assert_eq!(report.statistics.swaps, swaps);

        // Reset restores exactly the values the run started from.
        controller.reset();
        prop_assert_eq!(controller.sequence(), input.as_slice());
        prop_assert_eq!(controller.statistics(), &Statistics::default());
    }
}

#[test]
fn empty_dataset_runs_complete_immediately() {
    for kind in AlgorithmKind::ALL {
        let mut controller = controller_with(vec![]);
        let report = controller.run(kind);
        assert!(report.is_completed(), "{kind} failed on empty input");
        assert_eq!(report.statistics.comparisons, 0);
        assert_eq!(report.statistics.swaps, 0);
        assert!(controller.sequence().is_empty());
    }
}

#[test]
fn consecutive_runs_reuse_the_controller() {
    let mut controller = controller_with(vec![6, 2, 8, 4, 1]);
    for kind in AlgorithmKind::ALL {
        let report = controller.run(kind);
        assert!(report.is_completed(), "{kind} did not complete");
        assert_eq!(controller.run_state(), RunState::Idle);
    }
    // After the first run everything is sorted; later runs see sorted
    // input and must still complete with zero-or-more events.
    assert_eq!(controller.sequence(), &[1, 2, 4, 6, 8]);
}

#[test]
fn statistics_publishes_are_monotonic_within_a_run() {
    let renderer = RecordingRenderer::new();
    let mut controller = AnimationController::with_pacer(
        ControllerConfig::default(),
        Box::new(renderer.clone()),
        Box::new(NoopPacer),
    );
    controller.load(vec![9, 7, 5, 3, 1]);
    controller.run(AlgorithmKind::Heap);

    let log = renderer.log();
    let run_updates: Vec<Statistics> = log
        .stats_updates
        .iter()
        .skip_while(|s| s.comparisons == 0 && s.swaps == 0)
        .cloned()
        .collect();
    assert!(!run_updates.is_empty());
    for pair in run_updates.windows(2) {
        assert!(pair[1].comparisons >= pair[0].comparisons);
        assert!(pair[1].swaps >= pair[0].swaps);
        assert!(pair[1].elapsed >= pair[0].elapsed);
    }
}
