//! The animation controller.
//!
//! [`AnimationController`] is the primary user-facing API. It owns the
//! sequence, the statistics, the pre-run snapshot, and the run-lock, and
//! drives one sorting procedure at a time through the animating sink.
//!
//! # Ownership model
//!
//! The controller is [`Send`] (can be moved between threads) but not
//! [`Sync`]. All mutating operations take `&mut self`, so the borrow
//! checker already rules out reentrant calls; the explicit [`RunState`]
//! check is kept on every mutating entry point so the lock is observable,
//! survives failures, and rejects rather than panics if an embedding ever
//! finds a way around the static guarantee.
//!
//! # Failure policy
//!
//! Everything that goes wrong inside [`run()`](AnimationController::run)
//! is caught at the run boundary, logged, and reported in the
//! [`RunReport`]; it never propagates to the caller and never leaves the
//! state `Running`. Render failures outside a run are logged and
//! swallowed; a display-only collaborator cannot corrupt controller
//! state.

use std::fmt;
use std::time::Instant;

use indexmap::IndexMap;
use rand::RngExt;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::warn;

use sortviz_algos::{standard_algorithms, Algorithm, SortContext};
use sortviz_core::{
    AlgorithmKind, Marker, Pacer, RenderError, Renderer, RunError, Sequence, Statistics,
};

use crate::config::{ControllerConfig, MAX_SIZE, MIN_SIZE};
use crate::pacing::{delay_for_speed, SpeedControl, ThreadPacer};
use crate::sink::AnimationSink;

// Compile-time assertion: AnimationController is Send (renderer, pacer,
// and algorithm trait objects all carry Send bounds).
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<AnimationController>();
    }
};

// ── Run state and reports ───────────────────────────────────────

/// Whether a run currently holds the controller's run-lock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// No run in progress; all operations are accepted.
    Idle,
    /// A run is in progress; `generate`, `reset`, `load`, `set_size`,
    /// and further `run` calls are rejected as no-ops.
    Running,
}

/// How a [`run()`](AnimationController::run) request ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The procedure and the terminal mark-sorted pass both completed.
    Completed,
    /// A run was already in progress; nothing was mutated.
    Rejected,
    /// The run terminated early. The sequence may be left partially
    /// reordered; the run-lock is released regardless.
    Failed(RunError),
}

/// Result of one [`run()`](AnimationController::run) request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// How the request ended.
    pub outcome: RunOutcome,
    /// The statistics at the moment the request ended. For a rejected
    /// request these are the unchanged statistics of the run in progress.
    pub statistics: Statistics,
}

impl RunReport {
    /// Returns `true` if the run completed normally.
    pub fn is_completed(&self) -> bool {
        self.outcome == RunOutcome::Completed
    }
}

// ── AnimationController ─────────────────────────────────────────

/// Owns the sequence and drives paced, observable sorting runs.
///
/// Created from a [`ControllerConfig`] and a boxed [`Renderer`]; no
/// ambient or global state is involved. One controller supports any
/// number of consecutive runs.
///
/// # Example
///
/// ```ignore
/// let mut controller = AnimationController::new(config, Box::new(renderer));
/// controller.generate();
/// let report = controller.run(AlgorithmKind::Merge);
/// assert!(report.is_completed());
/// ```
pub struct AnimationController {
    sequence: Sequence,
    snapshot: Option<Vec<u32>>,
    stats: Statistics,
    state: RunState,
    speed: SpeedControl,
    size: usize,
    rng: ChaCha8Rng,
    algorithms: IndexMap<AlgorithmKind, Box<dyn Algorithm>>,
    renderer: Box<dyn Renderer>,
    pacer: Box<dyn Pacer>,
}

impl AnimationController {
    /// Create a controller with the production [`ThreadPacer`].
    ///
    /// Clamps the configuration, seeds the RNG, registers the six
    /// standard procedures, generates the initial sequence, and pushes
    /// the first frame to the renderer.
    pub fn new(config: ControllerConfig, renderer: Box<dyn Renderer>) -> Self {
        Self::with_pacer(config, renderer, Box::new(ThreadPacer))
    }

    /// Create a controller with an explicit pacer.
    ///
    /// Tests substitute a no-op or counting pacer here to consume the
    /// event stream without any delay.
    pub fn with_pacer(
        config: ControllerConfig,
        renderer: Box<dyn Renderer>,
        pacer: Box<dyn Pacer>,
    ) -> Self {
        let config = config.clamped();
        let algorithms = standard_algorithms()
            .into_iter()
            .map(|algorithm| (algorithm.kind(), algorithm))
            .collect();
        let mut controller = Self {
            sequence: Sequence::new(),
            snapshot: None,
            stats: Statistics::default(),
            state: RunState::Idle,
            speed: SpeedControl::new(config.speed),
            size: config.size,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            algorithms,
            renderer,
            pacer,
        };
        controller.generate();
        controller
    }

    // ── Read accessors ───────────────────────────────────────

    /// The current values.
    pub fn sequence(&self) -> &[u32] {
        self.sequence.as_slice()
    }

    /// The current statistics.
    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }

    /// Whether a run holds the run-lock.
    pub fn run_state(&self) -> RunState {
        self.state
    }

    /// The size used by the next `generate()`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The current animation speed.
    pub fn speed(&self) -> u8 {
        self.speed.get()
    }

    /// The registered algorithms, in registration order.
    pub fn algorithms(&self) -> impl Iterator<Item = AlgorithmKind> + '_ {
        self.algorithms.keys().copied()
    }

    // ── Configuration ────────────────────────────────────────

    /// Set the animation speed (clamped to `[1, 10]`).
    ///
    /// Allowed at any time, including mid-run: the pacing delay reads
    /// the setting fresh at every suspension point.
    pub fn set_speed(&self, speed: u8) {
        self.speed.set(speed);
    }

    /// A clonable handle to the speed setting, for adjusting a run
    /// already in flight from elsewhere.
    pub fn speed_control(&self) -> SpeedControl {
        self.speed.clone()
    }

    /// Set the sequence size (clamped to `[5, 100]`) and regenerate.
    ///
    /// No-op while a run is in progress.
    pub fn set_size(&mut self, size: usize) {
        if self.state == RunState::Running {
            return;
        }
        self.size = size.clamp(MIN_SIZE, MAX_SIZE);
        self.generate();
    }

    // ── Sequence management ──────────────────────────────────

    /// Replace the sequence with freshly drawn random values in
    /// `[Sequence::MIN_VALUE, Sequence::MAX_VALUE]` and reset the
    /// statistics.
    ///
    /// No-op while a run is in progress. The pre-run snapshot, if any,
    /// is kept: `reset()` after a regenerate still restores the values
    /// the last run started from.
    pub fn generate(&mut self) {
        if self.state == RunState::Running {
            return;
        }
        let values = (0..self.size)
            .map(|_| {
                self.rng
                    .random_range(Sequence::MIN_VALUE..=Sequence::MAX_VALUE)
            })
            .collect();
        self.sequence = Sequence::from_values(values);
        self.stats.reset();
        self.refresh_display();
    }

    /// Restore the values present immediately before the last run
    /// started and reset the statistics. Leaves the sequence untouched
    /// if no run has happened yet.
    ///
    /// No-op while a run is in progress.
    pub fn reset(&mut self) {
        if self.state == RunState::Running {
            return;
        }
        if let Some(snapshot) = &self.snapshot {
            self.sequence = Sequence::from_values(snapshot.clone());
        }
        self.stats.reset();
        self.refresh_display();
    }

    /// Install an explicit dataset and reset the statistics.
    ///
    /// Values are taken verbatim (they need not lie in the generation
    /// range); the stored size is clamped from the dataset length so a
    /// later `generate()` draws a comparable sequence. No-op while a run
    /// is in progress.
    pub fn load(&mut self, values: Vec<u32>) {
        if self.state == RunState::Running {
            return;
        }
        self.size = values.len().clamp(MIN_SIZE, MAX_SIZE);
        self.sequence = Sequence::from_values(values);
        self.stats.reset();
        self.refresh_display();
    }

    // ── Runs ─────────────────────────────────────────────────

    /// Run the named procedure, animating every step.
    ///
    /// Rejected (nothing mutated) if a run is already in progress.
    /// Otherwise the sequence is snapshotted, statistics reset, and the
    /// procedure driven to completion followed by the terminal
    /// mark-sorted pass. Failures are caught here, logged, and reported
    /// in the outcome; the run-lock is released on every path.
    pub fn run(&mut self, kind: AlgorithmKind) -> RunReport {
        if self.state == RunState::Running {
            return RunReport {
                outcome: RunOutcome::Rejected,
                statistics: self.stats.clone(),
            };
        }
        let Some(algorithm) = self.algorithms.get(&kind) else {
            // The registry covers AlgorithmKind::ALL, so this arm is
            // unreachable today; report rather than panic.
            let error = RunError::UnknownAlgorithm {
                name: kind.name().to_string(),
            };
            warn!("run rejected: {error}");
            return RunReport {
                outcome: RunOutcome::Failed(error),
                statistics: self.stats.clone(),
            };
        };

        self.state = RunState::Running;
        self.snapshot = Some(self.sequence.as_slice().to_vec());
        self.stats.reset();
        let started = Instant::now();
        if let Err(e) = self.renderer.run_started() {
            warn!("renderer rejected run start: {e}");
        }

        let sort_result = {
            let mut sink = AnimationSink::new(
                self.renderer.as_mut(),
                self.pacer.as_mut(),
                &self.speed,
                &mut self.stats,
                started,
            );
            let mut ctx = SortContext::new(&mut self.sequence, &mut sink);
            algorithm.sort(&mut ctx)
        };

        let outcome = match sort_result {
            Ok(()) => match self.mark_all_sorted() {
                Ok(()) => RunOutcome::Completed,
                Err(reason) => {
                    let error = RunError::MarkSortedFailed { reason };
                    warn!("run terminated: {error}");
                    RunOutcome::Failed(error)
                }
            },
            Err(reason) => {
                let error = RunError::AlgorithmFailed {
                    name: kind.name().to_string(),
                    reason,
                };
                warn!("run terminated: {error}");
                RunOutcome::Failed(error)
            }
        };

        self.stats.elapsed = started.elapsed();
        self.state = RunState::Idle;
        if let Err(e) = self.renderer.run_finished() {
            warn!("renderer rejected run finish: {e}");
        }
        if let Err(e) = self.renderer.show_statistics(&self.stats) {
            warn!("final statistics refresh failed: {e}");
        }
        RunReport {
            outcome,
            statistics: self.stats.clone(),
        }
    }

    /// [`run()`](AnimationController::run) by canonical name.
    ///
    /// Unknown names report [`RunError::UnknownAlgorithm`] without
    /// touching any state.
    pub fn run_named(&mut self, name: &str) -> RunReport {
        match name.parse::<AlgorithmKind>() {
            Ok(kind) => self.run(kind),
            Err(e) => {
                warn!("run rejected: {e}");
                RunReport {
                    outcome: RunOutcome::Failed(RunError::UnknownAlgorithm { name: e.name }),
                    statistics: self.stats.clone(),
                }
            }
        }
    }

    // ── Internals ────────────────────────────────────────────

    /// Terminal pass: mark every position sorted, pacing between each.
    /// Purely a rendering signal; the sequence is not touched.
    fn mark_all_sorted(&mut self) -> Result<(), RenderError> {
        for index in 0..self.sequence.len() {
            self.renderer.mark(index, Marker::Sorted)?;
            self.pacer.pause(delay_for_speed(self.speed.get()));
        }
        Ok(())
    }

    /// Push the current sequence and statistics to the renderer,
    /// logging (not propagating) display failures.
    fn refresh_display(&mut self) {
        if let Err(e) = self.renderer.draw(self.sequence.as_slice()) {
            warn!("display refresh failed: {e}");
        }
        if let Err(e) = self.renderer.show_statistics(&self.stats) {
            warn!("statistics refresh failed: {e}");
        }
    }
}

impl fmt::Debug for AnimationController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationController")
            .field("len", &self.sequence.len())
            .field("state", &self.state)
            .field("size", &self.size)
            .field("speed", &self.speed.get())
            .field("stats", &self.stats)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortviz_core::AlgorithmError;
    use sortviz_test_utils::{
        reference_counts, CountingPacer, FailingRenderer, NoopPacer, RecordingRenderer,
    };
    use std::time::Duration;

    fn quiet_controller(config: ControllerConfig) -> (AnimationController, RecordingRenderer) {
        let renderer = RecordingRenderer::new();
        let controller = AnimationController::with_pacer(
            config,
            Box::new(renderer.clone()),
            Box::new(NoopPacer),
        );
        (controller, renderer)
    }

    // ── Construction and generation ──────────────────────────

    #[test]
    fn new_controller_is_idle_with_a_generated_sequence() {
        let (controller, renderer) = quiet_controller(ControllerConfig::default());
        assert_eq!(controller.run_state(), RunState::Idle);
        assert_eq!(controller.sequence().len(), 30);
        assert_eq!(controller.statistics(), &Statistics::default());
        // Construction pushed an initial frame.
        assert!(!renderer.log().draws.is_empty());
    }

    #[test]
    fn generated_values_stay_in_range() {
        let (mut controller, _) = quiet_controller(ControllerConfig {
            size: 10,
            ..ControllerConfig::default()
        });
        for _ in 0..2 {
            controller.generate();
            assert_eq!(controller.sequence().len(), 10);
            assert!(controller
                .sequence()
                .iter()
                .all(|v| (Sequence::MIN_VALUE..=Sequence::MAX_VALUE).contains(v)));
            assert_eq!(controller.statistics(), &Statistics::default());
        }
    }

    #[test]
    fn equal_seeds_generate_equal_sequences() {
        let config = ControllerConfig {
            seed: 7,
            ..ControllerConfig::default()
        };
        let (a, _) = quiet_controller(config);
        let (b, _) = quiet_controller(config);
        assert_eq!(a.sequence(), b.sequence());

        let other = ControllerConfig {
            seed: 8,
            ..ControllerConfig::default()
        };
        let (c, _) = quiet_controller(other);
        assert_ne!(a.sequence(), c.sequence());
    }

    #[test]
    fn config_bounds_are_clamped() {
        let (mut controller, _) = quiet_controller(ControllerConfig {
            size: 1000,
            speed: 0,
            seed: 1,
        });
        assert_eq!(controller.size(), MAX_SIZE);
        assert_eq!(controller.speed(), 1);
        controller.set_size(1);
        assert_eq!(controller.size(), MIN_SIZE);
        assert_eq!(controller.sequence().len(), MIN_SIZE);
        controller.set_speed(99);
        assert_eq!(controller.speed(), 10);
    }

    // ── Runs ─────────────────────────────────────────────────

    #[test]
    fn bubble_run_matches_the_reference_scenario() {
        let (mut controller, _) = quiet_controller(ControllerConfig::default());
        controller.load(vec![5, 3, 8, 1]);
        let report = controller.run(AlgorithmKind::Bubble);
        assert!(report.is_completed());
        assert_eq!(controller.sequence(), &[1, 3, 5, 8]);
        assert_eq!(report.statistics.comparisons, 6);
        assert_eq!(report.statistics.swaps, 4);
        assert_eq!(controller.run_state(), RunState::Idle);
    }

    #[test]
    fn quick_run_on_a_pair_needs_one_comparison_and_one_swap() {
        let (mut controller, _) = quiet_controller(ControllerConfig::default());
        controller.load(vec![2, 1]);
        let report = controller.run(AlgorithmKind::Quick);
        assert!(report.is_completed());
        assert_eq!(controller.sequence(), &[1, 2]);
        assert_eq!(report.statistics.comparisons, 1);
        assert_eq!(report.statistics.swaps, 1);
    }

    #[test]
    fn selection_on_sorted_input_never_swaps() {
        let (mut controller, _) = quiet_controller(ControllerConfig::default());
        controller.load(vec![1, 2, 3, 4]);
        let report = controller.run(AlgorithmKind::Selection);
        assert!(report.is_completed());
        assert_eq!(report.statistics.comparisons, 6);
        assert_eq!(report.statistics.swaps, 0);
    }

    #[test]
    fn every_algorithm_sorts_the_generated_sequence() {
        for kind in AlgorithmKind::ALL {
            let (mut controller, _) = quiet_controller(ControllerConfig {
                size: 20,
                seed: 99,
                ..ControllerConfig::default()
            });
            let input = controller.sequence().to_vec();
            let report = controller.run(kind);
            assert!(report.is_completed(), "{kind} did not complete");

            let mut expected = input.clone();
            let (comparisons, swaps) = reference_counts(kind, &mut expected);
            assert_eq!(controller.sequence(), expected.as_slice());
            assert_eq!(report.statistics.comparisons, comparisons);
            assert_eq!(report.statistics.swaps, swaps);
        }
    }

    #[test]
    fn run_named_round_trips_and_rejects_unknowns() {
        let (mut controller, _) = quiet_controller(ControllerConfig::default());
        controller.load(vec![3, 1, 2]);
        assert!(controller.run_named("heap").is_completed());
        assert_eq!(controller.sequence(), &[1, 2, 3]);

        let before = controller.sequence().to_vec();
        let report = controller.run_named("bogo");
        assert_eq!(
            report.outcome,
            RunOutcome::Failed(RunError::UnknownAlgorithm {
                name: "bogo".to_string()
            })
        );
        assert_eq!(controller.sequence(), before.as_slice());
    }

    // ── Run-lock enforcement ─────────────────────────────────

    #[test]
    fn everything_is_a_noop_while_running() {
        let (mut controller, _) = quiet_controller(ControllerConfig::default());
        controller.load(vec![4, 2, 9]);
        controller.state = RunState::Running;

        let before_sequence = controller.sequence().to_vec();
        let before_stats = controller.statistics().clone();

        let report = controller.run(AlgorithmKind::Bubble);
        assert_eq!(report.outcome, RunOutcome::Rejected);
        controller.generate();
        controller.reset();
        controller.load(vec![1]);
        controller.set_size(50);

        assert_eq!(controller.sequence(), before_sequence.as_slice());
        assert_eq!(controller.statistics(), &before_stats);
        assert_eq!(controller.run_state(), RunState::Running);
    }

    #[test]
    fn speed_changes_are_allowed_while_running() {
        let (mut controller, _) = quiet_controller(ControllerConfig::default());
        controller.state = RunState::Running;
        controller.set_speed(9);
        assert_eq!(controller.speed(), 9);
    }

    // ── Snapshot and reset ───────────────────────────────────

    #[test]
    fn reset_restores_the_pre_run_values() {
        let (mut controller, _) = quiet_controller(ControllerConfig::default());
        controller.load(vec![9, 1, 5, 3]);
        controller.run(AlgorithmKind::Insertion);
        assert_eq!(controller.sequence(), &[1, 3, 5, 9]);

        controller.reset();
        assert_eq!(controller.sequence(), &[9, 1, 5, 3]);
        assert_eq!(controller.statistics(), &Statistics::default());
    }

    #[test]
    fn reset_without_a_prior_run_keeps_current_values() {
        let (mut controller, _) = quiet_controller(ControllerConfig::default());
        controller.load(vec![8, 6, 7]);
        controller.reset();
        assert_eq!(controller.sequence(), &[8, 6, 7]);
    }

    #[test]
    fn snapshot_survives_a_regenerate() {
        let (mut controller, _) = quiet_controller(ControllerConfig::default());
        controller.load(vec![7, 3, 5]);
        controller.run(AlgorithmKind::Bubble);
        controller.generate();
        controller.reset();
        assert_eq!(controller.sequence(), &[7, 3, 5]);
    }

    // ── Failure handling ─────────────────────────────────────

    #[test]
    fn renderer_failure_terminates_the_run_and_releases_the_lock() {
        // Succeed long enough to get past construction and run start,
        // then fail mid-animation.
        let renderer = FailingRenderer::new(8);
        let mut controller = AnimationController::with_pacer(
            ControllerConfig::default(),
            Box::new(renderer),
            Box::new(NoopPacer),
        );
        controller.load(vec![5, 3, 8, 1]);
        let report = controller.run(AlgorithmKind::Bubble);

        match &report.outcome {
            RunOutcome::Failed(RunError::AlgorithmFailed { name, reason }) => {
                assert_eq!(name, "bubble");
                assert!(matches!(reason, AlgorithmError::Sink(_)));
            }
            other => panic!("expected AlgorithmFailed, got {other:?}"),
        }
        assert_eq!(controller.run_state(), RunState::Idle);

        // The controller accepts new work after the failure.
        controller.load(vec![2, 1]);
        assert_eq!(controller.sequence(), &[2, 1]);
    }

    #[test]
    fn failed_runs_leave_a_usable_snapshot() {
        let renderer = FailingRenderer::new(8);
        let mut controller = AnimationController::with_pacer(
            ControllerConfig::default(),
            Box::new(renderer),
            Box::new(NoopPacer),
        );
        controller.load(vec![5, 3, 8, 1]);
        controller.run(AlgorithmKind::Bubble);
        controller.reset();
        assert_eq!(controller.sequence(), &[5, 3, 8, 1]);
    }

    // ── Renderer choreography ────────────────────────────────

    #[test]
    fn renderer_sees_the_full_run_choreography() {
        let (mut controller, renderer) = quiet_controller(ControllerConfig::default());
        controller.load(vec![2, 1]);
        let report = controller.run(AlgorithmKind::Bubble);
        assert!(report.is_completed());

        let log = renderer.log();
        assert_eq!(log.runs_started, 1);
        assert_eq!(log.runs_finished, 1);
        // Terminal pass marked every position sorted.
        assert!(log.marks.contains(&(0, Marker::Sorted)));
        assert!(log.marks.contains(&(1, Marker::Sorted)));
        // The final publish carries the report's counters.
        let last = log.stats_updates.last().unwrap();
        assert_eq!(last.comparisons, report.statistics.comparisons);
        assert_eq!(last.swaps, report.statistics.swaps);
    }

    #[test]
    fn pacing_covers_events_and_the_terminal_pass() {
        let pacer = CountingPacer::new();
        let mut controller = AnimationController::with_pacer(
            ControllerConfig {
                speed: 10,
                ..ControllerConfig::default()
            },
            Box::new(RecordingRenderer::new()),
            Box::new(pacer.clone()),
        );
        controller.load(vec![2, 1]);
        controller.run(AlgorithmKind::Bubble);

        // One compare (1 pause) + one swap (2 pauses) + 2 sorted marks.
        let pauses = pacer.pauses();
        assert_eq!(pauses.len(), 5);
        assert!(pauses.iter().all(|d| *d == Duration::from_millis(50)));
    }

    #[test]
    fn registry_lists_all_kinds_in_order() {
        let (controller, _) = quiet_controller(ControllerConfig::default());
        let kinds: Vec<AlgorithmKind> = controller.algorithms().collect();
        assert_eq!(kinds, AlgorithmKind::ALL.to_vec());
    }

    #[test]
    fn debug_impl_doesnt_panic() {
        let (controller, _) = quiet_controller(ControllerConfig::default());
        let debug = format!("{controller:?}");
        assert!(debug.contains("AnimationController"));
        assert!(debug.contains("state"));
    }
}
