//! Reusable renderer and pacer test fixtures.
//!
//! Four standard fixtures for controller and sink testing:
//!
//! - [`RecordingRenderer`] — records every call into a shared log.
//! - [`FailingRenderer`] — fails deterministically after N calls.
//! - [`NoopPacer`] — zero-delay pacing for fast tests.
//! - [`CountingPacer`] — records every requested pause duration.
//!
//! The renderer fixtures are `Clone` handles over shared state, so a test
//! can keep one handle for assertions while the controller owns the boxed
//! other.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use sortviz_core::{Marker, Pacer, RenderError, Renderer, Statistics};

/// Everything a [`RecordingRenderer`] has observed, in call order.
#[derive(Clone, Debug, Default)]
pub struct RenderLog {
    /// Full-sequence snapshots passed to `draw`.
    pub draws: Vec<Vec<u32>>,
    /// `(index, marker)` pairs passed to `mark`.
    pub marks: Vec<(usize, Marker)>,
    /// `(index, marker)` pairs passed to `unmark`.
    pub unmarks: Vec<(usize, Marker)>,
    /// Statistics snapshots passed to `show_statistics`.
    pub stats_updates: Vec<Statistics>,
    /// Number of `run_started` notifications.
    pub runs_started: usize,
    /// Number of `run_finished` notifications.
    pub runs_finished: usize,
}

/// Records every renderer call into a shared [`RenderLog`].
///
/// Useful for asserting event ordering and publish frequency: clone the
/// renderer, box one clone into the controller, keep the other for
/// inspection.
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    log: Arc<Mutex<RenderLog>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything observed so far.
    pub fn log(&self) -> RenderLog {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, RenderLog> {
        self.log.lock().expect("render log poisoned")
    }
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, values: &[u32]) -> Result<(), RenderError> {
        self.lock().draws.push(values.to_vec());
        Ok(())
    }

    fn mark(&mut self, index: usize, marker: Marker) -> Result<(), RenderError> {
        self.lock().marks.push((index, marker));
        Ok(())
    }

    fn unmark(&mut self, index: usize, marker: Marker) -> Result<(), RenderError> {
        self.lock().unmarks.push((index, marker));
        Ok(())
    }

    fn show_statistics(&mut self, stats: &Statistics) -> Result<(), RenderError> {
        self.lock().stats_updates.push(stats.clone());
        Ok(())
    }

    fn run_started(&mut self) -> Result<(), RenderError> {
        self.lock().runs_started += 1;
        Ok(())
    }

    fn run_finished(&mut self) -> Result<(), RenderError> {
        self.lock().runs_finished += 1;
        Ok(())
    }
}

/// Fails deterministically after a configurable number of successful
/// calls, across all renderer methods.
///
/// Useful for testing the run-boundary error path. Uses `AtomicUsize`
/// for the call counter so clones share it.
#[derive(Clone, Debug)]
pub struct FailingRenderer {
    succeed_count: usize,
    calls: Arc<AtomicUsize>,
}

impl FailingRenderer {
    /// Create a renderer that succeeds `succeed_count` times then fails.
    pub fn new(succeed_count: usize) -> Self {
        Self {
            succeed_count,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// How many renderer calls have been made.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    fn tick(&self) -> Result<(), RenderError> {
        let n = self.calls.fetch_add(1, Ordering::Relaxed);
        if n >= self.succeed_count {
            Err(RenderError::new(format!(
                "deliberate failure after {} successful calls",
                self.succeed_count
            )))
        } else {
            Ok(())
        }
    }
}

impl Renderer for FailingRenderer {
    fn draw(&mut self, _values: &[u32]) -> Result<(), RenderError> {
        self.tick()
    }

    fn mark(&mut self, _index: usize, _marker: Marker) -> Result<(), RenderError> {
        self.tick()
    }

    fn unmark(&mut self, _index: usize, _marker: Marker) -> Result<(), RenderError> {
        self.tick()
    }

    fn show_statistics(&mut self, _stats: &Statistics) -> Result<(), RenderError> {
        self.tick()
    }

    fn run_started(&mut self) -> Result<(), RenderError> {
        self.tick()
    }

    fn run_finished(&mut self) -> Result<(), RenderError> {
        self.tick()
    }
}

/// A pacer that never waits. Tests run at full speed through every
/// suspension point.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopPacer;

impl Pacer for NoopPacer {
    fn pause(&mut self, _duration: Duration) {}
}

/// Records every requested pause without sleeping.
///
/// Lets tests assert both how many suspension points a run hit and which
/// delay the speed setting produced at each one.
#[derive(Clone, Debug, Default)]
pub struct CountingPacer {
    pauses: Arc<Mutex<Vec<Duration>>>,
}

impl CountingPacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every pause requested so far, in order.
    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses.lock().expect("pause log poisoned").clone()
    }
}

impl Pacer for CountingPacer {
    fn pause(&mut self, duration: Duration) {
        self.pauses
            .lock()
            .expect("pause log poisoned")
            .push(duration);
    }
}
