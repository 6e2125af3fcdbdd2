//! Run statistics published to the renderer.

use std::time::Duration;

/// Counters and elapsed time for the run in progress (or the last run).
///
/// The controller publishes a fresh copy after every single comparison or
/// mutation event, never batched, so an observer sees monotonic,
/// incremental progress. All fields reset to zero whenever a run begins
/// or the sequence is regenerated, reset, or loaded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Statistics {
    /// Comparison events observed so far. Monotonically non-decreasing
    /// within a run.
    pub comparisons: u64,
    /// Mutation events (swaps and overwrites) observed so far.
    /// Monotonically non-decreasing within a run.
    pub swaps: u64,
    /// Wall-clock time since the run started.
    pub elapsed: Duration,
}

impl Statistics {
    /// Zero all counters and the elapsed time.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record one comparison event.
    pub fn record_comparison(&mut self) {
        self.comparisons += 1;
    }

    /// Record one mutation event (swap or overwrite).
    pub fn record_mutation(&mut self) {
        self.swaps += 1;
    }
}
