//! Pacing delays and the shared speed setting.
//!
//! The delay between observable steps is `(11 - speed) * 50` milliseconds
//! for speeds in `[1, 10]`: 500 ms per step at the slowest setting down
//! to 50 ms at the fastest. The speed lives behind an atomic so it can be
//! adjusted while a run is in flight; the animating sink reads it fresh
//! at every suspension point, so a change takes effect on the next step.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use sortviz_core::Pacer;

/// Slowest animation speed.
pub const MIN_SPEED: u8 = 1;
/// Fastest animation speed.
pub const MAX_SPEED: u8 = 10;

/// Milliseconds per speed step.
const STEP_MS: u64 = 50;

/// The pacing delay for a speed setting.
///
/// Out-of-range speeds are clamped first, so the result is always in
/// `[50 ms, 500 ms]`.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use sortviz_engine::delay_for_speed;
///
/// assert_eq!(delay_for_speed(1), Duration::from_millis(500));
/// assert_eq!(delay_for_speed(10), Duration::from_millis(50));
/// assert_eq!(delay_for_speed(0), Duration::from_millis(500));
/// assert_eq!(delay_for_speed(99), Duration::from_millis(50));
/// ```
pub fn delay_for_speed(speed: u8) -> Duration {
    let speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    Duration::from_millis(u64::from(11 - speed) * STEP_MS)
}

/// Clonable handle to the animation speed.
///
/// All clones share one atomic value, so a handle held outside the
/// controller (a UI thread, a test) can retune a run already in
/// progress. Writes clamp to `[MIN_SPEED, MAX_SPEED]`.
#[derive(Clone, Debug)]
pub struct SpeedControl {
    shared: Arc<AtomicU8>,
}

impl SpeedControl {
    /// Create a control holding `speed` (clamped).
    pub fn new(speed: u8) -> Self {
        Self {
            shared: Arc::new(AtomicU8::new(speed.clamp(MIN_SPEED, MAX_SPEED))),
        }
    }

    /// The current speed.
    pub fn get(&self) -> u8 {
        self.shared.load(Ordering::Relaxed)
    }

    /// Set the speed (clamped). Takes effect at the next suspension point.
    pub fn set(&self, speed: u8) {
        self.shared
            .store(speed.clamp(MIN_SPEED, MAX_SPEED), Ordering::Relaxed);
    }
}

/// Production pacer: blocks the thread with [`thread::sleep`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}
