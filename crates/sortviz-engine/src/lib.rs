//! Animation controller orchestrating sortviz runs.
//!
//! [`AnimationController`] owns the sequence, the statistics, and the
//! run-lock. It drives one instrumented sorting procedure at a time,
//! translating each emitted event into a paced, renderer-visible state
//! change, and guarantees the lock is released on every exit path.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod controller;
pub mod pacing;
mod sink;

pub use config::{ControllerConfig, DEFAULT_SIZE, DEFAULT_SPEED, MAX_SIZE, MIN_SIZE};
pub use controller::{AnimationController, RunOutcome, RunReport, RunState};
pub use pacing::{delay_for_speed, SpeedControl, ThreadPacer, MAX_SPEED, MIN_SPEED};
