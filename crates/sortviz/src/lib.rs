//! Sortviz: an animated sorting-algorithm visualizer core.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all sortviz sub-crates. For most users, adding `sortviz` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use sortviz::prelude::*;
//! use std::time::Duration;
//!
//! // A renderer that ignores everything. A real frontend would draw
//! // proportional bars and style the marked positions.
//! struct Silent;
//! impl Renderer for Silent {
//!     fn draw(&mut self, _values: &[u32]) -> Result<(), RenderError> { Ok(()) }
//!     fn mark(&mut self, _index: usize, _marker: Marker) -> Result<(), RenderError> { Ok(()) }
//!     fn unmark(&mut self, _index: usize, _marker: Marker) -> Result<(), RenderError> { Ok(()) }
//!     fn show_statistics(&mut self, _stats: &Statistics) -> Result<(), RenderError> { Ok(()) }
//!     fn run_started(&mut self) -> Result<(), RenderError> { Ok(()) }
//!     fn run_finished(&mut self) -> Result<(), RenderError> { Ok(()) }
//! }
//!
//! // A pacer that never waits, so this example finishes instantly.
//! struct NoDelay;
//! impl Pacer for NoDelay {
//!     fn pause(&mut self, _duration: Duration) {}
//! }
//!
//! let config = ControllerConfig { size: 8, speed: 10, seed: 1 };
//! let mut controller =
//!     AnimationController::with_pacer(config, Box::new(Silent), Box::new(NoDelay));
//! let report = controller.run(AlgorithmKind::Merge);
//! assert!(report.is_completed());
//! assert!(controller.sequence().windows(2).all(|w| w[0] <= w[1]));
//! assert!(report.statistics.comparisons > 0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `sortviz-core` | Events, markers, sequence, statistics, errors, collaborator traits |
//! | [`algos`] | `sortviz-algos` | The six procedures, `SortContext`, trace capture/replay |
//! | [`engine`] | `sortviz-engine` | The animation controller, configuration, pacing |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and errors (`sortviz-core`).
///
/// Contains the event and marker enums, the sequence and statistics
/// types, the error taxonomy, and the [`types::Renderer`],
/// [`types::EventSink`], and [`types::Pacer`] traits.
pub use sortviz_core as types;

/// Instrumented sorting procedures (`sortviz-algos`).
///
/// The [`algos::Algorithm`] trait is the extension seam; [`algos::capture`]
/// turns a run into a delay-free [`algos::EventTrace`].
pub use sortviz_algos as algos;

/// The animation controller (`sortviz-engine`).
///
/// [`engine::AnimationController`] owns the sequence, statistics, and
/// run-lock, and drives paced runs against a renderer.
pub use sortviz_engine as engine;

/// Common imports for typical sortviz usage.
///
/// ```rust
/// use sortviz::prelude::*;
/// ```
///
/// This imports the most frequently used types: the controller and its
/// configuration, the algorithm catalogue, the collaborator traits, and
/// the core data types.
pub mod prelude {
    // Core data types
    pub use sortviz_core::{AlgorithmKind, Event, Marker, Sequence, Statistics};

    // Errors
    pub use sortviz_core::{AlgorithmError, RenderError, RunError, SinkError, UnknownAlgorithm};

    // Collaborator traits
    pub use sortviz_core::{EventSink, Pacer, Renderer};

    // Procedures and traces
    pub use sortviz_algos::{capture, Algorithm, EventTrace, SortContext};

    // Engine
    pub use sortviz_engine::{
        delay_for_speed, AnimationController, ControllerConfig, RunOutcome, RunReport, RunState,
        SpeedControl, ThreadPacer,
    };
}
