//! Collaborator traits: rendering, event consumption, and pacing.

use std::time::Duration;

use crate::error::{RenderError, SinkError};
use crate::event::{Event, Marker};
use crate::stats::Statistics;

/// Display collaborator consumed by the animation controller.
///
/// The controller calls these methods synchronously at each observable
/// step; how bars, markers, and statistics are actually presented is
/// entirely up to the implementation. Renderers only read state, never
/// mutate it.
///
/// All methods are fallible so a real display backend can surface
/// failures; the controller treats a failure during a run as run
/// termination and a failure outside a run as a logged no-op.
pub trait Renderer: Send {
    /// Redraw the whole sequence as proportionally-sized bars.
    fn draw(&mut self, values: &[u32]) -> Result<(), RenderError>;

    /// Apply a named visual marker to one position.
    fn mark(&mut self, index: usize, marker: Marker) -> Result<(), RenderError>;

    /// Remove a named visual marker from one position.
    fn unmark(&mut self, index: usize, marker: Marker) -> Result<(), RenderError>;

    /// Present the current statistics.
    fn show_statistics(&mut self, stats: &Statistics) -> Result<(), RenderError>;

    /// A run has started; interactive controls should disable.
    fn run_started(&mut self) -> Result<(), RenderError>;

    /// The run is over (completed or failed); controls should re-enable.
    fn run_finished(&mut self) -> Result<(), RenderError>;
}

/// Consumer of the event stream a sorting procedure emits.
///
/// The sort context invokes [`on_event`](EventSink::on_event) for every
/// event before any mutation it describes is applied, and additionally
/// [`on_applied`](EventSink::on_applied) for mutation events once the
/// sequence has changed. Rejecting from either hook stops the procedure
/// at a boundary where the sequence is fully defined.
pub trait EventSink {
    /// Observe an event. For mutation events the sequence still holds its
    /// pre-mutation values.
    fn on_event(&mut self, event: &Event, values: &[u32]) -> Result<(), SinkError>;

    /// Observe a mutation event after it has been applied.
    ///
    /// Not called for [`Event::Compare`]. Default: accept silently.
    fn on_applied(&mut self, event: &Event, values: &[u32]) -> Result<(), SinkError> {
        let _ = (event, values);
        Ok(())
    }
}

/// Cooperative suspension between observable steps.
///
/// The animation controller pauses through this seam at every event (and
/// between terminal mark-sorted steps), which is the sole mechanism that
/// makes algorithm progress perceptible. Tests substitute a no-op.
pub trait Pacer: Send {
    /// Block the current logical thread of control for `duration`.
    fn pause(&mut self, duration: Duration);
}
