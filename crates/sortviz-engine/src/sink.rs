//! The animating event sink.
//!
//! Translates each procedure event into the renderer choreography the
//! animation is made of: statistics update, marker application, pacing
//! pause, redraw. Statistics are published before every pause so an
//! observer sees incremental progress, never a batch.

use std::time::Instant;

use sortviz_core::{Event, EventSink, Marker, Pacer, Renderer, SinkError, Statistics};

use crate::pacing::{delay_for_speed, SpeedControl};

/// Drives the renderer and pacer for one run.
///
/// Per `Compare`: count, publish, mark both positions, pause, unmark.
/// Per mutation: mark, pause, (mutation applies), count, publish, redraw,
/// pause, unmark (one suspension on each side of the state change).
pub(crate) struct AnimationSink<'a> {
    renderer: &'a mut dyn Renderer,
    pacer: &'a mut dyn Pacer,
    speed: &'a SpeedControl,
    stats: &'a mut Statistics,
    started: Instant,
}

impl<'a> AnimationSink<'a> {
    pub(crate) fn new(
        renderer: &'a mut dyn Renderer,
        pacer: &'a mut dyn Pacer,
        speed: &'a SpeedControl,
        stats: &'a mut Statistics,
        started: Instant,
    ) -> Self {
        Self {
            renderer,
            pacer,
            speed,
            stats,
            started,
        }
    }

    fn publish_stats(&mut self) -> Result<(), SinkError> {
        self.stats.elapsed = self.started.elapsed();
        self.renderer.show_statistics(self.stats)?;
        Ok(())
    }

    /// One cooperative suspension. The speed is read fresh here, so a
    /// mid-run adjustment takes effect on the very next step.
    fn pace(&mut self) {
        self.pacer.pause(delay_for_speed(self.speed.get()));
    }
}

impl EventSink for AnimationSink<'_> {
    fn on_event(&mut self, event: &Event, _values: &[u32]) -> Result<(), SinkError> {
        match *event {
            Event::Compare { i, j } => {
                self.stats.record_comparison();
                self.publish_stats()?;
                self.renderer.mark(i, Marker::Comparing)?;
                self.renderer.mark(j, Marker::Comparing)?;
                self.pace();
                self.renderer.unmark(i, Marker::Comparing)?;
                self.renderer.unmark(j, Marker::Comparing)?;
            }
            Event::Swap { i, j } => {
                self.renderer.mark(i, Marker::Swapping)?;
                self.renderer.mark(j, Marker::Swapping)?;
                self.pace();
            }
            Event::Overwrite { index, .. } => {
                self.renderer.mark(index, Marker::Swapping)?;
                self.pace();
            }
        }
        Ok(())
    }

    fn on_applied(&mut self, event: &Event, values: &[u32]) -> Result<(), SinkError> {
        match *event {
            Event::Compare { .. } => {}
            Event::Swap { i, j } => {
                self.stats.record_mutation();
                self.publish_stats()?;
                self.renderer.draw(values)?;
                self.pace();
                self.renderer.unmark(i, Marker::Swapping)?;
                self.renderer.unmark(j, Marker::Swapping)?;
            }
            Event::Overwrite { index, .. } => {
                self.stats.record_mutation();
                self.publish_stats()?;
                self.renderer.draw(values)?;
                self.pace();
                self.renderer.unmark(index, Marker::Swapping)?;
            }
        }
        Ok(())
    }
}
