//! Delay-free event capture and replay.
//!
//! [`capture`] runs a procedure against a recording sink and returns the
//! complete event stream as an [`EventTrace`]. Traces decouple algorithmic
//! correctness from animation timing: tests consume them with zero delay,
//! and [`EventTrace::replay`] re-applies the mutations to a fresh copy of
//! the input to prove the events alone determine the result.

use sortviz_core::{AlgorithmError, Event, EventSink, Sequence, SinkError};

use crate::algorithm::Algorithm;
use crate::context::SortContext;

/// An [`EventSink`] that records every event in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Vec<Event>,
}

impl RecordingSink {
    /// The events recorded so far, in emission order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Consume the sink, yielding the recorded events.
    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

impl EventSink for RecordingSink {
    fn on_event(&mut self, event: &Event, _values: &[u32]) -> Result<(), SinkError> {
        self.events.push(*event);
        Ok(())
    }
}

/// Run `algorithm` over `sequence` with no pacing, returning the full
/// event stream.
///
/// The sequence is sorted in place as a side effect.
///
/// # Examples
///
/// ```
/// use sortviz_algos::{capture, BubbleSort};
/// use sortviz_core::Sequence;
///
/// let mut seq = Sequence::from_values(vec![3, 1, 2]);
/// let trace = capture(&BubbleSort, &mut seq).unwrap();
/// assert!(seq.is_sorted());
/// assert_eq!(trace.comparison_count(), 3);
/// assert_eq!(trace.mutation_count(), 2);
/// ```
pub fn capture(
    algorithm: &dyn Algorithm,
    sequence: &mut Sequence,
) -> Result<EventTrace, AlgorithmError> {
    let mut sink = RecordingSink::default();
    let mut ctx = SortContext::new(sequence, &mut sink);
    algorithm.sort(&mut ctx)?;
    Ok(EventTrace {
        events: sink.into_events(),
    })
}

/// The finite, ordered event stream of one completed procedure.
///
/// Consuming the trace (via [`IntoIterator`]) is one-shot; a fresh run is
/// needed for a fresh trace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventTrace {
    events: Vec<Event>,
}

impl EventTrace {
    /// The recorded events, in emission order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Total number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if the procedure emitted nothing (input of length
    /// < 2, or already in place for procedures that skip no-op work).
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of `Compare` events.
    pub fn comparison_count(&self) -> u64 {
        self.events.iter().filter(|e| !e.is_mutation()).count() as u64
    }

    /// Number of mutation events (`Swap` and `Overwrite`).
    pub fn mutation_count(&self) -> u64 {
        self.events.iter().filter(|e| e.is_mutation()).count() as u64
    }

    /// Re-apply the mutation events to `values`.
    ///
    /// Applied to a copy of the original input, this reproduces the
    /// procedure's final state exactly; the trace fully determines the
    /// transformation.
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::IndexOutOfBounds`] if `values` is shorter
    /// than the sequence the trace was recorded from.
    pub fn replay(&self, values: &mut [u32]) -> Result<(), AlgorithmError> {
        let len = values.len();
        let check = |index: usize| {
            if index < len {
                Ok(())
            } else {
                Err(AlgorithmError::IndexOutOfBounds { index, len })
            }
        };
        for event in &self.events {
            match *event {
                Event::Compare { .. } => {}
                Event::Swap { i, j } => {
                    check(i)?;
                    check(j)?;
                    values.swap(i, j);
                }
                Event::Overwrite { index, value } => {
                    check(index)?;
                    values[index] = value;
                }
            }
        }
        Ok(())
    }
}

impl IntoIterator for EventTrace {
    type Item = Event;
    type IntoIter = std::vec::IntoIter<Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}
