//! Mediated sequence access for sorting procedures.
//!
//! [`SortContext`] is the only path a procedure has to the sequence, so
//! every comparison and mutation necessarily produces an observable
//! event. The sink is dynamic (`&mut dyn EventSink`) to keep
//! [`Algorithm`](crate::Algorithm) object-safe and mock-testable.

use std::cmp::Ordering;

use sortviz_core::{AlgorithmError, Event, EventSink, Sequence};

/// Execution context passed to each procedure's `sort()` method.
///
/// All index arguments are bounds-checked; a bad index surfaces as
/// [`AlgorithmError::IndexOutOfBounds`] instead of a panic. Mutating
/// operations notify the sink both before and after the state change, so
/// a live consumer can pace around the mutation itself.
pub struct SortContext<'a> {
    sequence: &'a mut Sequence,
    sink: &'a mut dyn EventSink,
}

impl<'a> SortContext<'a> {
    /// Construct a context over `sequence`, emitting into `sink`.
    ///
    /// Typically called by the controller or by
    /// [`capture`](crate::capture), not by procedures directly.
    pub fn new(sequence: &'a mut Sequence, sink: &'a mut dyn EventSink) -> Self {
        Self { sequence, sink }
    }

    /// Number of values in the sequence.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Returns `true` if the sequence holds no values.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Read-only view of the current values.
    pub fn values(&self) -> &[u32] {
        self.sequence.as_slice()
    }

    /// The value at `index`.
    pub fn value(&self, index: usize) -> Result<u32, AlgorithmError> {
        self.check(index)?;
        Ok(self.sequence.as_slice()[index])
    }

    /// Emit `Compare { i, j }` and return the ordering of the live values.
    ///
    /// For comparisons against buffered operands use
    /// [`note_compare`](SortContext::note_compare) and compare locally.
    pub fn compare(&mut self, i: usize, j: usize) -> Result<Ordering, AlgorithmError> {
        self.note_compare(i, j)?;
        let values = self.sequence.as_slice();
        Ok(values[i].cmp(&values[j]))
    }

    /// Emit `Compare { i, j }` without inspecting the live values.
    ///
    /// Used when one or both operands were extracted earlier (insertion's
    /// key, merge's run heads); `i` and `j` are the positions the operands
    /// came from.
    pub fn note_compare(&mut self, i: usize, j: usize) -> Result<(), AlgorithmError> {
        self.check(i)?;
        self.check(j)?;
        self.sink
            .on_event(&Event::Compare { i, j }, self.sequence.as_slice())?;
        Ok(())
    }

    /// Exchange the values at `i` and `j`, emitting `Swap { i, j }`.
    ///
    /// Procedures skip the call entirely when the exchange would be a
    /// no-op (`i == j` with selection's unmoved minimum, quicksort's
    /// in-place pivot), so a no-op never counts as a swap.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), AlgorithmError> {
        self.check(i)?;
        self.check(j)?;
        let event = Event::Swap { i, j };
        self.sink.on_event(&event, self.sequence.as_slice())?;
        self.sequence.swap(i, j);
        self.sink.on_applied(&event, self.sequence.as_slice())?;
        Ok(())
    }

    /// Write `value` at `index`, emitting `Overwrite { index, value }`.
    pub fn overwrite(&mut self, index: usize, value: u32) -> Result<(), AlgorithmError> {
        self.check(index)?;
        let event = Event::Overwrite { index, value };
        self.sink.on_event(&event, self.sequence.as_slice())?;
        self.sequence.set(index, value);
        self.sink.on_applied(&event, self.sequence.as_slice())?;
        Ok(())
    }

    fn check(&self, index: usize) -> Result<(), AlgorithmError> {
        let len = self.sequence.len();
        if index < len {
            Ok(())
        } else {
            Err(AlgorithmError::IndexOutOfBounds { index, len })
        }
    }
}
