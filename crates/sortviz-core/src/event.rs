//! Observable step events and visual markers.
//!
//! Sorting procedures emit one [`Event`] per comparison and per mutation,
//! in exactly the order the canonical algorithm performs them. Between any
//! two events the sequence is fully defined, so a consumer may render,
//! suspend, or abort at every event boundary.

use std::fmt;

/// A discrete observable step emitted by a sorting procedure.
///
/// `Compare` inspects state; `Swap` and `Overwrite` mutate it. Mutation
/// events carry enough information to be re-applied to a copy of the
/// original input, which is what makes recorded traces replayable.
///
/// # Examples
///
/// ```
/// use sortviz_core::Event;
///
/// let ev = Event::Swap { i: 0, j: 3 };
/// assert!(ev.is_mutation());
/// assert!(!Event::Compare { i: 0, j: 1 }.is_mutation());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// The values at positions `i` and `j` were compared.
    ///
    /// For procedures that compare buffered operands (insertion's
    /// extracted key, merge's run heads), `i` and `j` are the positions
    /// the operands came from.
    Compare {
        /// First compared position.
        i: usize,
        /// Second compared position.
        j: usize,
    },
    /// The values at positions `i` and `j` were exchanged.
    Swap {
        /// First exchanged position.
        i: usize,
        /// Second exchanged position.
        j: usize,
    },
    /// `value` was written to position `index`.
    ///
    /// Emitted by insertion's right-shifts and key placement, and by
    /// merge's write-backs from its run buffers.
    Overwrite {
        /// The written position.
        index: usize,
        /// The value written there.
        value: u32,
    },
}

impl Event {
    /// Returns `true` if this event mutates the sequence.
    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::Swap { .. } | Self::Overwrite { .. })
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compare { i, j } => write!(f, "compare({i}, {j})"),
            Self::Swap { i, j } => write!(f, "swap({i}, {j})"),
            Self::Overwrite { index, value } => write!(f, "overwrite({index}, {value})"),
        }
    }
}

/// A named visual marker applied to a single bar position.
///
/// Markers are a pure rendering signal: applying or removing one never
/// changes the sequence. The controller applies `Comparing` and `Swapping`
/// around the matching events and `Sorted` during the terminal pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    /// The position is one operand of the comparison in flight.
    Comparing,
    /// The position is being exchanged or overwritten.
    Swapping,
    /// The position has reached its final place.
    Sorted,
}

impl Marker {
    /// Canonical lowercase marker name, as a renderer class name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Comparing => "comparing",
            Self::Swapping => "swapping",
            Self::Sorted => "sorted",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutation_classification() {
        assert!(!Event::Compare { i: 1, j: 2 }.is_mutation());
        assert!(Event::Swap { i: 1, j: 2 }.is_mutation());
        assert!(Event::Overwrite { index: 0, value: 7 }.is_mutation());
    }

    #[test]
    fn display_formats() {
        assert_eq!(Event::Compare { i: 1, j: 2 }.to_string(), "compare(1, 2)");
        assert_eq!(Event::Swap { i: 3, j: 0 }.to_string(), "swap(3, 0)");
        assert_eq!(
            Event::Overwrite { index: 4, value: 99 }.to_string(),
            "overwrite(4, 99)"
        );
        assert_eq!(Marker::Comparing.to_string(), "comparing");
        assert_eq!(Marker::Swapping.name(), "swapping");
        assert_eq!(Marker::Sorted.name(), "sorted");
    }
}
