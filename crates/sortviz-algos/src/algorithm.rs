//! The [`Algorithm`] trait.

use sortviz_core::{AlgorithmError, AlgorithmKind};

use crate::context::SortContext;

/// A step-wise sorting procedure.
///
/// # Contract
///
/// - `sort()` MUST reproduce the canonical algorithm's exact operation
///   order: the point of the framework is to visualize *that specific*
///   algorithm's behavior, not merely to sort.
/// - Every comparison and every mutation goes through the
///   [`SortContext`]; no direct sequence access bypasses the event
///   stream.
/// - `&self`: procedures are stateless; all working state lives in
///   locals and the sequence itself.
/// - A sequence of fewer than two values completes immediately with no
///   events.
///
/// # Object safety
///
/// This trait is object-safe; the controller stores procedures as
/// `Box<dyn Algorithm>`.
///
/// # Examples
///
/// A procedure that never emits anything (and so only "sorts" trivially
/// sorted input):
///
/// ```
/// use sortviz_algos::{Algorithm, SortContext};
/// use sortviz_core::{AlgorithmError, AlgorithmKind};
///
/// struct DoNothing;
///
/// impl Algorithm for DoNothing {
///     fn kind(&self) -> AlgorithmKind { AlgorithmKind::Bubble }
///     fn sort(&self, _ctx: &mut SortContext<'_>) -> Result<(), AlgorithmError> {
///         Ok(())
///     }
/// }
///
/// assert_eq!(DoNothing.name(), "bubble");
/// ```
pub trait Algorithm: Send {
    /// Which of the six animated algorithms this procedure implements.
    fn kind(&self) -> AlgorithmKind;

    /// Human-readable name for registry lookup and error reporting.
    ///
    /// Default: the canonical name of [`kind()`](Algorithm::kind).
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Execute the procedure to completion, emitting an event at every
    /// comparison and mutation.
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::Sink`] if the event sink rejects an
    /// event, or [`AlgorithmError::IndexOutOfBounds`] on a defective
    /// index computation. The sequence is left fully defined (though
    /// possibly partially reordered) in either case.
    fn sort(&self, ctx: &mut SortContext<'_>) -> Result<(), AlgorithmError>;
}
