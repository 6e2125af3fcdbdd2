//! Error types for the sortviz animation framework.
//!
//! Organized by layer: renderer failures, event-sink rejections, algorithm
//! procedure failures, and run-boundary failures. Run-boundary errors are
//! caught and logged by the controller; they never propagate to callers.

use std::error::Error;
use std::fmt;

/// A display failure reported by a [`Renderer`](crate::Renderer) method.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderError {
    /// Human-readable description of the failure.
    pub reason: String,
}

impl RenderError {
    /// Create a render error from any displayable reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "renderer failed: {}", self.reason)
    }
}

impl Error for RenderError {}

/// An event sink declined an event mid-procedure.
///
/// Returned from [`EventSink`](crate::EventSink) hooks and wrapped in
/// [`AlgorithmError::Sink`] by the sort context. Every event boundary is a
/// valid stopping point: the sequence holds a fully-defined (though
/// possibly partially reordered) set of values when a sink rejects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SinkError {
    /// The renderer failed while presenting the event.
    RendererFailed {
        /// Description of the underlying render failure.
        reason: String,
    },
    /// The consumer declined to accept further events.
    Aborted {
        /// Why consumption stopped.
        reason: String,
    },
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RendererFailed { reason } => write!(f, "renderer failed: {reason}"),
            Self::Aborted { reason } => write!(f, "event consumption aborted: {reason}"),
        }
    }
}

impl Error for SinkError {}

impl From<RenderError> for SinkError {
    fn from(e: RenderError) -> Self {
        Self::RendererFailed { reason: e.reason }
    }
}

/// A sorting procedure failed mid-run.
///
/// Returned by `Algorithm::sort()` and wrapped in
/// [`RunError::AlgorithmFailed`] by the animation controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AlgorithmError {
    /// The event sink rejected an event.
    Sink(SinkError),
    /// The procedure addressed a position outside the sequence.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The sequence length at the time.
        len: usize,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sink(e) => write!(f, "sink rejected event: {e}"),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for sequence of length {len}")
            }
        }
    }
}

impl Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sink(e) => Some(e),
            Self::IndexOutOfBounds { .. } => None,
        }
    }
}

impl From<SinkError> for AlgorithmError {
    fn from(e: SinkError) -> Self {
        Self::Sink(e)
    }
}

/// A failure caught at the controller's run boundary.
///
/// Never returned as an `Err` to callers: the controller logs it and
/// reports it inside the run outcome, then restores the idle state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunError {
    /// The sorting procedure failed.
    AlgorithmFailed {
        /// Name of the failing procedure.
        name: String,
        /// The underlying procedure error.
        reason: AlgorithmError,
    },
    /// The terminal mark-sorted pass could not be rendered.
    MarkSortedFailed {
        /// The underlying render failure.
        reason: RenderError,
    },
    /// No procedure is registered under the requested name.
    UnknownAlgorithm {
        /// The requested name.
        name: String,
    },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlgorithmFailed { name, reason } => {
                write!(f, "algorithm '{name}' failed: {reason}")
            }
            Self::MarkSortedFailed { reason } => {
                write!(f, "mark-sorted pass failed: {reason}")
            }
            Self::UnknownAlgorithm { name } => write!(f, "unknown algorithm '{name}'"),
        }
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::AlgorithmFailed { reason, .. } => Some(reason),
            Self::MarkSortedFailed { reason } => Some(reason),
            Self::UnknownAlgorithm { .. } => None,
        }
    }
}

/// Parse error for algorithm names.
///
/// Returned by [`AlgorithmKind::from_str`](crate::AlgorithmKind).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownAlgorithm {
    /// The unrecognized name.
    pub name: String,
}

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm '{}'", self.name)
    }
}

impl Error for UnknownAlgorithm {}
