//! Algorithm selection.

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownAlgorithm;

/// One of the six animated sorting algorithms.
///
/// The set is closed: the animation controller registers exactly these
/// procedures, in this order. Canonical lowercase names round-trip through
/// [`Display`](fmt::Display) and [`FromStr`], which is how callers request
/// a run by name.
///
/// # Examples
///
/// ```
/// use sortviz_core::AlgorithmKind;
///
/// let kind: AlgorithmKind = "merge".parse().unwrap();
/// assert_eq!(kind, AlgorithmKind::Merge);
/// assert_eq!(kind.name(), "merge");
/// assert!("shell".parse::<AlgorithmKind>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AlgorithmKind {
    /// Adjacent-pair bubble sort.
    Bubble,
    /// Minimum-selection sort.
    Selection,
    /// Key-shifting insertion sort.
    Insertion,
    /// Top-down recursive merge sort.
    Merge,
    /// Lomuto-partition quicksort.
    Quick,
    /// Max-heap heapsort.
    Heap,
}

impl AlgorithmKind {
    /// Every kind, in registry order.
    pub const ALL: [AlgorithmKind; 6] = [
        Self::Bubble,
        Self::Selection,
        Self::Insertion,
        Self::Merge,
        Self::Quick,
        Self::Heap,
    ];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Merge => "merge",
            Self::Quick => "quick",
            Self::Heap => "heap",
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmKind {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bubble" => Ok(Self::Bubble),
            "selection" => Ok(Self::Selection),
            "insertion" => Ok(Self::Insertion),
            "merge" => Ok(Self::Merge),
            "quick" => Ok(Self::Quick),
            "heap" => Ok(Self::Heap),
            other => Err(UnknownAlgorithm {
                name: other.to_string(),
            }),
        }
    }
}
