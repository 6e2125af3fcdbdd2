//! Instrumented sorting procedures for the sortviz animation framework.
//!
//! Each procedure implements [`Algorithm`] and performs every comparison
//! and mutation through a [`SortContext`], which emits a typed event at
//! each step. Consuming the stream with a recording sink (see
//! [`capture`]) yields a delay-free [`EventTrace`] for testing; the
//! animation controller consumes the same stream live, pausing between
//! events.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod algorithm;
pub mod bubble;
pub mod context;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;
pub mod trace;

pub use algorithm::Algorithm;
pub use bubble::BubbleSort;
pub use context::SortContext;
pub use heap::HeapSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use selection::SelectionSort;
pub use trace::{capture, EventTrace, RecordingSink};

use sortviz_core::AlgorithmKind;

/// The procedure implementing one [`AlgorithmKind`].
pub fn algorithm_for(kind: AlgorithmKind) -> Box<dyn Algorithm> {
    match kind {
        AlgorithmKind::Bubble => Box::new(BubbleSort),
        AlgorithmKind::Selection => Box::new(SelectionSort),
        AlgorithmKind::Insertion => Box::new(InsertionSort),
        AlgorithmKind::Merge => Box::new(MergeSort),
        AlgorithmKind::Quick => Box::new(QuickSort),
        AlgorithmKind::Heap => Box::new(HeapSort),
    }
}

/// All six procedures, in [`AlgorithmKind::ALL`] order.
pub fn standard_algorithms() -> Vec<Box<dyn Algorithm>> {
    AlgorithmKind::ALL.into_iter().map(algorithm_for).collect()
}
