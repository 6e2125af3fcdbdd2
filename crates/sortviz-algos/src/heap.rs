//! Heapsort.

use std::cmp::Ordering;

use sortviz_core::{AlgorithmError, AlgorithmKind};

use crate::algorithm::Algorithm;
use crate::context::SortContext;

/// Max-heap heapsort.
///
/// Builds the heap bottom-up from index `n/2 - 1` down to 0, then
/// repeatedly swaps the root with the shrinking boundary and re-heapifies.
/// The extraction swap is unconditional: root and boundary are distinct
/// positions even when their values are equal. Heapify compares the left
/// child against the current largest candidate, then the right child
/// against the updated candidate, and recurses after a swap.
pub struct HeapSort;

impl Algorithm for HeapSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Heap
    }

    fn sort(&self, ctx: &mut SortContext<'_>) -> Result<(), AlgorithmError> {
        let n = ctx.len();
        if n < 2 {
            return Ok(());
        }
        for i in (0..n / 2).rev() {
            heapify(ctx, n, i)?;
        }
        for end in (1..n).rev() {
            ctx.swap(0, end)?;
            heapify(ctx, end, 0)?;
        }
        Ok(())
    }
}

/// Sift the value at `i` down within the heap prefix `[0, n)`.
fn heapify(ctx: &mut SortContext<'_>, n: usize, i: usize) -> Result<(), AlgorithmError> {
    let mut largest = i;
    let left = 2 * i + 1;
    let right = 2 * i + 2;

    if left < n && ctx.compare(left, largest)? == Ordering::Greater {
        largest = left;
    }
    if right < n && ctx.compare(right, largest)? == Ordering::Greater {
        largest = right;
    }
    if largest != i {
        ctx.swap(i, largest)?;
        heapify(ctx, n, largest)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::capture;
    use sortviz_core::{Event, Sequence};

    #[test]
    fn sorts_a_small_sequence() {
        let mut seq = Sequence::from_values(vec![4, 10, 3, 5, 1]);
        let trace = capture(&HeapSort, &mut seq).unwrap();
        assert_eq!(seq.as_slice(), &[1, 3, 4, 5, 10]);
        assert!(trace.mutation_count() >= 4);
    }

    #[test]
    fn build_phase_heapifies_bottom_up() {
        // n = 4: build heapifies i = 1 then i = 0.
        let mut seq = Sequence::from_values(vec![1, 2, 3, 4]);
        let trace = capture(&HeapSort, &mut seq).unwrap();
        assert_eq!(seq.as_slice(), &[1, 2, 3, 4]);
        // i = 1: left child 3 only; 4 > 2 -> swap.
        assert_eq!(
            &trace.events()[..2],
            &[Event::Compare { i: 3, j: 1 }, Event::Swap { i: 1, j: 3 }]
        );
    }

    #[test]
    fn extraction_swap_is_unconditional() {
        // [5, 5]: already a max-heap; extraction still swaps root and
        // boundary even though the values are equal.
        let mut seq = Sequence::from_values(vec![5, 5]);
        let trace = capture(&HeapSort, &mut seq).unwrap();
        assert_eq!(
            trace.events(),
            &[
                Event::Compare { i: 1, j: 0 },
                Event::Swap { i: 0, j: 1 },
            ]
        );
    }

    #[test]
    fn right_child_is_compared_against_the_updated_largest() {
        // Heapify at the root of [1, 3, 2]: left (3) beats 1, then the
        // right child (2) is compared against position 1, not position 0.
        let mut seq = Sequence::from_values(vec![1, 3, 2]);
        let trace = capture(&HeapSort, &mut seq).unwrap();
        assert_eq!(
            &trace.events()[..2],
            &[Event::Compare { i: 1, j: 0 }, Event::Compare { i: 2, j: 1 }]
        );
        assert_eq!(seq.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn trivial_inputs_emit_nothing() {
        for values in [vec![], vec![42]] {
            let mut seq = Sequence::from_values(values);
            let trace = capture(&HeapSort, &mut seq).unwrap();
            assert!(trace.is_empty());
        }
    }
}
