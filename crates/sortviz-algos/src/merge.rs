//! Merge sort.

use smallvec::SmallVec;
use sortviz_core::{AlgorithmError, AlgorithmKind};

use crate::algorithm::Algorithm;
use crate::context::SortContext;

/// Run buffer for one side of a merge. Inline capacity covers the whole
/// default sequence (30 values), so typical runs never touch the heap.
type RunBuf = SmallVec<[u32; 32]>;

/// Top-down recursive merge sort.
///
/// Splits at `mid = floor((left + right) / 2)`, recurses on both halves,
/// then merges by comparing run heads with a `<=` tie-break favoring the
/// left run, which is what keeps equal values in their original relative
/// order. Every write-back to the sequence, including the flush of a
/// remaining run, is an observable overwrite; the flushes need no further
/// comparisons.
///
/// Compare events carry the source positions of the two run heads
/// (`left + i`, `mid + 1 + j`).
pub struct MergeSort;

impl Algorithm for MergeSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Merge
    }

    fn sort(&self, ctx: &mut SortContext<'_>) -> Result<(), AlgorithmError> {
        let n = ctx.len();
        if n < 2 {
            return Ok(());
        }
        sort_range(ctx, 0, n - 1)
    }
}

/// Recursively sort the inclusive range `[left, right]`.
fn sort_range(ctx: &mut SortContext<'_>, left: usize, right: usize) -> Result<(), AlgorithmError> {
    if left < right {
        let mid = left + (right - left) / 2;
        sort_range(ctx, left, mid)?;
        sort_range(ctx, mid + 1, right)?;
        merge(ctx, left, mid, right)?;
    }
    Ok(())
}

/// Merge the sorted runs `[left, mid]` and `[mid + 1, right]`.
fn merge(
    ctx: &mut SortContext<'_>,
    left: usize,
    mid: usize,
    right: usize,
) -> Result<(), AlgorithmError> {
    let left_run: RunBuf = RunBuf::from_slice(&ctx.values()[left..=mid]);
    let right_run: RunBuf = RunBuf::from_slice(&ctx.values()[mid + 1..=right]);

    let mut i = 0;
    let mut j = 0;
    let mut k = left;
    while i < left_run.len() && j < right_run.len() {
        ctx.note_compare(left + i, mid + 1 + j)?;
        if left_run[i] <= right_run[j] {
            ctx.overwrite(k, left_run[i])?;
            i += 1;
        } else {
            ctx.overwrite(k, right_run[j])?;
            j += 1;
        }
        k += 1;
    }
    while i < left_run.len() {
        ctx.overwrite(k, left_run[i])?;
        i += 1;
        k += 1;
    }
    while j < right_run.len() {
        ctx.overwrite(k, right_run[j])?;
        j += 1;
        k += 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::capture;
    use sortviz_core::{Event, Sequence};

    #[test]
    fn sorts_and_writes_every_merge_slot() {
        let mut seq = Sequence::from_values(vec![5, 3, 8, 1]);
        let trace = capture(&MergeSort, &mut seq).unwrap();
        assert_eq!(seq.as_slice(), &[1, 3, 5, 8]);
        // Three merges over ranges of 2, 2, and 4 slots.
        assert_eq!(trace.mutation_count(), 8);
    }

    #[test]
    fn two_values_merge_with_one_comparison() {
        let mut seq = Sequence::from_values(vec![2, 1]);
        let trace = capture(&MergeSort, &mut seq).unwrap();
        assert_eq!(
            trace.events(),
            &[
                Event::Compare { i: 0, j: 1 },
                Event::Overwrite { index: 0, value: 1 },
                Event::Overwrite { index: 1, value: 2 },
            ]
        );
    }

    #[test]
    fn tie_break_prefers_the_left_run() {
        // Left run [2, 9] vs right run [2]: the stable `<=` takes the
        // left 2 first, forcing a second comparison (9 vs 2). An unstable
        // `<` would exhaust the right run immediately and stop at one.
        let mut seq = Sequence::from_values(vec![2, 9, 2]);
        let trace = capture(&MergeSort, &mut seq).unwrap();
        assert_eq!(seq.as_slice(), &[2, 2, 9]);
        assert_eq!(trace.comparison_count(), 3);
    }

    #[test]
    fn flush_phases_emit_overwrites_without_comparisons() {
        // [1, 2, 3, 4]: every merge exhausts the left run first, then
        // flushes the right run with no further comparisons.
        let mut seq = Sequence::from_values(vec![1, 2, 3, 4]);
        let trace = capture(&MergeSort, &mut seq).unwrap();
        assert_eq!(trace.comparison_count(), 4);
        assert_eq!(trace.mutation_count(), 8);
    }

    #[test]
    fn trivial_inputs_emit_nothing() {
        for values in [vec![], vec![42]] {
            let mut seq = Sequence::from_values(values);
            let trace = capture(&MergeSort, &mut seq).unwrap();
            assert!(trace.is_empty());
        }
    }
}
