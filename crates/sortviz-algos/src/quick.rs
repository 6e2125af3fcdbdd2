//! Quicksort.

use std::cmp::Ordering;

use sortviz_core::{AlgorithmError, AlgorithmKind};

use crate::algorithm::Algorithm;
use crate::context::SortContext;

/// Lomuto-partition quicksort, pivot = last element.
///
/// Partition compares each scanned value against the pivot in place at
/// `high`, swapping into the store slot only when the scan index has
/// actually advanced past it, and placing the pivot with a final swap
/// only when it moves. No-op swaps are skipped entirely.
pub struct QuickSort;

impl Algorithm for QuickSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Quick
    }

    fn sort(&self, ctx: &mut SortContext<'_>) -> Result<(), AlgorithmError> {
        let n = ctx.len();
        if n < 2 {
            return Ok(());
        }
        sort_range(ctx, 0, n - 1)
    }
}

/// Recursively sort the inclusive range `[low, high]`.
fn sort_range(ctx: &mut SortContext<'_>, low: usize, high: usize) -> Result<(), AlgorithmError> {
    if low < high {
        let pivot = partition(ctx, low, high)?;
        if pivot > 0 {
            sort_range(ctx, low, pivot - 1)?;
        }
        sort_range(ctx, pivot + 1, high)?;
    }
    Ok(())
}

/// Lomuto partition of `[low, high]` around the value at `high`.
///
/// Returns the pivot's final position. `store` is the slot the next
/// smaller-than-pivot value moves into; values equal to the pivot stay
/// on the right.
fn partition(ctx: &mut SortContext<'_>, low: usize, high: usize) -> Result<usize, AlgorithmError> {
    let mut store = low;
    for j in low..high {
        if ctx.compare(j, high)? == Ordering::Less {
            if store != j {
                ctx.swap(store, j)?;
            }
            store += 1;
        }
    }
    if store != high {
        ctx.swap(store, high)?;
    }
    Ok(store)
}
