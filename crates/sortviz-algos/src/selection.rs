//! Selection sort.

use std::cmp::Ordering;

use sortviz_core::{AlgorithmError, AlgorithmKind};

use crate::algorithm::Algorithm;
use crate::context::SortContext;

/// Minimum-selection sort.
///
/// For each outer index, scans the unsorted remainder for its minimum
/// (comparing each candidate against the running minimum), then performs
/// at most one swap. When the minimum is already in place the swap is
/// skipped entirely: no event, no count.
pub struct SelectionSort;

impl Algorithm for SelectionSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Selection
    }

    fn sort(&self, ctx: &mut SortContext<'_>) -> Result<(), AlgorithmError> {
        let n = ctx.len();
        if n < 2 {
            return Ok(());
        }
        for i in 0..n - 1 {
            let mut min_index = i;
            for j in i + 1..n {
                if ctx.compare(j, min_index)? == Ordering::Less {
                    min_index = j;
                }
            }
            if min_index != i {
                ctx.swap(i, min_index)?;
            }
        }
        Ok(())
    }
}
