//! Bubble sort.

use std::cmp::Ordering;

use sortviz_core::{AlgorithmError, AlgorithmKind};

use crate::algorithm::Algorithm;
use crate::context::SortContext;

/// Adjacent-pair bubble sort.
///
/// `n - 1` outer passes; the inner bound shrinks by one each pass as the
/// largest remaining value bubbles to the back. No early-exit flag: an
/// already-sorted input still walks every pass, which is exactly the
/// behavior being visualized.
pub struct BubbleSort;

impl Algorithm for BubbleSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Bubble
    }

    fn sort(&self, ctx: &mut SortContext<'_>) -> Result<(), AlgorithmError> {
        let n = ctx.len();
        if n < 2 {
            return Ok(());
        }
        for pass in 0..n - 1 {
            for j in 0..n - 1 - pass {
                if ctx.compare(j, j + 1)? == Ordering::Greater {
                    ctx.swap(j, j + 1)?;
                }
            }
        }
        Ok(())
    }
}
