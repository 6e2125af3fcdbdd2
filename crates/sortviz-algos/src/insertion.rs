//! Insertion sort.

use sortviz_core::{AlgorithmError, AlgorithmKind};

use crate::algorithm::Algorithm;
use crate::context::SortContext;

/// Key-shifting insertion sort.
///
/// Extracts each key and shifts the larger prefix values one position
/// right until the key's slot opens. Each shift iteration is one
/// comparison event followed by one overwrite; the guard comparison that
/// ends the loop is unobserved. The final key placement is emitted only
/// when the key actually moved, so an already-sorted input produces no
/// events at all.
///
/// Shifting only on strictly-greater keeps equal keys in their original
/// relative order.
pub struct InsertionSort;

impl Algorithm for InsertionSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Insertion
    }

    fn sort(&self, ctx: &mut SortContext<'_>) -> Result<(), AlgorithmError> {
        let n = ctx.len();
        if n < 2 {
            return Ok(());
        }
        for i in 1..n {
            let key = ctx.value(i)?;
            let mut hole = i;
            while hole > 0 {
                let above = ctx.value(hole - 1)?;
                if above <= key {
                    break;
                }
                ctx.note_compare(hole - 1, hole)?;
                ctx.overwrite(hole, above)?;
                hole -= 1;
            }
            if hole != i {
                ctx.overwrite(hole, key)?;
            }
        }
        Ok(())
    }
}
