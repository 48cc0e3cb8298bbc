//! Iterative quicksort with median-of-three pivoting.
//!
//! Pending partitions live on a fixed-size explicit stack instead of the call stack.
//! After each partition step the larger side is pushed and the smaller side is
//! processed next, so at most `log2(n)` partitions are ever pending. Partitions of
//! [`INSERTION_THRESHOLD`] elements or fewer are finished by straight insertion.

use super::{Sort, insertion_sort};
use crate::core::SortingMethod;
use crate::error::SortError;
use cuneiform::cuneiform;
use std::cmp::Ordering;

/// Partitions this short (`ir - l < INSERTION_THRESHOLD`) are sorted by straight insertion.
pub const INSERTION_THRESHOLD: usize = 7;

/// Number of index entries in the explicit stack. Each pending partition takes two.
pub const STACK_CAPACITY: usize = 64;

// Cache-aligned partition bounds.
#[cuneiform]
struct PartitionStack {
    data: [usize; STACK_CAPACITY],
}

/// Quicksort, the default algorithm.
///
/// Average O(n log n), worst case O(n²) (made unlikely by median-of-three), and
/// O(log n) auxiliary space held in a bounded stack. Not stable.
///
/// If the stack would overflow the sort fails with [`SortError::SortingFailure`]. With
/// [`STACK_CAPACITY`] entries that needs more elements than fit in memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuickSorter {
    stack_capacity: usize,
}

impl QuickSorter {
    /// Creates a quicksort sorter with the full [`STACK_CAPACITY`].
    pub const fn new() -> Self {
        Self {
            stack_capacity: STACK_CAPACITY,
        }
    }

    /// Bounds the explicit stack below [`STACK_CAPACITY`] so exhaustion can be reached
    /// with small inputs.
    pub(crate) fn with_stack_capacity(capacity: usize) -> Self {
        Self {
            stack_capacity: capacity.min(STACK_CAPACITY),
        }
    }
}

impl Default for QuickSorter {
    fn default() -> Self {
        Self::new()
    }
}

impl Sort for QuickSorter {
    fn method(&self) -> SortingMethod {
        SortingMethod::Quicksort
    }

    fn sort_slice_by<T, F>(&self, v: &mut [T], mut compare: F) -> Result<(), SortError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if v.len() < 2 {
            return Ok(());
        }

        let mut stack = PartitionStack {
            data: [0; STACK_CAPACITY],
        };
        let stack = &mut stack.data;
        let mut top = 0;

        let mut l = 0;
        let mut ir = v.len() - 1;

        loop {
            if ir - l < INSERTION_THRESHOLD {
                insertion_sort(&mut v[l..=ir], &mut compare);
                if top == 0 {
                    return Ok(());
                }
                ir = stack[top - 1];
                l = stack[top - 2];
                top -= 2;
            } else {
                let (i, j) = partition(v, l, ir, &mut compare);

                if top + 2 > self.stack_capacity {
                    return Err(SortError::SortingFailure {
                        capacity: self.stack_capacity,
                    });
                }

                // Push the larger side, keep working on the smaller one.
                if ir - i + 1 >= j - l {
                    stack[top] = i;
                    stack[top + 1] = ir;
                    ir = j - 1;
                } else {
                    stack[top] = l;
                    stack[top + 1] = j - 1;
                    l = i;
                }
                top += 2;
            }
        }
    }
}

/// One median-of-three partitioning step over `v[l..=ir]`. Requires `ir - l >= 2`.
///
/// 1. Moves the middle element to `l + 1` and orders `v[l] <= v[l + 1] <= v[ir]`, so
///    `v[l]` and `v[ir]` act as sentinels for the scans below.
/// 2. Scans `i` up from `l + 1` past elements below the pivot `v[l + 1]`, and `j` down
///    from `ir` past elements above it, swapping out-of-place pairs until they cross.
/// 3. Swaps the pivot into its final position `j`.
///
/// Returns `(i, j)`: afterwards `v[l..j]` holds elements `<=` the pivot, `v[j]` is the
/// pivot, and `v[i..=ir]` holds elements `>=` the pivot, with `l < j < i <= ir`.
pub(crate) fn partition<T, F>(
    v: &mut [T],
    l: usize,
    ir: usize,
    compare: &mut F,
) -> (usize, usize)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mid = (l + ir) / 2;
    v.swap(mid, l + 1);
    if compare(&v[l], &v[ir]) == Ordering::Greater {
        v.swap(l, ir);
    }
    if compare(&v[l + 1], &v[ir]) == Ordering::Greater {
        v.swap(l + 1, ir);
    }
    if compare(&v[l], &v[l + 1]) == Ordering::Greater {
        v.swap(l, l + 1);
    }

    // The pivot stays at l + 1 while scanning. i starts past it. j can stop on it, but
    // v[l] <= pivot keeps j from passing below l.
    let pivot = l + 1;
    let mut i = l + 1;
    let mut j = ir;
    loop {
        i += 1;
        while compare(&v[i], &v[pivot]) == Ordering::Less {
            i += 1;
        }
        j -= 1;
        while compare(&v[j], &v[pivot]) == Ordering::Greater {
            j -= 1;
        }
        if j < i {
            break;
        }
        v.swap(i, j);
    }
    v.swap(pivot, j);

    (i, j)
}
