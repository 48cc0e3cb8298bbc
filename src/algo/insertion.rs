use super::Sort;
use crate::core::SortingMethod;
use crate::error::SortError;
use std::cmp::Ordering;

/// Straight insertion sort.
///
/// Stable, O(n²) comparisons, no extra memory. Fast enough for short ranges, and
/// used by [`QuickSorter`](super::QuickSorter) to finish small partitions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StraightInsertionSorter;

impl Sort for StraightInsertionSorter {
    fn method(&self) -> SortingMethod {
        SortingMethod::StraightInsertion
    }

    fn sort_slice_by<T, F>(&self, v: &mut [T], mut compare: F) -> Result<(), SortError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        insertion_sort(v, &mut compare);
        Ok(())
    }
}

/// Inserts each element into the sorted prefix before it, shifting larger elements
/// one slot right. Equal elements never move past each other.
pub(crate) fn insertion_sort<T, F>(v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for j in 1..v.len() {
        let mut i = j;
        while i > 0 && compare(&v[i - 1], &v[i]) == Ordering::Greater {
            v.swap(i - 1, i);
            i -= 1;
        }
    }
}
