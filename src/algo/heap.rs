use super::Sort;
use crate::core::SortingMethod;
use crate::error::SortError;
use std::cmp::Ordering;

/// Heapsort.
///
/// Builds a max-heap over the range, then repeatedly moves the root behind the
/// shrinking heap. O(n log n) in every case, no extra memory, not stable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeapSorter;

impl Sort for HeapSorter {
    fn method(&self) -> SortingMethod {
        SortingMethod::Heapsort
    }

    fn sort_slice_by<T, F>(&self, v: &mut [T], mut compare: F) -> Result<(), SortError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let n = v.len();
        if n < 2 {
            return Ok(());
        }

        for i in (0..n / 2).rev() {
            sift_down(v, i, n - 1, &mut compare);
        }

        for i in (1..n).rev() {
            v.swap(0, i);
            sift_down(v, 0, i - 1, &mut compare);
        }

        Ok(())
    }
}

/// Restores the heap property for the subtree rooted at `root`, considering only
/// positions up to and including `last`.
///
/// The larger child is selected on each level; on a tie the right child wins.
fn sift_down<T, F>(v: &mut [T], mut root: usize, last: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut child = 2 * root + 1;
    while child <= last {
        if child < last && compare(&v[child], &v[child + 1]) != Ordering::Greater {
            child += 1;
        }
        if compare(&v[root], &v[child]) != Ordering::Less {
            break;
        }
        v.swap(root, child);
        root = child;
        child = 2 * root + 1;
    }
}
