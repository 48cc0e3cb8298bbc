//! Sorting algorithms and the [`Sort`] capability they share.
//!
//! Every algorithm sorts a caller-owned slice in place, ascending under the supplied
//! ordering, restricted to a half-open range `[from, to)`:
//! - [`StraightInsertionSorter`]: O(n²) baseline, also quicksort's small-partition fallback.
//! - [`ShellSorter`]: insertion sort over a shrinking 3x+1 gap sequence.
//! - [`HeapSorter`]: in-place binary max-heap.
//! - [`QuickSorter`]: iterative median-of-three quicksort with a bounded explicit stack.
//! - [`PlatformSorter`]: delegates to the standard library over the whole sequence.
//!
//! None of them guarantee stability except straight insertion.

use crate::core::{Comparator, NaturalOrder, SortingMethod, validate_range};
use crate::error::SortError;
use std::cmp::Ordering;

mod heap;
mod insertion;
mod platform;
mod quick;
mod shell;

pub use heap::HeapSorter;
pub use insertion::StraightInsertionSorter;
pub use platform::PlatformSorter;
pub use quick::{INSERTION_THRESHOLD, QuickSorter, STACK_CAPACITY};
pub use shell::ShellSorter;

pub(crate) use insertion::insertion_sort;
pub(crate) use quick::partition;

/// Capability shared by every sorting algorithm.
///
/// Implementors provide [`Sort::method`] and [`Sort::sort_slice_by`]; the range-checked
/// entry points and the comparator-object, natural-order, whole-sequence and copying
/// variants are derived from those.
pub trait Sort {
    /// The algorithm this sorter performs.
    fn method(&self) -> SortingMethod;

    /// Sorts the whole of `v` ascending under `compare`.
    ///
    /// Only [`SortError::SortingFailure`] can be returned from here; ranges are
    /// validated by the callers.
    fn sort_slice_by<T, F>(&self, v: &mut [T], compare: F) -> Result<(), SortError>
    where
        F: FnMut(&T, &T) -> Ordering;

    /// Sorts `v[from..to]` ascending under `compare`, leaving the rest of `v` untouched.
    ///
    /// # Errors
    ///
    /// - [`SortError::InvalidRange`] if `from > to`.
    /// - [`SortError::IndexOutOfBounds`] if `to > v.len()`.
    /// - [`SortError::SortingFailure`] if quicksort exhausts its partition stack. The
    ///   range may already be partially reordered in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use ranksort::prelude::*;
    ///
    /// let mut data = vec![9, 5, 3, 8, 1, 0];
    /// Sorter::create(SortingMethod::Heapsort)
    ///     .sort_range_by(&mut data, 1, 5, |a, b| a.cmp(b))
    ///     .unwrap();
    ///
    /// assert_eq!(data, vec![9, 1, 3, 5, 8, 0]);
    /// ```
    fn sort_range_by<T, F>(
        &self,
        v: &mut [T],
        from: usize,
        to: usize,
        compare: F,
    ) -> Result<(), SortError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let range = validate_range(v.len(), from, to)?;
        if range.is_empty() {
            return Ok(());
        }
        self.sort_slice_by(&mut v[range], compare)
    }

    /// Sorts `v[from..to]` using a [`Comparator`] object.
    fn sort_range_with<T, C>(
        &self,
        v: &mut [T],
        from: usize,
        to: usize,
        comparator: &C,
    ) -> Result<(), SortError>
    where
        C: Comparator<T> + ?Sized,
    {
        self.sort_range_by(v, from, to, |a, b| comparator.compare(a, b))
    }

    /// Sorts `v[from..to]` by the natural ordering of `T`.
    fn sort_range<T: Ord>(&self, v: &mut [T], from: usize, to: usize) -> Result<(), SortError> {
        self.sort_range_with(v, from, to, &NaturalOrder)
    }

    /// Sorts all of `v` under `compare`.
    ///
    /// The full range can never be invalid, and quicksort's stack cannot run out on a
    /// slice that fits in memory, so no error is reported.
    fn sort_by<T, F>(&self, v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let len = v.len();
        let result = self.sort_range_by(v, 0, len, compare);
        debug_assert!(result.is_ok(), "whole-slice sort failed: {result:?}");
    }

    /// Sorts all of `v` using a [`Comparator`] object.
    fn sort_with<T, C>(&self, v: &mut [T], comparator: &C)
    where
        C: Comparator<T> + ?Sized,
    {
        self.sort_by(v, |a, b| comparator.compare(a, b));
    }

    /// Sorts all of `v` by the natural ordering of `T`.
    fn sort<T: Ord>(&self, v: &mut [T]) {
        self.sort_with(v, &NaturalOrder);
    }

    /// Returns a copy of `v` with `[from, to)` sorted under `compare`. `v` is not modified.
    ///
    /// # Errors
    ///
    /// Same as [`Sort::sort_range_by`].
    fn sorted_range_by<T, F>(
        &self,
        v: &[T],
        from: usize,
        to: usize,
        compare: F,
    ) -> Result<Vec<T>, SortError>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        validate_range(v.len(), from, to)?;
        let mut result = v.to_vec();
        self.sort_range_by(&mut result, from, to, compare)?;
        Ok(result)
    }

    /// Returns a copy of `v` with `[from, to)` sorted using a [`Comparator`] object.
    fn sorted_range_with<T, C>(
        &self,
        v: &[T],
        from: usize,
        to: usize,
        comparator: &C,
    ) -> Result<Vec<T>, SortError>
    where
        T: Clone,
        C: Comparator<T> + ?Sized,
    {
        self.sorted_range_by(v, from, to, |a, b| comparator.compare(a, b))
    }

    /// Returns a copy of `v` with `[from, to)` sorted by the natural ordering of `T`.
    fn sorted_range<T: Ord + Clone>(
        &self,
        v: &[T],
        from: usize,
        to: usize,
    ) -> Result<Vec<T>, SortError> {
        self.sorted_range_with(v, from, to, &NaturalOrder)
    }

    /// Returns a sorted copy of all of `v` under `compare`.
    fn sorted_by<T, F>(&self, v: &[T], compare: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut result = v.to_vec();
        self.sort_by(&mut result, compare);
        result
    }

    /// Returns a sorted copy of all of `v` using a [`Comparator`] object.
    fn sorted_with<T, C>(&self, v: &[T], comparator: &C) -> Vec<T>
    where
        T: Clone,
        C: Comparator<T> + ?Sized,
    {
        self.sorted_by(v, |a, b| comparator.compare(a, b))
    }

    /// Returns a copy of `v` sorted by the natural ordering of `T`.
    fn sorted<T: Ord + Clone>(&self, v: &[T]) -> Vec<T> {
        self.sorted_with(v, &NaturalOrder)
    }
}
