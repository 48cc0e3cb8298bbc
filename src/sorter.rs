//! The [`Sorter`] facade: one value selecting any algorithm by its [`SortingMethod`].

use crate::algo::{
    HeapSorter, PlatformSorter, QuickSorter, ShellSorter, Sort, StraightInsertionSorter,
};
use crate::core::SortingMethod;
use crate::error::SortError;
use std::cmp::Ordering;

/// A sorting engine created from a [`SortingMethod`] tag.
///
/// Sorters hold no data between calls and can be reused, copied and shared across
/// threads freely. All operations come from the [`Sort`] trait.
///
/// # Examples
///
/// ```
/// use ranksort::prelude::*;
///
/// let sorter = Sorter::create(SortingMethod::Shell);
/// assert_eq!(sorter.method(), SortingMethod::Shell);
///
/// let mut data = vec![5, 3, 8, 1, 9, 2];
/// sorter.sort(&mut data);
/// assert_eq!(data, vec![1, 2, 3, 5, 8, 9]);
///
/// // The default engine is quicksort.
/// assert_eq!(Sorter::default().method(), SortingMethod::Quicksort);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sorter {
    /// Stable straight insertion, quadratic.
    StraightInsertion(StraightInsertionSorter),
    /// Shell sort with a 3x+1 increment sequence.
    Shell(ShellSorter),
    /// Iterative median-of-three quicksort, the default.
    Quicksort(QuickSorter),
    /// In-place heapsort.
    Heapsort(HeapSorter),
    /// The standard library's unstable sort over the whole slice.
    Platform(PlatformSorter),
}

impl Sorter {
    /// Creates a sorter performing `method`.
    pub fn create(method: SortingMethod) -> Self {
        match method {
            SortingMethod::StraightInsertion => Sorter::StraightInsertion(StraightInsertionSorter),
            SortingMethod::Shell => Sorter::Shell(ShellSorter),
            SortingMethod::Quicksort => Sorter::Quicksort(QuickSorter::new()),
            SortingMethod::Heapsort => Sorter::Heapsort(HeapSorter),
            SortingMethod::Platform => Sorter::Platform(PlatformSorter),
        }
    }
}

impl Default for Sorter {
    fn default() -> Self {
        Sorter::create(SortingMethod::default())
    }
}

impl From<SortingMethod> for Sorter {
    fn from(method: SortingMethod) -> Self {
        Sorter::create(method)
    }
}

impl Sort for Sorter {
    fn method(&self) -> SortingMethod {
        match self {
            Sorter::StraightInsertion(s) => s.method(),
            Sorter::Shell(s) => s.method(),
            Sorter::Quicksort(s) => s.method(),
            Sorter::Heapsort(s) => s.method(),
            Sorter::Platform(s) => s.method(),
        }
    }

    fn sort_slice_by<T, F>(&self, v: &mut [T], compare: F) -> Result<(), SortError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        match self {
            Sorter::StraightInsertion(s) => s.sort_slice_by(v, compare),
            Sorter::Shell(s) => s.sort_slice_by(v, compare),
            Sorter::Quicksort(s) => s.sort_slice_by(v, compare),
            Sorter::Heapsort(s) => s.sort_slice_by(v, compare),
            Sorter::Platform(s) => s.sort_slice_by(v, compare),
        }
    }

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
        match self {
            Sorter::StraightInsertion(s) => s.sort_range_by(v, from, to, compare),
            Sorter::Shell(s) => s.sort_range_by(v, from, to, compare),
            Sorter::Quicksort(s) => s.sort_range_by(v, from, to, compare),
            Sorter::Heapsort(s) => s.sort_range_by(v, from, to, compare),
            Sorter::Platform(s) => s.sort_range_by(v, from, to, compare),
        }
    }
}
