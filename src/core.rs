//! Core traits and types for ranksort.
//!
//! This module defines:
//! - [`Comparator`] and [`ComparatorAndAverager`]: traits users implement to order custom types.
//! - [`NaturalOrder`]: comparator delegating to [`Ord`].
//! - [`SortingMethod`]: the tag selecting an algorithm.
//! - [`validate_range`]: the range contract every operation checks before mutating.

use crate::error::{ParseMethodError, SortError};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// A three-way ordering between two values of type `T`.
///
/// `compare(a, b)` returns [`Ordering::Less`] if `a` precedes `b`, [`Ordering::Equal`]
/// if they rank the same and [`Ordering::Greater`] if `a` follows `b`. Implementations
/// must be free of side effects; algorithms may call them any number of times.
///
/// # Examples
///
/// Sorting by descending length:
///
/// ```
/// use ranksort::core::Comparator;
/// use std::cmp::Ordering;
///
/// struct LongestFirst;
///
/// impl Comparator<String> for LongestFirst {
///     fn compare(&self, a: &String, b: &String) -> Ordering {
///         b.len().cmp(&a.len())
///     }
/// }
/// ```
pub trait Comparator<T: ?Sized> {
    /// Compares `a` against `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// A [`Comparator`] that can also combine two values of equal rank into one.
///
/// Used by the median operations on even-length ranges, where the median is the
/// average of the two middle elements.
pub trait ComparatorAndAverager<T>: Comparator<T> {
    /// Returns a representative average of `a` and `b`.
    fn average(&self, a: &T, b: &T) -> T;
}

impl<T: ?Sized, C: Comparator<T> + ?Sized> Comparator<T> for &C {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (**self).compare(a, b)
    }
}

impl<T, C: ComparatorAndAverager<T> + ?Sized> ComparatorAndAverager<T> for &C {
    fn average(&self, a: &T, b: &T) -> T {
        (**self).average(a, b)
    }
}

/// Comparator using the natural ([`Ord`]) ordering of `T`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// The sorting algorithms a [`Sorter`](crate::sorter::Sorter) can perform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortingMethod {
    /// Straight insertion. O(n²), stable, suitable for small inputs.
    StraightInsertion,
    /// Shell sort with the 3x+1 increment sequence.
    Shell,
    /// Iterative median-of-three quicksort. The fastest on average.
    #[default]
    Quicksort,
    /// In-place binary heap sort. O(n log n) guaranteed.
    Heapsort,
    /// Delegates to the standard library's unstable sort over the whole sequence.
    Platform,
}

impl SortingMethod {
    /// Every available method, in declaration order.
    pub const ALL: [SortingMethod; 5] = [
        SortingMethod::StraightInsertion,
        SortingMethod::Shell,
        SortingMethod::Quicksort,
        SortingMethod::Heapsort,
        SortingMethod::Platform,
    ];

    /// Canonical name, accepted back by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            SortingMethod::StraightInsertion => "straight-insertion",
            SortingMethod::Shell => "shell",
            SortingMethod::Quicksort => "quicksort",
            SortingMethod::Heapsort => "heapsort",
            SortingMethod::Platform => "platform",
        }
    }
}

impl fmt::Display for SortingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortingMethod {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        SortingMethod::ALL
            .into_iter()
            .find(|method| method.name() == normalized)
            .ok_or_else(|| ParseMethodError(s.to_string()))
    }
}

/// Validates a half-open range `[from, to)` against a sequence of length `len`.
///
/// Checks run in a fixed order: `from <= to` first ([`SortError::InvalidRange`]),
/// then `to <= len` ([`SortError::IndexOutOfBounds`]). An empty range is valid; callers
/// treat it as a no-op.
///
/// # Examples
///
/// ```
/// use ranksort::core::validate_range;
/// use ranksort::SortError;
///
/// assert_eq!(validate_range(10, 2, 5), Ok(2..5));
/// assert!(matches!(validate_range(10, 5, 2), Err(SortError::InvalidRange { .. })));
/// assert!(matches!(validate_range(10, 2, 11), Err(SortError::IndexOutOfBounds { .. })));
/// ```
pub fn validate_range(len: usize, from: usize, to: usize) -> Result<Range<usize>, SortError> {
    if from > to {
        return Err(SortError::InvalidRange {
            from,
            to,
            pos: None,
        });
    }
    if to > len {
        return Err(SortError::IndexOutOfBounds { to, len });
    }
    Ok(from..to)
}
