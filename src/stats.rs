//! Order statistics: k-th smallest element selection and median.
//!
//! Selection runs quickselect with the same median-of-three partition step as
//! [`QuickSorter`](crate::algo::QuickSorter), but after each step only the side
//! containing the requested position is kept. No explicit stack is needed, so these
//! functions never fail with [`SortError::SortingFailure`].
//!
//! All functions reorder the range they inspect. After `select` returns the value for
//! position `pos`, every element of the range before `pos` is `<=` it and every
//! element after `pos` is `>=` it. Neither side is sorted internally.

use crate::algo::partition;
use crate::core::{Comparator, ComparatorAndAverager, NaturalOrder, validate_range};
use crate::error::SortError;
use std::cmp::Ordering;

/// Returns the element that a full ascending sort of `v[from..to]` would place at
/// index `pos`, partially reordering the range.
///
/// `pos` is an absolute index into `v` and must lie within `[from, to)`.
///
/// # Errors
///
/// - [`SortError::InvalidRange`] if `from > to`, or `pos` is outside `[from, to)`.
/// - [`SortError::IndexOutOfBounds`] if `to > v.len()`.
///
/// # Examples
///
/// ```
/// use ranksort::select_range_by;
///
/// let mut data = vec![5, 3, 8, 1, 9, 2];
/// let third = select_range_by(&mut data, 2, 0, 6, |a, b| a.cmp(b)).unwrap();
///
/// assert_eq!(third, 3);
/// assert!(data[..2].iter().all(|x| *x <= 3));
/// assert!(data[3..].iter().all(|x| *x >= 3));
/// ```
pub fn select_range_by<T, F>(
    v: &mut [T],
    pos: usize,
    from: usize,
    to: usize,
    mut compare: F,
) -> Result<T, SortError>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let range = validate_range(v.len(), from, to)?;
    if !range.contains(&pos) {
        return Err(SortError::InvalidRange {
            from,
            to,
            pos: Some(pos),
        });
    }

    let k = pos - from;
    let slice = &mut v[range];
    select_in_place(slice, k, &mut compare);
    Ok(slice[k].clone())
}

/// [`select_range_by`] using a [`Comparator`] object.
pub fn select_range_with<T, C>(
    v: &mut [T],
    pos: usize,
    from: usize,
    to: usize,
    comparator: &C,
) -> Result<T, SortError>
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    select_range_by(v, pos, from, to, |a, b| comparator.compare(a, b))
}

/// [`select_range_by`] using the natural ordering of `T`.
pub fn select_range<T: Ord + Clone>(
    v: &mut [T],
    pos: usize,
    from: usize,
    to: usize,
) -> Result<T, SortError> {
    select_range_with(v, pos, from, to, &NaturalOrder)
}

/// Selects the `pos`-th smallest element of the whole of `v`.
///
/// # Errors
///
/// [`SortError::InvalidRange`] if `pos >= v.len()`.
pub fn select_by<T, F>(v: &mut [T], pos: usize, compare: F) -> Result<T, SortError>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    select_range_by(v, pos, 0, len, compare)
}

/// [`select_by`] using a [`Comparator`] object.
pub fn select_with<T, C>(v: &mut [T], pos: usize, comparator: &C) -> Result<T, SortError>
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    select_by(v, pos, |a, b| comparator.compare(a, b))
}

/// [`select_by`] using the natural ordering of `T`.
pub fn select<T: Ord + Clone>(v: &mut [T], pos: usize) -> Result<T, SortError> {
    select_with(v, pos, &NaturalOrder)
}

/// Returns the median of `v[from..to]`, partially reordering the range.
///
/// For an odd number of elements this is the middle element of the sorted range. For
/// an even number it is `average(upper, lower)`, where `upper` and `lower` are the two
/// elements either side of the midpoint in sorted order. Neither half is fully sorted
/// to find them.
///
/// # Errors
///
/// - [`SortError::InvalidRange`] if `from > to`, or the range is empty.
/// - [`SortError::IndexOutOfBounds`] if `to > v.len()`.
///
/// # Examples
///
/// ```
/// use ranksort::median_range_by;
///
/// let mut data = vec![5, 3, 8, 1, 9, 2];
/// let median = median_range_by(&mut data, 0, 6, |a, b| a.cmp(b), |a, b| (a + b) / 2).unwrap();
///
/// assert_eq!(median, 4);
/// ```
pub fn median_range_by<T, F, A>(
    v: &mut [T],
    from: usize,
    to: usize,
    mut compare: F,
    average: A,
) -> Result<T, SortError>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
    A: FnOnce(&T, &T) -> T,
{
    let range = validate_range(v.len(), from, to)?;
    let n = range.len();
    let mid = n / 2;
    let upper = select_range_by(v, from + mid, from, to, &mut compare)?;
    if n % 2 == 1 {
        return Ok(upper);
    }

    // Selection left every element before the midpoint <= upper; the largest of
    // them is the other middle element.
    let lower_half = &v[from..from + mid];
    let lower = lower_half[1..].iter().fold(&lower_half[0], |max, x| {
        if compare(x, max) == Ordering::Greater {
            x
        } else {
            max
        }
    });
    Ok(average(&upper, lower))
}

/// [`median_range_by`] using a [`ComparatorAndAverager`] object.
pub fn median_range_with<T, C>(
    v: &mut [T],
    from: usize,
    to: usize,
    comparator: &C,
) -> Result<T, SortError>
where
    T: Clone,
    C: ComparatorAndAverager<T> + ?Sized,
{
    median_range_by(
        v,
        from,
        to,
        |a, b| comparator.compare(a, b),
        |a, b| comparator.average(a, b),
    )
}

/// [`median_range_by`] using the natural ordering of `T`.
pub fn median_range<T, A>(
    v: &mut [T],
    from: usize,
    to: usize,
    average: A,
) -> Result<T, SortError>
where
    T: Ord + Clone,
    A: FnOnce(&T, &T) -> T,
{
    median_range_by(v, from, to, T::cmp, average)
}

/// Returns the median of the whole of `v`.
///
/// # Errors
///
/// [`SortError::InvalidRange`] if `v` is empty.
pub fn median_by<T, F, A>(v: &mut [T], compare: F, average: A) -> Result<T, SortError>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
    A: FnOnce(&T, &T) -> T,
{
    let len = v.len();
    median_range_by(v, 0, len, compare, average)
}

/// [`median_by`] using a [`ComparatorAndAverager`] object.
pub fn median_with<T, C>(v: &mut [T], comparator: &C) -> Result<T, SortError>
where
    T: Clone,
    C: ComparatorAndAverager<T> + ?Sized,
{
    let len = v.len();
    median_range_with(v, 0, len, comparator)
}

/// [`median_by`] using the natural ordering of `T`.
pub fn median<T, A>(v: &mut [T], average: A) -> Result<T, SortError>
where
    T: Ord + Clone,
    A: FnOnce(&T, &T) -> T,
{
    let len = v.len();
    median_range(v, 0, len, average)
}

/// Quickselect over the whole of `v`, leaving the `k`-th smallest element at `v[k]`.
fn select_in_place<T, F>(v: &mut [T], k: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut l = 0;
    let mut ir = v.len() - 1;
    loop {
        if ir <= l + 1 {
            if ir == l + 1 && compare(&v[ir], &v[l]) == Ordering::Less {
                v.swap(l, ir);
            }
            return;
        }

        let (i, j) = partition(v, l, ir, compare);
        if j >= k {
            ir = j - 1;
        }
        if j <= k {
            l = i;
        }
    }
}
