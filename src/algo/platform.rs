use super::Sort;
use crate::core::{SortingMethod, validate_range};
use crate::error::SortError;
use std::cmp::Ordering;

/// Delegates to the standard library's unstable sort (`slice::sort_unstable_by`).
///
/// The platform sort only ever sees the whole sequence: a requested range is still
/// validated, and an empty range is still a no-op, but any other range sorts the
/// entire slice, including elements outside it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlatformSorter;

impl Sort for PlatformSorter {
    fn method(&self) -> SortingMethod {
        SortingMethod::Platform
    }

    fn sort_slice_by<T, F>(&self, v: &mut [T], compare: F) -> Result<(), SortError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        v.sort_unstable_by(compare);
        Ok(())
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
        if validate_range(v.len(), from, to)?.is_empty() {
            return Ok(());
        }
        self.sort_slice_by(v, compare)
    }
}
