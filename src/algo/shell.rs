use super::Sort;
use crate::core::SortingMethod;
use crate::error::SortError;
use std::cmp::Ordering;

/// Growth factor of the 3x+1 increment sequence (1, 4, 13, 40, ...).
const INCREMENT_FACTOR: usize = 3;

/// Shell sort.
///
/// Runs strided insertion passes over a decreasing sequence of gaps, ending with a
/// plain insertion pass (gap 1). Not stable; roughly O(n^1.25) on average.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShellSorter;

impl Sort for ShellSorter {
    fn method(&self) -> SortingMethod {
        SortingMethod::Shell
    }

    fn sort_slice_by<T, F>(&self, v: &mut [T], mut compare: F) -> Result<(), SortError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let n = v.len();

        // Smallest increment of the sequence exceeding n; the first pass divides it down.
        let mut inc = 1;
        loop {
            inc = inc * INCREMENT_FACTOR + 1;
            if inc > n {
                break;
            }
        }

        loop {
            inc /= INCREMENT_FACTOR;
            for i in inc..n {
                let mut j = i;
                while j >= inc && compare(&v[j - inc], &v[j]) == Ordering::Greater {
                    v.swap(j - inc, j);
                    j -= inc;
                }
            }
            if inc <= 1 {
                break;
            }
        }

        Ok(())
    }
}
