//! # Ranksort
//!
//! `ranksort` is a family of in-place, comparator-driven sorting algorithms over a
//! sub-range of any mutable slice, plus order statistics (k-th smallest element and
//! median) built on the same partitioning step as its quicksort.
//!
//! ## Key Features
//!
//! - **Interchangeable algorithms**: straight insertion, Shell sort, heapsort, an
//!   iterative median-of-three quicksort (the default) and the standard library's own
//!   sort, all selected through one [`SortingMethod`] tag and one [`Sort`] trait.
//! - **Range-bounded**: every operation works on a half-open range `[from, to)` and
//!   leaves the rest of the slice alone. Ranges are validated before anything moves.
//! - **Any element type**: elements only need to be comparable through a closure, a
//!   [`Comparator`] object, or [`Ord`]. Sorting never clones elements.
//! - **Order statistics without sorting**: [`select_range_by`] and [`median_range_by`]
//!   partially reorder the range just enough to answer.
//!
//! ## Usage
//!
//! ### Sorting
//!
//! ```rust
//! use ranksort::prelude::*;
//!
//! let mut data = vec![5, 3, 8, 1, 9, 2];
//! let sorter = Sorter::default(); // quicksort
//!
//! sorter.sort_range_by(&mut data, 0, 6, |a, b| a.cmp(b)).unwrap();
//! assert_eq!(data, vec![1, 2, 3, 5, 8, 9]);
//!
//! // Descending, only the first three elements.
//! sorter.sort_range_by(&mut data, 0, 3, |a, b| b.cmp(a)).unwrap();
//! assert_eq!(data, vec![3, 2, 1, 5, 8, 9]);
//! ```
//!
//! ### Order Statistics
//!
//! ```rust
//! use ranksort::prelude::*;
//!
//! let mut data = vec![5, 3, 8, 1, 9, 2];
//! assert_eq!(select(&mut data, 2).unwrap(), 3);
//!
//! let mut data = vec![5, 3, 8, 1, 9, 2];
//! assert_eq!(median(&mut data, |a, b| (a + b) / 2).unwrap(), 4);
//! ```
//!
//! ### Custom Comparators
//!
//! ```rust
//! use ranksort::prelude::*;
//! use std::cmp::Ordering;
//!
//! struct Mean;
//!
//! impl Comparator<f64> for Mean {
//!     fn compare(&self, a: &f64, b: &f64) -> Ordering {
//!         a.total_cmp(b)
//!     }
//! }
//!
//! impl ComparatorAndAverager<f64> for Mean {
//!     fn average(&self, a: &f64, b: &f64) -> f64 {
//!         (a + b) / 2.0
//!     }
//! }
//!
//! let mut data = vec![4.0, 1.0, 3.0, 2.0];
//! assert_eq!(median_with(&mut data, &Mean).unwrap(), 2.5);
//!
//! Sorter::create(SortingMethod::Heapsort).sort_with(&mut data, &Mean);
//! assert_eq!(data, vec![1.0, 2.0, 3.0, 4.0]);
//! ```
//!
//! ## Errors
//!
//! Range-taking operations return [`SortError`]. Range errors are all-or-nothing: the
//! slice is untouched. Quicksort's [`SortError::SortingFailure`] (explicit stack
//! exhausted) may leave the range partially reordered. Whole-slice `sort*` and
//! `sorted*` variants cannot receive an invalid range and return no error.
//!
//! None of the algorithms except straight insertion keep equal elements in their
//! original order.

pub mod algo;
pub mod core;
pub mod error;
pub mod sorter;
pub mod stats;

pub use crate::algo::Sort;
pub use crate::core::{Comparator, ComparatorAndAverager, NaturalOrder, SortingMethod};
pub use crate::error::{ParseMethodError, SortError};
pub use crate::sorter::Sorter;
pub use crate::stats::{
    median, median_by, median_range, median_range_by, median_range_with, median_with, select,
    select_by, select_range, select_range_by, select_range_with, select_with,
};

pub mod prelude {
    pub use crate::algo::Sort;
    pub use crate::core::{Comparator, ComparatorAndAverager, NaturalOrder, SortingMethod};
    pub use crate::error::SortError;
    pub use crate::sorter::Sorter;
    pub use crate::stats::{
        median, median_by, median_range, median_range_by, median_range_with, median_with,
        select, select_by, select_range, select_range_by, select_range_with, select_with,
    };
}
