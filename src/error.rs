//! Error type shared by every sorting and order-statistics operation.
//!
//! Range errors ([`SortError::InvalidRange`], [`SortError::IndexOutOfBounds`]) are
//! reported before anything is mutated. [`SortError::SortingFailure`] is raised
//! mid-algorithm, so the range may already be partially reordered when it is returned.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

/// Error type for sorting and selection operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// `from > to`, or a selection position outside `[from, to)`.
    InvalidRange {
        /// Start of the requested range (inclusive).
        from: usize,
        /// End of the requested range (exclusive).
        to: usize,
        /// Requested selection position, when the failure comes from `select`.
        pos: Option<usize>,
    },

    /// The range ends past the end of the sequence.
    IndexOutOfBounds {
        /// End of the requested range (exclusive).
        to: usize,
        /// Length of the sequence.
        len: usize,
    },

    /// Quicksort needed more pending partitions than its explicit stack holds.
    SortingFailure {
        /// Stack capacity in index entries (two per pending partition).
        capacity: usize,
    },
}

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidRange {
                from,
                to,
                pos: None,
            } => write!(f, "Invalid range: from {from} is greater than to {to}"),
            Self::InvalidRange {
                from,
                to,
                pos: Some(pos),
            } => write!(f, "Invalid position: {pos} is outside range [{from}, {to})"),
            Self::IndexOutOfBounds { to, len } => {
                write!(f, "Index out of bounds: to {to} exceeds length {len}")
            }
            Self::SortingFailure { capacity } => {
                write!(
                    f,
                    "Sorting failed: partition stack exhausted ({capacity} entries)"
                )
            }
        }
    }
}

impl Error for SortError {}

/// Error returned when parsing an unknown [`SortingMethod`](crate::core::SortingMethod) name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMethodError(pub String);

impl Display for ParseMethodError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "Unknown sorting method: '{}'", self.0)
    }
}

impl Error for ParseMethodError {}
