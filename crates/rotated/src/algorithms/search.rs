//! Binary search over ascending and rotated slices.
//!
//! ## Purpose
//!
//! This module locates a target value in a rotated sorted sequence in
//! O(log n): find the pivot, pick the ascending run that could contain the
//! target, then run a plain binary search on that run.
//!
//! ## Key concepts
//!
//! A rotated sequence `[5, 7, 9, 1, 2, 3]` is two ascending runs split at the
//! pivot. Any value `>= values[0]` can only live on the front run
//! `[0, pivot)`; anything smaller can only live on the wrapped run
//! `[pivot, n)`. One comparison against `values[0]` selects the run.
//!
//! ## Invariants
//!
//! * Returned indices refer to the original (rotated) sequence.
//! * The same distinct-rotation precondition as the pivot search applies.
//!
//! ## Non-goals
//!
//! * This module does not report *which* occurrence is found; the contract
//!   assumes distinct values.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::algorithms::pivot::find_pivot;
use crate::primitives::errors::RotatedError;

/// Classic binary search over an ascending slice.
///
/// Returns the index of `target`, or `None` if absent. The slice must be
/// sorted ascending; an empty slice yields `None`.
///
/// # Examples
///
/// ```
/// use rotated::prelude::*;
///
/// let values = [1, 3, 5, 7, 9];
/// assert_eq!(search_ascending(&values, &7), Some(3));
/// assert_eq!(search_ascending(&values, &4), None);
/// ```
pub fn search_ascending<T: Ord>(values: &[T], target: &T) -> Option<usize> {
    let mut lo = 0;
    let mut hi = values.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match values[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }
    None
}

/// Locate `target` in a rotated ascending sequence.
///
/// # Errors
///
/// Returns [`RotatedError::EmptyInput`] for an empty slice; an absent target
/// is `Ok(None)`, not an error.
///
/// # Examples
///
/// ```
/// use rotated::prelude::*;
///
/// let values = [5, 7, 9, 1, 2, 3];
/// assert_eq!(search_rotated(&values, &9)?, Some(2));
/// assert_eq!(search_rotated(&values, &2)?, Some(4));
/// assert_eq!(search_rotated(&values, &4)?, None);
/// # Result::<(), RotatedError>::Ok(())
/// ```
pub fn search_rotated<T: Ord>(values: &[T], target: &T) -> Result<Option<usize>, RotatedError> {
    let pivot = find_pivot(values)?;

    // Select the ascending run that could contain the target.
    let (start, end) = if pivot == 0 {
        (0, values.len())
    } else if *target >= values[0] {
        (0, pivot)
    } else {
        (pivot, values.len())
    };

    Ok(search_ascending(&values[start..end], target).map(|i| i + start))
}
