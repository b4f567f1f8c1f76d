//! Extrema location for slices.
//!
//! ## Purpose
//!
//! This module locates the minimum and maximum elements of a slice by linear
//! scan, returning indices rather than values so callers keep borrow-free
//! access to the element and its position.
//!
//! ## Design notes
//!
//! * **First occurrence**: Ties resolve to the lowest index, matching the
//!   behavior of a strict-comparison scan.
//! * **Validated**: Empty slices are an error, never an unguarded `[0]` read.
//!
//! ## Non-goals
//!
//! * This module does not assume or exploit any ordering of the input; use
//!   the pivot search for rotated sorted sequences.

// Internal dependencies
use crate::primitives::errors::RotatedError;

/// Index of the first minimum element.
///
/// # Errors
///
/// Returns [`RotatedError::EmptyInput`] for an empty slice.
///
/// # Examples
///
/// ```
/// use rotated::prelude::*;
///
/// assert_eq!(min_index(&[23, 45, 12, 67, 34, 9, 56])?, 5);
/// # Result::<(), RotatedError>::Ok(())
/// ```
pub fn min_index<T: Ord>(values: &[T]) -> Result<usize, RotatedError> {
    if values.is_empty() {
        return Err(RotatedError::EmptyInput);
    }

    let mut best = 0;
    for i in 1..values.len() {
        if values[i] < values[best] {
            best = i;
        }
    }
    Ok(best)
}

/// Index of the first maximum element.
///
/// # Errors
///
/// Returns [`RotatedError::EmptyInput`] for an empty slice.
///
/// # Examples
///
/// ```
/// use rotated::prelude::*;
///
/// assert_eq!(max_index(&[23, 45, 12, 67, 34, 9, 56])?, 3);
/// # Result::<(), RotatedError>::Ok(())
/// ```
pub fn max_index<T: Ord>(values: &[T]) -> Result<usize, RotatedError> {
    if values.is_empty() {
        return Err(RotatedError::EmptyInput);
    }

    let mut best = 0;
    for i in 1..values.len() {
        if values[i] > values[best] {
            best = i;
        }
    }
    Ok(best)
}
