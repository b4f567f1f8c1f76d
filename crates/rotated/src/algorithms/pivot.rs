//! Rotation-point (pivot) search for rotated sorted sequences.
//!
//! ## Purpose
//!
//! This module locates the index of the minimum element of a sequence that is
//! a rotation of an ascending sequence of distinct values, in O(log n) time
//! and O(1) auxiliary space.
//!
//! ## Key concepts
//!
//! The binary search keeps one invariant: the pivot always lies inside
//! `[lo, hi]`. The half to keep is chosen by comparing the middle element
//! against the first element of the whole sequence:
//!
//! * `values[mid] >= values[0]`: `mid` still sits on the ascending run that
//!   starts at index 0, so the pivot lies strictly to the right (`lo = mid + 1`).
//! * otherwise: `mid` sits on the wrapped (smaller) run, so the pivot is at
//!   or before `mid` (`hi = mid`).
//!
//! When the bounds converge they name the pivot.
//!
//! That comparison is only meaningful when the sequence is genuinely rotated
//! (`values[0] > values[n-1]`). An unrotated sequence would drive `lo` all the
//! way to `n - 1`, so it is answered up front: `values[0] <= values[n-1]`
//! means pivot 0. The fast path also covers single-element input.
//!
//! ## Invariants
//!
//! * The returned index is always in `[0, n)`.
//! * The input is never mutated; repeated calls return identical results.
//!
//! ## Non-goals
//!
//! * Duplicate values straddling the rotation point are out of contract: the
//!   half-selection comparison cannot distinguish the runs, and the result is
//!   unspecified. The engine's opt-in shape verification rejects such inputs;
//!   this module does not pay for that scan.

// Internal dependencies
use crate::primitives::errors::RotatedError;

/// Index of the minimum element of a rotated ascending sequence.
///
/// The input must be a rotation (possibly by zero) of an ascending sequence
/// of distinct values. For an unrotated sequence the pivot is `0`.
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
/// assert_eq!(find_pivot(&[7, 9, 1, 2, 3])?, 2);
/// assert_eq!(find_pivot(&[1, 2, 3, 4, 5])?, 0);
/// assert_eq!(find_pivot(&[5, 1, 2, 3, 4])?, 1);
/// # Result::<(), RotatedError>::Ok(())
/// ```
pub fn find_pivot<T: Ord>(values: &[T]) -> Result<usize, RotatedError> {
    find_pivot_counted(values).map(|(pivot, _)| pivot)
}

/// Pivot search that also reports the number of element comparisons.
///
/// The probe count is the number of order comparisons between sequence
/// elements: one for the unrotated fast path plus one per bisection step.
/// Used by the engine when the caller asks for probe diagnostics.
pub fn find_pivot_counted<T: Ord>(values: &[T]) -> Result<(usize, usize), RotatedError> {
    if values.is_empty() {
        return Err(RotatedError::EmptyInput);
    }

    let n = values.len();
    let mut probes = 1;

    // Unrotated (or single-element): the minimum is at the front.
    if values[0] <= values[n - 1] {
        return Ok((0, probes));
    }

    let mut lo = 0;
    let mut hi = n - 1;
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        probes += 1;
        if values[mid] >= values[0] {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    Ok((lo, probes))
}
