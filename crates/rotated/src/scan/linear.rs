//! Linear search over slices.
//!
//! A sequential scan is the right tool when the slice is unordered or tiny;
//! for rotated sorted sequences prefer the O(log n) search in the algorithms
//! layer.

/// First index holding `target`, or `None` if absent.
///
/// An empty slice simply yields `None`; there is no error path.
///
/// # Examples
///
/// ```
/// use rotated::prelude::*;
///
/// let values = [23, 45, 12, 67, 34, 9, 56];
/// assert_eq!(linear_search(&values, &67), Some(3));
/// assert_eq!(linear_search(&values, &99), None);
/// ```
pub fn linear_search<T: PartialEq>(values: &[T], target: &T) -> Option<usize> {
    values.iter().position(|v| v == target)
}
