//! In-place and allocating slice transforms.
//!
//! ## Purpose
//!
//! This module provides the two transform drills of the collection: reversing
//! a slice with a two-pointer swap and computing running (prefix) sums.
//!
//! ## Design notes
//!
//! * **Single pass**: `running_sum` folds one accumulator across the slice;
//!   each prefix is the previous prefix plus one element, O(n) total.
//! * **Generics**: Sums are generic over `num_traits::Num`, so integer and
//!   float slices share one implementation.
//!
//! ## Non-goals
//!
//! * This module does not detect or report accumulator overflow; choose an
//!   operand type wide enough for the full sum.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Num;

/// Reverse a slice in place with a two-pointer swap.
///
/// # Examples
///
/// ```
/// use rotated::prelude::*;
///
/// let mut values = [23, 45, 12, 67, 34, 9, 56];
/// reverse_in_place(&mut values);
/// assert_eq!(values, [56, 9, 34, 67, 12, 45, 23]);
/// ```
pub fn reverse_in_place<T>(values: &mut [T]) {
    if values.len() < 2 {
        return;
    }

    let mut start = 0;
    let mut end = values.len() - 1;
    while start < end {
        values.swap(start, end);
        start += 1;
        end -= 1;
    }
}

/// Running (prefix) sums of a slice.
///
/// `result[i]` is the sum of `values[0..=i]`. Empty input yields an empty
/// vector.
///
/// # Examples
///
/// ```
/// use rotated::prelude::*;
///
/// assert_eq!(running_sum(&[1, 2, 3, 4]), vec![1, 3, 6, 10]);
/// ```
pub fn running_sum<T: Num + Copy>(values: &[T]) -> Vec<T> {
    let mut acc = T::zero();
    values
        .iter()
        .map(|&v| {
            acc = acc + v;
            acc
        })
        .collect()
}

/// Running (prefix) sums computed in place.
///
/// # Examples
///
/// ```
/// use rotated::prelude::*;
///
/// let mut values = [1, 2, 3, 4];
/// running_sum_in_place(&mut values);
/// assert_eq!(values, [1, 3, 6, 10]);
/// ```
pub fn running_sum_in_place<T: Num + Copy>(values: &mut [T]) {
    let mut acc = T::zero();
    for v in values.iter_mut() {
        acc = acc + *v;
        *v = acc;
    }
}
