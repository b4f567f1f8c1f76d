//! Base-10 digit manipulation for signed integers.
//!
//! ## Purpose
//!
//! This module provides digit-level routines on primitive signed integers:
//! reversing the decimal digits of a value and testing whether a value is a
//! decimal palindrome.
//!
//! ## Design notes
//!
//! * **Checked**: Digit reversal uses checked arithmetic; a reversal that does
//!   not fit the operand type is reported, never wrapped.
//! * **Signs**: Negative values reverse their magnitude and keep their sign
//!   (`-123` reverses to `-321`). Rust's truncating `%` makes this fall out of
//!   the pop/push loop without a separate sign branch.
//! * **Generics**: Generic over `PrimInt + Signed`, so the same code serves
//!   `i8` through `i128`.
//!
//! ## Invariants
//!
//! * `reverse_digits` is an involution on values whose reversal fits the type.
//! * `is_palindrome_number` never overflows: it reverses only half the digits.
//!
//! ## Non-goals
//!
//! * This module does not handle bases other than 10.
//! * This module does not parse or format digit strings.

// External dependencies
use num_traits::{CheckedAdd, CheckedMul, PrimInt, Signed};

// Internal dependencies
use crate::primitives::errors::RotatedError;

/// Reverse the base-10 digits of a signed integer.
///
/// Digits are popped off the low end and pushed onto an accumulator, so
/// trailing zeros disappear (`120` reverses to `21`). Negative values keep
/// their sign.
///
/// # Errors
///
/// Returns [`RotatedError::ArithmeticOverflow`] when the reversed value does
/// not fit in `T` (e.g. `reverse_digits(1_000_000_009_i32)`).
///
/// # Examples
///
/// ```
/// use rotated::prelude::*;
///
/// assert_eq!(reverse_digits(123i32)?, 321);
/// assert_eq!(reverse_digits(-450i32)?, -54);
/// assert_eq!(reverse_digits(0i32)?, 0);
/// # Result::<(), RotatedError>::Ok(())
/// ```
pub fn reverse_digits<T: PrimInt + Signed + CheckedAdd + CheckedMul>(
    value: T,
) -> Result<T, RotatedError> {
    let ten = T::from(10).unwrap();

    let mut remaining = value;
    let mut reversed = T::zero();
    while remaining != T::zero() {
        // For negative inputs both the digit and the accumulator are
        // non-positive, so the same checked push works for either sign.
        let digit = remaining % ten;
        reversed = reversed
            .checked_mul(&ten)
            .and_then(|shifted| shifted.checked_add(&digit))
            .ok_or(RotatedError::ArithmeticOverflow {
                operation: "reverse_digits",
            })?;
        remaining = remaining / ten;
    }

    Ok(reversed)
}

/// Test whether a signed integer is a base-10 palindrome.
///
/// Negative values are never palindromes (the sign has no mirrored
/// counterpart), and neither is any nonzero multiple of 10 (a leading zero
/// would be required). Only the low half of the digits is reversed, so the
/// test cannot overflow even near `T::max_value()`.
///
/// # Examples
///
/// ```
/// use rotated::prelude::*;
///
/// assert!(is_palindrome_number(121i32));
/// assert!(is_palindrome_number(0i32));
/// assert!(!is_palindrome_number(-121i32));
/// assert!(!is_palindrome_number(10i32));
/// ```
pub fn is_palindrome_number<T: PrimInt + Signed>(value: T) -> bool {
    let ten = T::from(10).unwrap();

    if value < T::zero() {
        return false;
    }
    if value % ten == T::zero() && value != T::zero() {
        return false;
    }

    // Pop digits from `remaining` onto `half` until half holds at least as
    // many digits as remain; `half` never exceeds the original value, so the
    // unchecked arithmetic is safe.
    let mut remaining = value;
    let mut half = T::zero();
    while remaining > half {
        half = half * ten + remaining % ten;
        remaining = remaining / ten;
    }

    // Even digit count: halves match exactly. Odd: drop the middle digit.
    remaining == half || remaining == half / ten
}
