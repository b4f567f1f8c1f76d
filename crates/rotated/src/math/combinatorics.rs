//! Factorials and binomial coefficients over unsigned integers.
//!
//! ## Purpose
//!
//! This module computes `n!` and `C(n, r)` with checked arithmetic. The
//! binomial coefficient uses the multiplicative formula rather than the
//! factorial quotient, so it stays exact for every `C(n, r)` whose
//! intermediate products fit the operand type.
//!
//! ## Design notes
//!
//! * **Exactness**: The multiplicative loop multiplies before dividing;
//!   `acc * (n - r + i)` is always divisible by `i` at step `i` because the
//!   running product of `i` consecutive integers is divisible by `i!`.
//! * **Symmetry**: `C(n, r)` is computed as `C(n, min(r, n - r))` to minimize
//!   the number of multiplications and the intermediate magnitudes.
//! * **Generics**: Generic over `PrimInt + Unsigned`, so the same code serves
//!   `u8` through `u128`.
//!
//! ## Invariants
//!
//! * `binomial(n, 0) == binomial(n, n) == 1` for every `n`.
//! * Results are exact; overflow is reported, never wrapped or approximated.
//!
//! ## Non-goals
//!
//! * This module does not provide modular or big-integer combinatorics.

// External dependencies
use num_traits::{CheckedMul, PrimInt, Unsigned};

// Internal dependencies
use crate::primitives::errors::RotatedError;

/// Compute `n!` with checked multiplication.
///
/// # Errors
///
/// Returns [`RotatedError::ArithmeticOverflow`] when the product exceeds `T`
/// (for `u64` this happens at `21!`).
///
/// # Examples
///
/// ```
/// use rotated::prelude::*;
///
/// assert_eq!(factorial(0u64)?, 1);
/// assert_eq!(factorial(5u64)?, 120);
/// assert!(factorial(21u64).is_err());
/// # Result::<(), RotatedError>::Ok(())
/// ```
pub fn factorial<T: PrimInt + Unsigned + CheckedMul>(n: T) -> Result<T, RotatedError> {
    let mut acc = T::one();
    let mut i = T::one();
    while i <= n {
        acc = acc
            .checked_mul(&i)
            .ok_or(RotatedError::ArithmeticOverflow {
                operation: "factorial",
            })?;
        i = i + T::one();
    }
    Ok(acc)
}

/// Compute the binomial coefficient `C(n, r)`.
///
/// Uses the multiplicative formula `C(n, r) = prod_{i=1..r} (n - r + i) / i`,
/// which avoids the factorial quotient's early overflow: `binomial(30u64, 15)`
/// succeeds even though `30!` is far outside `u64`.
///
/// # Errors
///
/// * [`RotatedError::InvalidCombination`] when `r > n`.
/// * [`RotatedError::ArithmeticOverflow`] when an intermediate product
///   exceeds `T`.
///
/// # Examples
///
/// ```
/// use rotated::prelude::*;
///
/// assert_eq!(binomial(5u64, 2u64)?, 10);
/// assert_eq!(binomial(10u64, 3u64)?, 120);
/// assert!(binomial(10u64, 20u64).is_err());
/// # Result::<(), RotatedError>::Ok(())
/// ```
pub fn binomial<T: PrimInt + Unsigned + CheckedMul>(n: T, r: T) -> Result<T, RotatedError> {
    if r > n {
        return Err(RotatedError::InvalidCombination {
            n: n.to_u128().unwrap_or(u128::MAX),
            r: r.to_u128().unwrap_or(u128::MAX),
        });
    }

    // C(n, r) == C(n, n - r); take the shorter loop.
    let r = if r > n - r { n - r } else { r };

    let mut acc = T::one();
    let mut i = T::one();
    while i <= r {
        // Multiply-then-divide keeps every step exact.
        acc = acc
            .checked_mul(&(n - r + i))
            .ok_or(RotatedError::ArithmeticOverflow {
                operation: "binomial",
            })?
            / i;
        i = i + T::one();
    }
    Ok(acc)
}
