#![cfg(feature = "dev")]
//! Tests for factorials and binomial coefficients.
//!
//! These tests verify:
//! - Known factorial and binomial values
//! - Identity properties (symmetry, Pascal's rule, row sums)
//! - Argument validation (`r > n`)
//! - Overflow reporting, and that the multiplicative formula outlives the
//!   factorial quotient
//!
//! ## Test Organization
//!
//! 1. **Known Values** - Concrete cases and small tables
//! 2. **Identities** - Symmetry, Pascal's rule, row sums
//! 3. **Validation** - Invalid argument combinations
//! 4. **Overflow** - Checked arithmetic and formula headroom

use rotated::internals::math::combinatorics::{binomial, factorial};
use rotated::internals::primitives::errors::RotatedError;

// ============================================================================
// Known Value Tests
// ============================================================================

/// Test small factorials.
#[test]
fn test_factorial_known_values() {
    assert_eq!(factorial(0u64).unwrap(), 1);
    assert_eq!(factorial(1u64).unwrap(), 1);
    assert_eq!(factorial(5u64).unwrap(), 120);
    assert_eq!(factorial(10u64).unwrap(), 3_628_800);
    assert_eq!(factorial(20u64).unwrap(), 2_432_902_008_176_640_000);
}

/// Test known binomial values: 5C2 = 10, 10C3 = 120, 10C20 invalid.
#[test]
fn test_binomial_known_values() {
    assert_eq!(binomial(5u64, 2u64).unwrap(), 10);
    assert_eq!(binomial(10u64, 3u64).unwrap(), 120);
    assert!(binomial(10u64, 20u64).is_err());
}

/// Test edge choices: r = 0, r = n, r = 1.
#[test]
fn test_binomial_edges() {
    assert_eq!(binomial(0u64, 0u64).unwrap(), 1);
    assert_eq!(binomial(7u64, 0u64).unwrap(), 1);
    assert_eq!(binomial(7u64, 7u64).unwrap(), 1);
    assert_eq!(binomial(7u64, 1u64).unwrap(), 7);
}

// ============================================================================
// Identity Tests
// ============================================================================

/// Test symmetry: C(n, r) == C(n, n - r).
#[test]
fn test_binomial_symmetry() {
    for n in 0u64..=20 {
        for r in 0..=n {
            assert_eq!(
                binomial(n, r).unwrap(),
                binomial(n, n - r).unwrap(),
                "n={n}, r={r}"
            );
        }
    }
}

/// Test Pascal's rule: C(n, r) == C(n-1, r-1) + C(n-1, r).
#[test]
fn test_binomial_pascals_rule() {
    for n in 1u64..=25 {
        for r in 1..n {
            assert_eq!(
                binomial(n, r).unwrap(),
                binomial(n - 1, r - 1).unwrap() + binomial(n - 1, r).unwrap(),
                "n={n}, r={r}"
            );
        }
    }
}

/// Test row sums: sum_r C(n, r) == 2^n.
#[test]
fn test_binomial_row_sums() {
    for n in 0u64..=20 {
        let sum: u64 = (0..=n).map(|r| binomial(n, r).unwrap()).sum();
        assert_eq!(sum, 1u64 << n, "n={n}");
    }
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test that r > n reports both arguments.
#[test]
fn test_binomial_invalid_combination() {
    assert_eq!(
        binomial(3u64, 5u64).unwrap_err(),
        RotatedError::InvalidCombination { n: 3, r: 5 }
    );
}

// ============================================================================
// Overflow Tests
// ============================================================================

/// Test factorial overflow at the u64 boundary (21! > u64::MAX).
#[test]
fn test_factorial_overflow() {
    assert_eq!(
        factorial(21u64).unwrap_err(),
        RotatedError::ArithmeticOverflow {
            operation: "factorial"
        }
    );
}

/// Test that the multiplicative formula succeeds where n! would overflow.
#[test]
fn test_binomial_survives_factorial_overflow() {
    // 30! overflows u64, but C(30, 15) = 155_117_520 fits comfortably.
    assert_eq!(binomial(30u64, 15u64).unwrap(), 155_117_520);

    // C(62, 31) is near the top of what u64 intermediates can reach.
    assert_eq!(binomial(62u64, 31u64).unwrap(), 465_428_353_255_261_088);
}

/// Test that genuinely unrepresentable coefficients are reported.
#[test]
fn test_binomial_overflow_reported() {
    // C(128, 64) ~ 2.4e37 > u64::MAX.
    assert_eq!(
        binomial(128u64, 64u64).unwrap_err(),
        RotatedError::ArithmeticOverflow {
            operation: "binomial"
        }
    );
}

/// Test narrow unsigned widths.
#[test]
fn test_binomial_narrow_types() {
    assert_eq!(binomial(10u32, 3u32).unwrap(), 120);
    assert_eq!(binomial(8u16, 4u16).unwrap(), 70);
    assert!(binomial(10u8, 5u8).is_err()); // 10*9*... intermediates exceed u8
}
