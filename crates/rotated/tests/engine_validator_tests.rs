#![cfg(feature = "dev")]
//! Tests for the validation utilities.
//!
//! These tests verify:
//! - Sequence non-emptiness checks
//! - The rotated-sorted shape verification (valid rotations, duplicates,
//!   multiple descents, non-rotation shapes)
//! - Builder duplicate-parameter detection
//!
//! ## Test Organization
//!
//! 1. **Sequence Validation** - Empty vs non-empty
//! 2. **Rotation Shape** - Accepting every true rotation, rejecting the rest
//! 3. **Parameters** - Duplicate builder parameters

use rotated::internals::engine::validator::Validator;
use rotated::internals::primitives::errors::RotatedError;

// ============================================================================
// Sequence Validation Tests
// ============================================================================

/// Test the non-emptiness check.
#[test]
fn test_validate_sequence() {
    assert!(Validator::validate_sequence(&[1]).is_ok());
    let empty: [i32; 0] = [];
    assert_eq!(
        Validator::validate_sequence(&empty).unwrap_err(),
        RotatedError::EmptyInput
    );
}

// ============================================================================
// Rotation Shape Tests
// ============================================================================

/// Test that every rotation of a distinct ascending sequence is accepted.
#[test]
fn test_validate_rotation_accepts_all_rotations() {
    let sorted: Vec<i32> = vec![1, 4, 9, 16, 25, 36];
    for k in 0..sorted.len() {
        let mut values = sorted[sorted.len() - k..].to_vec();
        values.extend_from_slice(&sorted[..sorted.len() - k]);
        assert!(
            Validator::validate_rotation(&values).is_ok(),
            "rotation k={k} should validate: {values:?}"
        );
    }
}

/// Test degenerate valid shapes.
#[test]
fn test_validate_rotation_degenerate() {
    assert!(Validator::validate_rotation(&[42]).is_ok());
    assert!(Validator::validate_rotation(&[2, 1]).is_ok());

    let empty: [i32; 0] = [];
    assert_eq!(
        Validator::validate_rotation(&empty).unwrap_err(),
        RotatedError::EmptyInput
    );
}

/// Test that adjacent duplicates are reported with their position.
#[test]
fn test_validate_rotation_duplicates() {
    assert_eq!(
        Validator::validate_rotation(&[1, 1]).unwrap_err(),
        RotatedError::DuplicateValues { index: 1 }
    );
    assert_eq!(
        Validator::validate_rotation(&[2, 2, 1, 2]).unwrap_err(),
        RotatedError::DuplicateValues { index: 1 }
    );
}

/// Test that a second descent is rejected.
#[test]
fn test_validate_rotation_two_descents() {
    assert_eq!(
        Validator::validate_rotation(&[3, 1, 4, 2]).unwrap_err(),
        RotatedError::NotRotated { index: 3 }
    );
}

/// Test that one descent with a last element not below the first is rejected;
/// this also catches non-adjacent duplicates across the two runs.
#[test]
fn test_validate_rotation_wrapped_run_too_high() {
    // Second run climbs back to/above the first element.
    assert_eq!(
        Validator::validate_rotation(&[2, 3, 1, 4]).unwrap_err(),
        RotatedError::NotRotated { index: 3 }
    );
    // Duplicate value 3 split across the runs.
    assert_eq!(
        Validator::validate_rotation(&[3, 4, 2, 3]).unwrap_err(),
        RotatedError::NotRotated { index: 3 }
    );
}

// ============================================================================
// Parameter Validation Tests
// ============================================================================

/// Test duplicate-parameter detection.
#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("return_min")).unwrap_err(),
        RotatedError::DuplicateParameter {
            parameter: "return_min"
        }
    );
}
