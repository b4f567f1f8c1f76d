//! Input validation for pivot search configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions behind the high-level API:
//! non-emptiness, the opt-in rotated-sorted shape check, and builder sanity
//! checks.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Opt-in shape check**: Verifying the rotation shape costs O(n), which
//!   defeats the O(log n) pivot search; it runs only when the caller asks.
//!
//! ## Key concepts
//!
//! A rotation of an ascending sequence of distinct values has a precise
//! shape: strictly ascending with at most one strict descent, and when a
//! descent exists the last element is smaller than the first. Checking those
//! three facts in one pass is a complete test: any duplicate across the two
//! runs forces either an adjacent equality or a last element that is not
//! smaller than the first.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or repair input data.
//! * This module does not perform the pivot search itself.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::primitives::errors::RotatedError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for pivot search configuration and input data.
///
/// Provides static methods returning `Result<(), RotatedError>` that fail
/// fast upon the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate that a sequence is non-empty.
    pub fn validate_sequence<T>(values: &[T]) -> Result<(), RotatedError> {
        if values.is_empty() {
            return Err(RotatedError::EmptyInput);
        }
        Ok(())
    }

    /// Validate that a sequence is a rotation of an ascending sequence of
    /// distinct values.
    ///
    /// Single pass: tracks the unique strict descent and rejects adjacent
    /// equalities. A second descent, or a rotated sequence whose last element
    /// is not smaller than its first, breaks the shape.
    pub fn validate_rotation<T: Ord>(values: &[T]) -> Result<(), RotatedError> {
        Self::validate_sequence(values)?;

        let mut descent: Option<usize> = None;
        for i in 1..values.len() {
            match values[i - 1].cmp(&values[i]) {
                Ordering::Less => {}
                Ordering::Equal => return Err(RotatedError::DuplicateValues { index: i }),
                Ordering::Greater => {
                    if descent.is_some() {
                        return Err(RotatedError::NotRotated { index: i });
                    }
                    descent = Some(i);
                }
            }
        }

        // One descent means a genuine rotation, so the wrapped run must stay
        // below the front run; its maximum is the last element.
        if descent.is_some() && values[values.len() - 1] >= values[0] {
            return Err(RotatedError::NotRotated {
                index: values.len() - 1,
            });
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), RotatedError> {
        if let Some(param) = duplicate_param {
            return Err(RotatedError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
