//! Error types for rotated-sequence operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur across the crate:
//! input validation, rotation-shape verification, and checked integer
//! arithmetic.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., the offending index).
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty sequences are rejected before any element access.
//! 2. **Shape verification**: Opt-in O(n) checks report where the rotated-sorted
//!    precondition breaks down.
//! 3. **Checked arithmetic**: Digit and combinatorics routines surface overflow
//!    instead of wrapping.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for rotated-sequence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotatedError {
    /// Input sequence is empty; every routine requires at least 1 element.
    EmptyInput,

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// Shape verification found a sequence that is not a rotation of an
    /// ascending sequence.
    NotRotated {
        /// Index at which the rotated-sorted shape breaks down.
        index: usize,
    },

    /// Shape verification found adjacent equal values; the pivot search
    /// requires distinct elements.
    DuplicateValues {
        /// Index of the second of the two equal values.
        index: usize,
    },

    /// `binomial(n, r)` requires `r <= n`.
    InvalidCombination {
        /// The `n` argument.
        n: u128,
        /// The `r` argument.
        r: u128,
    },

    /// Checked integer arithmetic overflowed the operand type.
    ArithmeticOverflow {
        /// Name of the operation that overflowed.
        operation: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for RotatedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input sequence is empty"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::NotRotated { index } => {
                write!(
                    f,
                    "Not a rotated ascending sequence: shape breaks down at index {index}"
                )
            }
            Self::DuplicateValues { index } => {
                write!(
                    f,
                    "Duplicate values at index {index}: pivot search requires distinct elements"
                )
            }
            Self::InvalidCombination { n, r } => {
                write!(f, "Invalid combination: r={r} exceeds n={n}")
            }
            Self::ArithmeticOverflow { operation } => {
                write!(f, "Arithmetic overflow in '{operation}'")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for RotatedError {}
