//! Configured execution of the pivot search.
//!
//! ## Purpose
//!
//! This module runs a single pivot pass under a [`PivotConfig`]: validate,
//! optionally verify the rotation shape, search, and report the raw outcome
//! for the API layer to assemble into a result.
//!
//! ## Design notes
//!
//! * **Separation**: The executor owns orchestration order (cheap checks
//!   before expensive ones, verification before search); the algorithms layer
//!   owns the search itself.
//! * **Raw output**: [`PivotPass`] carries indices and counters only; element
//!   cloning and presentation live above this layer.

// Internal dependencies
use crate::algorithms::pivot::find_pivot_counted;
use crate::engine::validator::Validator;
use crate::primitives::errors::RotatedError;

// ============================================================================
// Configuration
// ============================================================================

/// Execution options for a pivot pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct PivotConfig {
    /// Run the O(n) rotated-sorted shape check before searching.
    pub verify_rotation: bool,

    /// Count element comparisons performed by the search.
    pub count_probes: bool,
}

// ============================================================================
// Raw Output
// ============================================================================

/// Raw outcome of a pivot pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PivotPass {
    /// Index of the minimum element.
    pub pivot: usize,

    /// Element comparisons performed, when counting was requested.
    pub probes: Option<usize>,

    /// Whether the rotation shape was verified before searching.
    pub verified: bool,
}

// ============================================================================
// Executor
// ============================================================================

/// Unified execution engine for pivot search.
pub struct PivotExecutor;

impl PivotExecutor {
    /// Run a pivot pass over `values` under `config`.
    pub fn run<T: Ord>(values: &[T], config: PivotConfig) -> Result<PivotPass, RotatedError> {
        Validator::validate_sequence(values)?;

        if config.verify_rotation {
            Validator::validate_rotation(values)?;
        }

        let (pivot, probes) = find_pivot_counted(values)?;

        Ok(PivotPass {
            pivot,
            probes: config.count_probes.then_some(probes),
            verified: config.verify_rotation,
        })
    }
}
