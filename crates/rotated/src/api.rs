//! High-level API for pivot search.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for pivot search
//! over rotated sorted sequences. It implements a fluent builder pattern for
//! configuring the search and a finder type that executes it.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Configuration is validated when `.build()` is called.
//! * **Reusable**: A built [`PivotFinder`] borrows its inputs and can be
//!   applied to any number of sequences.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`PivotBuilder`] via `Pivot::new()`.
//! 2. Chain configuration methods (`.verify_rotation()`, `.return_min()`, ...).
//! 3. Call `.build()` to obtain a [`PivotFinder`], then `.find(&values)`.

// Internal dependencies
use crate::engine::executor::{PivotConfig, PivotExecutor};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::engine::output::PivotResult;
pub use crate::primitives::errors::RotatedError;

// ============================================================================
// Pivot Builder
// ============================================================================

/// Fluent builder for configuring pivot search.
#[derive(Debug, Clone, Default)]
pub struct PivotBuilder {
    /// Run the O(n) rotated-sorted shape check before searching.
    pub verify_rotation: Option<bool>,

    /// Clone the minimum element into the result.
    pub return_min: Option<bool>,

    /// Report the number of element comparisons performed.
    pub return_probes: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl PivotBuilder {
    /// Create a new builder with default settings: no shape verification, no
    /// optional outputs.
    pub fn new() -> Self {
        Self {
            verify_rotation: None,
            return_min: None,
            return_probes: None,
            duplicate_param: None,
        }
    }

    /// Verify the rotated-sorted precondition before searching.
    ///
    /// Costs O(n); the default path trusts the caller and stays O(log n).
    pub fn verify_rotation(mut self) -> Self {
        if self.verify_rotation.is_some() {
            self.duplicate_param = Some("verify_rotation");
        }
        self.verify_rotation = Some(true);
        self
    }

    /// Include the minimum element in the result.
    pub fn return_min(mut self) -> Self {
        if self.return_min.is_some() {
            self.duplicate_param = Some("return_min");
        }
        self.return_min = Some(true);
        self
    }

    /// Include the element-comparison count in the result.
    pub fn return_probes(mut self) -> Self {
        if self.return_probes.is_some() {
            self.duplicate_param = Some("return_probes");
        }
        self.return_probes = Some(true);
        self
    }

    /// Build the finder.
    pub fn build(self) -> Result<PivotFinder, RotatedError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(PivotFinder {
            verify_rotation: self.verify_rotation.unwrap_or(false),
            return_min: self.return_min.unwrap_or(false),
            return_probes: self.return_probes.unwrap_or(false),
        })
    }
}

// ============================================================================
// Pivot Finder
// ============================================================================

/// Configured pivot finder.
#[derive(Debug, Clone, Copy)]
pub struct PivotFinder {
    verify_rotation: bool,
    return_min: bool,
    return_probes: bool,
}

impl PivotFinder {
    /// Locate the rotation point of `values`.
    ///
    /// # Errors
    ///
    /// * [`RotatedError::EmptyInput`] for an empty slice.
    /// * [`RotatedError::NotRotated`] / [`RotatedError::DuplicateValues`]
    ///   when shape verification is enabled and the input violates the
    ///   rotated-sorted precondition.
    pub fn find<T: Ord + Clone>(&self, values: &[T]) -> Result<PivotResult<T>, RotatedError> {
        let config = PivotConfig {
            verify_rotation: self.verify_rotation,
            count_probes: self.return_probes,
        };

        let pass = PivotExecutor::run(values, config)?;

        let min = if self.return_min {
            Some(values[pass.pivot].clone())
        } else {
            None
        };

        Ok(PivotResult {
            pivot: pass.pivot,
            len: values.len(),
            rotated: pass.pivot != 0,
            min,
            probes: pass.probes,
            verified: pass.verified,
        })
    }
}
