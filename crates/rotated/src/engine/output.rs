//! Output types for pivot search.
//!
//! ## Purpose
//!
//! This module defines the [`PivotResult`] struct which encapsulates the
//! outcome of a configured pivot search: the pivot index, derived facts, and
//! the optional extras the caller asked for.
//!
//! ## Design notes
//!
//! * **Memory Efficiency**: Optional outputs use `Option<_>` and are only
//!   populated when requested.
//! * **Ergonomics**: Implements `Display` for a human-readable summary.
//!
//! ## Invariants
//!
//! * `pivot` is always in `[0, len)`.
//! * `rotated` is exactly `pivot != 0`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};

// ============================================================================
// Result Structure
// ============================================================================

/// Outcome of a configured pivot search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PivotResult<T> {
    /// Index of the minimum element (the rotation point).
    pub pivot: usize,

    /// Length of the searched sequence.
    pub len: usize,

    /// Whether the sequence was rotated at all (`pivot != 0`).
    pub rotated: bool,

    /// The minimum element, when requested.
    pub min: Option<T>,

    /// Element comparisons performed, when requested.
    pub probes: Option<usize>,

    /// Whether the rotated-sorted shape was verified before searching.
    pub verified: bool,
}

impl<T> PivotResult<T> {
    /// Rotation offset that restores ascending order when applied as a left
    /// rotation; identical to the pivot index.
    pub fn offset(&self) -> usize {
        self.pivot
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Display + Debug> Display for PivotResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Pivot Summary:")?;
        writeln!(f, "  Sequence length: {}", self.len)?;
        writeln!(f, "  Pivot index:     {}", self.pivot)?;
        writeln!(
            f,
            "  Rotated:         {}",
            if self.rotated { "yes" } else { "no" }
        )?;

        if let Some(min) = &self.min {
            writeln!(f, "  Minimum:         {}", min)?;
        }
        if let Some(probes) = self.probes {
            writeln!(f, "  Probes:          {}", probes)?;
        }
        if self.verified {
            writeln!(f, "  Shape verified:  yes")?;
        }

        Ok(())
    }
}
