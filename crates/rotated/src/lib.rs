//! # rotated — Pivot Search for Rotated Sorted Sequences
//!
//! Utilities for sequences that are rotations of an ascending sequence of
//! distinct values: finding the rotation point (pivot) in O(log n), searching
//! for values across the rotation, and a handful of companion slice and
//! integer routines.
//!
//! ## What is a rotated sorted sequence?
//!
//! A rotated sorted sequence consists of two ascending runs where every
//! element of the second run is smaller than every element of the first run,
//! e.g. `[5, 7, 9, 1, 2, 3]`. The **pivot** is the index of the minimum
//! element (here `3`); rotating the sequence left by the pivot restores
//! ascending order. An unrotated sequence has pivot `0`.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use rotated::prelude::*;
//!
//! let values = vec![7, 9, 1, 2, 3];
//!
//! // Build the finder
//! let finder = Pivot::new()
//!     .return_min()       // Clone the minimum into the result
//!     .build()?;
//!
//! // Locate the rotation point
//! let result = finder.find(&values)?;
//!
//! assert_eq!(result.pivot, 2);
//! assert_eq!(result.min, Some(1));
//! assert!(result.rotated);
//! # Result::<(), RotatedError>::Ok(())
//! ```
//!
//! ### Free Functions
//!
//! The individual routines are available without the builder:
//!
//! ```rust
//! use rotated::prelude::*;
//!
//! assert_eq!(find_pivot(&[3, 4, 5, 1, 2])?, 3);
//! assert_eq!(search_rotated(&[3, 4, 5, 1, 2], &5)?, Some(2));
//! assert_eq!(binomial(10u64, 3u64)?, 120);
//! assert_eq!(reverse_digits(-123i32)?, -321);
//! # Result::<(), RotatedError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Fallible operations return `Result<_, RotatedError>`. The `?` operator is
//! idiomatic, but errors can also be matched explicitly:
//!
//! ```rust
//! use rotated::prelude::*;
//!
//! let empty: [i32; 0] = [];
//! match find_pivot(&empty) {
//!     Ok(pivot) => println!("pivot at {}", pivot),
//!     Err(RotatedError::EmptyInput) => println!("nothing to search"),
//!     Err(e) => eprintln!("pivot search failed: {}", e),
//! }
//! ```
//!
//! ## Preconditions
//!
//! The O(log n) pivot search assumes its input really is a rotation of an
//! ascending sequence of **distinct** values. Duplicate values adjacent to
//! the rotation point make the half-selection comparison ambiguous, and the
//! result is unspecified for such inputs. Callers who cannot trust their
//! producer can opt into an O(n) shape verification:
//!
//! ```rust
//! use rotated::prelude::*;
//!
//! let finder = Pivot::new().verify_rotation().build()?;
//!
//! // [2, 2, 1, 2] is not a rotation of a distinct ascending sequence.
//! let err = finder.find(&[2, 2, 1, 2]).unwrap_err();
//! assert_eq!(err, RotatedError::DuplicateValues { index: 1 });
//! # Result::<(), RotatedError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! rotated = { version = "0.1", default-features = false }
//! ```
//!
//! All order-based routines are allocation-free; only `running_sum` and the
//! error type's message payloads require `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - shared error types.
mod primitives;

// Layer 2: Math - pure numeric functions.
mod math;

// Layer 3: Scan - linear passes over slices.
mod scan;

// Layer 4: Algorithms - pivot search and rotated binary search.
mod algorithms;

// Layer 5: Engine - validation, execution control, and output types.
mod engine;

// High-level fluent API for pivot search.
mod api;

// Standard rotated prelude.
pub mod prelude {
    pub use crate::api::{PivotBuilder as Pivot, PivotFinder, PivotResult, RotatedError};

    pub use crate::algorithms::pivot::find_pivot;
    pub use crate::algorithms::search::{search_ascending, search_rotated};
    pub use crate::math::combinatorics::{binomial, factorial};
    pub use crate::math::digits::{is_palindrome_number, reverse_digits};
    pub use crate::scan::extrema::{max_index, min_index};
    pub use crate::scan::linear::linear_search;
    pub use crate::scan::transform::{reverse_in_place, running_sum, running_sum_in_place};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod scan {
        pub use crate::scan::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
