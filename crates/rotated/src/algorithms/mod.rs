//! Layer 4: Algorithms
//!
//! This layer implements the core logic of the crate: locating the rotation
//! point of a rotated sorted sequence and binary-searching across it. It is
//! orchestrated by the engine layer but usable directly through the prelude's
//! free functions.

/// Rotation-point (pivot) search.
pub mod pivot;

/// Binary search over ascending and rotated slices.
pub mod search;
