//! Layer 3: Scan
//!
//! This layer implements single-pass linear routines over slices: extrema
//! location, linear search, and in-place transforms. Everything here is O(n)
//! and allocation-free except `running_sum`, which returns a fresh vector.

/// Minimum and maximum location.
pub mod extrema;

/// Linear (sequential) search.
pub mod linear;

/// In-place and allocating slice transforms.
pub mod transform;
