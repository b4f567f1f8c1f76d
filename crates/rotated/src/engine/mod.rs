//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates pivot search for the high-level API: it validates
//! inputs, optionally verifies the rotated-sorted precondition, runs the
//! configured pivot pass, and shapes the output.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Algorithms
//!   ↓
//! Layer 3: Scan
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Configured execution of the pivot search.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for pivot search.
pub mod output;
