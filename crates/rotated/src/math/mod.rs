//! Layer 2: Math
//!
//! This layer implements pure integer functions with no slice inputs: base-10
//! digit manipulation and combinatorics. All arithmetic that can exceed the
//! operand type is checked.

/// Base-10 digit manipulation.
pub mod digits;

/// Factorials and binomial coefficients.
pub mod combinatorics;
