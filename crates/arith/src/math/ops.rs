//! Core arithmetic operations.
//!
//! ## Purpose
//!
//! This module provides the two primary operations of the crate, addition
//! and subtraction, over any numeric type.
//!
//! ## Design notes
//!
//! * **Purity**: Both operations are total, deterministic, and side-effect
//!   free; they are safe to call concurrently without synchronization.
//! * **Generics**: Operations are generic over `num_traits::Num`, covering
//!   every primitive integer and float type.
//! * **Boundary behavior**: Overflow at the representable-range boundary
//!   follows the host numeric type (two's-complement wrap or a debug-build
//!   panic for integers, IEEE-754 infinities for floats).
//!
//! ## Key concepts
//!
//! * **Value semantics**: Each call receives independent operands and
//!   returns a new value; no state is shared between calls.
//!
//! ## Invariants
//!
//! * `add` is commutative and has zero as its identity element.
//! * `subtract(add(a, b), b) == a` whenever both results are representable.
//! * `subtract(a, b)` is the negation of `subtract(b, a)`.
//!
//! ## Non-goals
//!
//! * This module does not detect overflow (see the checked variants).
//! * This module does not parse or validate input.

// External dependencies
use num_traits::Num;

// ============================================================================
// Core Operations
// ============================================================================

/// Add two numeric values.
///
/// Returns `a + b` under the numeric type's native semantics.
///
/// # Examples
///
/// ```rust
/// use arith::prelude::*;
///
/// assert_eq!(add(2, 3), 5);
/// assert_eq!(add(-1, 1), 0);
/// ```
pub fn add<T: Num>(a: T, b: T) -> T {
    a + b
}

/// Subtract `b` from `a`.
///
/// Returns `a - b` under the numeric type's native semantics.
///
/// # Examples
///
/// ```rust
/// use arith::prelude::*;
///
/// assert_eq!(subtract(5, 2), 3);
/// assert_eq!(subtract(10, 20), -10);
/// ```
pub fn subtract<T: Num>(a: T, b: T) -> T {
    a - b
}
