//! Overflow-aware arithmetic variants.
//!
//! ## Purpose
//!
//! This module provides `Result`-returning variants of the core operations.
//! They compute the same sums and differences, but surface
//! representable-range overflow as an error instead of deferring to the
//! host numeric type's native behavior.
//!
//! ## Design notes
//!
//! * **Detection**: Delegates to the `num_traits` checked arithmetic traits;
//!   implemented by the primitive integer types.
//! * **Agreement**: Matches the core operations wherever the result is
//!   representable.
//! * **Purity**: Still total, deterministic, and side-effect free.
//!
//! ## Key concepts
//!
//! * **Boundary surfacing**: `None` from the underlying checked trait maps
//!   to [`ArithError::Overflow`] naming the operation.
//!
//! ## Invariants
//!
//! * `checked_add(a, b) == Ok(add(a, b))` whenever `a + b` is representable.
//! * `checked_subtract(a, b) == Ok(subtract(a, b))` whenever `a - b` is
//!   representable.
//!
//! ## Non-goals
//!
//! * This module does not saturate, wrap, or otherwise recover from
//!   overflow; callers decide what an overflow means.

// External dependencies
use num_traits::{CheckedAdd, CheckedSub};

// Internal dependencies
use crate::primitives::errors::ArithError;

// ============================================================================
// Checked Operations
// ============================================================================

/// Add two numeric values, reporting overflow.
///
/// # Examples
///
/// ```rust
/// use arith::prelude::*;
///
/// assert_eq!(checked_add(2_i32, 3), Ok(5));
/// assert!(checked_add(i32::MAX, 1).is_err());
/// ```
pub fn checked_add<T: CheckedAdd>(a: T, b: T) -> Result<T, ArithError> {
    a.checked_add(&b)
        .ok_or(ArithError::Overflow { operation: "add" })
}

/// Subtract `b` from `a`, reporting overflow.
///
/// # Examples
///
/// ```rust
/// use arith::prelude::*;
///
/// assert_eq!(checked_subtract(5_i32, 2), Ok(3));
/// assert!(checked_subtract(i32::MIN, 1).is_err());
/// ```
pub fn checked_subtract<T: CheckedSub>(a: T, b: T) -> Result<T, ArithError> {
    a.checked_sub(&b).ok_or(ArithError::Overflow {
        operation: "subtract",
    })
}
