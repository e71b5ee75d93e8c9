//! Error types for arithmetic operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur during checked
//! arithmetic. The only condition is representable-range overflow.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors name the operation that left the range.
//! * **No-std**: `Display` is implemented via `core::fmt`; the
//!   `std::error::Error` implementation is gated on the `std` feature.
//! * **Copyable**: The error carries no heap data and is `Copy`.
//!
//! ## Key concepts
//!
//! 1. **Overflow**: The result of an operation fell outside the numeric
//!    type's representable range. Core operations never construct this; only
//!    the checked variants do.
//!
//! ## Invariants
//!
//! * Error messages are consistent in tone and formatting.
//! * The `operation` field always names a crate operation ("add" or
//!   "subtract").
//!
//! ## Non-goals
//!
//! * This module does not perform overflow detection itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for checked arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithError {
    /// The result fell outside the numeric type's representable range.
    Overflow {
        /// Name of the operation that overflowed ("add" or "subtract").
        operation: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ArithError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Overflow { operation } => {
                write!(
                    f,
                    "Overflow in '{operation}': result is outside the representable range"
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for ArithError {}
