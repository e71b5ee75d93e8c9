//! Tests for the shared error type.
//!
//! These tests verify the error type used by checked arithmetic for:
//! - Display formatting and message contents
//! - Value semantics (equality, copy, debug)
//! - Integration with `std::error::Error`
//!
//! ## Test Organization
//!
//! 1. **Display Formatting** - Message contents and tone
//! 2. **Value Semantics** - Equality, copy, debug output
//! 3. **Standard Error Trait** - Boxing as `dyn Error` (std only)

use arith::prelude::*;

// ============================================================================
// Display Formatting Tests
// ============================================================================

/// Test the Display message for addition overflow.
///
/// Verifies the message names the operation and the failure.
#[test]
fn test_overflow_display_add() {
    let err = ArithError::Overflow { operation: "add" };
    let msg = err.to_string();

    assert!(msg.contains("add"), "Message should name the operation");
    assert!(
        msg.contains("representable range"),
        "Message should describe the failure"
    );
}

/// Test the Display message for subtraction overflow.
///
/// Verifies the two operations produce distinct messages.
#[test]
fn test_overflow_display_subtract() {
    let add_msg = ArithError::Overflow { operation: "add" }.to_string();
    let sub_msg = ArithError::Overflow {
        operation: "subtract",
    }
    .to_string();

    assert!(sub_msg.contains("subtract"));
    assert_ne!(add_msg, sub_msg, "Messages should be distinguishable");
}

// ============================================================================
// Value Semantics Tests
// ============================================================================

/// Test equality and copy semantics of the error type.
///
/// Verifies that errors compare by contents and copy implicitly.
#[test]
fn test_error_value_semantics() {
    let err = ArithError::Overflow { operation: "add" };
    let copy = err;

    assert_eq!(err, copy);
    assert_eq!(err, ArithError::Overflow { operation: "add" });
    assert_ne!(
        err,
        ArithError::Overflow {
            operation: "subtract"
        }
    );
}

/// Test the Debug representation.
///
/// Verifies Debug output exists and mentions the variant.
#[test]
fn test_error_debug() {
    let err = ArithError::Overflow { operation: "add" };
    let dbg = format!("{:?}", err);

    assert!(dbg.contains("Overflow"), "Debug should name the variant");
}

// ============================================================================
// Standard Error Trait Tests
// ============================================================================

/// Test that the error boxes as a `dyn Error`.
///
/// Verifies the `std::error::Error` implementation under the std feature.
#[cfg(feature = "std")]
#[test]
fn test_error_boxes_as_dyn_error() {
    let err = ArithError::Overflow { operation: "add" };
    let boxed: Box<dyn std::error::Error> = Box::new(err);

    assert!(!boxed.to_string().is_empty());
}
