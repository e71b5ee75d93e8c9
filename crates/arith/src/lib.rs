//! # Arith — Minimal arithmetic operations for Rust
//!
//! A small, dependency-light crate exposing two pure arithmetic operations,
//! addition and subtraction, generic over any numeric type.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use arith::prelude::*;
//!
//! assert_eq!(add(2, 3), 5);
//! assert_eq!(subtract(5, 2), 3);
//! ```
//!
//! Both operations are total, deterministic, and side-effect free. They work
//! with any numeric type implementing the `num-traits` arithmetic traits:
//!
//! ```rust
//! use arith::prelude::*;
//!
//! assert_eq!(add(2_u64, 3), 5);
//! assert_eq!(subtract(1.5_f64, 0.25), 1.25);
//! ```
//!
//! ### Overflow-Aware Variants
//!
//! The core operations follow the host numeric type at the representable-range
//! boundary (two's-complement wrap or a debug-build panic for integers,
//! IEEE-754 infinities for floats). When the boundary must be surfaced
//! explicitly, use the checked variants, which return a `Result`:
//!
//! ```rust
//! use arith::prelude::*;
//!
//! let sum = checked_add(2_i64, 3)?;
//! assert_eq!(sum, 5);
//!
//! assert!(checked_add(i32::MAX, 1).is_err());
//! # Result::<(), ArithError>::Ok(())
//! ```
//!
//! The `?` operator is idiomatic, but errors can also be matched explicitly:
//!
//! ```rust
//! use arith::prelude::*;
//!
//! match checked_subtract(i32::MIN, 1) {
//!     Ok(difference) => println!("difference: {}", difference),
//!     Err(e) => eprintln!("subtraction failed: {}", e),
//! }
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! arith = { version = "0.1", default-features = false }
//! ```
//!
//! Nothing in the crate allocates, so no `alloc` is required either.

#![cfg_attr(not(feature = "std"), no_std)]

// Layer 1: Primitives - shared error type.
mod primitives;

// Layer 2: Math - pure arithmetic operations.
mod math;

// Standard arith prelude.
pub mod prelude {
    pub use crate::math::checked::{checked_add, checked_subtract};
    pub use crate::math::ops::{add, subtract};
    pub use crate::primitives::errors::ArithError;
}

// Crate-root re-exports mirroring the prelude.
pub use crate::math::checked::{checked_add, checked_subtract};
pub use crate::math::ops::{add, subtract};
pub use crate::primitives::errors::ArithError;
