//! # outcome
//!
//! Explicit, composable failure handling for Rust.
//!
//! ## Overview
//!
//! This library standardizes the shape of "did this succeed, and if not,
//! why" for expected failure paths, without giving up interoperability
//! with code that signals failure by unwinding. It includes:
//!
//! - **`Outcome<T, E>`**: a closed success/failure value with `map`,
//!   `and_then`, `tap`, `fold` and their asynchronous variants
//! - **Panic capture**: `catch`/`catch_async` convert unwinding operations
//!   into `Outcome` values, with optional retry policies
//! - **Serialization round-trip**: `hydrate` reconstructs an `Outcome`
//!   after it crosses a boundary that loses type identity
//! - **`attempt!`**: do-notation style composition that short-circuits on
//!   the first failure
//! - **Tagged errors**: a string-discriminated error taxonomy with
//!   exhaustive and partial dispatch
//!
//! ## Feature Flags
//!
//! - `async` (default): asynchronous combinators, panic capture for
//!   futures, and non-blocking retry delays
//! - `serde`: the serialized form and `hydrate`
//!
//! ## Example
//!
//! ```rust
//! use outcome::{Outcome, attempt};
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     match input.parse::<i32>() {
//!         Ok(n) => Outcome::Ok(n),
//!         Err(error) => Outcome::Err(error.to_string()),
//!     }
//! }
//!
//! let total: Outcome<i32, String> = attempt! {
//!     x <= parse("20");
//!     y <= parse("22");
//!     yield x + y
//! };
//! assert_eq!(total, Outcome::Ok(42));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use outcome::prelude::*;
/// ```
pub mod prelude {
    pub use crate::outcome::*;

    pub use crate::tagged::*;
}

pub mod outcome;

pub mod tagged;

pub use crate::outcome::Outcome;

pub use crate::tagged::{TaggedError, UnhandledException};
