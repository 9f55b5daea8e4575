//! attempt! macro for short-circuiting sequential composition.
//!
//! This module provides the [`attempt!`] macro, which lets a sequence of
//! [`Outcome`](crate::Outcome)-returning steps be written as straight-line
//! code: each step's failure immediately aborts the remaining steps, with
//! no explicit branching at each step.
//!
//! # Syntax
//!
//! ```text
//! attempt! {
//!     pattern <= outcome_expression;   // Bind: unwrap an Ok, or short-circuit
//!     let pattern = expression;        // Pure let binding
//!     yield expression                 // Final expression (wrapped in Ok)
//!     outcome_expression               // Final expression (already an Outcome)
//! }
//! ```
//!
//! # Operator Choice: `<=`
//!
//! We use `<=` as the bind operator because:
//! - `<-` is not valid in Rust's macro patterns
//! - `<=` is visually similar to `<-` and suggests "bind from"
//! - It's a valid token in Rust macros
//!
//! # Short-circuiting
//!
//! Each bind expands to a `match`; the remaining steps live textually
//! inside the `Ok` arm, so after the first `Err` no later step is
//! evaluated and no side effect a later step would have scheduled ever
//! occurs. The error short-circuit converts through [`Into`], mirroring
//! the `?` operator's desugaring: steps may carry different error types
//! as long as each converts into the overall error type via [`From`].
//!
//! Because the expansion is `match`-based rather than closure-based, the
//! body can read and mutate enclosing state directly, and a bound
//! expression may be an `.await`ed asynchronous step when the macro is
//! used inside an async function.
//!
//! # Examples
//!
//! Each bound step must name both payload types (or come from a function
//! that does): the short-circuit arm converts the step's error through
//! [`Into`], so the step's own error type cannot be inferred from the
//! overall result alone.
//!
//! ## Sequential success
//!
//! ```rust
//! use outcome::{Outcome, attempt};
//!
//! let result: Outcome<i32, String> = attempt! {
//!     x <= Outcome::<i32, String>::Ok(1);
//!     y <= Outcome::<i32, String>::Ok(2);
//!     z <= Outcome::<i32, String>::Ok(3);
//!     yield x + y + z
//! };
//! assert_eq!(result, Outcome::Ok(6));
//! ```
//!
//! ## Short-circuit on first failure
//!
//! ```rust
//! use outcome::{Outcome, attempt};
//!
//! let result: Outcome<i32, String> = attempt! {
//!     x <= Outcome::<i32, String>::Err("x".to_string());
//!     y <= Outcome::<i32, String>::Ok(2);
//!     yield x + y
//! };
//! assert_eq!(result, Outcome::Err("x".to_string()));
//! ```
//!
//! ## Heterogeneous error types
//!
//! ```rust
//! use outcome::{Outcome, attempt};
//!
//! #[derive(Debug, PartialEq)]
//! enum AppError {
//!     Parse(std::num::ParseIntError),
//!     Empty,
//! }
//!
//! impl From<std::num::ParseIntError> for AppError {
//!     fn from(error: std::num::ParseIntError) -> Self {
//!         Self::Parse(error)
//!     }
//! }
//!
//! fn parse(input: &str) -> Outcome<i32, std::num::ParseIntError> {
//!     Outcome::from_result(input.parse())
//! }
//!
//! fn first_char(input: &str) -> Outcome<char, AppError> {
//!     match input.chars().next() {
//!         Some(c) => Outcome::Ok(c),
//!         None => Outcome::Err(AppError::Empty),
//!     }
//! }
//!
//! let result: Outcome<i32, AppError> = attempt! {
//!     n <= parse("42");
//!     c <= first_char("x");
//!     yield n + c as i32
//! };
//! assert_eq!(result, Outcome::Ok(42 + 'x' as i32));
//! ```

/// A macro for short-circuiting sequential composition of `Outcome`s.
///
/// Binds (`pattern <= outcome;`) unwrap an `Ok` and short-circuit on the
/// first `Err`, converting the error through [`Into`]; `let` bindings are
/// pure; the terminal is either a final `Outcome` expression or
/// `yield expr` as sugar for `Outcome::Ok(expr)`.
///
/// # Examples
///
/// ```rust
/// use outcome::{Outcome, attempt};
///
/// let result: Outcome<i32, String> = attempt! {
///     x <= Outcome::<i32, String>::Ok(5);
///     let doubled = x * 2;
///     y <= Outcome::<i32, String>::Ok(10);
///     yield doubled + y
/// };
/// assert_eq!(result, Outcome::Ok(20));
/// ```
#[macro_export]
macro_rules! attempt {
    // ==========================================================================
    // Terminal cases
    // ==========================================================================

    // Case 1: yield expression - wrap in Ok
    (yield $result:expr) => {
        $crate::Outcome::Ok($result)
    };

    // Case 2: Single expression (terminal) - return as-is
    ($result:expr) => {
        $result
    };

    // ==========================================================================
    // Bind operation: pattern <= outcome; rest
    // ==========================================================================

    // Case 3: Bind with identifier pattern
    ($pattern:ident <= $step:expr ; $($rest:tt)+) => {
        match $step {
            $crate::Outcome::Ok($pattern) => $crate::attempt!($($rest)+),
            $crate::Outcome::Err(error) => {
                $crate::Outcome::Err(::core::convert::Into::into(error))
            }
        }
    };

    // Case 4: Bind with tuple pattern
    (($($pattern:tt)*) <= $step:expr ; $($rest:tt)+) => {
        match $step {
            $crate::Outcome::Ok(($($pattern)*)) => $crate::attempt!($($rest)+),
            $crate::Outcome::Err(error) => {
                $crate::Outcome::Err(::core::convert::Into::into(error))
            }
        }
    };

    // Case 5: Bind with wildcard pattern
    (_ <= $step:expr ; $($rest:tt)+) => {
        match $step {
            $crate::Outcome::Ok(_) => $crate::attempt!($($rest)+),
            $crate::Outcome::Err(error) => {
                $crate::Outcome::Err(::core::convert::Into::into(error))
            }
        }
    };

    // ==========================================================================
    // Let binding: let pattern = expression; rest
    // ==========================================================================

    // Case 6: Pure let binding with identifier
    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern = $expr;
            $crate::attempt!($($rest)+)
        }
    };

    // Case 7: Pure let binding with tuple pattern
    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $expr;
            $crate::attempt!($($rest)+)
        }
    };

    // Case 8: Pure let binding with type annotation
    (let $pattern:ident : $ty:ty = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern: $ty = $expr;
            $crate::attempt!($($rest)+)
        }
    };
}
