//! The `Outcome<T, E>` type - an explicit success-or-failure value.
//!
//! This module provides [`Outcome<T, E>`], a closed two-variant value used
//! in place of unwinding for expected failure paths. An `Outcome` is
//! always exactly one of:
//!
//! - `Ok(T)`: the computation succeeded with a value
//! - `Err(E)`: the computation failed with an error
//!
//! Failures travel as ordinary values through [`map`](Outcome::map) /
//! [`and_then`](Outcome::and_then) chains; the only operations that
//! convert back to unwinding are [`unwrap`](Outcome::unwrap) and
//! [`expect`](Outcome::expect), for call sites that must not fail.
//!
//! # Examples
//!
//! ```rust
//! use outcome::Outcome;
//!
//! fn checked_div(dividend: i32, divisor: i32) -> Outcome<i32, String> {
//!     if divisor == 0 {
//!         Outcome::Err("division by zero".to_string())
//!     } else {
//!         Outcome::Ok(dividend / divisor)
//!     }
//! }
//!
//! let result = checked_div(84, 2).map(|n| n / 2);
//! assert_eq!(result, Outcome::Ok(21));
//!
//! let failed = checked_div(84, 0).map(|n| n / 2);
//! assert_eq!(failed, Outcome::Err("division by zero".to_string()));
//! ```

/// A value that is exactly one of success or failure.
///
/// The enum discriminant is the sole tag; the type system guarantees that
/// exactly one payload is inhabited. Operations consume `self` and return
/// a new value; an `Outcome` is never mutated in place.
///
/// The error type `E` may be any value. For discriminated handling it is
/// idiomatically a [`TaggedError`](crate::tagged::TaggedError)
/// implementor, or an enum of them matched natively.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the failure value
///
/// # Examples
///
/// ```rust
/// use outcome::Outcome;
///
/// let success: Outcome<i32, String> = Outcome::Ok(42);
/// let failure: Outcome<i32, String> = Outcome::Err("out of range".to_string());
///
/// assert!(success.is_ok());
/// assert!(failure.is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome<T, E> {
    /// The computation succeeded with a value.
    Ok(T),
    /// The computation failed with an error.
    Err(E),
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is an `Ok` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Ok(42);
    /// assert!(success.is_ok());
    /// assert!(!success.is_err());
    /// ```
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is an `Err` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("nope".to_string());
    /// assert!(failure.is_err());
    /// assert!(!failure.is_ok());
    /// ```
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts the outcome into an `Option<T>`, consuming it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Ok(42);
    /// assert_eq!(success.ok(), Some(42));
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("nope".to_string());
    /// assert_eq!(failure.ok(), None);
    /// ```
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Converts the outcome into an `Option<E>`, consuming it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("nope".to_string());
    /// assert_eq!(failure.err(), Some("nope".to_string()));
    /// ```
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Returns a reference to the success value if present.
    #[inline]
    pub const fn ok_ref(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Returns a reference to the error if present.
    #[inline]
    pub const fn err_ref(&self) -> Option<&E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies a function to the success value, passing failures through.
    ///
    /// If this is `Ok(value)`, returns `Ok(function(value))`.
    /// If this is `Err(error)`, returns the error untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Ok(21);
    /// assert_eq!(success.map(|n| n * 2), Outcome::Ok(42));
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("nope".to_string());
    /// assert_eq!(failure.map(|n| n * 2), Outcome::Err("nope".to_string()));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(function(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Applies a function to the error, passing successes through.
    ///
    /// The error-side dual of [`map`](Self::map).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("nope".to_string());
    /// assert_eq!(failure.map_err(|e| e.len()), Outcome::Err(4));
    /// ```
    #[inline]
    pub fn map_err<F2, F>(self, function: F) -> Outcome<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(function(error)),
        }
    }

    /// Chains a computation that can itself fail.
    ///
    /// If this is `Ok(value)`, returns `function(value)` directly, with no
    /// double wrapping. If this is `Err(error)`, short-circuits without
    /// invoking the function.
    ///
    /// This is the monadic bind; together with `Outcome::Ok` as the unit
    /// it satisfies the monad laws.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// fn half(n: i32) -> Outcome<i32, String> {
    ///     if n % 2 == 0 {
    ///         Outcome::Ok(n / 2)
    ///     } else {
    ///         Outcome::Err(format!("{n} is odd"))
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::<_, String>::Ok(84).and_then(half), Outcome::Ok(42));
    /// assert_eq!(Outcome::<_, String>::Ok(85).and_then(half), Outcome::Err("85 is odd".to_string()));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Chains a recovery computation on the error side.
    ///
    /// The dual of [`and_then`](Self::and_then): invoked only on `Err`,
    /// passes `Ok` through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("nope".to_string());
    /// let recovered = failure.or_else(|_| Outcome::<i32, String>::Ok(0));
    /// assert_eq!(recovered, Outcome::Ok(0));
    /// ```
    #[inline]
    pub fn or_else<F2, F>(self, function: F) -> Outcome<T, F2>
    where
        F: FnOnce(E) -> Outcome<T, F2>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => function(error),
        }
    }

    /// Invokes a function for its side effect on the success value.
    ///
    /// The outcome is returned unchanged in both branches; on `Err` the
    /// function is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let mut seen = None;
    /// let outcome: Outcome<i32, String> = Outcome::Ok(42);
    /// let unchanged = outcome.tap(|value| seen = Some(*value));
    /// assert_eq!(unchanged, Outcome::Ok(42));
    /// assert_eq!(seen, Some(42));
    /// ```
    #[inline]
    pub fn tap<F>(self, effect: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Ok(value) = &self {
            effect(value);
        }
        self
    }

    // =========================================================================
    // Consumption
    // =========================================================================

    /// Collapses both variants into a single result.
    ///
    /// Exactly one of the two handlers is invoked, selected by the
    /// variant. Exhaustiveness is enforced by construction: both handlers
    /// are required.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Ok(42);
    /// let text = outcome.fold(
    ///     |value| format!("got {value}"),
    ///     |error| format!("failed: {error}"),
    /// );
    /// assert_eq!(text, "got 42");
    /// ```
    #[inline]
    pub fn fold<R, FOk, FErr>(self, on_ok: FOk, on_err: FErr) -> R
    where
        FOk: FnOnce(T) -> R,
        FErr: FnOnce(E) -> R,
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(error) => on_err(error),
        }
    }

    /// Returns the success value, or the fallback on failure.
    ///
    /// Never panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("nope".to_string());
    /// assert_eq!(failure.unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => fallback,
        }
    }

    // =========================================================================
    // Standard Library Interop
    // =========================================================================

    /// Converts into a standard [`Result`].
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }

    /// Converts from a standard [`Result`].
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E: std::fmt::Debug> Outcome<T, E> {
    /// Returns the success value, panicking on failure.
    ///
    /// This is the single intentional boundary where an `Outcome` converts
    /// back to unwinding, for "this must not fail" call sites. The panic
    /// message includes the error's content.
    ///
    /// # Panics
    ///
    /// Panics if this is an `Err` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Ok(42);
    /// assert_eq!(success.unwrap(), 42);
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => {
                panic!("called `Outcome::unwrap()` on an `Err` value: {error:?}")
            }
        }
    }

    /// Returns the success value, panicking with a message on failure.
    ///
    /// Like [`unwrap`](Self::unwrap), but the caller supplies the message;
    /// the error's content is still appended.
    ///
    /// # Panics
    ///
    /// Panics if this is an `Err` value.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => panic!("{message}: {error:?}"),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
