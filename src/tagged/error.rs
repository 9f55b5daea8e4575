//! The `TaggedError` trait - string-discriminated domain errors.
//!
//! This module provides the [`TaggedError`] trait, the shape shared by all
//! domain errors in this library. A tagged error is an ordinary
//! [`std::error::Error`] that additionally carries a string discriminator,
//! unique per concrete error type, which dispatch operations inspect
//! instead of the concrete type.
//!
//! # Overview
//!
//! A caller's domain error union is a closed set of `TaggedError`
//! implementors. When the union can be expressed as a Rust enum, native
//! `match` gives exhaustiveness checking for free and nothing in this
//! module is needed beyond the trait itself. When the union lives behind a
//! `dyn TaggedError` at a dynamic boundary, the dispatch functions in
//! [`matching`](crate::tagged::matching) branch on the tag at runtime.
//!
//! # Examples
//!
//! ```rust
//! use outcome::tagged::{TaggedError, render_trace};
//! use outcome::tagged_error;
//!
//! tagged_error! {
//!     /// The configuration file could not be parsed.
//!     pub struct ConfigError("ConfigError");
//! }
//!
//! let error = ConfigError::new("missing `port` key");
//! assert_eq!(error.tag(), "ConfigError");
//! assert_eq!(error.to_string(), "missing `port` key");
//! ```

use std::any::Any;
use std::error::Error;
use std::fmt::Write;

/// An error carrying a string discriminator.
///
/// The discriminator returned by [`tag`](Self::tag) is a literal, unique
/// per concrete error type, and immutable for the lifetime of the value.
/// It is the only field the dispatch operations inspect.
///
/// Implementors are usually defined with the
/// [`tagged_error!`](crate::tagged_error) macro, which supplies the
/// standard message/cause plumbing. Hand-written implementations only need
/// to return the same literal from every call to `tag`.
///
/// The bound stops at `Send`: captured panic payloads are `Send` but not
/// `Sync`, and [`UnhandledException`](crate::tagged::UnhandledException)
/// carries one.
///
/// # Examples
///
/// ```rust
/// use outcome::tagged::TaggedError;
///
/// #[derive(Debug)]
/// struct Timeout;
///
/// impl std::fmt::Display for Timeout {
///     fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         formatter.write_str("operation timed out")
///     }
/// }
///
/// impl std::error::Error for Timeout {}
///
/// impl TaggedError for Timeout {
///     fn tag(&self) -> &'static str {
///         "Timeout"
///     }
/// }
///
/// assert_eq!(Timeout.tag(), "Timeout");
/// ```
pub trait TaggedError: Error + Any + Send {
    /// Returns the discriminator for this error type.
    fn tag(&self) -> &'static str;
}

impl dyn TaggedError {
    /// Returns `true` if the concrete type of this error is `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::tagged::{TaggedError, UnhandledException};
    /// use outcome::Outcome;
    ///
    /// let error = Outcome::<(), _>::catch(|| panic!("boom")).err().unwrap();
    /// let dynamic: &dyn TaggedError = &error;
    /// assert!(dynamic.is::<UnhandledException>());
    /// ```
    #[inline]
    pub fn is<T: TaggedError>(&self) -> bool {
        (self as &dyn Any).is::<T>()
    }

    /// Attempts to downcast this error to the concrete type `T`.
    #[inline]
    pub fn downcast_ref<T: TaggedError>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}

/// Renders an error and its cause chain as a human-readable trace.
///
/// Each cause reachable through [`Error::source`] is appended beneath a
/// `Caused by:` marker. The rendering is purely presentational: it does
/// not participate in equality or dispatch, and the causes remain
/// reachable structurally through `source` regardless.
///
/// # Examples
///
/// ```rust
/// use outcome::tagged::render_trace;
/// use outcome::tagged_error;
///
/// tagged_error! {
///     /// A lookup against the session store failed.
///     pub struct SessionError("SessionError");
/// }
///
/// let root = std::io::Error::new(std::io::ErrorKind::NotFound, "socket gone");
/// let error = SessionError::with_cause("session lookup failed", root);
///
/// let trace = render_trace(&error);
/// assert!(trace.starts_with("session lookup failed"));
/// assert!(trace.contains("Caused by: socket gone"));
/// ```
pub fn render_trace(error: &dyn Error) -> String {
    let mut trace = error.to_string();
    let mut current = error.source();
    while let Some(cause) = current {
        // Infallible: writing to a String cannot fail.
        let _ = write!(trace, "\nCaused by: {cause}");
        current = cause.source();
    }
    trace
}
