//! Tag-directed dispatch over closed error unions.
//!
//! When a domain error union is a Rust enum, native `match` already gives
//! exhaustive, statically checked dispatch and nothing here is needed.
//! These functions cover the other case: a union that lives behind a
//! [`TaggedError`] trait object (or any single tagged type) at a dynamic
//! boundary, where handlers are selected by the runtime tag.
//!
//! # Examples
//!
//! ```rust
//! use outcome::tagged::{TaggedError, match_tag_partial};
//! use outcome::tagged_error;
//!
//! tagged_error! {
//!     /// The record was not found.
//!     pub struct NotFound("NotFound");
//! }
//!
//! let error = NotFound::new("no such user");
//! let verdict = match_tag_partial(
//!     &error,
//!     &[("NotFound", &|_| "retry with defaults")],
//!     |_| "give up",
//! );
//! assert_eq!(verdict, "retry with defaults");
//! ```

use super::error::TaggedError;

/// Dispatches to the handler whose key equals the error's tag.
///
/// The handler table must cover every tag the error can carry at runtime.
/// A missing handler is a mismatch between the declared union and the
/// handlers written for it, a programmer error rather than a recoverable
/// condition, and this function panics with the offending tag.
///
/// Handlers receive the error itself, so a handler for a known tag may
/// downcast to recover the concrete type.
///
/// # Panics
///
/// Panics if no handler's key equals the error's tag.
///
/// # Examples
///
/// ```rust
/// use outcome::tagged::{TaggedError, match_tag};
/// use outcome::tagged_error;
///
/// tagged_error! {
///     /// The peer closed the connection.
///     pub struct Disconnected("Disconnected");
/// }
///
/// let error = Disconnected::new("peer went away");
/// let verdict = match_tag(&error, &[
///     ("Disconnected", &|error: &Disconnected| format!("reconnect: {error}")),
/// ]);
/// assert_eq!(verdict, "reconnect: peer went away");
/// ```
pub fn match_tag<E, R>(error: &E, handlers: &[(&str, &dyn Fn(&E) -> R)]) -> R
where
    E: TaggedError + ?Sized,
{
    let tag = error.tag();
    for (candidate, handler) in handlers {
        if *candidate == tag {
            return handler(error);
        }
    }
    panic!("match_tag: no handler for tag {tag:?}");
}

/// Dispatches like [`match_tag`], falling back instead of panicking.
///
/// Handlers may omit tags; when the runtime tag has no handler, the
/// fallback is invoked with the error.
pub fn match_tag_partial<E, R>(
    error: &E,
    handlers: &[(&str, &dyn Fn(&E) -> R)],
    fallback: impl FnOnce(&E) -> R,
) -> R
where
    E: TaggedError + ?Sized,
{
    let tag = error.tag();
    for (candidate, handler) in handlers {
        if *candidate == tag {
            return handler(error);
        }
    }
    fallback(error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagged_error;

    tagged_error! {
        /// Test-only: the input could not be decoded.
        pub struct DecodeFailure("DecodeFailure");
    }

    #[test]
    fn dispatch_reaches_the_matching_handler() {
        let error = DecodeFailure::new("bad frame");
        let result = match_tag(&error, &[("DecodeFailure", &|error: &DecodeFailure| {
            error.message().len()
        })]);
        assert_eq!(result, 9);
    }

    #[test]
    #[should_panic(expected = "no handler for tag \"DecodeFailure\"")]
    fn uncovered_tag_is_a_programmer_error() {
        let error = DecodeFailure::new("bad frame");
        let _: i32 = match_tag(&error, &[("SomethingElse", &|_| 0)]);
    }

    #[test]
    fn partial_dispatch_uses_the_fallback() {
        let error = DecodeFailure::new("bad frame");
        let result = match_tag_partial(&error, &[("SomethingElse", &|_| "handled")], |_| {
            "fell back"
        });
        assert_eq!(result, "fell back");
    }

    #[test]
    fn dynamic_union_dispatches_on_runtime_tag() {
        let boxed: Box<dyn TaggedError> = Box::new(DecodeFailure::new("bad frame"));
        let result = match_tag(&*boxed, &[("DecodeFailure", &|error: &dyn TaggedError| {
            error.to_string()
        })]);
        assert_eq!(result, "bad frame");
    }
}
