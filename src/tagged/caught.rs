//! Captured thrown values and their classification.
//!
//! The host's native failure-signalling mechanism is the panic, and a
//! captured panic payload is an opaque `Box<dyn Any + Send>`. This module
//! provides [`Caught`], a thin wrapper that classifies such a payload, and
//! the [`raise`]/[`raise_error`] helpers that throw error objects in the
//! boxed form the classifiers recognize.
//!
//! # Overview
//!
//! Three payload shapes are recognized:
//!
//! - plain messages (`&str` or `String`, as produced by `panic!("...")`)
//! - boxed error objects (`Box<dyn Error + Send + Sync>`, as thrown by
//!   [`raise_error`])
//! - boxed tagged errors (`Box<dyn TaggedError>`, as thrown by [`raise`])
//!
//! Anything else remains accessible as an opaque payload through
//! [`Caught::payload`].
//!
//! # Examples
//!
//! ```rust
//! use outcome::Outcome;
//!
//! let outcome = Outcome::<i32, _>::catch(|| panic!("checksum mismatch"));
//! let error = outcome.err().unwrap();
//! assert_eq!(error.caught().message(), Some("checksum mismatch"));
//! ```

use std::any::Any;
use std::error::Error;
use std::panic::panic_any;

use super::error::TaggedError;
use super::unhandled::UnhandledException;

/// A captured thrown value.
///
/// Wraps the payload recovered from an unwinding operation and exposes the
/// classification helpers described in the module documentation. The
/// payload itself is never altered; `Caught` only looks at it.
pub struct Caught {
    payload: Box<dyn Any + Send>,
}

impl Caught {
    /// Wraps a raw panic payload.
    #[inline]
    pub fn new(payload: Box<dyn Any + Send>) -> Self {
        Self { payload }
    }

    /// Returns the payload's message if it is one of the plain string
    /// shapes produced by `panic!`, or the error's rendered message if the
    /// payload is a recognized error object.
    pub fn message(&self) -> Option<&str> {
        if let Some(literal) = self.payload.downcast_ref::<&'static str>() {
            return Some(literal);
        }
        if let Some(owned) = self.payload.downcast_ref::<String>() {
            return Some(owned);
        }
        None
    }

    /// Describes the payload for diagnostics.
    ///
    /// Falls back to a fixed placeholder when the payload is neither a
    /// string nor a recognized error object.
    pub fn describe(&self) -> String {
        if let Some(message) = self.message() {
            return message.to_string();
        }
        if let Some(error) = self.as_error() {
            return error.to_string();
        }
        "non-string panic payload".to_string()
    }

    /// Returns the payload as a standard error if it was thrown as one.
    pub fn as_error(&self) -> Option<&(dyn Error + 'static)> {
        if let Some(boxed) = self.payload.downcast_ref::<Box<dyn Error + Send + Sync>>() {
            return Some(&**boxed);
        }
        self.as_tagged()
            .map(|tagged| tagged as &(dyn Error + 'static))
    }

    /// Returns the payload as a tagged error if it was thrown as one.
    pub fn as_tagged(&self) -> Option<&(dyn TaggedError + 'static)> {
        if let Some(boxed) = self.payload.downcast_ref::<Box<dyn TaggedError>>() {
            return Some(&**boxed);
        }
        if let Some(unhandled) = self.payload.downcast_ref::<UnhandledException>() {
            return Some(unhandled);
        }
        None
    }

    /// Returns a reference to the raw payload.
    #[inline]
    pub fn payload(&self) -> &(dyn Any + Send) {
        &*self.payload
    }

    /// Consumes the wrapper and returns the raw payload.
    #[inline]
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }
}

impl std::fmt::Debug for Caught {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_tuple("Caught").field(&self.describe()).finish()
    }
}

impl std::fmt::Display for Caught {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.describe())
    }
}

/// Throws a tagged error so that a later capture can classify it.
///
/// The error is boxed as `Box<dyn TaggedError>` before unwinding, which is
/// the shape [`Caught::as_tagged`] and [`is_tagged_error`] recognize.
///
/// # Examples
///
/// ```rust
/// use outcome::Outcome;
/// use outcome::tagged::raise;
/// use outcome::tagged_error;
///
/// tagged_error! {
///     /// The ledger rejected the entry.
///     pub struct LedgerError("LedgerError");
/// }
///
/// let outcome = Outcome::<(), _>::catch(|| raise(LedgerError::new("double spend")));
/// let error = outcome.err().unwrap();
/// assert_eq!(error.caught().as_tagged().unwrap().tag(), "LedgerError");
/// ```
pub fn raise<E: TaggedError>(error: E) -> ! {
    panic_any(Box::new(error) as Box<dyn TaggedError>)
}

/// Throws a standard error so that a later capture can classify it.
///
/// The error is boxed as `Box<dyn Error + Send + Sync>` before unwinding,
/// which is the shape [`Caught::as_error`] and [`is_error`] recognize.
pub fn raise_error<E: Error + Send + Sync + 'static>(error: E) -> ! {
    panic_any(Box::new(error) as Box<dyn Error + Send + Sync>)
}

/// Returns `true` if a captured payload carries a standard error object.
///
/// Tagged errors are errors, so every payload accepted by
/// [`is_tagged_error`] is accepted here as well.
pub fn is_error(payload: &(dyn Any + Send)) -> bool {
    payload.downcast_ref::<Box<dyn Error + Send + Sync>>().is_some()
        || is_tagged_error(payload)
}

/// Returns `true` if a captured payload carries a tagged error object.
pub fn is_tagged_error(payload: &(dyn Any + Send)) -> bool {
    payload.downcast_ref::<Box<dyn TaggedError>>().is_some()
        || payload.downcast_ref::<UnhandledException>().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_payload_has_a_message() {
        let caught = Caught::new(Box::new("wires crossed".to_string()));
        assert_eq!(caught.message(), Some("wires crossed"));
        assert_eq!(caught.describe(), "wires crossed");
    }

    #[test]
    fn static_str_payload_has_a_message() {
        let caught = Caught::new(Box::new("wires crossed"));
        assert_eq!(caught.message(), Some("wires crossed"));
    }

    #[test]
    fn opaque_payload_has_no_message() {
        let caught = Caught::new(Box::new(7_u64));
        assert_eq!(caught.message(), None);
        assert_eq!(caught.describe(), "non-string panic payload");
        assert!(caught.payload().downcast_ref::<u64>().is_some());
    }

    #[test]
    fn boxed_error_payload_is_classified() {
        let error = std::io::Error::other("pipe burst");
        let payload: Box<dyn Any + Send> =
            Box::new(Box::new(error) as Box<dyn Error + Send + Sync>);
        assert!(is_error(&*payload));
        assert!(!is_tagged_error(&*payload));

        let caught = Caught::new(payload);
        assert_eq!(caught.as_error().unwrap().to_string(), "pipe burst");
        assert!(caught.as_tagged().is_none());
    }

    #[test]
    fn plain_payload_is_not_an_error() {
        let payload: Box<dyn Any + Send> = Box::new("just text");
        assert!(!is_error(&*payload));
        assert!(!is_tagged_error(&*payload));
    }
}
