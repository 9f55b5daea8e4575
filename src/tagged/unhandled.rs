//! The uniform wrapper for thrown values no handler claimed.
//!
//! [`UnhandledException`] is the one concrete tagged error defined by this
//! library. The capture operations on
//! [`Outcome`](crate::Outcome) construct it for any thrown value that was
//! not already classified by a custom catch handler, so that every
//! escape through the unwind mechanism surfaces with the same shape.

use std::error::Error;

use super::caught::Caught;
use super::error::TaggedError;

/// A thrown value that no custom handler classified.
///
/// Carries the original [`Caught`] payload as its cause. When the payload
/// was itself an error object (see
/// [`raise_error`](crate::tagged::raise_error)), that error is exposed
/// through [`Error::source`]; otherwise the payload remains reachable
/// through [`caught`](Self::caught).
///
/// # Examples
///
/// ```rust
/// use outcome::{Outcome, UnhandledException};
/// use outcome::tagged::TaggedError;
///
/// let outcome = Outcome::<i32, _>::catch(|| panic!("boom"));
/// let error: UnhandledException = outcome.err().unwrap();
/// assert_eq!(error.tag(), UnhandledException::TAG);
/// assert_eq!(error.to_string(), "unhandled exception: boom");
/// ```
#[derive(Debug)]
pub struct UnhandledException {
    message: String,
    caught: Caught,
}

impl UnhandledException {
    /// The discriminator shared by every value of this type.
    pub const TAG: &'static str = "UnhandledException";

    /// Wraps a captured thrown value.
    pub fn new(caught: Caught) -> Self {
        Self {
            message: caught.describe(),
            caught,
        }
    }

    /// Returns the description of the thrown value.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the captured thrown value.
    #[inline]
    pub const fn caught(&self) -> &Caught {
        &self.caught
    }

    /// Consumes the wrapper and returns the captured thrown value.
    #[inline]
    pub fn into_caught(self) -> Caught {
        self.caught
    }
}

impl std::fmt::Display for UnhandledException {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "unhandled exception: {}", self.message)
    }
}

impl Error for UnhandledException {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.caught.as_error()
    }
}

impl TaggedError for UnhandledException {
    fn tag(&self) -> &'static str {
        Self::TAG
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagged::render_trace;

    #[test]
    fn message_comes_from_the_payload() {
        let exception = UnhandledException::new(Caught::new(Box::new("boom".to_string())));
        assert_eq!(exception.message(), "boom");
        assert_eq!(exception.to_string(), "unhandled exception: boom");
    }

    #[test]
    fn error_payload_becomes_the_source() {
        let root: Box<dyn Error + Send + Sync> = Box::new(std::io::Error::other("disk full"));
        let exception = UnhandledException::new(Caught::new(Box::new(root)));
        assert_eq!(exception.source().unwrap().to_string(), "disk full");
        assert_eq!(
            render_trace(&exception),
            "unhandled exception: disk full\nCaused by: disk full"
        );
    }

    #[test]
    fn opaque_payload_has_no_source() {
        let exception = UnhandledException::new(Caught::new(Box::new(1_u8)));
        assert!(exception.source().is_none());
        assert_eq!(exception.message(), "non-string panic payload");
    }
}
