//! tagged_error! macro for declaring concrete tagged errors.
//!
//! This module provides the [`tagged_error!`] macro, which expands a short
//! declaration into a complete error type: a struct carrying a message and
//! an optional cause, with `Display`, [`std::error::Error`] and
//! [`TaggedError`](crate::tagged::TaggedError) implementations wired up.
//!
//! # Syntax
//!
//! ```text
//! tagged_error! {
//!     /// Doc comment for the generated type.
//!     pub struct TypeName("TagLiteral");
//! }
//! ```
//!
//! The tag literal becomes both the associated `TAG` constant and the
//! value returned by `TaggedError::tag`. By convention it equals the type
//! name, but the macro does not enforce this.
//!
//! # Examples
//!
//! ```rust
//! use outcome::tagged::TaggedError;
//! use outcome::tagged_error;
//!
//! tagged_error! {
//!     /// The upstream service rejected the request.
//!     pub struct UpstreamError("UpstreamError");
//! }
//!
//! let plain = UpstreamError::new("rejected with status 503");
//! assert_eq!(plain.tag(), UpstreamError::TAG);
//!
//! let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");
//! let chained = UpstreamError::with_cause("connection dropped", io);
//! assert!(std::error::Error::source(&chained).is_some());
//! ```

/// Declares a concrete [`TaggedError`](crate::tagged::TaggedError) type.
///
/// The generated struct holds a `message` and an optional boxed `cause`;
/// `Display` shows the message, `Error::source` exposes the cause, and the
/// discriminator is fixed to the supplied literal.
///
/// # Examples
///
/// ```rust
/// use outcome::tagged::TaggedError;
/// use outcome::tagged_error;
///
/// tagged_error! {
///     /// The request payload failed validation.
///     pub struct ValidationError("ValidationError");
/// }
///
/// let error = ValidationError::new("age must be positive");
/// assert_eq!(error.tag(), "ValidationError");
/// assert_eq!(error.to_string(), "age must be positive");
/// ```
#[macro_export]
macro_rules! tagged_error {
    (
        $(#[$meta:meta])*
        $visibility:vis struct $name:ident($tag:literal);
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        $visibility struct $name {
            message: String,
            cause: Option<Box<dyn std::error::Error + Send + Sync>>,
        }

        impl $name {
            /// The discriminator shared by every value of this type.
            $visibility const TAG: &'static str = $tag;

            /// Creates an error with the given message and no cause.
            $visibility fn new(message: impl Into<String>) -> Self {
                Self {
                    message: message.into(),
                    cause: None,
                }
            }

            /// Creates an error whose diagnostic trace extends the cause's.
            $visibility fn with_cause(
                message: impl Into<String>,
                cause: impl std::error::Error + Send + Sync + 'static,
            ) -> Self {
                Self {
                    message: message.into(),
                    cause: Some(Box::new(cause)),
                }
            }

            /// Returns the message supplied at construction.
            $visibility fn message(&self) -> &str {
                &self.message
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str(&self.message)
            }
        }

        impl std::error::Error for $name {
            fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
                self.cause
                    .as_deref()
                    .map(|cause| cause as &(dyn std::error::Error + 'static))
            }
        }

        impl $crate::tagged::TaggedError for $name {
            fn tag(&self) -> &'static str {
                Self::TAG
            }
        }
    };
}
