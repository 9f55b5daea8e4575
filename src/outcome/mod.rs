//! The `Outcome` value type and its operations.
//!
//! This module provides [`Outcome<T, E>`], an explicit success-or-failure
//! value, together with:
//!
//! - transformation and consumption combinators on the type itself, plus
//!   asynchronous variants (feature `async`)
//! - the `catch*` family, which converts unwinding operations into
//!   `Outcome` values under an optional [`Retry`] policy
//! - point-free combinator forms in [`pipe`]
//! - the serialized round-trip ([`Outcome::hydrate`], feature `serde`)
//! - the [`attempt!`](crate::attempt) composition macro
//!
//! The only dependency on the error taxonomy is
//! [`UnhandledException`](crate::tagged::UnhandledException), the uniform
//! wrapper applied by the capture operations.

mod attempt_macro;
mod catch;
mod core;
mod retry;

#[cfg(feature = "async")]
mod async_ops;

pub mod pipe;

#[cfg(feature = "serde")]
mod serde;

pub use self::core::Outcome;
pub use self::retry::{Backoff, Retry};
