//! String-discriminated error taxonomy and thrown-value interop.
//!
//! This module defines the shape all domain errors in this library share:
//! an ordinary [`std::error::Error`] carrying a string discriminator
//! ([`TaggedError`]), declared concisely with the
//! [`tagged_error!`](crate::tagged_error) macro and dispatched on with
//! [`match_tag`]/[`match_tag_partial`]. It also owns the interop boundary
//! with the host unwind mechanism: [`Caught`] classifies captured panic
//! payloads, and [`UnhandledException`] is the uniform wrapper the capture
//! operations on [`Outcome`](crate::Outcome) apply to thrown values no
//! custom handler claimed.
//!
//! Nothing here depends on [`Outcome`](crate::Outcome); the dependency
//! runs the other way.

mod caught;
mod define_macro;
mod error;
mod matching;
mod unhandled;

pub use caught::{Caught, is_error, is_tagged_error, raise, raise_error};
pub use error::{TaggedError, render_trace};
pub use matching::{match_tag, match_tag_partial};
pub use unhandled::UnhandledException;
