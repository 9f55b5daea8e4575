//! Retry policies for the capture operations.
//!
//! A [`Retry`] describes how many times a fallible operation may be
//! attempted and how long to pause between attempts. Policies are plain
//! values, built fluently and passed by reference to the `catch_retry*`
//! family on [`Outcome`](crate::Outcome).
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use outcome::outcome::{Backoff, Retry};
//!
//! let policy = Retry::times(3)
//!     .delay(Duration::from_millis(10))
//!     .backoff(Backoff::Exponential);
//!
//! assert_eq!(policy.attempts(), 3);
//! // Pause after the first failed attempt: 10ms; after the second: 20ms.
//! assert_eq!(policy.delay_after(1), Duration::from_millis(10));
//! assert_eq!(policy.delay_after(2), Duration::from_millis(20));
//! ```

use std::time::Duration;

/// How the inter-attempt delay grows across failed attempts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Backoff {
    /// The same delay after every failed attempt.
    #[default]
    Constant,
    /// The delay doubles after each failed attempt.
    Exponential,
}

/// A bounded-attempts retry policy with an inter-attempt delay.
///
/// The operation is attempted up to `times` in total; after the final
/// failed attempt its failure becomes the returned error. Between
/// attempts the caller pauses according to the delay and backoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Retry {
    times: u32,
    delay: Duration,
    backoff: Backoff,
}

impl Retry {
    /// Creates a policy with the given total number of attempts.
    ///
    /// Zero is clamped to one: every operation is attempted at least once.
    /// The delay starts at zero with constant backoff.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::outcome::Retry;
    ///
    /// assert_eq!(Retry::times(5).attempts(), 5);
    /// assert_eq!(Retry::times(0).attempts(), 1);
    /// ```
    #[inline]
    pub const fn times(times: u32) -> Self {
        Self {
            times: if times == 0 { 1 } else { times },
            delay: Duration::ZERO,
            backoff: Backoff::Constant,
        }
    }

    /// Sets the base delay between attempts.
    #[inline]
    pub const fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Sets how the delay grows across attempts.
    #[inline]
    pub const fn backoff(mut self, backoff: Backoff) -> Self {
        self.backoff = backoff;
        self
    }

    /// Returns the total number of attempts this policy allows.
    #[inline]
    pub const fn attempts(&self) -> u32 {
        self.times
    }

    /// Returns the pause after the given failed attempt (1-based).
    ///
    /// Constant backoff always pauses the base delay; exponential backoff
    /// pauses `delay * 2^(attempt - 1)`, saturating on overflow.
    pub fn delay_after(&self, attempt: u32) -> Duration {
        match self.backoff {
            Backoff::Constant => self.delay,
            Backoff::Exponential => {
                let factor = 1_u32.checked_shl(attempt.saturating_sub(1)).unwrap_or(u32::MAX);
                self.delay.saturating_mul(factor)
            }
        }
    }
}
