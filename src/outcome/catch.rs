//! Capturing unwinding operations as `Outcome` values.
//!
//! The `catch*` family runs an arbitrary fallible operation under an
//! unwind-capturing boundary and classifies any thrown value: a custom
//! handler maps the captured payload to the caller's error type, and in
//! its absence the payload is wrapped uniformly in
//! [`UnhandledException`]. Every entry point routes through the same
//! capture-and-classify step, and each accepts an optional
//! [`Retry`] policy variant that re-attempts transient failures before
//! surfacing the final one.
//!
//! A caller who never calls [`unwrap`](Outcome::unwrap) never observes an
//! unwind from this module, no matter how many wrapped operations fail.

use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::tagged::{Caught, UnhandledException};

use super::core::Outcome;
use super::retry::Retry;

#[cfg(feature = "async")]
use futures::FutureExt;

impl<T, E> Outcome<T, E> {
    /// Runs an operation, classifying a thrown value with the handler.
    ///
    /// On success the return value is wrapped in `Ok`; on unwind the
    /// captured payload is passed to the handler and its result wrapped
    /// in `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, String> =
    ///     Outcome::catch_with(|| panic!("boom"), |caught| caught.describe());
    /// assert_eq!(outcome, Outcome::Err("boom".to_string()));
    /// ```
    pub fn catch_with<F, H>(operation: F, handler: H) -> Self
    where
        F: FnOnce() -> T,
        H: FnOnce(Caught) -> E,
    {
        match catch_unwind(AssertUnwindSafe(operation)) {
            Ok(value) => Self::Ok(value),
            Err(payload) => Self::Err(handler(Caught::new(payload))),
        }
    }

    /// Runs an operation under a retry policy with a custom handler.
    ///
    /// The operation is attempted up to the policy's total; the handler
    /// runs once per failing attempt, and only the final attempt's error
    /// is returned. Between attempts the current thread sleeps for the
    /// policy's delay.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    /// use outcome::outcome::Retry;
    ///
    /// let mut calls = 0;
    /// let outcome: Outcome<i32, String> = Outcome::catch_retry_with(
    ///     &Retry::times(3),
    ///     || {
    ///         calls += 1;
    ///         if calls < 3 { panic!("flaky") }
    ///         calls
    ///     },
    ///     |caught| caught.describe(),
    /// );
    /// assert_eq!(outcome, Outcome::Ok(3));
    /// ```
    pub fn catch_retry_with<F, H>(policy: &Retry, mut operation: F, mut handler: H) -> Self
    where
        F: FnMut() -> T,
        H: FnMut(Caught) -> E,
    {
        let attempts = policy.attempts();
        let mut attempt = 1;
        loop {
            match catch_unwind(AssertUnwindSafe(&mut operation)) {
                Ok(value) => return Self::Ok(value),
                Err(payload) => {
                    let error = handler(Caught::new(payload));
                    if attempt >= attempts {
                        return Self::Err(error);
                    }
                    std::thread::sleep(policy.delay_after(attempt));
                    attempt += 1;
                }
            }
        }
    }

    /// Awaits an asynchronous operation, classifying a thrown value with
    /// the handler.
    ///
    /// A panic while constructing the future is captured the same way as
    /// one raised while polling it.
    #[cfg(feature = "async")]
    pub async fn catch_async_with<F, Fut, H>(operation: F, handler: H) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
        H: FnOnce(Caught) -> E,
    {
        let guarded = AssertUnwindSafe(async move { operation().await }).catch_unwind();
        match guarded.await {
            Ok(value) => Self::Ok(value),
            Err(payload) => Self::Err(handler(Caught::new(payload))),
        }
    }

    /// Awaits an asynchronous operation under a retry policy with a
    /// custom handler.
    ///
    /// Identical attempt semantics to
    /// [`catch_retry_with`](Self::catch_retry_with); the inter-attempt
    /// pause awaits a timer instead of blocking, so other pending work
    /// keeps running.
    #[cfg(feature = "async")]
    pub async fn catch_retry_async_with<F, Fut, H>(
        policy: &Retry,
        mut operation: F,
        mut handler: H,
    ) -> Self
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = T>,
        H: FnMut(Caught) -> E,
    {
        let attempts = policy.attempts();
        let mut attempt = 1;
        loop {
            let guarded = AssertUnwindSafe(async { operation().await }).catch_unwind();
            match guarded.await {
                Ok(value) => return Self::Ok(value),
                Err(payload) => {
                    let error = handler(Caught::new(payload));
                    if attempt >= attempts {
                        return Self::Err(error);
                    }
                    tokio::time::sleep(policy.delay_after(attempt)).await;
                    attempt += 1;
                }
            }
        }
    }
}

impl<T> Outcome<T, UnhandledException> {
    /// Runs an operation, wrapping any thrown value uniformly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// assert_eq!(Outcome::catch(|| 42).ok(), Some(42));
    ///
    /// let failed = Outcome::<i32, _>::catch(|| panic!("boom"));
    /// assert_eq!(failed.err().unwrap().message(), "boom");
    /// ```
    pub fn catch<F>(operation: F) -> Self
    where
        F: FnOnce() -> T,
    {
        Self::catch_with(operation, UnhandledException::new)
    }

    /// Runs an operation under a retry policy, wrapping the final
    /// failure uniformly.
    pub fn catch_retry<F>(policy: &Retry, operation: F) -> Self
    where
        F: FnMut() -> T,
    {
        Self::catch_retry_with(policy, operation, UnhandledException::new)
    }

    /// Awaits an asynchronous operation, wrapping any thrown value
    /// uniformly.
    #[cfg(feature = "async")]
    pub async fn catch_async<F, Fut>(operation: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        Self::catch_async_with(operation, UnhandledException::new).await
    }

    /// Awaits an asynchronous operation under a retry policy, wrapping
    /// the final failure uniformly.
    #[cfg(feature = "async")]
    pub async fn catch_retry_async<F, Fut>(policy: &Retry, operation: F) -> Self
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = T>,
    {
        Self::catch_retry_async_with(policy, operation, UnhandledException::new).await
    }
}
