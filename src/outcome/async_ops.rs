//! Asynchronous combinators for `Outcome`.
//!
//! These mirror [`and_then`](Outcome::and_then) and
//! [`tap`](Outcome::tap) for steps that settle asynchronously. Suspension
//! is ordinary cooperative `await`; on `Err` the continuation is never
//! constructed, so nothing it would have scheduled ever runs.

use super::core::Outcome;

impl<T, E> Outcome<T, E> {
    /// Chains an asynchronous computation that can itself fail.
    ///
    /// Same contract as [`and_then`](Outcome::and_then): on `Ok` the
    /// function's future is awaited and its outcome returned directly; on
    /// `Err` the function is never invoked and the error passes through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// async fn lookup(id: u32) -> Outcome<String, String> {
    ///     if id == 7 {
    ///         Outcome::Ok("alice".to_string())
    ///     } else {
    ///         Outcome::Err(format!("no user {id}"))
    ///     }
    /// }
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let name = Outcome::<u32, String>::Ok(7)
    ///     .and_then_async(lookup)
    ///     .await;
    /// assert_eq!(name, Outcome::Ok("alice".to_string()));
    /// # });
    /// ```
    pub async fn and_then_async<U, F, Fut>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
    {
        match self {
            Self::Ok(value) => function(value).await,
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Awaits a function for its side effect on the success value.
    ///
    /// The outcome is returned unchanged in both branches; on `Err` the
    /// effect is never invoked. The success value is cloned for the
    /// effect so the original passes through untouched.
    pub async fn tap_async<F, Fut>(self, effect: F) -> Self
    where
        T: Clone,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Self::Ok(value) = &self {
            effect(value.clone()).await;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[tokio::test]
    async fn and_then_async_chains_on_ok() {
        let result = Outcome::<i32, String>::Ok(20)
            .and_then_async(|n| async move { Outcome::Ok(n + 22) })
            .await;
        assert_eq!(result, Outcome::Ok(42));
    }

    #[tokio::test]
    async fn and_then_async_short_circuits_on_err() {
        let invoked = Arc::new(AtomicBool::new(false));
        let observer = Arc::clone(&invoked);
        let result = Outcome::<i32, String>::Err("stale".to_string())
            .and_then_async(move |n| async move {
                observer.store(true, Ordering::SeqCst);
                Outcome::Ok(n)
            })
            .await;
        assert_eq!(result, Outcome::Err("stale".to_string()));
        assert!(!invoked.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn tap_async_observes_without_changing() {
        let seen = Arc::new(AtomicBool::new(false));
        let observer = Arc::clone(&seen);
        let result = Outcome::<i32, String>::Ok(1)
            .tap_async(move |_| async move {
                observer.store(true, Ordering::SeqCst);
            })
            .await;
        assert_eq!(result, Outcome::Ok(1));
        assert!(seen.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn tap_async_on_err_never_runs() {
        let seen = Arc::new(AtomicBool::new(false));
        let observer = Arc::clone(&seen);
        let result = Outcome::<i32, String>::Err("stale".to_string())
            .tap_async(move |_| async move {
                observer.store(true, Ordering::SeqCst);
            })
            .await;
        assert_eq!(result, Outcome::Err("stale".to_string()));
        assert!(!seen.load(Ordering::SeqCst));
    }
}
