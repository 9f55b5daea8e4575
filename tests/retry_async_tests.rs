//! Tests for asynchronous capture and retry backoff timing.
//!
//! These run under tokio's paused clock, so the inter-attempt delays are
//! observed deterministically: the sleep timers auto-advance virtual time
//! instead of blocking the test.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use outcome::Outcome;
use outcome::outcome::{Backoff, Retry};

// =============================================================================
// Asynchronous Capture
// =============================================================================

#[tokio::test]
async fn resolving_normally_yields_ok() {
    let outcome = Outcome::catch_async(|| async { 42 }).await;
    assert_eq!(outcome.ok(), Some(42));
}

#[tokio::test]
async fn a_panicking_future_becomes_an_unhandled_exception() {
    let outcome = Outcome::<i32, _>::catch_async(|| async { panic!("rejected") }).await;
    assert_eq!(outcome.err().unwrap().message(), "rejected");
}

#[tokio::test]
async fn a_panic_while_building_the_future_is_also_captured() {
    #[allow(unreachable_code)]
    let outcome = Outcome::<i32, _>::catch_async(|| {
        panic!("constructor blew up");
        async { 0 }
    })
    .await;
    assert_eq!(outcome.err().unwrap().message(), "constructor blew up");
}

#[tokio::test]
async fn custom_handler_classifies_async_failures() {
    let outcome: Outcome<i32, usize> =
        Outcome::catch_async_with(|| async { panic!("four") }, |caught| caught.describe().len())
            .await;
    assert_eq!(outcome, Outcome::Err(4));
}

// =============================================================================
// Asynchronous Retry
// =============================================================================

#[tokio::test]
async fn async_retry_stops_at_first_success() {
    let attempts = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&attempts);
    let outcome = Outcome::catch_retry_async(&Retry::times(5), move || {
        let counter = Arc::clone(&counter);
        async move {
            let attempt = counter.fetch_add(1, Ordering::SeqCst) + 1;
            if attempt < 3 {
                panic!("transient")
            }
            attempt
        }
    })
    .await;
    assert_eq!(outcome.ok(), Some(3));
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
}

#[tokio::test(start_paused = true)]
async fn exponential_backoff_waits_the_expected_total() {
    let attempts = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&attempts);
    let policy = Retry::times(3)
        .delay(Duration::from_millis(10))
        .backoff(Backoff::Exponential);

    let started = tokio::time::Instant::now();
    let outcome = Outcome::catch_retry_async(&policy, move || {
        let counter = Arc::clone(&counter);
        async move {
            let attempt = counter.fetch_add(1, Ordering::SeqCst) + 1;
            if attempt < 3 {
                panic!("transient")
            }
            attempt
        }
    })
    .await;
    let elapsed = started.elapsed();

    // Pauses: 10ms after the first failure, 20ms after the second.
    assert_eq!(outcome.ok(), Some(3));
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
    assert!(elapsed >= Duration::from_millis(30), "elapsed {elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn constant_backoff_waits_the_base_delay_each_time() {
    let attempts = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&attempts);
    let policy = Retry::times(3).delay(Duration::from_millis(10));

    let started = tokio::time::Instant::now();
    let outcome = Outcome::<u32, _>::catch_retry_async(&policy, move || {
        let counter = Arc::clone(&counter);
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            panic!("permanent")
        }
    })
    .await;
    let elapsed = started.elapsed();

    assert!(outcome.is_err());
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
    // Two pauses of 10ms each; no pause after the final attempt.
    assert!(elapsed >= Duration::from_millis(20), "elapsed {elapsed:?}");
    assert!(elapsed < Duration::from_millis(30), "elapsed {elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn the_delay_does_not_block_other_pending_work() {
    let ticks = Arc::new(AtomicU32::new(0));
    let observer = Arc::clone(&ticks);
    let background = tokio::spawn(async move {
        for _ in 0..4 {
            tokio::time::sleep(Duration::from_millis(5)).await;
            observer.fetch_add(1, Ordering::SeqCst);
        }
    });

    let attempts = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&attempts);
    let policy = Retry::times(2).delay(Duration::from_millis(20));
    let outcome = Outcome::catch_retry_async(&policy, move || {
        let counter = Arc::clone(&counter);
        async move {
            let attempt = counter.fetch_add(1, Ordering::SeqCst) + 1;
            if attempt < 2 {
                panic!("transient")
            }
            attempt
        }
    })
    .await;

    assert_eq!(outcome.ok(), Some(2));
    background.await.unwrap();
    // The 20ms retry pause let the 5ms background ticks keep firing.
    assert_eq!(ticks.load(Ordering::SeqCst), 4);
}
