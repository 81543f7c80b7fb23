#![cfg(feature = "async")]
//! Tests for Try::map_async.
//!
//! Errors raised by the asynchronous mapper are captured as failures, except
//! cancellation, which is always handed back to the caller.

use funk::control::{Cancelled, Failure, Panicked, Try};
use rstest::rstest;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
#[error("lookup failed")]
struct LookupError;

#[rstest]
#[tokio::test]
async fn map_async_on_success_awaits_mapper() {
    let result = Try::success(6)
        .map_async(|x| async move {
            tokio::time::sleep(Duration::from_millis(1)).await;
            Ok::<_, LookupError>(x * 7)
        })
        .await;
    assert_eq!(result, Ok(Try::success(42)));
}

#[rstest]
#[tokio::test]
async fn map_async_captures_ordinary_error() {
    let result = Try::success(1)
        .map_async(|_| async { Err::<i32, _>(LookupError) })
        .await;
    let captured = result.map(|value| value.fold(|_| false, |f| f.is::<LookupError>()));
    assert_eq!(captured, Ok(true));
}

#[rstest]
#[tokio::test]
async fn map_async_captures_panic() {
    let result = Try::success(1)
        .map_async(|x: i32| async move {
            if x > 0 {
                panic!("async mapper exploded");
            }
            Ok::<_, LookupError>(x)
        })
        .await;
    let captured = result.map(|value| value.fold(|_| false, |f| f.is::<Panicked>()));
    assert_eq!(captured, Ok(true));
}

#[rstest]
#[tokio::test]
async fn map_async_on_failure_skips_mapper() {
    let invoked = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&invoked);
    let failure: Try<i32> = Try::failure(LookupError);

    let result = failure
        .clone()
        .map_async(move |x| async move {
            flag.store(true, Ordering::SeqCst);
            Ok::<_, LookupError>(x)
        })
        .await;

    assert_eq!(result, Ok(failure));
    assert!(!invoked.load(Ordering::SeqCst));
}

#[rstest]
#[tokio::test]
async fn map_async_with_pre_cancelled_signal_propagates_cancellation() {
    let signal = Arc::new(AtomicBool::new(true));
    let result = Try::success(10)
        .map_async(|x| {
            let signal = Arc::clone(&signal);
            async move {
                Cancelled::check(signal.load(Ordering::SeqCst))?;
                Ok::<_, Cancelled>(x + 1)
            }
        })
        .await;
    assert_eq!(result, Err(Cancelled));
}

#[rstest]
#[tokio::test]
async fn map_async_does_not_capture_cancellation_wrapped_in_failure() {
    let result = Try::success(10)
        .map_async(|_| async { Err::<i32, _>(Failure::new(Cancelled)) })
        .await;
    assert_eq!(result, Err(Cancelled));
}

#[rstest]
#[tokio::test]
async fn map_async_cancelled_while_awaiting_propagates() {
    let signal = Arc::new(AtomicBool::new(false));
    let trigger = Arc::clone(&signal);

    let canceller = tokio::spawn(async move {
        trigger.store(true, Ordering::SeqCst);
    });
    canceller.await.ok();

    let result = Try::success("payload")
        .map_async(|value| async move {
            tokio::task::yield_now().await;
            Cancelled::check(signal.load(Ordering::SeqCst))?;
            Ok::<_, Cancelled>(value.len())
        })
        .await;
    assert_eq!(result, Err(Cancelled));
}

#[rstest]
#[tokio::test]
async fn map_async_runs_mapper_exactly_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let result = Try::success(2)
        .map_async(move |x| async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok::<_, Cancelled>(x)
        })
        .await;
    assert_eq!(result, Ok(Try::success(2)));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn map_async_results_are_shareable_across_tasks() {
    let shared = Arc::new(
        Try::success(5)
            .map_async(|x| async move { Ok::<_, LookupError>(x * 3) })
            .await,
    );
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&shared);
            tokio::spawn(async move { shared.as_ref().clone().map(|value| value.or_default(0)) })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.await.ok(), Some(Ok(15)));
    }
}
