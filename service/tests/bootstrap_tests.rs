// tests/bootstrap_tests.rs
use catalog_ingest::bootstrap::{connect_with_retry, RetryPolicy};
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, PartialEq)]
struct Handle(u32);

/// Paused-clock timers fire on millisecond ticks.
fn assert_within(elapsed: Duration, expected: Duration) {
  assert!(
    elapsed >= expected && elapsed < expected + Duration::from_millis(5),
    "elapsed {:?}, expected about {:?}",
    elapsed,
    expected
  );
}

#[tokio::test(start_paused = true)]
async fn test_gives_up_after_max_attempts() {
  let policy = RetryPolicy::default();
  let mut calls = 0u32;
  let started = Instant::now();

  let result = connect_with_retry(&policy, |attempt| {
    calls += 1;
    async move { Err::<Handle, _>(format!("connection refused (attempt {attempt})")) }
  })
  .await;

  let err = result.unwrap_err();
  assert_eq!(calls, 5);
  assert_eq!(err.attempts, 5);
  assert_eq!(err.last_error, "connection refused (attempt 5)");
  // Four waits between five attempts, none after the last.
  assert_within(started.elapsed(), Duration::from_secs(24));
}

#[tokio::test(start_paused = true)]
async fn test_stops_retrying_after_first_success() {
  let policy = RetryPolicy::default();
  let mut calls = 0u32;
  let started = Instant::now();

  let result = connect_with_retry(&policy, |attempt| {
    calls += 1;
    async move {
      if attempt < 3 {
        Err("database is starting up".to_string())
      } else {
        Ok(Handle(attempt))
      }
    }
  })
  .await;

  assert_eq!(result.unwrap(), Handle(3));
  assert_eq!(calls, 3);
  assert_within(started.elapsed(), Duration::from_secs(12));
}

#[tokio::test(start_paused = true)]
async fn test_first_attempt_success_does_not_wait() {
  let started = Instant::now();
  let result = connect_with_retry(&RetryPolicy::default(), |_| async { Ok::<_, String>(Handle(1)) }).await;
  assert_eq!(result.unwrap(), Handle(1));
  assert_within(started.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn test_custom_policy_is_honoured() {
  let policy = RetryPolicy {
    max_attempts: 2,
    delay: Duration::from_millis(250),
  };
  let started = Instant::now();
  let err = connect_with_retry(&policy, |_| async { Err::<Handle, _>("down") })
    .await
    .unwrap_err();
  assert_eq!(err.attempts, 2);
  assert_within(started.elapsed(), Duration::from_millis(250));
}

#[tokio::test(start_paused = true)]
async fn test_zero_attempts_still_tries_once() {
  let policy = RetryPolicy {
    max_attempts: 0,
    delay: Duration::from_secs(1),
  };
  let mut calls = 0;
  let err = connect_with_retry(&policy, |_| {
    calls += 1;
    async { Err::<Handle, _>("down") }
  })
  .await
  .unwrap_err();
  assert_eq!(calls, 1);
  assert_eq!(err.attempts, 1);
}
