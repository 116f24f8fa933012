// catalog_ingest/src/bootstrap.rs

//! Store Bootstrap: obtain a working store handle before any traffic.
//!
//! A co-deployed database may still be starting when this process launches,
//! so the first connection is retried a bounded number of times with a fixed
//! delay. Exhaustion is reported to the caller, which ends the process; an
//! external supervisor is expected to relaunch it.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

/// Bounded retry with a constant delay; no backoff, no jitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
  pub max_attempts: u32,
  pub delay: Duration,
}

impl Default for RetryPolicy {
  fn default() -> Self {
    Self {
      max_attempts: 5,
      delay: Duration::from_secs(6),
    }
  }
}

#[derive(Debug, Error)]
#[error("failed to connect to the backing store after {attempts} attempt(s): {last_error}")]
pub struct BootstrapError {
  pub attempts: u32,
  pub last_error: String,
}

/// Calls `connect` until it succeeds or `policy.max_attempts` is reached.
///
/// `connect` receives the 1-based attempt number. The delay separates
/// attempts only; nothing waits after the last failure. At least one attempt
/// is always made.
#[instrument(
  name = "bootstrap::connect_with_retry",
  skip_all,
  fields(max_attempts = policy.max_attempts, delay_ms = policy.delay.as_millis() as u64)
)]
pub async fn connect_with_retry<T, E, F, Fut>(policy: &RetryPolicy, mut connect: F) -> Result<T, BootstrapError>
where
  F: FnMut(u32) -> Fut,
  Fut: Future<Output = Result<T, E>>,
  E: Display,
{
  let max_attempts = policy.max_attempts.max(1);
  let mut last_error = String::new();

  for attempt in 1..=max_attempts {
    match connect(attempt).await {
      Ok(handle) => {
        info!(attempt, "Connected to the backing store.");
        return Ok(handle);
      }
      Err(e) => {
        last_error = e.to_string();
        if attempt < max_attempts {
          warn!(attempt, error = %e, "Failed to connect to the backing store, retrying in {:?}.", policy.delay);
          tokio::time::sleep(policy.delay).await;
        } else {
          error!(attempt, error = %e, "Failed to connect to the backing store; giving up.");
        }
      }
    }
  }

  Err(BootstrapError {
    attempts: max_attempts,
    last_error,
  })
}
