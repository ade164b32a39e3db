//! Retry with per-attempt timeout and exponential backoff.
//!
//! The pipelines carry three distinct timeout/retry configurations (batch
//! label lookup, detail primary, detail fallback). Each call site supplies
//! a [`RetryPolicy`] value instead of duplicating the loop.

use std::future::Future;
use std::time::Duration;

use sleeve_common::{Error, Result};

/// Parameterized retry behavior for one kind of remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Additional attempts after the first failure
    pub max_retries: u32,
    /// Delay before the first re-attempt
    pub base_delay: Duration,
    /// Factor applied to the delay after each re-attempt (1 = fixed delay)
    pub backoff_multiplier: u32,
    /// Upper bound on each individual attempt
    pub attempt_timeout: Duration,
}

impl RetryPolicy {
    /// Delay to sleep before re-attempt number `retry` (1-based).
    fn delay_for(&self, retry: u32) -> Duration {
        self.base_delay * self.backoff_multiplier.saturating_pow(retry.saturating_sub(1))
    }
}

/// Run `operation` under `policy`, timing out each attempt independently.
///
/// A timed-out attempt and a failed attempt are treated identically: both
/// consume a retry and back off before the next attempt. Once retries are
/// exhausted the final error is returned.
pub async fn retry_with_timeout<F, Fut, T>(
    operation_name: &str,
    policy: &RetryPolicy,
    mut operation: F,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut retries = 0u32;

    loop {
        let outcome = match tokio::time::timeout(policy.attempt_timeout, operation()).await {
            Ok(result) => result,
            Err(_) => Err(Error::Timeout(format!(
                "{} exceeded {:?}",
                operation_name, policy.attempt_timeout
            ))),
        };

        match outcome {
            Ok(value) => {
                if retries > 0 {
                    tracing::debug!(
                        operation = operation_name,
                        retries,
                        "Operation succeeded after retry"
                    );
                }
                return Ok(value);
            }
            Err(err) => {
                if retries >= policy.max_retries {
                    tracing::warn!(
                        operation = operation_name,
                        retries,
                        error = %err,
                        "Retries exhausted"
                    );
                    return Err(err);
                }

                retries += 1;
                let delay = policy.delay_for(retries);
                tracing::debug!(
                    operation = operation_name,
                    retry = retries,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "Attempt failed, backing off"
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_policy(max_retries: u32) -> RetryPolicy {
        RetryPolicy {
            max_retries,
            base_delay: Duration::from_millis(10),
            backoff_multiplier: 2,
            attempt_timeout: Duration::from_millis(500),
        }
    }

    #[tokio::test]
    async fn test_succeeds_on_first_attempt() {
        let result = retry_with_timeout("test_op", &fast_policy(2), || async { Ok(42) }).await;
        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test(start_paused = true)]
    async fn test_recovers_after_transient_failures() {
        let mut calls = 0u32;

        let result = retry_with_timeout("test_op", &fast_policy(2), || {
            calls += 1;
            let call = calls;
            async move {
                if call < 3 {
                    Err(Error::Http("connection reset".to_string()))
                } else {
                    Ok("done")
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), "done");
        assert_eq!(calls, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhaustion_returns_last_error_after_all_attempts() {
        let mut calls = 0u32;

        let result: Result<()> = retry_with_timeout("test_op", &fast_policy(2), || {
            calls += 1;
            async { Err(Error::Http("boom".to_string())) }
        })
        .await;

        // 1 initial attempt + 2 retries
        assert_eq!(calls, 3);
        assert!(matches!(result, Err(Error::Http(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_attempt_times_out_and_is_retried() {
        let mut calls = 0u32;

        let result = retry_with_timeout("test_op", &fast_policy(1), || {
            calls += 1;
            let call = calls;
            async move {
                if call == 1 {
                    // Longer than the per-attempt timeout
                    tokio::time::sleep(Duration::from_secs(10)).await;
                }
                Ok(call)
            }
        })
        .await;

        assert_eq!(result.unwrap(), 2);
        assert_eq!(calls, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhausted_timeouts_surface_timeout_error() {
        let result: Result<()> = retry_with_timeout("test_op", &fast_policy(1), || async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Ok(())
        })
        .await;

        assert!(matches!(result, Err(Error::Timeout(_))));
    }

    #[test]
    fn test_backoff_doubles_per_retry() {
        let policy = RetryPolicy {
            max_retries: 3,
            base_delay: Duration::from_millis(500),
            backoff_multiplier: 2,
            attempt_timeout: Duration::from_secs(8),
        };
        assert_eq!(policy.delay_for(1), Duration::from_millis(500));
        assert_eq!(policy.delay_for(2), Duration::from_millis(1000));
        assert_eq!(policy.delay_for(3), Duration::from_millis(2000));
    }

    #[test]
    fn test_fixed_delay_with_unit_multiplier() {
        let policy = RetryPolicy {
            max_retries: 1,
            base_delay: Duration::from_millis(1000),
            backoff_multiplier: 1,
            attempt_timeout: Duration::from_secs(8),
        };
        assert_eq!(policy.delay_for(1), Duration::from_millis(1000));
        assert_eq!(policy.delay_for(2), Duration::from_millis(1000));
    }
}
