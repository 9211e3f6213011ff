//! Retry of transient completion failures with exponential backoff.

use super::providers::ProviderError;
use backoff::ExponentialBackoff;
use std::future::Future;
use std::time::{Duration, Instant};

/// Configuration for retry behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Delay before the first retry.
    pub initial_interval: Duration,
    /// Give up once this much time has passed. Zero disables retries.
    pub max_elapsed: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            initial_interval: Duration::from_millis(200),
            max_elapsed: Duration::from_secs(10),
        }
    }
}

impl RetryPolicy {
    pub fn with_max_elapsed(max_elapsed: Duration) -> Self {
        Self {
            max_elapsed,
            ..Default::default()
        }
    }

    pub fn no_retry() -> Self {
        Self::with_max_elapsed(Duration::ZERO)
    }

    fn backoff(&self) -> ExponentialBackoff {
        ExponentialBackoff {
            initial_interval: self.initial_interval,
            current_interval: self.initial_interval,
            max_elapsed_time: Some(self.max_elapsed),
            ..Default::default()
        }
    }
}

/// Run `operation`, retrying transient [`ProviderError`]s until the policy's
/// time budget runs out. Permanent errors are returned immediately.
pub async fn retry_transient<T, F, Fut>(
    policy: &RetryPolicy,
    operation_name: &str,
    mut operation: F,
) -> Result<T, ProviderError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ProviderError>>,
{
    if policy.max_elapsed.is_zero() {
        return operation().await;
    }

    let max_elapsed = policy.max_elapsed;
    let started = Instant::now();
    backoff::future::retry_notify(
        policy.backoff(),
        || {
            let attempt = operation();
            async move {
                attempt.await.map_err(|err| match err {
                    // Honour the server's wait, but only while it fits the budget;
                    // backoff does not check elapsed time for explicit waits.
                    ProviderError::RateLimited {
                        retry_after_secs: Some(secs),
                    } => {
                        let wait = Duration::from_secs(secs);
                        if started.elapsed() + wait > max_elapsed {
                            backoff::Error::permanent(err)
                        } else {
                            backoff::Error::retry_after(err, wait)
                        }
                    }
                    err if err.is_transient() => backoff::Error::transient(err),
                    err => backoff::Error::permanent(err),
                })
            }
        },
        |err: ProviderError, wait: Duration| {
            tracing::warn!(
                operation = %operation_name,
                error = %err,
                retry_in_ms = wait.as_millis() as u64,
                "Transient completion failure, retrying"
            );
        },
    )
    .await
}
