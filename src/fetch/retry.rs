//! Retry wrapper for fetch operations
//!
//! Decorates a fetch operation with bounded retry and a fixed inter-attempt
//! delay, expressed as higher-order composition: the wrapper takes the
//! operation as a value and drives it until a terminal outcome or until
//! attempts are exhausted.
//!
//! Only retryable outcomes (timeout, transport failure) trigger another
//! attempt. A definitive HTTP response — success or not — is terminal.
//! Each attempt gets a fresh timeout window; the delay is fixed, not
//! exponential.

use crate::fetch::{fetch_url, fetch_url_blocking, Transport};
use crate::metadata::PageMetadata;
use std::future::Future;
use std::time::Duration;

/// Retry policy applied by the wrapper
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first. Must be >= 1.
    pub max_attempts: u32,

    /// Fixed delay between attempts
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(1),
        }
    }
}

/// Runs a blocking fetch operation under a retry policy
///
/// Returns the last attempt's metadata once a terminal outcome occurs or
/// attempts are exhausted. Nothing escapes: the result always reflects the
/// final attempt.
pub fn retry_blocking<F>(mut op: F, policy: &RetryPolicy) -> PageMetadata
where
    F: FnMut() -> PageMetadata,
{
    let mut last = op();

    for attempt in 1..policy.max_attempts {
        if !last.is_retryable() {
            return last;
        }

        tracing::warn!(
            "Attempt {}/{} failed for {}: {}. Retrying in {:?}",
            attempt,
            policy.max_attempts,
            last.url,
            last.error.as_deref().unwrap_or("unknown"),
            policy.delay
        );

        std::thread::sleep(policy.delay);
        last = op();
    }

    if last.is_retryable() {
        tracing::error!(
            "All {} attempts failed for {}",
            policy.max_attempts,
            last.url
        );
    }

    last
}

/// Runs an async fetch operation under a retry policy
///
/// Same contract as [`retry_blocking`]; the delay suspends the task rather
/// than blocking a thread.
pub async fn retry<F, Fut>(mut op: F, policy: &RetryPolicy) -> PageMetadata
where
    F: FnMut() -> Fut,
    Fut: Future<Output = PageMetadata>,
{
    let mut last = op().await;

    for attempt in 1..policy.max_attempts {
        if !last.is_retryable() {
            return last;
        }

        tracing::warn!(
            "Attempt {}/{} failed for {}: {}. Retrying in {:?}",
            attempt,
            policy.max_attempts,
            last.url,
            last.error.as_deref().unwrap_or("unknown"),
            policy.delay
        );

        tokio::time::sleep(policy.delay).await;
        last = op().await;
    }

    if last.is_retryable() {
        tracing::error!(
            "All {} attempts failed for {}",
            policy.max_attempts,
            last.url
        );
    }

    last
}

/// Blocking single-fetch wrapped in the retry policy
pub fn fetch_with_retry_blocking<T: Transport + ?Sized>(
    transport: &T,
    url: &str,
    timeout: Duration,
    policy: &RetryPolicy,
) -> PageMetadata {
    retry_blocking(|| fetch_url_blocking(transport, url, timeout), policy)
}

/// Async single-fetch wrapped in the retry policy
pub async fn fetch_with_retry<T: Transport + ?Sized>(
    transport: &T,
    url: &str,
    timeout: Duration,
    policy: &RetryPolicy,
) -> PageMetadata {
    retry(|| fetch_url(transport, url, timeout), policy).await
}
