//! Sequential strategy
//!
//! Runs the retry-wrapped fetch for each target one at a time, each
//! completing fully before the next begins. Input order is preserved in
//! both execution and results.

use crate::fetch::{fetch_with_retry_blocking, RetryPolicy, Transport};
use crate::metadata::PageMetadata;
use std::time::Duration;

/// Fetches all targets one after another
pub fn run_sequential<T: Transport + ?Sized>(
    transport: &T,
    targets: &[String],
    timeout: Duration,
    policy: &RetryPolicy,
) -> Vec<PageMetadata> {
    tracing::info!("Starting sequential fetch of {} targets", targets.len());

    targets
        .iter()
        .map(|url| fetch_with_retry_blocking(transport, url, timeout, policy))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchOutcome;
    use async_trait::async_trait;

    /// Transport that succeeds for every URL except ones containing "fail"
    struct PathTransport;

    #[async_trait]
    impl Transport for PathTransport {
        fn blocking_get(&self, url: &str, _timeout: Duration) -> FetchOutcome {
            if url.contains("fail") {
                FetchOutcome::HttpError { status_code: 500 }
            } else {
                FetchOutcome::Success {
                    status_code: 200,
                    body: format!("<html><head><title>{}</title></head></html>", url),
                }
            }
        }

        async fn get(&self, url: &str, timeout: Duration) -> FetchOutcome {
            self.blocking_get(url, timeout)
        }
    }

    fn policy() -> RetryPolicy {
        RetryPolicy {
            max_attempts: 1,
            delay: Duration::ZERO,
        }
    }

    #[test]
    fn test_results_match_input_order() {
        let targets = vec![
            "https://a.example/".to_string(),
            "https://fail.example/".to_string(),
            "https://c.example/".to_string(),
        ];

        let results = run_sequential(&PathTransport, &targets, Duration::from_secs(1), &policy());

        assert_eq!(results.len(), 3);
        for (result, target) in results.iter().zip(&targets) {
            assert_eq!(&result.url, target);
        }
        assert!(results[0].is_success());
        assert_eq!(results[1].error, Some("HTTP 500".to_string()));
        assert!(results[2].is_success());
    }

    #[test]
    fn test_empty_input_yields_empty_results() {
        let results = run_sequential(&PathTransport, &[], Duration::from_secs(1), &policy());
        assert!(results.is_empty());
    }
}
