//! Worker-pool strategy
//!
//! Runs fetches across a fixed number of worker threads. Workers pull the
//! next input index from a shared cursor, so at most `workers` fetches are
//! in flight at once. Completed results carry their input index and are
//! placed into a pre-sized slot array, which keeps `result[i]` associated
//! with `target[i]` regardless of completion order.

use crate::fetch::{fetch_with_retry_blocking, RetryPolicy, Transport};
use crate::metadata::PageMetadata;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Fetches all targets across a pool of `workers` threads
///
/// Each worker's failures are captured independently as `PageMetadata`, so
/// the pool always produces a full, same-length result set.
pub fn run_threaded<T: Transport + ?Sized>(
    transport: &T,
    targets: &[String],
    workers: usize,
    timeout: Duration,
    policy: &RetryPolicy,
) -> Vec<PageMetadata> {
    tracing::info!(
        "Starting threaded fetch of {} targets with {} workers",
        targets.len(),
        workers
    );

    if targets.is_empty() {
        return Vec::new();
    }

    let cursor = AtomicUsize::new(0);
    let (tx, rx) = mpsc::channel::<(usize, PageMetadata)>();

    thread::scope(|scope| {
        for _ in 0..workers.max(1).min(targets.len()) {
            let tx = tx.clone();
            let cursor = &cursor;

            scope.spawn(move || loop {
                let index = cursor.fetch_add(1, Ordering::SeqCst);
                if index >= targets.len() {
                    break;
                }

                let meta =
                    fetch_with_retry_blocking(transport, &targets[index], timeout, policy);

                // Receiver outlives the scope; a send failure would mean it
                // was dropped early, which only happens on panic.
                let _ = tx.send((index, meta));
            });
        }

        drop(tx);
    });

    // All workers have joined; drain the channel into index-stable slots.
    let mut slots: Vec<Option<PageMetadata>> = vec![None; targets.len()];
    for (index, meta) in rx {
        slots[index] = Some(meta);
    }

    slots
        .into_iter()
        .zip(targets)
        .map(|(slot, url)| {
            slot.unwrap_or_else(|| PageMetadata::failure(url.clone(), "worker produced no result"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchOutcome;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicU32;

    /// Transport that sleeps per request and tracks concurrent callers
    struct SlowTransport {
        delay: Duration,
        in_flight: AtomicU32,
        max_in_flight: AtomicU32,
    }

    impl SlowTransport {
        fn new(delay: Duration) -> Self {
            Self {
                delay,
                in_flight: AtomicU32::new(0),
                max_in_flight: AtomicU32::new(0),
            }
        }
    }

    #[async_trait]
    impl Transport for SlowTransport {
        fn blocking_get(&self, url: &str, _timeout: Duration) -> FetchOutcome {
            let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(current, Ordering::SeqCst);

            std::thread::sleep(self.delay);
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            if url.contains("missing") {
                FetchOutcome::HttpError { status_code: 404 }
            } else {
                FetchOutcome::Success {
                    status_code: 200,
                    body: String::new(),
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

    fn targets(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("https://example.com/{}", i)).collect()
    }

    #[test]
    fn test_results_are_index_stable() {
        let transport = SlowTransport::new(Duration::from_millis(5));
        let targets = targets(8);

        let results = run_threaded(&transport, &targets, 4, Duration::from_secs(1), &policy());

        assert_eq!(results.len(), targets.len());
        for (result, target) in results.iter().zip(&targets) {
            assert_eq!(&result.url, target);
        }
    }

    #[test]
    fn test_in_flight_never_exceeds_worker_count() {
        let transport = SlowTransport::new(Duration::from_millis(20));
        let targets = targets(12);

        run_threaded(&transport, &targets, 3, Duration::from_secs(1), &policy());

        assert!(transport.max_in_flight.load(Ordering::SeqCst) <= 3);
    }

    #[test]
    fn test_failure_does_not_abort_siblings() {
        let transport = SlowTransport::new(Duration::ZERO);
        let targets = vec![
            "https://example.com/ok".to_string(),
            "https://example.com/missing".to_string(),
            "https://example.com/also-ok".to_string(),
        ];

        let results = run_threaded(&transport, &targets, 2, Duration::from_secs(1), &policy());

        assert_eq!(results.len(), 3);
        assert!(results[0].is_success());
        assert_eq!(results[1].error, Some("HTTP 404".to_string()));
        assert!(results[2].is_success());
    }

    #[test]
    fn test_more_workers_than_targets() {
        let transport = SlowTransport::new(Duration::ZERO);
        let targets = targets(2);

        let results = run_threaded(&transport, &targets, 10, Duration::from_secs(1), &policy());
        assert_eq!(results.len(), 2);
    }
}
