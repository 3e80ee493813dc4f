//! Bounded-async strategy
//!
//! Spawns one task per target inside a single tokio runtime and bounds the
//! number of simultaneously in-flight requests with a counting semaphore:
//! each task acquires a permit before issuing its request and releases it
//! on completion. Every task is admitted exactly once; admission order is
//! whatever the semaphore provides.
//!
//! All tasks are joined before the strategy returns. A task fault (join
//! error) is converted into a `PageMetadata` carrying that target's URL, so
//! the run itself never fails because one task did.

use crate::fetch::{fetch_with_retry, RetryPolicy, Transport};
use crate::metadata::PageMetadata;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;

/// Fetches all targets concurrently, admitting at most `max_concurrent`
/// requests at a time
///
/// The harness is synchronous (the sequential and threaded strategies must
/// run outside any async runtime), so it supplies its own runtime and
/// drives this future with `block_on`.
pub async fn run_bounded_async<T: Transport + ?Sized + 'static>(
    transport: Arc<T>,
    targets: &[String],
    max_concurrent: usize,
    timeout: Duration,
    policy: &RetryPolicy,
) -> Vec<PageMetadata> {
    tracing::info!(
        "Starting async fetch of {} targets with max {} concurrent",
        targets.len(),
        max_concurrent
    );

    let semaphore = Arc::new(Semaphore::new(max_concurrent.max(1)));
    let mut handles = Vec::with_capacity(targets.len());

    for (index, url) in targets.iter().enumerate() {
        let transport = Arc::clone(&transport);
        let semaphore = Arc::clone(&semaphore);
        let url = url.clone();
        let policy = policy.clone();

        handles.push(tokio::spawn(async move {
            let _permit = match semaphore.acquire_owned().await {
                Ok(permit) => permit,
                // Never closed by this strategy; treated as a task fault.
                Err(_) => return (index, PageMetadata::failure(url, "admission gate closed")),
            };

            let meta = fetch_with_retry(transport.as_ref(), &url, timeout, &policy).await;
            (index, meta)
        }));
    }

    let mut slots: Vec<Option<PageMetadata>> = vec![None; targets.len()];

    for (spawn_index, handle) in handles.into_iter().enumerate() {
        match handle.await {
            Ok((index, meta)) => slots[index] = Some(meta),
            Err(join_error) => {
                tracing::error!(
                    "Task for {} faulted: {}",
                    targets[spawn_index],
                    join_error
                );
                slots[spawn_index] = Some(PageMetadata::failure(
                    targets[spawn_index].clone(),
                    join_error.to_string(),
                ));
            }
        }
    }

    slots
        .into_iter()
        .zip(targets)
        .map(|(slot, url)| {
            slot.unwrap_or_else(|| PageMetadata::failure(url.clone(), "task produced no result"))
        })
        .collect()
}
