//! Single-fetch operation
//!
//! Performs exactly one network attempt and always returns a
//! [`PageMetadata`] describing what happened; no failure escapes to the
//! caller. On a 2xx response the HTML extractor fills in title and
//! description.

use crate::fetch::{FetchOutcome, Transport};
use crate::metadata::{extract_metadata, PageMetadata};
use std::time::{Duration, Instant};

/// Fetches one URL with the blocking transport primitive
pub fn fetch_url_blocking<T: Transport + ?Sized>(
    transport: &T,
    url: &str,
    timeout: Duration,
) -> PageMetadata {
    let started = Instant::now();
    let outcome = transport.blocking_get(url, timeout);
    finish_attempt(url, outcome, started.elapsed())
}

/// Fetches one URL with the async transport primitive
pub async fn fetch_url<T: Transport + ?Sized>(
    transport: &T,
    url: &str,
    timeout: Duration,
) -> PageMetadata {
    let started = Instant::now();
    let outcome = transport.get(url, timeout).await;
    finish_attempt(url, outcome, started.elapsed())
}

/// Converts an attempt's outcome into its metadata record
fn finish_attempt(url: &str, outcome: FetchOutcome, elapsed: Duration) -> PageMetadata {
    let mut meta = PageMetadata::new(url);
    meta.fetch_time = elapsed;

    match outcome {
        FetchOutcome::Success { status_code, body } => {
            meta.status_code = Some(status_code);
            let extracted = extract_metadata(&body, url);
            meta.title = extracted.title;
            meta.description = extracted.description;
        }
        FetchOutcome::HttpError { status_code } => {
            meta.status_code = Some(status_code);
            meta.error = Some(format!("HTTP {}", status_code));
            tracing::warn!("HTTP {} fetching {}", status_code, url);
        }
        FetchOutcome::Timeout => {
            meta.error = Some("Timeout".to_string());
            tracing::warn!("Timeout fetching {}", url);
        }
        FetchOutcome::TransportError { message } => {
            tracing::warn!("Error fetching {}: {}", url, message);
            meta.error = Some(message);
        }
    }

    meta
}
