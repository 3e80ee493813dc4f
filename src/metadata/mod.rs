//! Page metadata types and extraction
//!
//! The benchmark records one [`PageMetadata`] per fetch attempt. Title and
//! description come from the HTML extractor; status, timing, and error
//! information are filled in by the fetch layer.

mod extract;

pub use extract::extract_metadata;

use serde::{Serialize, Serializer};
use std::time::Duration;

/// Metadata captured for a single fetched page
///
/// One instance is produced per completed fetch attempt and is never mutated
/// afterwards. A failed attempt still yields a full record, with `error`
/// describing what went wrong.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageMetadata {
    /// The URL this record was derived from
    pub url: String,

    /// Page title from the `<title>` element, if any
    pub title: Option<String>,

    /// Page description from `<meta name="description">` or
    /// `<meta property="og:description">`, if any
    pub description: Option<String>,

    /// HTTP status code of the response; unset for timeouts and
    /// transport-level failures
    pub status_code: Option<u16>,

    /// Time actually spent on this attempt
    #[serde(serialize_with = "serialize_secs")]
    pub fetch_time: Duration,

    /// Error description; `None` on success
    pub error: Option<String>,
}

impl PageMetadata {
    /// Creates an empty record for a URL with no fields populated
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
            description: None,
            status_code: None,
            fetch_time: Duration::ZERO,
            error: None,
        }
    }

    /// Creates a record capturing a transport-level failure
    pub fn failure(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::new(url)
        }
    }

    /// Whether this outcome is eligible for another attempt under a retry
    /// policy
    ///
    /// Timeouts and transport failures leave `status_code` unset; a
    /// definitive HTTP response (success or not) records its status and is
    /// terminal.
    pub fn is_retryable(&self) -> bool {
        self.error.is_some() && self.status_code.is_none()
    }

    /// Whether the fetch completed with a 2xx response and no error
    pub fn is_success(&self) -> bool {
        self.error.is_none() && self.status_code.map_or(false, |s| (200..300).contains(&s))
    }
}

/// Serializes a duration as fractional seconds rounded to millisecond
/// precision, matching the JSON result format
fn serialize_secs<S: Serializer>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64((d.as_secs_f64() * 1000.0).round() / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_is_retryable() {
        let meta = PageMetadata {
            error: Some("Timeout".to_string()),
            ..PageMetadata::new("https://example.com")
        };
        assert!(meta.is_retryable());
    }

    #[test]
    fn test_http_failure_is_terminal() {
        let meta = PageMetadata {
            status_code: Some(404),
            error: Some("HTTP 404".to_string()),
            ..PageMetadata::new("https://example.com")
        };
        assert!(!meta.is_retryable());
        assert!(!meta.is_success());
    }

    #[test]
    fn test_success_is_terminal() {
        let meta = PageMetadata {
            status_code: Some(200),
            ..PageMetadata::new("https://example.com")
        };
        assert!(!meta.is_retryable());
        assert!(meta.is_success());
    }

    #[test]
    fn test_fetch_time_serializes_as_rounded_seconds() {
        let meta = PageMetadata {
            fetch_time: Duration::from_micros(1_234_567),
            ..PageMetadata::new("https://example.com")
        };
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["fetch_time"], serde_json::json!(1.235));
    }
}
