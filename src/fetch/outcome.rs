//! Classification of a single fetch attempt

/// Result of one network attempt against a target
///
/// Exactly one variant applies per attempt. A 2xx response is `Success`;
/// any other completed response is `HttpError`. Failures that never
/// produced a response are split into `Timeout` and `TransportError`.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// The server responded with a 2xx status
    Success {
        /// HTTP status code
        status_code: u16,
        /// Response body
        body: String,
    },

    /// The server responded with a non-2xx status
    HttpError {
        /// HTTP status code
        status_code: u16,
    },

    /// Connection-level failure (refused, DNS, protocol error, ...)
    TransportError {
        /// Error description
        message: String,
    },

    /// The attempt exceeded its timeout window
    Timeout,
}

impl FetchOutcome {
    /// Whether this outcome is plausibly transient and worth retrying
    ///
    /// Definitive server responses (including non-2xx) are terminal;
    /// only timeouts and transport failures are retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            FetchOutcome::TransportError { .. } | FetchOutcome::Timeout
        )
    }
}
