//! HTTP transport abstraction
//!
//! Strategies depend on the [`Transport`] capability rather than a concrete
//! client, so tests can substitute an instrumented fake. The production
//! implementation wraps a pair of reqwest clients (async and blocking) and
//! classifies their errors into [`FetchOutcome`] variants.

use crate::fetch::FetchOutcome;
use crate::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Capability for issuing GET requests, blocking and async
///
/// Both operations take a per-attempt timeout and report the outcome as a
/// [`FetchOutcome`]; they never return an error type of their own.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues a blocking GET request
    fn blocking_get(&self, url: &str, timeout: Duration) -> FetchOutcome;

    /// Issues an async GET request
    async fn get(&self, url: &str, timeout: Duration) -> FetchOutcome;
}

/// Production transport backed by reqwest
pub struct HttpTransport {
    client: reqwest::Client,
    blocking: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Builds both underlying HTTP clients
    ///
    /// The per-attempt timeout is supplied per request; only the connect
    /// timeout is fixed at the client level.
    ///
    /// Note: the blocking client spawns a dedicated runtime thread, so this
    /// must not be called from inside an async context.
    pub fn new() -> Result<Self> {
        let user_agent = format!("fetchmark/{}", env!("CARGO_PKG_VERSION"));

        let client = reqwest::Client::builder()
            .user_agent(user_agent.clone())
            .connect_timeout(Duration::from_secs(10))
            .gzip(true)
            .brotli(true)
            .build()?;

        let blocking = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .connect_timeout(Duration::from_secs(10))
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self { client, blocking })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn blocking_get(&self, url: &str, timeout: Duration) -> FetchOutcome {
        match self.blocking.get(url).timeout(timeout).send() {
            Ok(response) => {
                let status = response.status();

                if !status.is_success() {
                    return FetchOutcome::HttpError {
                        status_code: status.as_u16(),
                    };
                }

                match response.text() {
                    Ok(body) => FetchOutcome::Success {
                        status_code: status.as_u16(),
                        body,
                    },
                    Err(e) => classify_error(&e),
                }
            }
            Err(e) => classify_error(&e),
        }
    }

    async fn get(&self, url: &str, timeout: Duration) -> FetchOutcome {
        match self.client.get(url).timeout(timeout).send().await {
            Ok(response) => {
                let status = response.status();

                if !status.is_success() {
                    return FetchOutcome::HttpError {
                        status_code: status.as_u16(),
                    };
                }

                match response.text().await {
                    Ok(body) => FetchOutcome::Success {
                        status_code: status.as_u16(),
                        body,
                    },
                    Err(e) => classify_error(&e),
                }
            }
            Err(e) => classify_error(&e),
        }
    }
}

/// Classifies a reqwest error into a fetch outcome
fn classify_error(e: &reqwest::Error) -> FetchOutcome {
    if e.is_timeout() {
        FetchOutcome::Timeout
    } else if e.is_connect() {
        FetchOutcome::TransportError {
            message: "Connection refused".to_string(),
        }
    } else {
        FetchOutcome::TransportError {
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_transport() {
        let transport = HttpTransport::new();
        assert!(transport.is_ok());
    }
}
