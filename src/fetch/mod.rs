//! Fetch operations and their composition
//!
//! This module contains the building blocks every strategy shares:
//! - The [`Transport`] capability (blocking and async GET primitives)
//! - Outcome classification ([`FetchOutcome`])
//! - The single-fetch operation, which always yields a [`crate::PageMetadata`]
//! - The retry wrapper, which decorates a fetch operation with
//!   bounded retry-on-failure

mod outcome;
mod retry;
mod single;
mod transport;

pub use outcome::FetchOutcome;
pub use retry::{
    fetch_with_retry, fetch_with_retry_blocking, retry, retry_blocking, RetryPolicy,
};
pub use single::{fetch_url, fetch_url_blocking};
pub use transport::{HttpTransport, Transport};
