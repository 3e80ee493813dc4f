//! Fetchmark: a multi-strategy URL-fetching benchmark engine
//!
//! This crate fetches the same ordered list of URLs three different ways —
//! strictly sequential, across a fixed worker pool, and concurrency-bounded
//! async — extracts uniform page metadata from each response, and produces
//! comparable timing and outcome statistics for the three runs.

pub mod bench;
pub mod config;
pub mod fetch;
pub mod metadata;
pub mod output;
pub mod strategy;

use thiserror::Error;

/// Main error type for fetchmark operations
#[derive(Debug, Error)]
pub enum FetchmarkError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Failed to start async runtime: {0}")]
    Runtime(std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid target URL: {0}")]
    InvalidTarget(String),
}

/// Result type alias for fetchmark operations
pub type Result<T> = std::result::Result<T, FetchmarkError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use bench::{run_benchmark, BenchmarkOptions, BenchmarkReport, StrategyRun};
pub use config::Config;
pub use fetch::{FetchOutcome, HttpTransport, RetryPolicy, Transport};
pub use metadata::{extract_metadata, PageMetadata};
pub use strategy::StrategyKind;
