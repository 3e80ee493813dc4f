use crate::bench::BenchmarkOptions;
use crate::fetch::RetryPolicy;
use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure for fetchmark
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub benchmark: BenchmarkConfig,

    #[serde(default)]
    pub retry: RetryConfig,

    #[serde(default)]
    pub output: OutputConfig,

    /// Target URLs to benchmark; the built-in sample list is used when empty
    #[serde(default)]
    pub targets: Vec<String>,
}

/// Benchmark execution configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BenchmarkConfig {
    /// Worker-pool size for the threaded strategy
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Concurrency cap for the bounded-async strategy
    #[serde(rename = "max-concurrent", default = "default_max_concurrent")]
    pub max_concurrent: usize,

    /// Per-attempt timeout in seconds
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Retry behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RetryConfig {
    /// Total attempts per target, including the first
    #[serde(rename = "max-attempts", default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Fixed delay between attempts, in milliseconds
    #[serde(rename = "delay-ms", default = "default_delay_ms")]
    pub delay_ms: u64,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory the JSON result files are written to
    #[serde(rename = "results-dir", default = "default_results_dir")]
    pub results_dir: String,
}

fn default_workers() -> usize {
    10
}

fn default_max_concurrent() -> usize {
    10
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_max_attempts() -> u32 {
    3
}

fn default_delay_ms() -> u64 {
    1000
}

fn default_results_dir() -> String {
    "data".to_string()
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            max_concurrent: default_max_concurrent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            delay_ms: default_delay_ms(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results_dir: default_results_dir(),
        }
    }
}

impl RetryConfig {
    /// Converts the config values into the policy the fetch layer uses
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts,
            delay: Duration::from_millis(self.delay_ms),
        }
    }
}

impl Config {
    /// Effective target list: configured targets, or the built-in samples
    pub fn effective_targets(&self) -> Vec<String> {
        if self.targets.is_empty() {
            crate::config::SAMPLE_TARGETS
                .iter()
                .map(|s| s.to_string())
                .collect()
        } else {
            self.targets.clone()
        }
    }

    /// Assembles the harness options from the config sections
    pub fn benchmark_options(&self) -> BenchmarkOptions {
        BenchmarkOptions {
            workers: self.benchmark.workers,
            max_concurrent: self.benchmark.max_concurrent,
            timeout: Duration::from_secs(self.benchmark.timeout_secs),
            retry: self.retry.policy(),
        }
    }
}
