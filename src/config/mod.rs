//! Configuration loading and validation
//!
//! Settings come from an optional TOML file, with CLI flags layered on top
//! by the binary. Validation runs before any fetch begins.

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{BenchmarkConfig, Config, OutputConfig, RetryConfig};
pub use validation::validate;

/// Built-in target list used when the config supplies none
pub const SAMPLE_TARGETS: &[&str] = &[
    // News sites
    "https://www.bbc.com/news",
    "https://www.reuters.com",
    "https://www.theguardian.com",
    "https://www.nytimes.com",
    "https://www.washingtonpost.com",
    // Tech sites
    "https://techcrunch.com",
    "https://www.theverge.com",
    "https://arstechnica.com",
    "https://www.wired.com",
    "https://www.cnet.com",
    // Reference
    "https://www.wikipedia.org",
    "https://stackoverflow.com",
    "https://github.com",
    "https://www.python.org",
    "https://www.rust-lang.org",
    // General
    "https://www.reddit.com",
    "https://medium.com",
    "https://dev.to",
    "https://www.mozilla.org",
    "https://www.w3.org",
    // Science and culture
    "https://www.nature.com",
    "https://www.sciencedaily.com",
    "https://www.nationalgeographic.com",
    "https://www.smithsonianmag.com",
    "https://www.economist.com",
];
