//! Human-readable summaries and JSON result persistence

mod json;
mod summary;

pub use json::{write_report, write_strategy_results, RunManifest};
pub use summary::{print_comparison, print_summary};
