//! Execution strategies
//!
//! Three ways of running the same retry-wrapped fetch over an ordered
//! target list. All strategies share one contract: the result list has the
//! same length as the input and `result[i]` corresponds to `target[i]`,
//! regardless of completion order. A failure in one fetch never aborts the
//! others or the run as a whole.

mod bounded;
mod sequential;
mod threaded;

pub use bounded::run_bounded_async;
pub use sequential::run_sequential;
pub use threaded::run_threaded;

use std::fmt;

/// Which execution strategy produced a result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    /// One fetch at a time, fully blocking; the timing baseline
    Sequential,

    /// Fixed pool of parallel worker threads
    Threaded,

    /// Single concurrency domain with a cap on in-flight requests
    Async,
}

impl StrategyKind {
    /// Short label used in output files and summaries
    pub fn label(&self) -> &'static str {
        match self {
            StrategyKind::Sequential => "sequential",
            StrategyKind::Threaded => "threaded",
            StrategyKind::Async => "async",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
