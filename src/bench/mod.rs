//! Benchmark harness
//!
//! Drives the three strategies over the identical target list, timing each
//! full run with a wall clock, and assembles the comparative report.
//! Retries are strategy-internal; the harness itself never retries.

use crate::fetch::{RetryPolicy, Transport};
use crate::metadata::PageMetadata;
use crate::strategy::{run_bounded_async, run_sequential, run_threaded, StrategyKind};
use crate::{ConfigError, FetchmarkError, Result};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Knobs for one benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkOptions {
    /// Worker-pool size for the threaded strategy
    pub workers: usize,

    /// Concurrency cap for the bounded-async strategy
    pub max_concurrent: usize,

    /// Per-attempt timeout applied by every strategy
    pub timeout: Duration,

    /// Retry policy applied by every strategy
    pub retry: RetryPolicy,
}

impl Default for BenchmarkOptions {
    fn default() -> Self {
        Self {
            workers: 10,
            max_concurrent: 10,
            timeout: Duration::from_secs(10),
            retry: RetryPolicy::default(),
        }
    }
}

impl BenchmarkOptions {
    /// Rejects configurations that would make a run meaningless
    ///
    /// Checked before any fetch begins; this is the only way a benchmark
    /// run itself can fail.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.workers < 1 {
            return Err(ConfigError::Validation(
                "workers must be >= 1".to_string(),
            ));
        }

        if self.max_concurrent < 1 {
            return Err(ConfigError::Validation(
                "max-concurrent must be >= 1".to_string(),
            ));
        }

        if self.retry.max_attempts < 1 {
            return Err(ConfigError::Validation(
                "max-attempts must be >= 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// One strategy's full run: its results and how long the run took
#[derive(Debug, Clone)]
pub struct StrategyRun {
    /// Which strategy produced this run
    pub kind: StrategyKind,

    /// One record per input target, index-for-index
    pub results: Vec<PageMetadata>,

    /// Wall-clock time for the whole run
    pub elapsed: Duration,
}

impl StrategyRun {
    /// Number of results with a 2xx status and no error
    pub fn successful(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    /// Number of results that did not succeed
    pub fn failed(&self) -> usize {
        self.results.len() - self.successful()
    }
}

/// Comparative report over the three strategy runs
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    pub sequential: StrategyRun,
    pub threaded: StrategyRun,
    pub bounded: StrategyRun,
}

impl BenchmarkReport {
    /// The three runs in fixed preference order
    pub fn runs(&self) -> [&StrategyRun; 3] {
        [&self.sequential, &self.threaded, &self.bounded]
    }

    /// The strategy with the smallest elapsed time
    ///
    /// Ties resolve by preference order sequential < threaded < async: the
    /// first strategy reaching the minimum wins.
    pub fn fastest(&self) -> StrategyKind {
        let mut best = &self.sequential;
        for run in [&self.threaded, &self.bounded] {
            if run.elapsed < best.elapsed {
                best = run;
            }
        }
        best.kind
    }
}

/// Runs all three strategies over `targets` and reports timings
///
/// Every strategy sees the same ordered list; each run is timed around the
/// full strategy execution, not per fetch.
pub fn run_benchmark<T: Transport + 'static>(
    transport: Arc<T>,
    targets: &[String],
    options: &BenchmarkOptions,
) -> Result<BenchmarkReport> {
    options.validate()?;

    tracing::info!(
        "Benchmarking {} targets (workers={}, max-concurrent={}, attempts={})",
        targets.len(),
        options.workers,
        options.max_concurrent,
        options.retry.max_attempts
    );

    let started = Instant::now();
    let results = run_sequential(transport.as_ref(), targets, options.timeout, &options.retry);
    let sequential = StrategyRun {
        kind: StrategyKind::Sequential,
        results,
        elapsed: started.elapsed(),
    };
    tracing::info!("Sequential run completed in {:.2?}", sequential.elapsed);

    let started = Instant::now();
    let results = run_threaded(
        transport.as_ref(),
        targets,
        options.workers,
        options.timeout,
        &options.retry,
    );
    let threaded = StrategyRun {
        kind: StrategyKind::Threaded,
        results,
        elapsed: started.elapsed(),
    };
    tracing::info!("Threaded run completed in {:.2?}", threaded.elapsed);

    // Built outside the timed region so runtime startup cost does not
    // count against the async strategy.
    let runtime = tokio::runtime::Runtime::new().map_err(FetchmarkError::Runtime)?;

    let started = Instant::now();
    let results = runtime.block_on(run_bounded_async(
        Arc::clone(&transport),
        targets,
        options.max_concurrent,
        options.timeout,
        &options.retry,
    ));
    let bounded = StrategyRun {
        kind: StrategyKind::Async,
        results,
        elapsed: started.elapsed(),
    };
    tracing::info!("Async run completed in {:.2?}", bounded.elapsed);

    Ok(BenchmarkReport {
        sequential,
        threaded,
        bounded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(kind: StrategyKind, secs: f64) -> StrategyRun {
        StrategyRun {
            kind,
            results: Vec::new(),
            elapsed: Duration::from_secs_f64(secs),
        }
    }

    fn report(seq: f64, threaded: f64, bounded: f64) -> BenchmarkReport {
        BenchmarkReport {
            sequential: run(StrategyKind::Sequential, seq),
            threaded: run(StrategyKind::Threaded, threaded),
            bounded: run(StrategyKind::Async, bounded),
        }
    }

    #[test]
    fn test_fastest_picks_minimum() {
        assert_eq!(report(2.0, 1.0, 0.5).fastest(), StrategyKind::Async);
    }

    #[test]
    fn test_fastest_tie_prefers_threaded_over_async() {
        assert_eq!(report(2.0, 1.0, 1.0).fastest(), StrategyKind::Threaded);
    }

    #[test]
    fn test_fastest_tie_prefers_sequential() {
        assert_eq!(report(1.0, 1.0, 1.0).fastest(), StrategyKind::Sequential);
    }

    #[test]
    fn test_validate_rejects_zero_attempts() {
        let options = BenchmarkOptions {
            retry: RetryPolicy {
                max_attempts: 0,
                delay: Duration::ZERO,
            },
            ..BenchmarkOptions::default()
        };
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_workers() {
        let options = BenchmarkOptions {
            workers: 0,
            ..BenchmarkOptions::default()
        };
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(BenchmarkOptions::default().validate().is_ok());
    }

    #[test]
    fn test_success_counts() {
        let mut success = PageMetadata::new("https://a.example/");
        success.status_code = Some(200);
        let failure = PageMetadata::failure("https://b.example/", "Timeout");

        let run = StrategyRun {
            kind: StrategyKind::Sequential,
            results: vec![success, failure],
            elapsed: Duration::ZERO,
        };

        assert_eq!(run.successful(), 1);
        assert_eq!(run.failed(), 1);
    }
}
