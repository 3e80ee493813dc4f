//! Fetchmark main entry point
//!
//! Command-line interface for the multi-strategy URL-fetching benchmark.

use anyhow::Context;
use clap::Parser;
use fetchmark::config::load_config;
use fetchmark::output::{print_comparison, print_summary, write_report};
use fetchmark::{run_benchmark, Config, HttpTransport};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Fetchmark: a multi-strategy URL-fetching benchmark
///
/// Fetches the same list of URLs sequentially, with a worker-thread pool,
/// and with concurrency-bounded async tasks, then compares the three runs.
#[derive(Parser, Debug)]
#[command(name = "fetchmark")]
#[command(version)]
#[command(about = "Benchmark sequential, threaded, and async URL fetching", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Worker-pool size for the threaded strategy
    #[arg(long)]
    workers: Option<usize>,

    /// Concurrency cap for the async strategy
    #[arg(long)]
    concurrency: Option<usize>,

    /// Per-attempt timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Benchmark only the first N targets
    #[arg(long)]
    limit: Option<usize>,

    /// Directory for the JSON result files
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Validate config and show what would be fetched without fetching
    #[arg(long)]
    dry_run: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    // Load configuration, falling back to defaults when no file is given
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("failed to load config {}", path.display()))?
        }
        None => Config::default(),
    };

    apply_overrides(&mut config, &cli);

    let mut targets = config.effective_targets();
    if let Some(limit) = cli.limit {
        targets.truncate(limit);
    }

    let options = config.benchmark_options();
    options.validate().context("invalid benchmark settings")?;

    if cli.dry_run {
        print_plan(&config, &targets);
        return Ok(());
    }

    println!("\nBenchmarking {} URLs using 3 strategies:\n", targets.len());
    println!("1. Sequential (one at a time)");
    println!("2. Threaded ({} workers)", options.workers);
    println!("3. Async (max {} concurrent)", options.max_concurrent);

    let transport = Arc::new(HttpTransport::new().context("failed to build HTTP client")?);

    let report = run_benchmark(transport, &targets, &options)?;

    for run in report.runs() {
        print_summary(run);
    }
    print_comparison(&report);

    let output_dir = PathBuf::from(&config.output.results_dir);
    let written = write_report(&report, &output_dir)
        .with_context(|| format!("failed to write results to {}", output_dir.display()))?;
    println!("\nResults saved to {}", output_dir.display());
    tracing::debug!("Wrote {} result files", written.len());

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("fetchmark=info,warn"),
            1 => EnvFilter::new("fetchmark=debug,info"),
            2 => EnvFilter::new("fetchmark=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Layers CLI flags over the loaded configuration
fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(workers) = cli.workers {
        config.benchmark.workers = workers;
    }
    if let Some(concurrency) = cli.concurrency {
        config.benchmark.max_concurrent = concurrency;
    }
    if let Some(timeout) = cli.timeout_secs {
        config.benchmark.timeout_secs = timeout;
    }
    if let Some(dir) = &cli.output_dir {
        config.output.results_dir = dir.display().to_string();
    }
}

/// Handles --dry-run: shows the settings and targets without fetching
fn print_plan(config: &Config, targets: &[String]) {
    println!("=== Fetchmark Dry Run ===\n");

    println!("Benchmark settings:");
    println!("  Workers: {}", config.benchmark.workers);
    println!("  Max concurrent: {}", config.benchmark.max_concurrent);
    println!("  Timeout: {}s", config.benchmark.timeout_secs);

    println!("\nRetry policy:");
    println!("  Max attempts: {}", config.retry.max_attempts);
    println!("  Delay: {}ms", config.retry.delay_ms);

    println!("\nOutput:");
    println!("  Results dir: {}", config.output.results_dir);

    println!("\nTargets ({}):", targets.len());
    for target in targets {
        println!("  - {}", target);
    }

    println!("\nConfiguration is valid");
}
