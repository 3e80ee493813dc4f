//! Console summaries for benchmark runs

use crate::bench::{BenchmarkReport, StrategyRun};

const RULE: &str = "============================================================";

/// Prints a per-strategy result summary
pub fn print_summary(run: &StrategyRun) {
    println!("\n{}", RULE);
    println!("{} RESULTS", run.kind.label().to_uppercase());
    println!("{}", RULE);
    println!("Total URLs: {}", run.results.len());
    println!("Successful: {}", run.successful());
    println!("Failed: {}", run.failed());
    println!("Total Time: {:.2}s", run.elapsed.as_secs_f64());
    if !run.results.is_empty() {
        println!(
            "Average Time per URL: {:.2}s",
            run.elapsed.as_secs_f64() / run.results.len() as f64
        );
    }
    println!("{}", RULE);
}

/// Prints the cross-strategy performance comparison
pub fn print_comparison(report: &BenchmarkReport) {
    let seq = report.sequential.elapsed.as_secs_f64();

    println!("\n{}", RULE);
    println!("PERFORMANCE COMPARISON");
    println!("{}", RULE);
    println!("Sequential: {:.2}s (baseline)", seq);
    println!(
        "Threaded:   {:.2}s ({})",
        report.threaded.elapsed.as_secs_f64(),
        speedup(seq, report.threaded.elapsed.as_secs_f64())
    );
    println!(
        "Async:      {:.2}s ({})",
        report.bounded.elapsed.as_secs_f64(),
        speedup(seq, report.bounded.elapsed.as_secs_f64())
    );
    println!("{}", RULE);
    println!("\nWinner: {} approach", report.fastest());
}

fn speedup(baseline: f64, elapsed: f64) -> String {
    if elapsed > 0.0 {
        format!("{:.2}x faster", baseline / elapsed)
    } else {
        "n/a".to_string()
    }
}
