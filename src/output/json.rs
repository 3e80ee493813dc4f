//! JSON persistence for benchmark results
//!
//! Each strategy run is written as `<strategy>_results.json` — an array of
//! page-metadata records — alongside a small `run_manifest.json` describing
//! the run as a whole.

use crate::bench::BenchmarkReport;
use crate::bench::StrategyRun;
use crate::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Run-level record written next to the per-strategy result files
#[derive(Debug, Serialize)]
pub struct RunManifest {
    /// When the report was written
    pub generated_at: DateTime<Utc>,

    /// Label of the fastest strategy
    pub fastest: String,

    /// Elapsed wall-clock seconds per strategy
    pub sequential_secs: f64,
    pub threaded_secs: f64,
    pub async_secs: f64,
}

/// Writes one strategy's results to `<dir>/<strategy>_results.json`
pub fn write_strategy_results(run: &StrategyRun, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let path = dir.join(format!("{}_results.json", run.kind.label()));
    let json = serde_json::to_string_pretty(&run.results)?;
    fs::write(&path, json)?;

    tracing::info!("Results saved to {}", path.display());
    Ok(path)
}

/// Writes all three result files plus the run manifest
pub fn write_report(report: &BenchmarkReport, dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(4);

    for run in report.runs() {
        written.push(write_strategy_results(run, dir)?);
    }

    let manifest = RunManifest {
        generated_at: Utc::now(),
        fastest: report.fastest().to_string(),
        sequential_secs: report.sequential.elapsed.as_secs_f64(),
        threaded_secs: report.threaded.elapsed.as_secs_f64(),
        async_secs: report.bounded.elapsed.as_secs_f64(),
    };

    let path = dir.join("run_manifest.json");
    fs::write(&path, serde_json::to_string_pretty(&manifest)?)?;
    written.push(path);

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::PageMetadata;
    use crate::strategy::StrategyKind;
    use std::time::Duration;

    fn sample_run() -> StrategyRun {
        let mut ok = PageMetadata::new("https://a.example/");
        ok.status_code = Some(200);
        ok.title = Some("A".to_string());
        ok.fetch_time = Duration::from_millis(123);

        StrategyRun {
            kind: StrategyKind::Sequential,
            results: vec![ok, PageMetadata::failure("https://b.example/", "Timeout")],
            elapsed: Duration::from_secs(1),
        }
    }

    #[test]
    fn test_write_strategy_results() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_strategy_results(&sample_run(), dir.path()).unwrap();

        assert!(path.ends_with("sequential_results.json"));
        let contents = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();

        assert_eq!(parsed.as_array().unwrap().len(), 2);
        assert_eq!(parsed[0]["url"], "https://a.example/");
        assert_eq!(parsed[0]["status_code"], 200);
        assert_eq!(parsed[0]["fetch_time"], 0.123);
        assert_eq!(parsed[1]["error"], "Timeout");
    }

    #[test]
    fn test_write_report_includes_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let run = sample_run();
        let report = BenchmarkReport {
            sequential: run.clone(),
            threaded: StrategyRun {
                kind: StrategyKind::Threaded,
                ..run.clone()
            },
            bounded: StrategyRun {
                kind: StrategyKind::Async,
                ..run
            },
        };

        let written = write_report(&report, dir.path()).unwrap();
        assert_eq!(written.len(), 4);

        let manifest: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(dir.path().join("run_manifest.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(manifest["fastest"], "sequential");
        assert_eq!(manifest["sequential_secs"], 1.0);
    }
}
