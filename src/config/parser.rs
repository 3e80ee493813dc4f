use crate::config::{validate, Config};
use crate::ConfigResult;
use std::fs;
use std::path::Path;

/// Loads and validates a TOML configuration file
///
/// # Arguments
///
/// * `path` - Path to the TOML config file
///
/// # Returns
///
/// * `Ok(Config)` - Parsed and validated configuration
/// * `Err(ConfigError)` - Read, parse, or validation failure
pub fn load_config(path: &Path) -> ConfigResult<Config> {
    let contents = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            r#"
            targets = ["https://example.com", "https://example.org"]

            [benchmark]
            workers = 4
            max-concurrent = 8
            timeout-secs = 5

            [retry]
            max-attempts = 2
            delay-ms = 100

            [output]
            results-dir = "out"
            "#,
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.benchmark.workers, 4);
        assert_eq!(config.benchmark.max_concurrent, 8);
        assert_eq!(config.retry.max_attempts, 2);
        assert_eq!(config.output.results_dir, "out");
        assert_eq!(config.targets.len(), 2);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let file = write_config(r#"targets = ["https://example.com"]"#);

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.benchmark.workers, 10);
        assert_eq!(config.retry.max_attempts, 3);
    }

    #[test]
    fn test_invalid_toml_rejected() {
        let file = write_config("not [valid toml");
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let file = write_config(
            r#"
            [retry]
            max-attempts = 0
            "#,
        );
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_rejected() {
        assert!(load_config(Path::new("/nonexistent/fetchmark.toml")).is_err());
    }
}
