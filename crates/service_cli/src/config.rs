//! Configuration loading for the CLI.

use std::path::Path;

use infra_config::{AppConfig, LogLevel};

use crate::Result;

/// Load `path` (defaults if missing), apply `PREMIA_*` overrides and validate.
pub fn load(path: &str) -> Result<AppConfig> {
    Ok(AppConfig::load_with_env_and_validate(Path::new(path))?)
}

/// Filter directive used when `RUST_LOG` is unset.
pub fn default_filter(config: &AppConfig, verbose: bool) -> &'static str {
    if verbose {
        LogLevel::Debug.as_filter_str()
    } else {
        config.log_level.as_filter_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let config = load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.chart.width, 1000);
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[chart]\nwidth = 1").unwrap();
        assert!(load(file.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn test_verbose_overrides_level() {
        let config = AppConfig::default();
        assert_eq!(default_filter(&config, true), "debug");
        assert_eq!(default_filter(&config, false), "info");
    }
}
