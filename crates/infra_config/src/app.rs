//! Application configuration.
//!
//! Handles loading of [`AppConfig`] from TOML files with environment
//! variable override support.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::{ChartSettings, ConfigError, LogLevel};

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Directory charts are written to
    #[serde(default = "default_charts_dir")]
    pub charts_dir: PathBuf,

    /// Log level used when `RUST_LOG` is not set
    #[serde(default)]
    pub log_level: LogLevel,

    /// Chart rendering settings
    #[serde(default)]
    pub chart: ChartSettings,
}

fn default_charts_dir() -> PathBuf {
    PathBuf::from("charts")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            charts_dir: default_charts_dir(),
            log_level: LogLevel::default(),
            chart: ChartSettings::default(),
        }
    }
}

impl AppConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from `path` if it exists, otherwise defaults.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply overrides from the process environment
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("PREMIA_CHARTS_DIR") {
            self.charts_dir = PathBuf::from(dir);
        }

        if let Some(level) = lookup("PREMIA_LOG_LEVEL") {
            self.log_level = level.parse()?;
        }

        if let Some(font) = lookup("PREMIA_FONT_PATH") {
            self.chart.font_path = Some(PathBuf::from(font));
        }

        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.charts_dir.as_os_str().is_empty() {
            errors.push("charts_dir cannot be empty".to_string());
        }

        self.chart.collect_errors(&mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file (or defaults), apply environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override()?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rgb;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.charts_dir, PathBuf::from("charts"));
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = AppConfig::from_toml_str(
            r#"
            log_level = "debug"

            [chart]
            width = 800
            resistance_colour = [200, 10, 10]
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.charts_dir, PathBuf::from("charts"));
        assert_eq!(config.chart.width, 800);
        assert_eq!(config.chart.height, 600);
        assert_eq!(config.chart.resistance_colour, Rgb(200, 10, 10));
    }

    #[test]
    fn test_parse_rejects_bad_log_level() {
        let result = AppConfig::from_toml_str(r#"log_level = "loud""#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("PREMIA_CHARTS_DIR", "/tmp/premia"),
            ("PREMIA_LOG_LEVEL", "warn"),
        ]
        .into_iter()
        .collect();

        let config = AppConfig::default()
            .with_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.charts_dir, PathBuf::from("/tmp/premia"));
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.chart.font_path, None);
    }

    #[test]
    fn test_override_rejects_bad_log_level() {
        let result = AppConfig::default().with_overrides(|key| {
            (key == "PREMIA_LOG_LEVEL").then(|| "chatty".to_string())
        });
        assert!(matches!(result, Err(ConfigError::InvalidLogLevel(_))));
    }

    #[test]
    fn test_validation_collects_all_errors() {
        let mut config = AppConfig::default();
        config.charts_dir = PathBuf::new();
        config.chart.width = 10;
        config.chart.font_size = 0;

        match config.validate() {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 3),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_file_and_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("premia.toml");

        assert_eq!(AppConfig::load_or_default(&path).unwrap(), AppConfig::default());
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::FileError(_))
        ));

        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "charts_dir = \"out\"").unwrap();
        drop(file);

        let config = AppConfig::load_or_default(&path).unwrap();
        assert_eq!(config.charts_dir, PathBuf::from("out"));
    }
}
