//! Configuration error types.

use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// Failed to parse TOML
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid log level string
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// One or more fields failed validation
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_joins_messages() {
        let err = ConfigError::Validation(vec!["width must be > 0".into(), "bad".into()]);
        assert_eq!(err.to_string(), "Validation errors: width must be > 0; bad");
    }
}
