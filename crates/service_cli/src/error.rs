//! CLI error types.

use infra_config::ConfigError;
use premia_pricer::PremiumError;
use thiserror::Error;

/// Errors surfaced by `premia` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// An input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// A command-line argument was rejected
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Filesystem failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON input or output failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The premium could not be estimated
    #[error("Pricing failed: {0}")]
    Pricing(#[from] PremiumError),

    /// One or more charts failed to render
    #[error("{0} chart(s) failed to render")]
    ChartFailures(usize),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
