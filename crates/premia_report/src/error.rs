//! Error types for chart generation.

use std::path::PathBuf;

use premia_core::types::DateError;
use thiserror::Error;

/// Chart generation errors.
///
/// None of these escape [`crate::ReportGenerator::generate_charts`]; they are
/// logged and folded into a [`crate::ChartOutcome`].
#[derive(Debug, Error)]
pub enum ChartError {
    /// The chart directory could not be created
    #[error("Failed to create chart directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Dates and closes are empty or misaligned
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// A date could not be normalised
    #[error(transparent)]
    Date(#[from] DateError),

    /// A close price is NaN or infinite
    #[error("Close price at index {index} is not finite ({value})")]
    NonFiniteClose {
        /// Position in the close series
        index: usize,
        /// The offending value
        value: f64,
    },

    /// Values are finite but their padded range is not
    #[error("Value range {low} to {high} cannot be plotted")]
    RangeOverflow {
        /// Smallest value
        low: f64,
        /// Largest value
        high: f64,
    },

    /// The drawing backend failed
    #[error("Drawing failed: {0}")]
    Drawing(String),

    /// No font could be loaded for chart text
    #[error("Font unavailable: {0}")]
    Font(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_dir_display() {
        let err = ChartError::CreateDir {
            path: PathBuf::from("/nope/charts"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to create chart directory /nope/charts: denied"
        );
    }

    #[test]
    fn test_date_error_is_transparent() {
        let err: ChartError = DateError::InvalidDate {
            year: 2024,
            month: 2,
            day: 30,
        }
        .into();
        assert_eq!(err.to_string(), "Invalid date: 2024-2-30");
    }
}
