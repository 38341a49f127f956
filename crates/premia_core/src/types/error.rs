//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Errors from date construction and parsing
//! - `ParseOptionTypeError`: Errors from option type parsing

use thiserror::Error;

/// Date-related errors.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `ParseError`: Failed to parse a date string
///
/// # Examples
/// ```
/// use premia_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// Invalid date components
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component
        month: u32,
        /// Day component
        day: u32,
    },

    /// Failed to parse a date string
    #[error("Failed to parse date '{input}': expected YYYY-MM-DD ({reason})")]
    ParseError {
        /// The rejected input
        input: String,
        /// Parser message
        reason: String,
    },
}

/// Unknown option type string.
///
/// # Examples
/// ```
/// use premia_core::types::{OptionType, ParseOptionTypeError};
///
/// let err = "straddle".parse::<OptionType>().unwrap_err();
/// assert_eq!(err, ParseOptionTypeError("straddle".to_string()));
/// assert_eq!(err.to_string(), "Unknown option type: straddle (expected call or put)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown option type: {0} (expected call or put)")]
pub struct ParseOptionTypeError(pub String);
