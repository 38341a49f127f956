//! Error types for premium estimation.

use premia_core::types::ParseOptionTypeError;
use thiserror::Error;

/// Premium estimation errors.
///
/// # Variants
/// - `ZeroStrike`: Moneyness S/K is undefined
/// - `InvalidInput`: An input is non-finite or outside its domain
/// - `InvalidOptionType`: Option type string is neither call nor put
/// - `NumericalInstability`: The computed premium is not finite
///
/// # Examples
/// ```
/// use premia_pricer::PremiumError;
///
/// let err = PremiumError::ZeroStrike { spot: 100.0 };
/// assert!(err.to_string().contains("division by zero"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PremiumError {
    /// Strike is zero, so moneyness would divide by zero.
    #[error("Strike is zero: moneyness S/K is a division by zero (S = {spot})")]
    ZeroStrike {
        /// Spot price supplied with the zero strike
        spot: f64,
    },

    /// Input outside its valid domain.
    #[error("Invalid input: {field} = {value} ({requirement})")]
    InvalidInput {
        /// Name of the offending input
        field: &'static str,
        /// The rejected value
        value: f64,
        /// What the input must satisfy
        requirement: &'static str,
    },

    /// Unrecognised option type.
    #[error(transparent)]
    InvalidOptionType(#[from] ParseOptionTypeError),

    /// Computation produced a non-finite value.
    #[error("Numerical instability: {message}")]
    NumericalInstability {
        /// Description of the numerical issue
        message: String,
    },
}

impl PremiumError {
    pub(crate) fn invalid(field: &'static str, value: f64, requirement: &'static str) -> Self {
        Self::InvalidInput {
            field,
            value,
            requirement,
        }
    }
}
