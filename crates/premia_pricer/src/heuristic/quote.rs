//! Option quote: the five estimator inputs.

use premia_core::types::OptionType;

use super::error::PremiumError;

/// Inputs to a single premium estimate.
///
/// Quotes are ephemeral; build one per estimate.
///
/// # Examples
/// ```
/// use premia_core::OptionType;
/// use premia_pricer::OptionQuote;
///
/// let quote = OptionQuote::new(100.0, 100.0, 0.25, 0.5, OptionType::Put);
/// assert!(quote.validate().is_ok());
///
/// let bad = OptionQuote::new(100.0, 0.0, 0.25, 0.5, OptionType::Put);
/// assert!(bad.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionQuote {
    /// Spot price (S > 0)
    pub spot: f64,
    /// Strike price (K > 0)
    pub strike: f64,
    /// Volatility (σ >= 0)
    pub volatility: f64,
    /// Time to expiry in years (T >= 0)
    pub time_to_expiry: f64,
    /// Call or put
    pub option_type: OptionType,
}

impl OptionQuote {
    /// Create a quote without validating it.
    pub fn new(
        spot: f64,
        strike: f64,
        volatility: f64,
        time_to_expiry: f64,
        option_type: OptionType,
    ) -> Self {
        Self {
            spot,
            strike,
            volatility,
            time_to_expiry,
            option_type,
        }
    }

    /// Moneyness S/K.
    #[inline]
    pub fn moneyness(&self) -> f64 {
        self.spot / self.strike
    }

    /// Check every input against its domain.
    ///
    /// # Errors
    /// - `PremiumError::ZeroStrike` if the strike is exactly zero
    /// - `PremiumError::InvalidInput` for non-finite values, S <= 0, K < 0,
    ///   σ < 0 or T < 0
    pub fn validate(&self) -> Result<(), PremiumError> {
        let finite = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("volatility", self.volatility),
            ("time_to_expiry", self.time_to_expiry),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(PremiumError::invalid(field, value, "must be finite"));
            }
        }

        if self.strike == 0.0 {
            return Err(PremiumError::ZeroStrike { spot: self.spot });
        }
        if self.strike < 0.0 {
            return Err(PremiumError::invalid("strike", self.strike, "must be > 0"));
        }
        if self.spot <= 0.0 {
            return Err(PremiumError::invalid("spot", self.spot, "must be > 0"));
        }
        if self.volatility < 0.0 {
            return Err(PremiumError::invalid(
                "volatility",
                self.volatility,
                "must be >= 0",
            ));
        }
        if self.time_to_expiry < 0.0 {
            return Err(PremiumError::invalid(
                "time_to_expiry",
                self.time_to_expiry,
                "must be >= 0",
            ));
        }

        Ok(())
    }
}
