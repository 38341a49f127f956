//! Premium estimator component.
//!
//! [`compute_premium`] is the pure calculation. [`PremiumEstimator`] wraps it
//! with an injected [`Diagnostics`] so that every failure is logged at error
//! severity before it is returned.

use std::sync::Arc;

use premia_core::diagnostics::{Diagnostics, TracingDiagnostics};
use premia_core::types::OptionType;

use super::error::PremiumError;
use super::moneyness::MoneynessBucket;
use super::quote::OptionQuote;

/// Breakdown of a premium estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PremiumEstimate {
    /// Quote the estimate was computed from
    pub quote: OptionQuote,
    /// Immediate exercise value
    pub intrinsic: f64,
    /// S · σ · √T
    pub time_value: f64,
    /// S / K
    pub moneyness: f64,
    /// Moneyness classification
    pub bucket: MoneynessBucket,
    /// Multiplier applied to intrinsic + time value
    pub adjustment: f64,
    /// Final premium
    pub premium: f64,
}

/// Compute a premium estimate without logging.
///
/// # Errors
/// Any validation failure from [`OptionQuote::validate`], or
/// `PremiumError::NumericalInstability` if the result is not finite.
///
/// # Examples
/// ```
/// use premia_core::OptionType;
/// use premia_pricer::{compute_premium, MoneynessBucket, OptionQuote};
///
/// let quote = OptionQuote::new(110.0, 100.0, 0.2, 1.0, OptionType::Put);
/// let estimate = compute_premium(&quote).unwrap();
/// assert_eq!(estimate.intrinsic, 0.0);
/// assert_eq!(estimate.bucket, MoneynessBucket::DeepOutOfTheMoney);
/// assert!((estimate.premium - 11.0).abs() < 1e-12);
/// ```
pub fn compute_premium(quote: &OptionQuote) -> Result<PremiumEstimate, PremiumError> {
    quote.validate()?;

    let intrinsic = quote.option_type.intrinsic(quote.spot, quote.strike);
    let time_value = quote.spot * quote.volatility * quote.time_to_expiry.sqrt();
    let moneyness = quote.moneyness();
    let bucket = MoneynessBucket::classify(quote.option_type, moneyness);
    let adjustment = bucket.adjustment_factor();
    let premium = (intrinsic + time_value) * adjustment;

    if !premium.is_finite() {
        return Err(PremiumError::NumericalInstability {
            message: format!("premium evaluated to {}", premium),
        });
    }

    Ok(PremiumEstimate {
        quote: *quote,
        intrinsic,
        time_value,
        moneyness,
        bucket,
        adjustment,
        premium,
    })
}

/// Heuristic option premium estimator.
///
/// Stateless between calls; safe to share across threads.
///
/// # Examples
/// ```
/// use premia_core::{MemoryDiagnostics, OptionType, Severity};
/// use premia_pricer::{PremiumError, PremiumEstimator};
///
/// let diagnostics = MemoryDiagnostics::shared();
/// let estimator = PremiumEstimator::new(diagnostics.clone());
///
/// let err = estimator.estimate(100.0, 0.0, 0.2, 1.0, OptionType::Call).unwrap_err();
/// assert!(matches!(err, PremiumError::ZeroStrike { .. }));
/// assert!(diagnostics.contains(Severity::Error, "Error calculating option premium"));
/// ```
pub struct PremiumEstimator {
    diagnostics: Arc<dyn Diagnostics>,
}

impl PremiumEstimator {
    /// Create an estimator logging through `diagnostics`.
    pub fn new(diagnostics: Arc<dyn Diagnostics>) -> Self {
        diagnostics.info("PremiumEstimator initialized");
        Self { diagnostics }
    }

    /// Estimate the premium for the five raw inputs.
    pub fn estimate(
        &self,
        spot: f64,
        strike: f64,
        volatility: f64,
        time_to_expiry: f64,
        option_type: OptionType,
    ) -> Result<PremiumEstimate, PremiumError> {
        self.estimate_quote(&OptionQuote::new(
            spot,
            strike,
            volatility,
            time_to_expiry,
            option_type,
        ))
    }

    /// Estimate with the option type given as text ("call"/"put").
    ///
    /// An unrecognised option type is logged and returned as
    /// `PremiumError::InvalidOptionType`.
    pub fn estimate_str(
        &self,
        spot: f64,
        strike: f64,
        volatility: f64,
        time_to_expiry: f64,
        option_type: &str,
    ) -> Result<PremiumEstimate, PremiumError> {
        let option_type = option_type
            .parse::<OptionType>()
            .map_err(|e| self.report(PremiumError::from(e)))?;
        self.estimate(spot, strike, volatility, time_to_expiry, option_type)
    }

    /// Estimate the premium for a prepared quote.
    pub fn estimate_quote(&self, quote: &OptionQuote) -> Result<PremiumEstimate, PremiumError> {
        compute_premium(quote).map_err(|e| self.report(e))
    }

    /// Legacy interface: the premium, or `0.0` if the estimate failed.
    ///
    /// The zero is ambiguous. A near-zero genuine premium (σ = 0, T = 0,
    /// out of the money) and a failed computation return the same value.
    /// Callers that need to tell them apart must use [`Self::estimate`];
    /// failures are still logged at error severity here.
    pub fn estimate_or_zero(
        &self,
        spot: f64,
        strike: f64,
        volatility: f64,
        time_to_expiry: f64,
        option_type: OptionType,
    ) -> f64 {
        self.estimate(spot, strike, volatility, time_to_expiry, option_type)
            .map(|estimate| estimate.premium)
            .unwrap_or(0.0)
    }

    fn report(&self, err: PremiumError) -> PremiumError {
        self.diagnostics
            .error(&format!("Error calculating option premium: {}", err));
        err
    }
}

impl Default for PremiumEstimator {
    fn default() -> Self {
        Self::new(TracingDiagnostics::shared("premium_estimator"))
    }
}

impl std::fmt::Debug for PremiumEstimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PremiumEstimator").finish_non_exhaustive()
    }
}
