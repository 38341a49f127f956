//! Moneyness buckets.
//!
//! Moneyness is S/K. The band `[LOWER_BAND, UPPER_BAND]` (inclusive at both
//! ends) is near the money; outside it a call or put is deep in or deep out
//! of the money depending on direction.

use premia_core::types::OptionType;

/// Lower edge of the near-the-money band (inclusive).
pub const LOWER_BAND: f64 = 0.95;

/// Upper edge of the near-the-money band (inclusive).
pub const UPPER_BAND: f64 = 1.05;

/// Premium multiplier for deep out-of-the-money options.
pub const DEEP_OTM_FACTOR: f64 = 0.5;

/// Premium multiplier for deep in-the-money options.
pub const DEEP_ITM_FACTOR: f64 = 0.8;

/// Moneyness classification used to scale the premium.
///
/// # Examples
/// ```
/// use premia_core::OptionType;
/// use premia_pricer::MoneynessBucket;
///
/// assert_eq!(
///     MoneynessBucket::classify(OptionType::Call, 0.9),
///     MoneynessBucket::DeepOutOfTheMoney
/// );
/// assert_eq!(
///     MoneynessBucket::classify(OptionType::Put, 0.9),
///     MoneynessBucket::DeepInTheMoney
/// );
/// assert_eq!(MoneynessBucket::classify(OptionType::Put, 0.95), MoneynessBucket::NearTheMoney);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MoneynessBucket {
    /// More than 5% away from the strike in the unfavourable direction
    DeepOutOfTheMoney,
    /// Within 5% of the strike, boundaries included
    NearTheMoney,
    /// More than 5% away from the strike in the favourable direction
    DeepInTheMoney,
}

impl MoneynessBucket {
    /// Classify a moneyness ratio for the given option type.
    pub fn classify(option_type: OptionType, moneyness: f64) -> Self {
        let below = moneyness < LOWER_BAND;
        let above = moneyness > UPPER_BAND;

        match option_type {
            OptionType::Call if below => MoneynessBucket::DeepOutOfTheMoney,
            OptionType::Call if above => MoneynessBucket::DeepInTheMoney,
            OptionType::Put if above => MoneynessBucket::DeepOutOfTheMoney,
            OptionType::Put if below => MoneynessBucket::DeepInTheMoney,
            _ => MoneynessBucket::NearTheMoney,
        }
    }

    /// Multiplier applied to the whole premium.
    #[inline]
    pub fn adjustment_factor(&self) -> f64 {
        match self {
            MoneynessBucket::DeepOutOfTheMoney => DEEP_OTM_FACTOR,
            MoneynessBucket::NearTheMoney => 1.0,
            MoneynessBucket::DeepInTheMoney => DEEP_ITM_FACTOR,
        }
    }

    /// Short label for tables.
    pub fn label(&self) -> &'static str {
        match self {
            MoneynessBucket::DeepOutOfTheMoney => "deep OTM",
            MoneynessBucket::NearTheMoney => "near ATM",
            MoneynessBucket::DeepInTheMoney => "deep ITM",
        }
    }
}
