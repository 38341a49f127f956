//! Option type discriminator.

use std::fmt;
use std::str::FromStr;

use super::error::ParseOptionTypeError;

/// Call or put.
///
/// # Examples
/// ```
/// use premia_core::types::OptionType;
///
/// assert_eq!("PUT".parse::<OptionType>().unwrap(), OptionType::Put);
/// assert_eq!(OptionType::Call.to_string(), "call");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy at the strike
    Call,
    /// Right to sell at the strike
    Put,
}

impl OptionType {
    /// Immediate exercise value: max(S - K, 0) for a call, max(K - S, 0) for a put.
    ///
    /// # Examples
    /// ```
    /// use premia_core::types::OptionType;
    ///
    /// assert_eq!(OptionType::Call.intrinsic(90.0, 100.0), 0.0);
    /// assert_eq!(OptionType::Put.intrinsic(90.0, 100.0), 10.0);
    /// ```
    #[inline]
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }

    /// Lowercase name used in input files and log messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl FromStr for OptionType {
    type Err = ParseOptionTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(ParseOptionTypeError(s.to_string())),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_aliases_and_case() {
        assert_eq!("Call".parse::<OptionType>(), Ok(OptionType::Call));
        assert_eq!(" c ".parse::<OptionType>(), Ok(OptionType::Call));
        assert_eq!("p".parse::<OptionType>(), Ok(OptionType::Put));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("".parse::<OptionType>().is_err());
        assert!("calls".parse::<OptionType>().is_err());
    }

    #[test]
    fn test_intrinsic_at_the_money_is_zero() {
        assert_eq!(OptionType::Call.intrinsic(100.0, 100.0), 0.0);
        assert_eq!(OptionType::Put.intrinsic(100.0, 100.0), 0.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&OptionType::Put).unwrap();
        assert_eq!(json, "\"put\"");
        let parsed: OptionType = serde_json::from_str("\"call\"").unwrap();
        assert_eq!(parsed, OptionType::Call);
    }
}
