//! # premia_pricer: Heuristic Option Premium Estimation
//!
//! Approximates an option premium from spot, strike, volatility, time to
//! expiry and option type. This is a deliberately simple heuristic, not
//! Black-Scholes: no discounting, no Greeks, no implied volatility.
//!
//! ## Algorithm
//!
//! ```text
//! intrinsic  = max(S - K, 0)            (call)
//!              max(K - S, 0)            (put)
//! time_value = S · σ · √T
//! premium    = (intrinsic + time_value) · adjustment(S / K)
//! ```
//!
//! The adjustment is ×0.5 for deep out-of-the-money, ×0.8 for deep
//! in-the-money and ×1 inside the 0.95..=1.05 moneyness band.
//!
//! ## Usage
//!
//! ```rust
//! use premia_core::{MemoryDiagnostics, OptionType};
//! use premia_pricer::PremiumEstimator;
//!
//! let estimator = PremiumEstimator::new(MemoryDiagnostics::shared());
//! let estimate = estimator.estimate(90.0, 100.0, 0.2, 1.0, OptionType::Call).unwrap();
//! assert!((estimate.premium - 9.0).abs() < 1e-12);
//! ```

#![deny(missing_docs)]

pub mod heuristic;

pub use heuristic::{
    compute_premium, MoneynessBucket, OptionQuote, PremiumError, PremiumEstimate,
    PremiumEstimator,
};
