//! Heuristic premium model.
//!
//! - [`quote`]: The five estimator inputs and their validation
//! - [`moneyness`]: Moneyness buckets and their premium adjustments
//! - [`estimator`]: The estimator component and its result breakdown
//! - [`error`]: Failure modes

pub mod error;
pub mod estimator;
pub mod moneyness;
pub mod quote;

pub use error::PremiumError;
pub use estimator::{compute_premium, PremiumEstimate, PremiumEstimator};
pub use moneyness::MoneynessBucket;
pub use quote::OptionQuote;
