//! Core domain types.
//!
//! - [`option`]: Call/put discriminator with intrinsic value
//! - [`time`]: Calendar dates and loosely-typed date input normalisation
//! - [`error`]: Structured errors for the types above

pub mod error;
pub mod option;
pub mod time;

pub use error::{DateError, ParseOptionTypeError};
pub use option::OptionType;
pub use time::{normalise_dates, Date, DateInput};
