//! # premia_core: Shared Foundation for Premium Estimates and Charts
//!
//! ## Layer Role
//!
//! premia_core is the bottom layer shared by the estimator and the chart
//! generator. It provides:
//! - Option types: `OptionType` (`types::option`)
//! - Time types: `Date`, `DateInput` (`types::time`)
//! - Error types: `DateError`, `ParseOptionTypeError` (`types::error`)
//! - Injected logging capability: `Diagnostics` (`diagnostics`)
//!
//! ## Usage Examples
//!
//! ```rust
//! use premia_core::diagnostics::{Diagnostics, MemoryDiagnostics, Severity};
//! use premia_core::types::{Date, OptionType};
//!
//! let call: OptionType = "call".parse().unwrap();
//! assert_eq!(call.intrinsic(110.0, 100.0), 10.0);
//!
//! let date = Date::parse("2024-06-15").unwrap();
//! assert_eq!(date.to_string(), "2024-06-15");
//!
//! let diagnostics = MemoryDiagnostics::new();
//! diagnostics.warn("Insufficient data for AAPL charts");
//! assert!(diagnostics.contains(Severity::Warn, "AAPL"));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `OptionType`, `Date` and `DateInput`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod diagnostics;
pub mod types;

pub use diagnostics::{Diagnostics, MemoryDiagnostics, Severity, TracingDiagnostics};
pub use types::{Date, DateError, DateInput, OptionType, ParseOptionTypeError};
