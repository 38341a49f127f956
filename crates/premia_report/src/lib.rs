//! # premia_report: Price and Support/Resistance Charts
//!
//! Renders per-symbol PNG charts from a date/close series:
//!
//! - `{symbol}_price_chart.png`: close price line
//! - `{symbol}_support_resistance.png`: close price with horizontal support
//!   (green) and resistance (red) levels, drawn only when both level lists
//!   are non-empty
//!
//! Empty or misaligned input produces a placeholder image per chart instead.
//! Every call returns a [`ChartReport`] describing what was written; nothing
//! panics and nothing is silently lost.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use premia_report::{ChartData, ReportGenerator};
//!
//! let generator = ReportGenerator::default();
//! let report = generator.generate_charts("EMPTY", &ChartData::default(), "charts");
//! assert_eq!(report.files().len(), 2);
//! ```

#![deny(missing_docs)]

mod canvas;
mod data;
mod error;
mod fonts;
mod generator;
mod kind;
mod outcome;
mod render;

pub use canvas::{CanvasGuard, CanvasTracker};
pub use data::{ChartData, LevelSet, PriceSeries, SupportResistance};
pub use error::ChartError;
pub use generator::ReportGenerator;
pub use kind::ChartKind;
pub use outcome::{ChartOutcome, ChartReport};
