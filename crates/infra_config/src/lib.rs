//! # infra_config: Configuration for premia
//!
//! Loads [`AppConfig`] from a TOML file, applies `PREMIA_*` environment
//! overrides and validates the result.
//!
//! ```toml
//! charts_dir = "reports/charts"
//! log_level = "info"
//!
//! [chart]
//! width = 1000
//! height = 600
//! support_colour = [0, 128, 0]
//! resistance_colour = [255, 0, 0]
//! ```
//!
//! ## Environment Overrides
//!
//! | Variable            | Field        |
//! |---------------------|--------------|
//! | `PREMIA_CHARTS_DIR` | `charts_dir` |
//! | `PREMIA_LOG_LEVEL`  | `log_level`  |
//! | `PREMIA_FONT_PATH`  | `chart.font_path` |

#![deny(missing_docs)]

mod app;
mod chart;
mod error;
mod log_level;

pub use app::AppConfig;
pub use chart::{ChartSettings, Rgb};
pub use error::ConfigError;
pub use log_level::LogLevel;
