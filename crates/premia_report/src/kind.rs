//! Chart kinds and their artifact naming.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// The two charts produced per symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Close price line chart
    Price,
    /// Close price with support and resistance levels
    SupportResistance,
}

impl ChartKind {
    /// Both kinds, in generation order.
    pub const ALL: [ChartKind; 2] = [ChartKind::Price, ChartKind::SupportResistance];

    /// Artifact file name, e.g. `AAPL_price_chart.png`.
    ///
    /// # Examples
    /// ```
    /// use premia_report::ChartKind;
    ///
    /// assert_eq!(ChartKind::Price.file_name("AAPL"), "AAPL_price_chart.png");
    /// assert_eq!(
    ///     ChartKind::SupportResistance.file_name("AAPL"),
    ///     "AAPL_support_resistance.png"
    /// );
    /// ```
    pub fn file_name(&self, symbol: &str) -> String {
        match self {
            ChartKind::Price => format!("{}_price_chart.png", symbol),
            ChartKind::SupportResistance => format!("{}_support_resistance.png", symbol),
        }
    }

    /// Artifact path inside `charts_dir`.
    pub fn path(&self, charts_dir: &Path, symbol: &str) -> PathBuf {
        charts_dir.join(self.file_name(symbol))
    }

    /// Chart title.
    pub fn title(&self, symbol: &str) -> String {
        match self {
            ChartKind::Price => format!("{} Price Chart", symbol),
            ChartKind::SupportResistance => format!("{} Support and Resistance", symbol),
        }
    }

    /// Centred message on the placeholder image.
    pub fn placeholder_message(&self, symbol: &str) -> String {
        match self {
            ChartKind::Price => format!("Insufficient data for {} charts", symbol),
            ChartKind::SupportResistance => {
                format!("Insufficient data for {} support/resistance chart", symbol)
            }
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Price => write!(f, "price"),
            ChartKind::SupportResistance => write!(f, "support/resistance"),
        }
    }
}
