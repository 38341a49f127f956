//! Per-chart outcomes returned by the generator.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::kind::ChartKind;

/// What happened to one chart.
///
/// # Examples
/// ```
/// use std::path::PathBuf;
/// use premia_report::ChartOutcome;
///
/// let outcome = ChartOutcome::Placeholder {
///     path: PathBuf::from("charts/X_price_chart.png"),
///     reason: "no dates supplied".to_string(),
/// };
/// assert!(outcome.path().is_some());
/// assert!(!outcome.is_rendered());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChartOutcome {
    /// Full chart written
    Rendered {
        /// Written file
        path: PathBuf,
    },
    /// Placeholder image written in place of the chart
    Placeholder {
        /// Written file
        path: PathBuf,
        /// Why the chart could not be drawn
        reason: String,
    },
    /// Nothing reliable was written
    Failed {
        /// Failure description
        reason: String,
    },
    /// Not requested (no support/resistance levels)
    Skipped,
}

impl ChartOutcome {
    /// File written for this chart, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ChartOutcome::Rendered { path } | ChartOutcome::Placeholder { path, .. } => {
                Some(path)
            }
            ChartOutcome::Failed { .. } | ChartOutcome::Skipped => None,
        }
    }

    /// Whether the full chart was written.
    pub fn is_rendered(&self) -> bool {
        matches!(self, ChartOutcome::Rendered { .. })
    }

    /// Whether the chart failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, ChartOutcome::Failed { .. })
    }

    pub(crate) fn failed(reason: impl Into<String>) -> Self {
        ChartOutcome::Failed {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ChartOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartOutcome::Rendered { path } => write!(f, "rendered {}", path.display()),
            ChartOutcome::Placeholder { path, reason } => {
                write!(f, "placeholder {} ({})", path.display(), reason)
            }
            ChartOutcome::Failed { reason } => write!(f, "failed: {}", reason),
            ChartOutcome::Skipped => write!(f, "skipped"),
        }
    }
}

/// Outcomes for both charts of one symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartReport {
    /// Symbol the charts belong to
    pub symbol: String,
    /// Price chart outcome
    pub price: ChartOutcome,
    /// Support/resistance chart outcome
    pub support_resistance: ChartOutcome,
}

impl ChartReport {
    /// Outcome for `kind`.
    pub fn outcome(&self, kind: ChartKind) -> &ChartOutcome {
        match kind {
            ChartKind::Price => &self.price,
            ChartKind::SupportResistance => &self.support_resistance,
        }
    }

    /// Files written, in generation order.
    pub fn files(&self) -> Vec<&Path> {
        ChartKind::ALL
            .iter()
            .filter_map(|kind| self.outcome(*kind).path())
            .collect()
    }

    /// Whether either chart failed.
    pub fn has_failures(&self) -> bool {
        self.price.is_failed() || self.support_resistance.is_failed()
    }

    pub(crate) fn all_failed(symbol: &str, reason: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            price: ChartOutcome::failed(reason),
            support_resistance: ChartOutcome::failed(reason),
        }
    }
}
