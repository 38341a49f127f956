//! Chart input bundle and the normalised price series.

use chrono::NaiveDate;
use premia_core::types::{normalise_dates, DateInput};
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Input bundle for one symbol.
///
/// Mirrors the JSON shape
/// `{"dates": [...], "close": [...], "support_resistance": {...}}`;
/// missing `dates`/`close` deserialise as empty and lead to placeholders.
///
/// # Examples
/// ```
/// use premia_report::ChartData;
///
/// let data: ChartData = serde_json::from_str(
///     r#"{"dates": ["2024-01-02", "2024-01-03"], "close": [101.5, 102.25]}"#,
/// ).unwrap();
/// assert!(data.insufficiency().is_none());
/// assert!(data.levels().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    /// Observation dates, typed or `YYYY-MM-DD` strings
    #[serde(default)]
    pub dates: Vec<DateInput>,

    /// Close prices aligned with `dates`
    #[serde(default)]
    pub close: Vec<f64>,

    /// Optional levels to annotate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_resistance: Option<SupportResistance>,
}

/// Support and resistance levels.
///
/// Each list is optional; the support/resistance chart is drawn only when
/// both are present and non-empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportResistance {
    /// Support levels (drawn in the support colour, labelled `S:`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_levels: Option<Vec<f64>>,

    /// Resistance levels (drawn in the resistance colour, labelled `R:`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resistance_levels: Option<Vec<f64>>,
}

/// Borrowed view of both level lists once they are known to be usable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelSet<'a> {
    /// Support levels
    pub support: &'a [f64],
    /// Resistance levels
    pub resistance: &'a [f64],
}

impl LevelSet<'_> {
    /// Every level, support first.
    pub fn all(&self) -> impl Iterator<Item = f64> + '_ {
        self.support.iter().chain(self.resistance.iter()).copied()
    }
}

impl ChartData {
    /// Bundle with prices only.
    pub fn new(dates: Vec<DateInput>, close: Vec<f64>) -> Self {
        Self {
            dates,
            close,
            support_resistance: None,
        }
    }

    /// Attach support and resistance levels.
    pub fn with_levels(mut self, support: Vec<f64>, resistance: Vec<f64>) -> Self {
        self.support_resistance = Some(SupportResistance {
            support_levels: Some(support),
            resistance_levels: Some(resistance),
        });
        self
    }

    /// Why the bundle cannot be charted, if it cannot.
    ///
    /// Empty dates, empty closes and length mismatches all qualify.
    pub fn insufficiency(&self) -> Option<String> {
        match (self.dates.len(), self.close.len()) {
            (0, _) => Some("no dates supplied".to_string()),
            (_, 0) => Some("no close prices supplied".to_string()),
            (d, c) if d != c => Some(format!("{} dates but {} close prices", d, c)),
            _ => None,
        }
    }

    /// Levels for the support/resistance chart, when both lists are non-empty.
    pub fn levels(&self) -> Option<LevelSet<'_>> {
        let sr = self.support_resistance.as_ref()?;
        let support = sr.support_levels.as_deref()?;
        let resistance = sr.resistance_levels.as_deref()?;

        if support.is_empty() || resistance.is_empty() {
            return None;
        }

        Some(LevelSet {
            support,
            resistance,
        })
    }
}

/// Close prices indexed by date, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    points: Vec<(NaiveDate, f64)>,
}

impl PriceSeries {
    /// Normalise dates and pair them with closes.
    ///
    /// # Errors
    /// - `ChartError::InsufficientData` if the bundle is empty or misaligned
    /// - `ChartError::Date` if a date string is not `YYYY-MM-DD`
    /// - `ChartError::NonFiniteClose` if a close is NaN or infinite
    pub fn from_data(data: &ChartData) -> Result<Self, ChartError> {
        if let Some(reason) = data.insufficiency() {
            return Err(ChartError::InsufficientData(reason));
        }

        let dates = normalise_dates(&data.dates)?;

        if let Some((index, &value)) = data.close.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(ChartError::NonFiniteClose { index, value });
        }

        let points = dates
            .into_iter()
            .map(NaiveDate::from)
            .zip(data.close.iter().copied())
            .collect();

        Ok(Self { points })
    }

    /// (date, close) pairs in input order.
    pub fn points(&self) -> &[(NaiveDate, f64)] {
        &self.points
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no observations.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Date of the last observation in input order.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|(date, _)| *date)
    }

    /// Earliest and latest date, widened by a day each side if they coincide.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let start = self.points.iter().map(|(d, _)| *d).min()?;
        let end = self.points.iter().map(|(d, _)| *d).max()?;

        if start < end {
            Some((start, end))
        } else {
            Some((
                start.pred_opt().unwrap_or(start),
                end.succ_opt().unwrap_or(end),
            ))
        }
    }

    /// Value range covering every close and `extra` level, padded by 5%.
    ///
    /// # Errors
    /// - `ChartError::InsufficientData` if there is nothing to bound
    /// - `ChartError::RangeOverflow` if the padded range is not finite
    pub fn value_bounds(&self, extra: &[f64]) -> Result<(f64, f64), ChartError> {
        let values = self
            .points
            .iter()
            .map(|(_, v)| *v)
            .chain(extra.iter().copied())
            .filter(|v| v.is_finite());

        let (lo, hi) = values
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
            .ok_or_else(|| ChartError::InsufficientData("empty series".to_string()))?;

        // Spans below float resolution are treated as flat.
        let span = hi - lo;
        let flat = span <= hi.abs().max(lo.abs()) * f64::EPSILON * 16.0;
        let pad = if flat {
            (hi.abs() * 0.05).max(1.0)
        } else {
            span * 0.05
        };
        let (low, high) = (lo - pad, hi + pad);

        if !span.is_finite() || !low.is_finite() || !high.is_finite() {
            return Err(ChartError::RangeOverflow { low: lo, high: hi });
        }

        Ok((low, high))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use premia_core::types::DateError;

    fn dates(items: &[&str]) -> Vec<DateInput> {
        items.iter().map(|s| DateInput::from(*s)).collect()
    }

    #[test]
    fn test_insufficiency_reasons() {
        assert_eq!(
            ChartData::new(vec![], vec![]).insufficiency(),
            Some("no dates supplied".to_string())
        );
        assert_eq!(
            ChartData::new(dates(&["2024-01-02"]), vec![]).insufficiency(),
            Some("no close prices supplied".to_string())
        );
        assert_eq!(
            ChartData::new(dates(&["2024-01-02", "2024-01-03", "2024-01-04"]), vec![1.0, 2.0])
                .insufficiency(),
            Some("3 dates but 2 close prices".to_string())
        );
    }

    #[test]
    fn test_levels_require_both_lists_non_empty() {
        let base = ChartData::new(dates(&["2024-01-02"]), vec![1.0]);
        assert!(base.levels().is_none());
        assert!(base.clone().with_levels(vec![], vec![2.0]).levels().is_none());
        assert!(base.clone().with_levels(vec![1.0], vec![]).levels().is_none());

        let mut only_support = base.clone();
        only_support.support_resistance = Some(SupportResistance {
            support_levels: Some(vec![1.0]),
            resistance_levels: None,
        });
        assert!(only_support.levels().is_none());

        let data = base.with_levels(vec![0.5, 0.75], vec![2.0]);
        let levels = data.levels().unwrap();
        assert_eq!(levels.all().collect::<Vec<_>>(), vec![0.5, 0.75, 2.0]);
    }

    #[test]
    fn test_series_preserves_input_order() {
        let data = ChartData::new(dates(&["2024-01-03", "2024-01-02"]), vec![10.0, 11.0]);
        let series = PriceSeries::from_data(&data).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.last_date(), NaiveDate::from_ymd_opt(2024, 1, 2));

        let (start, end) = series.date_bounds().unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
    }

    #[test]
    fn test_single_point_bounds_are_widened() {
        let data = ChartData::new(dates(&["2024-01-02"]), vec![50.0]);
        let series = PriceSeries::from_data(&data).unwrap();

        let (start, end) = series.date_bounds().unwrap();
        assert!(start < end);

        let (lo, hi) = series.value_bounds(&[]).unwrap();
        assert!(lo < 50.0 && hi > 50.0);
    }

    #[test]
    fn test_value_bounds_include_levels() {
        let data = ChartData::new(dates(&["2024-01-02", "2024-01-03"]), vec![100.0, 110.0]);
        let series = PriceSeries::from_data(&data).unwrap();
        let (lo, hi) = series.value_bounds(&[90.0, 120.0]).unwrap();
        assert!(lo < 90.0);
        assert!(hi > 120.0);
    }

    #[test]
    fn test_value_bounds_reject_overflowing_range() {
        let data = ChartData::new(dates(&["2024-01-02", "2024-01-03"]), vec![100.0, 101.0]);
        let series = PriceSeries::from_data(&data).unwrap();
        assert!(matches!(
            series.value_bounds(&[-1e308, 1e308]),
            Err(ChartError::RangeOverflow { .. })
        ));

        let extreme = ChartData::new(
            dates(&["2024-01-02", "2024-01-03"]),
            vec![f64::MAX, -f64::MAX],
        );
        let series = PriceSeries::from_data(&extreme).unwrap();
        assert!(series.value_bounds(&[]).is_err());
    }

    #[test]
    fn test_value_bounds_near_flat_span_is_padded() {
        let data = ChartData::new(
            dates(&["2024-01-02", "2024-01-03"]),
            vec![1.0, 1.0 + f64::EPSILON],
        );
        let series = PriceSeries::from_data(&data).unwrap();
        let (lo, hi) = series.value_bounds(&[]).unwrap();
        assert!(hi - lo >= 2.0);
    }

    #[test]
    fn test_bad_date_string() {
        let data = ChartData::new(dates(&["2024-01-02", "02/01/2024"]), vec![1.0, 2.0]);
        match PriceSeries::from_data(&data) {
            Err(ChartError::Date(DateError::ParseError { input, .. })) => {
                assert_eq!(input, "02/01/2024")
            }
            other => panic!("Expected date error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_close() {
        let data = ChartData::new(dates(&["2024-01-02", "2024-01-03"]), vec![1.0, f64::NAN]);
        assert!(matches!(
            PriceSeries::from_data(&data),
            Err(ChartError::NonFiniteClose { index: 1, .. })
        ));
    }

    #[test]
    fn test_deserialise_levels() {
        let data: ChartData = serde_json::from_str(
            r#"{
                "dates": ["2024-01-02"],
                "close": [1.0],
                "support_resistance": {"support_levels": [0.9], "resistance_levels": [1.1]}
            }"#,
        )
        .unwrap();
        assert!(data.levels().is_some());

        let missing: ChartData = serde_json::from_str("{}").unwrap();
        assert_eq!(missing, ChartData::default());
    }
}
