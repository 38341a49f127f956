//! Calendar dates for price series.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - `DateInput`: A date as supplied by callers, either already typed or an
//!   ISO 8601 string
//! - `normalise_dates`: Converts a sequence of `DateInput` into `Date`s

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

use super::error::DateError;

/// ISO 8601 calendar date format accepted for string input.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// # Examples
///
/// ```
/// use premia_core::types::time::Date;
///
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
/// assert_eq!(date.year(), 2024);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Examples
    ///
    /// ```
    /// use premia_core::types::time::Date;
    ///
    /// assert!(Date::from_ymd(2024, 2, 29).is_ok());
    /// assert!(Date::from_ymd(2023, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Examples
    ///
    /// ```
    /// use premia_core::types::time::Date;
    ///
    /// assert!(Date::parse("2024-06-15").is_ok());
    /// assert!(Date::parse("06/15/2024").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, ISO_DATE_FORMAT)
            .map(Date)
            .map_err(|e| DateError::ParseError {
                input: s.to_string(),
                reason: e.to_string(),
            })
    }

    /// Returns the underlying NaiveDate.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_DATE_FORMAT))
    }
}

/// A date as supplied by a caller.
///
/// Price bundles arrive either with typed dates or with ISO 8601 strings.
/// When deserialised, well-formed strings become `Date` directly; anything
/// else is kept as `Text` so that the failure surfaces at normalisation with
/// the offending input attached.
///
/// # Examples
/// ```
/// use premia_core::types::time::{Date, DateInput};
///
/// let typed = DateInput::from(Date::from_ymd(2024, 1, 2).unwrap());
/// let text = DateInput::from("2024-01-02");
/// assert_eq!(typed.normalise().unwrap(), text.normalise().unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum DateInput {
    /// Already a calendar date
    Date(Date),
    /// Raw text, expected as YYYY-MM-DD
    Text(String),
}

impl DateInput {
    /// Resolves the input into a `Date`.
    pub fn normalise(&self) -> Result<Date, DateError> {
        match self {
            DateInput::Date(date) => Ok(*date),
            DateInput::Text(text) => Date::parse(text),
        }
    }
}

impl From<Date> for DateInput {
    fn from(date: Date) -> Self {
        DateInput::Date(date)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        DateInput::Date(Date(date))
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        DateInput::Text(text)
    }
}

/// Normalises a sequence of date inputs, preserving order.
///
/// Fails on the first input that is not a valid `YYYY-MM-DD` date.
///
/// # Examples
/// ```
/// use premia_core::types::time::{normalise_dates, DateInput};
///
/// let inputs: Vec<DateInput> = vec!["2024-01-03".into(), "2024-01-02".into()];
/// let dates = normalise_dates(&inputs).unwrap();
/// assert_eq!(dates[0].day(), 3);
/// assert_eq!(dates[1].day(), 2);
/// ```
pub fn normalise_dates(inputs: &[DateInput]) -> Result<Vec<Date>, DateError> {
    inputs.iter().map(DateInput::normalise).collect()
}
