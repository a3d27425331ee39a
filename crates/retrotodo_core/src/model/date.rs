//! Calendar date used for item due days.
//!
//! # Responsibility
//! - Wrap `chrono::NaiveDate` with the year range the list can render.
//! - Provide the single `YYYY-MM-DD` rendering used everywhere.
//!
//! # Invariants
//! - Year is always within `MIN_YEAR..=MAX_YEAR`, so rendering is exactly
//!   10 characters.
//! - Rendering reads the date's own calendar fields; no timezone conversion.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Smallest year accepted by `TodoDate`.
pub const MIN_YEAR: i32 = 1;
/// Largest year accepted by `TodoDate`.
pub const MAX_YEAR: i32 = 9999;

const RENDERED_DATE_LEN: usize = 10;
const RENDERED_DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar day (year, month, day) attached to a to-do item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TodoDate(NaiveDate);

impl TodoDate {
    /// Builds a date from calendar fields.
    ///
    /// # Errors
    /// - `InvalidDate` when the fields do not name a real day (e.g. Feb 30).
    /// - `OutOfRange` when the year is outside `MIN_YEAR..=MAX_YEAR`.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, TodoDateError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(TodoDateError::InvalidDate { year, month, day })?;
        Self::from_naive(date)
    }

    /// Wraps an existing `NaiveDate` after range validation.
    pub fn from_naive(date: NaiveDate) -> Result<Self, TodoDateError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
            return Err(TodoDateError::OutOfRange(date.year()));
        }
        Ok(Self(date))
    }

    /// Returns today's date in the device's local calendar.
    pub fn today() -> Self {
        // Local clock years are always inside the supported range.
        Self(Local::now().date_naive())
    }

    /// Parses the strict `YYYY-MM-DD` rendering produced by `format_date`.
    pub fn parse(value: &str) -> Result<Self, TodoDateError> {
        if value.len() != RENDERED_DATE_LEN {
            return Err(TodoDateError::Parse(value.to_string()));
        }
        let date = NaiveDate::parse_from_str(value, RENDERED_DATE_FORMAT)
            .map_err(|_| TodoDateError::Parse(value.to_string()))?;
        Self::from_naive(date)
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    pub fn as_naive(self) -> NaiveDate {
        self.0
    }
}

/// Renders a date as zero-padded `YYYY-MM-DD`.
///
/// Total over every valid `TodoDate` and always 10 characters long.
pub fn format_date(date: TodoDate) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month(),
        date.day()
    )
}

impl Display for TodoDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_date(*self))
    }
}

impl TryFrom<String> for TodoDate {
    type Error = TodoDateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value.as_str())
    }
}

impl From<TodoDate> for String {
    fn from(value: TodoDate) -> Self {
        format_date(value)
    }
}

/// Date construction and parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoDateError {
    /// Fields do not form a real calendar day.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Year cannot be rendered with four digits.
    OutOfRange(i32),
    /// Text is not a strict `YYYY-MM-DD` date.
    Parse(String),
}

impl Display for TodoDateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "not a calendar date: year={year} month={month} day={day}")
            }
            Self::OutOfRange(year) => write!(
                f,
                "year {year} is outside supported range {MIN_YEAR}..={MAX_YEAR}"
            ),
            Self::Parse(value) => write!(f, "expected YYYY-MM-DD date, got `{value}`"),
        }
    }
}

impl Error for TodoDateError {}
