//! Date type and the year-fraction approximation used for curve time offsets.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - Calendar arithmetic (days, weeks, months, years) with end-of-month clamping
//! - `year_fraction`: actual days / 365.25
//!
//! # Examples
//!
//! ```
//! use curve_core::types::time::{year_fraction, Date};
//!
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let end = Date::from_ymd(2025, 1, 1).unwrap();
//!
//! // 366 days / 365.25
//! let yf = year_fraction(start, end);
//! assert!((yf - 1.00205).abs() < 1e-5);
//! ```

use chrono::{Datelike, Days, Local, Months, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Average number of days per year, leap years included.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 serialisation and the calendar arithmetic needed to
/// resolve tenor labels.
///
/// # Examples
///
/// ```
/// use curve_core::types::time::Date;
///
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(date.year(), 2024);
///
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 1, 11).unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use curve_core::types::time::Date;
    ///
    /// assert!(Date::from_ymd(2024, 2, 29).is_ok());
    /// assert!(Date::from_ymd(2024, 2, 30).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Returns today's date based on local system time.
    pub fn today() -> Self {
        Date(Local::now().date_naive())
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Examples
    ///
    /// ```
    /// use curve_core::types::time::Date;
    ///
    /// assert_eq!(Date::parse("2024-06-15").unwrap().month(), 6);
    /// assert!(Date::parse("not-a-date").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(e.to_string()))
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

    /// Returns the day-of-month component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Adds `n` calendar days.
    pub fn add_days(self, n: u32) -> Result<Self, DateError> {
        self.0
            .checked_add_days(Days::new(u64::from(n)))
            .map(Date)
            .ok_or_else(|| DateError::OutOfRange(format!("{} + {} days", self, n)))
    }

    /// Adds `n` weeks of seven days.
    pub fn add_weeks(self, n: u32) -> Result<Self, DateError> {
        self.0
            .checked_add_days(Days::new(u64::from(n) * 7))
            .map(Date)
            .ok_or_else(|| DateError::OutOfRange(format!("{} + {} weeks", self, n)))
    }

    /// Adds `n` calendar months, clamping to the last day of the target month.
    ///
    /// # Examples
    ///
    /// ```
    /// use curve_core::types::time::Date;
    ///
    /// let jan31 = Date::from_ymd(2024, 1, 31).unwrap();
    /// assert_eq!(jan31.add_months(1).unwrap(), Date::from_ymd(2024, 2, 29).unwrap());
    /// ```
    pub fn add_months(self, n: u32) -> Result<Self, DateError> {
        self.0
            .checked_add_months(Months::new(n))
            .map(Date)
            .ok_or_else(|| DateError::OutOfRange(format!("{} + {} months", self, n)))
    }

    /// Adds `n` calendar years. 29 February rolls back to 28 February in
    /// non-leap target years.
    pub fn add_years(self, n: u32) -> Result<Self, DateError> {
        let months = n
            .checked_mul(12)
            .ok_or_else(|| DateError::OutOfRange(format!("{} + {} years", self, n)))?;
        self.0
            .checked_add_months(Months::new(months))
            .map(Date)
            .ok_or_else(|| DateError::OutOfRange(format!("{} + {} years", self, n)))
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
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
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

/// Year fraction between two dates as actual days / 365.25.
///
/// An approximation, not a market day-count convention. Negative when
/// `end` is before `start`.
///
/// # Examples
///
/// ```
/// use curve_core::types::time::{year_fraction, Date};
///
/// let start = Date::from_ymd(2023, 1, 1).unwrap();
/// let end = Date::from_ymd(2023, 1, 2).unwrap();
/// assert_eq!(year_fraction(start, end), 1.0 / 365.25);
/// assert!(year_fraction(end, start) < 0.0);
/// ```
pub fn year_fraction(start: Date, end: Date) -> f64 {
    (end - start) as f64 / DAYS_PER_YEAR
}
