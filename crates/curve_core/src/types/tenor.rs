//! Tenor labels and their conversion to time offsets.
//!
//! A tenor label is either the overnight sentinel `ON` (one day) or a
//! non-negative integer magnitude followed by a unit letter:
//! `D` (days), `W` (weeks), `M` (calendar months) or `Y` (calendar years).
//!
//! # Examples
//!
//! ```
//! use curve_core::types::tenor::{tenor_to_years, Tenor, TenorUnit};
//! use curve_core::types::time::Date;
//!
//! let tenor: Tenor = "3M".parse().unwrap();
//! assert_eq!(tenor.magnitude(), 3);
//! assert_eq!(tenor.unit(), TenorUnit::Months);
//!
//! let reference = Date::from_ymd(2025, 1, 15).unwrap();
//! // 2025-01-15 -> 2025-04-15 is 90 days
//! let t = tenor_to_years("3M", reference).unwrap();
//! assert!((t - 90.0 / 365.25).abs() < 1e-12);
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::{CurveError, DateError};
use super::time::{year_fraction, Date};

/// Label of the overnight tenor.
pub const OVERNIGHT: &str = "ON";

/// Calendar unit of a tenor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TenorUnit {
    /// Calendar days
    Days,
    /// Weeks of seven days
    Weeks,
    /// Calendar months (end-of-month clamped)
    Months,
    /// Calendar years
    Years,
}

/// Unit letter lookup. Matching is case-insensitive.
const UNIT_TABLE: [(char, TenorUnit); 4] = [
    ('D', TenorUnit::Days),
    ('W', TenorUnit::Weeks),
    ('M', TenorUnit::Months),
    ('Y', TenorUnit::Years),
];

impl TenorUnit {
    /// Resolves a unit letter, ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use curve_core::types::tenor::TenorUnit;
    ///
    /// assert_eq!(TenorUnit::from_char('w'), Some(TenorUnit::Weeks));
    /// assert_eq!(TenorUnit::from_char('X'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        let upper = c.to_ascii_uppercase();
        UNIT_TABLE
            .iter()
            .find(|(letter, _)| *letter == upper)
            .map(|(_, unit)| *unit)
    }

    /// Returns the canonical (upper-case) unit letter.
    pub fn letter(&self) -> char {
        UNIT_TABLE
            .iter()
            .find(|(_, unit)| unit == self)
            .map(|(letter, _)| *letter)
            .unwrap_or('?')
    }

    /// Advances `date` by `n` of this unit.
    fn advance(&self, date: Date, n: u32) -> Result<Date, DateError> {
        match self {
            TenorUnit::Days => date.add_days(n),
            TenorUnit::Weeks => date.add_weeks(n),
            TenorUnit::Months => date.add_months(n),
            TenorUnit::Years => date.add_years(n),
        }
    }
}

/// A parsed tenor: magnitude and calendar unit.
///
/// `ON` parses to one day and keeps its label when displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tenor {
    magnitude: u32,
    unit: TenorUnit,
    overnight: bool,
}

impl Tenor {
    /// Creates a tenor from a magnitude and unit.
    pub fn new(magnitude: u32, unit: TenorUnit) -> Self {
        Self {
            magnitude,
            unit,
            overnight: false,
        }
    }

    /// The overnight tenor (one day).
    pub fn overnight() -> Self {
        Self {
            magnitude: 1,
            unit: TenorUnit::Days,
            overnight: true,
        }
    }

    /// Returns the magnitude.
    pub fn magnitude(&self) -> u32 {
        self.magnitude
    }

    /// Returns the calendar unit.
    pub fn unit(&self) -> TenorUnit {
        self.unit
    }

    /// Returns the date reached by adding this tenor to `reference`.
    pub fn add_to(&self, reference: Date) -> Result<Date, CurveError> {
        self.unit
            .advance(reference, self.magnitude)
            .map_err(|e| CurveError::InvalidTenorFormat(format!("{}: {}", self, e)))
    }

    /// Time offset in years from `reference` (actual days / 365.25).
    pub fn year_fraction(&self, reference: Date) -> Result<f64, CurveError> {
        let end = self.add_to(reference)?;
        Ok(year_fraction(reference, end))
    }
}

impl FromStr for Tenor {
    type Err = CurveError;

    fn from_str(label: &str) -> Result<Self, CurveError> {
        if label == OVERNIGHT {
            return Ok(Tenor::overnight());
        }

        let invalid = || CurveError::InvalidTenorFormat(label.to_string());

        let mut chars = label.chars();
        let unit_char = chars.next_back().ok_or_else(invalid)?;
        let unit = TenorUnit::from_char(unit_char).ok_or_else(invalid)?;

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let magnitude = digits.parse::<u32>().map_err(|_| invalid())?;

        Ok(Tenor::new(magnitude, unit))
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.overnight {
            write!(f, "{}", OVERNIGHT)
        } else {
            write!(f, "{}{}", self.magnitude, self.unit.letter())
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Tenor;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Tenor {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Tenor {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(serde::de::Error::custom)
        }
    }
}

/// Converts a tenor label to a time offset in years from `reference`.
///
/// `ON` is treated as `1D`. The result is
/// `(reference + tenor - reference).days / 365.25`.
///
/// # Errors
///
/// `CurveError::InvalidTenorFormat` when the trailing character is not one of
/// D/W/M/Y, when the leading part is not a non-negative integer, or when the
/// resulting date is outside the supported calendar.
///
/// # Examples
///
/// ```
/// use curve_core::types::tenor::tenor_to_years;
/// use curve_core::types::time::Date;
/// use curve_core::types::CurveError;
///
/// let reference = Date::from_ymd(2025, 3, 1).unwrap();
/// assert_eq!(
///     tenor_to_years("ON", reference).unwrap(),
///     tenor_to_years("1D", reference).unwrap()
/// );
/// assert!(matches!(
///     tenor_to_years("5X", reference),
///     Err(CurveError::InvalidTenorFormat(_))
/// ));
/// ```
pub fn tenor_to_years(label: &str, reference: Date) -> Result<f64, CurveError> {
    label.parse::<Tenor>()?.year_fraction(reference)
}
