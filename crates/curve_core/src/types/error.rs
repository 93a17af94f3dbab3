//! Error types for structured error handling.
//!
//! This module provides:
//! - `CurveError`: Errors from tenor parsing and curve construction
//! - `DateError`: Errors from date construction and parsing
//! - `InterpolationError`: Errors from interpolation operations

use std::fmt;
use thiserror::Error;

/// Curve construction errors.
///
/// Every variant is a caller error. Nothing is recovered or substituted: the
/// operation that raised it produced no partial output.
///
/// # Variants
/// - `InvalidTenorFormat`: Malformed tenor label
/// - `InsufficientPoints`: Fewer than 2 usable rate points
/// - `DuplicateOrUnsortedAbscissa`: Two points resolve to the same time offset
/// - `NonFiniteValue`: NaN or infinite rate or query offset
/// - `Interpolation`: Wrapped interpolation error
///
/// # Examples
/// ```
/// use curve_core::types::CurveError;
///
/// let err = CurveError::InvalidTenorFormat("5X".to_string());
/// assert_eq!(format!("{}", err), "Invalid tenor format: 5X");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveError {
    /// Tenor label is not `ON` or `<int><D|W|M|Y>`.
    #[error("Invalid tenor format: {0}")]
    InvalidTenorFormat(String),

    /// Not enough rate points to fit a spline.
    #[error("Insufficient points: got {got}, need at least {need}")]
    InsufficientPoints {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Two rate points map to the same time offset.
    #[error("Duplicate or unsorted abscissa at t = {t}")]
    DuplicateOrUnsortedAbscissa {
        /// The offending time offset (years)
        t: f64,
    },

    /// A rate or query offset is NaN or infinite.
    #[error("Non-finite value: {0}")]
    NonFiniteValue(String),

    /// Interpolation error not covered by the variants above.
    #[error("Interpolation error: {0}")]
    Interpolation(InterpolationError),
}

impl From<InterpolationError> for CurveError {
    fn from(err: InterpolationError) -> Self {
        match err {
            InterpolationError::InsufficientData { got, need } => {
                CurveError::InsufficientPoints { got, need }
            }
            InterpolationError::DuplicateAbscissa { x } => {
                CurveError::DuplicateOrUnsortedAbscissa { t: x }
            }
            other => CurveError::Interpolation(other),
        }
    }
}

/// Date-related errors.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `ParseError`: Failed to parse date string
/// - `OutOfRange`: Date arithmetic left the representable calendar
///
/// # Examples
/// ```
/// use curve_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    ParseError(String),

    /// Date arithmetic overflowed the supported calendar.
    OutOfRange(String),
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateError::InvalidDate { year, month, day } => {
                write!(f, "Invalid date: {}-{}-{}", year, month, day)
            }
            DateError::ParseError(msg) => write!(f, "Date parse error: {}", msg),
            DateError::OutOfRange(msg) => write!(f, "Date out of range: {}", msg),
        }
    }
}

impl std::error::Error for DateError {}

/// Interpolation-related errors.
///
/// # Variants
/// - `OutOfBounds`: Query point outside valid interpolation domain
/// - `InsufficientData`: Not enough data points for interpolation
/// - `DuplicateAbscissa`: Two knots share the same x-coordinate
/// - `InvalidInput`: General invalid input error
///
/// # Examples
/// ```
/// use curve_core::types::InterpolationError;
///
/// let err = InterpolationError::OutOfBounds { x: 5.0, min: 0.0, max: 3.0 };
/// assert!(format!("{}", err).contains("outside valid domain"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Query point outside valid interpolation domain.
    #[error("Query point {x} outside valid domain [{min}, {max}]")]
    OutOfBounds {
        /// The query point that was out of bounds
        x: f64,
        /// Minimum valid value
        min: f64,
        /// Maximum valid value
        max: f64,
    },

    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Two knots share an x-coordinate after sorting.
    #[error("Duplicate abscissa at x = {x}")]
    DuplicateAbscissa {
        /// The repeated x-coordinate
        x: f64,
    },

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
