//! Time, tenor and error types.
//!
//! This module provides:
//! - `time`: `Date` and the 365.25-day year fraction
//! - `tenor`: Tenor labels (`ON`, `3M`, `10Y`) and their conversion to years
//! - `error`: Structured error types for curve, date and interpolation operations
//!
//! # Re-exports
//!
//! - [`Date`], [`year_fraction`] from `time`
//! - [`Tenor`], [`TenorUnit`], [`tenor_to_years`] from `tenor`
//! - [`CurveError`], [`DateError`], [`InterpolationError`] from `error`

pub mod error;
pub mod tenor;
pub mod time;

pub use error::{CurveError, DateError, InterpolationError};
pub use tenor::{tenor_to_years, Tenor, TenorUnit};
pub use time::{year_fraction, Date};
