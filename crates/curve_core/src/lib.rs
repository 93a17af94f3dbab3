//! # curve_core: Zero-rate curve construction
//!
//! Turns a sparse table of (tenor, zero rate) pairs into a smooth curve that
//! can be sampled on a dense grid for plotting.
//!
//! - Tenor labels (`ON`, `1W`, `3M`, `10Y`) and their conversion to year
//!   offsets (`types::tenor`)
//! - `Date` and the actual/365.25 year fraction (`types::time`)
//! - Cubic spline interpolation, not-a-knot or natural (`math::interpolators`)
//! - `ZeroCurve` and `build_and_evaluate_curve` (`curves`)
//! - Error types: `CurveError`, `DateError`, `InterpolationError` (`types::error`)
//!
//! Everything here is a pure function of its inputs. The reference date is
//! always an explicit argument; callers decide what "today" means.
//!
//! ## Usage Example
//!
//! ```rust
//! use curve_core::curves::build_and_evaluate_curve;
//! use curve_core::math::grid::linspace;
//! use curve_core::types::{tenor_to_years, Date};
//!
//! let reference = Date::from_ymd(2025, 2, 25).unwrap();
//! let rows = [("ON", 4.43), ("3M", 4.448), ("1Y", 4.087), ("5Y", 4.419), ("30Y", 4.589)];
//!
//! let dense = build_and_evaluate_curve(&rows, &linspace(0.0, 30.0, 301), reference).unwrap();
//! assert_eq!(dense.len(), 301);
//!
//! let t_5y = tenor_to_years("5Y", reference).unwrap();
//! let at_5y = build_and_evaluate_curve(&rows, &[t_5y], reference).unwrap();
//! assert!((at_5y[0].rate - 4.419).abs() < 1e-9);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Serialisation for `Date`, `Tenor`, `Pillar`, `CurvePoint`
//!   and the error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod curves;
pub mod math;
pub mod types;
