//! Interpolation methods for numerical computation.
//!
//! All interpolators are generic over `T: num_traits::Float`.
//!
//! ## Available Interpolators
//!
//! - [`CubicSplineInterpolator`]: C² cubic spline with a selectable
//!   [`SplineBoundary`] (not-a-knot or natural)
//!
//! ## Core Trait
//!
//! [`Interpolator`] defines:
//! - `interpolate(x: T) -> Result<T, InterpolationError>`: value inside the domain
//! - `domain() -> (T, T)`: valid interpolation range
//!
//! ## Example
//!
//! ```
//! use curve_core::math::interpolators::{CubicSplineInterpolator, Interpolator};
//!
//! let xs: [f64; 4] = [0.0, 1.0, 2.0, 3.0];
//! let ys = [0.0, 1.0, 4.0, 9.0];
//!
//! let interp = CubicSplineInterpolator::new(&xs, &ys).unwrap();
//! assert_eq!(interp.domain(), (0.0, 3.0));
//! assert!((interp.interpolate(2.0).unwrap() - 4.0).abs() < 1e-12);
//! ```
//!
//! [`InterpolationError`]: crate::types::InterpolationError

mod cubic_spline;
mod traits;

pub use cubic_spline::{CubicSplineInterpolator, SplineBoundary};
pub use traits::Interpolator;
