//! Numerical building blocks.
//!
//! - `interpolators`: Cubic spline interpolation
//! - `grid`: Uniform query grids for dense curve output

pub mod grid;
pub mod interpolators;
