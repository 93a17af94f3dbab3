//! Zero-rate curves.
//!
//! - [`ZeroCurve`]: cubic spline through (time offset, rate) pillars
//! - [`build_and_evaluate_curve`]: one-shot construction and evaluation from
//!   tenor labels

mod zero_curve;

pub use zero_curve::{build_and_evaluate_curve, CurvePoint, Pillar, ZeroCurve, MIN_PILLARS};
