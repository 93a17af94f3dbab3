//! Zero-rate curve built from (tenor, rate) pillars.

use crate::math::interpolators::{CubicSplineInterpolator, Interpolator, SplineBoundary};
use crate::types::{CurveError, Date, Tenor};

/// Minimum number of pillars needed to fit a curve.
pub const MIN_PILLARS: usize = 2;

/// One input point of a curve after tenor conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pillar {
    /// Source tenor, when the pillar was built from a label
    pub tenor: Option<Tenor>,
    /// Time offset in years
    pub t: f64,
    /// Zero rate in percent
    pub rate: f64,
}

/// One evaluated point of a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurvePoint {
    /// Query time offset in years
    pub t: f64,
    /// Interpolated zero rate in percent
    pub rate: f64,
}

/// Cubic spline zero curve.
///
/// Built once from its pillars and immutable afterwards. Evaluation inside
/// the pillar range interpolates; outside it the end segments' cubics are
/// extended without any bound.
///
/// # Example
///
/// ```
/// use curve_core::curves::ZeroCurve;
/// use curve_core::math::interpolators::SplineBoundary;
///
/// let curve = ZeroCurve::from_points(
///     &[(1.0, 4.0), (2.0, 5.0), (3.0, 4.5)],
///     SplineBoundary::NotAKnot,
/// ).unwrap();
///
/// let points = curve.evaluate(&[1.0, 2.0, 3.0]).unwrap();
/// let rates: Vec<f64> = points.iter().map(|p| p.rate).collect();
/// assert!((rates[0] - 4.0).abs() < 1e-9);
/// assert!((rates[1] - 5.0).abs() < 1e-9);
/// assert!((rates[2] - 4.5).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct ZeroCurve {
    spline: CubicSplineInterpolator<f64>,
    /// Pillars sorted by time offset
    pillars: Vec<Pillar>,
}

impl ZeroCurve {
    /// Build a curve from (time offset, rate) pairs.
    ///
    /// Pairs are sorted by time offset before fitting.
    ///
    /// # Errors
    ///
    /// * `CurveError::InsufficientPoints` - Fewer than 2 pairs
    /// * `CurveError::NonFiniteValue` - NaN or infinite time or rate
    /// * `CurveError::DuplicateOrUnsortedAbscissa` - Two pairs share a time offset
    pub fn from_points(points: &[(f64, f64)], boundary: SplineBoundary) -> Result<Self, CurveError> {
        let pillars = points
            .iter()
            .map(|&(t, rate)| Pillar {
                tenor: None,
                t,
                rate,
            })
            .collect();
        Self::from_pillars(pillars, boundary)
    }

    /// Build a curve from (tenor label, rate) rows.
    ///
    /// Each label is converted with [`Tenor::year_fraction`] against
    /// `reference`. Rows may come in any order.
    ///
    /// # Errors
    ///
    /// * `CurveError::InvalidTenorFormat` - A label is malformed
    /// * `CurveError::InsufficientPoints` - Fewer than 2 rows
    /// * `CurveError::NonFiniteValue` - NaN or infinite rate
    /// * `CurveError::DuplicateOrUnsortedAbscissa` - Two labels resolve to the same offset
    ///
    /// # Example
    ///
    /// ```
    /// use curve_core::curves::ZeroCurve;
    /// use curve_core::math::interpolators::SplineBoundary;
    /// use curve_core::types::{CurveError, Date};
    ///
    /// let reference = Date::from_ymd(2025, 2, 25).unwrap();
    /// let result = ZeroCurve::from_tenors(
    ///     &[("1Y", 4.0), ("12M", 4.1)],
    ///     reference,
    ///     SplineBoundary::NotAKnot,
    /// );
    /// assert!(matches!(result, Err(CurveError::DuplicateOrUnsortedAbscissa { .. })));
    /// ```
    pub fn from_tenors<S: AsRef<str>>(
        rows: &[(S, f64)],
        reference: Date,
        boundary: SplineBoundary,
    ) -> Result<Self, CurveError> {
        let pillars = rows
            .iter()
            .map(|(label, rate)| {
                let tenor: Tenor = label.as_ref().parse()?;
                Ok::<_, CurveError>(Pillar {
                    tenor: Some(tenor),
                    t: tenor.year_fraction(reference)?,
                    rate: *rate,
                })
            })
            .collect::<Result<Vec<_>, CurveError>>()?;
        Self::from_pillars(pillars, boundary)
    }

    fn from_pillars(mut pillars: Vec<Pillar>, boundary: SplineBoundary) -> Result<Self, CurveError> {
        if pillars.len() < MIN_PILLARS {
            return Err(CurveError::InsufficientPoints {
                got: pillars.len(),
                need: MIN_PILLARS,
            });
        }

        if let Some(p) = pillars.iter().find(|p| !p.t.is_finite() || !p.rate.is_finite()) {
            return Err(CurveError::NonFiniteValue(match p.tenor {
                Some(tenor) => format!("pillar {} has rate {}", tenor, p.rate),
                None => format!("pillar ({}, {})", p.t, p.rate),
            }));
        }

        pillars.sort_by(|a, b| a.t.total_cmp(&b.t));
        if let Some(w) = pillars.windows(2).find(|w| w[0].t == w[1].t) {
            return Err(CurveError::DuplicateOrUnsortedAbscissa { t: w[0].t });
        }

        let xs: Vec<f64> = pillars.iter().map(|p| p.t).collect();
        let ys: Vec<f64> = pillars.iter().map(|p| p.rate).collect();
        let spline = CubicSplineInterpolator::with_boundary(&xs, &ys, boundary)?;

        Ok(Self { spline, pillars })
    }

    /// Zero rate at time offset `t`, extrapolating outside the pillar range.
    #[inline]
    pub fn rate(&self, t: f64) -> f64 {
        self.spline.extrapolate(t)
    }

    /// Evaluate the curve at every query offset, in the order given.
    ///
    /// Either every point is finite or nothing is returned.
    ///
    /// # Errors
    ///
    /// `CurveError::NonFiniteValue` if any query is NaN or infinite, or if
    /// extrapolating to a query overflows.
    pub fn evaluate(&self, queries: &[f64]) -> Result<Vec<CurvePoint>, CurveError> {
        if let Some((i, t)) = queries.iter().enumerate().find(|(_, t)| !t.is_finite()) {
            return Err(CurveError::NonFiniteValue(format!(
                "query offset {} at index {}",
                t, i
            )));
        }

        let points: Vec<CurvePoint> = queries
            .iter()
            .map(|&t| CurvePoint {
                t,
                rate: self.rate(t),
            })
            .collect();

        if let Some((i, p)) = points.iter().enumerate().find(|(_, p)| !p.rate.is_finite()) {
            return Err(CurveError::NonFiniteValue(format!(
                "rate {} at query offset {} (index {})",
                p.rate, p.t, i
            )));
        }

        Ok(points)
    }

    /// Pillars sorted by time offset.
    pub fn pillars(&self) -> &[Pillar] {
        &self.pillars
    }

    /// Time range spanned by the pillars.
    pub fn domain(&self) -> (f64, f64) {
        self.spline.domain()
    }

    /// End condition of the underlying spline.
    pub fn boundary(&self) -> SplineBoundary {
        self.spline.boundary()
    }
}

/// Build a zero curve from (tenor label, rate) rows and evaluate it at each
/// query offset.
///
/// Uses the not-a-knot spline. The output has the same length and order as
/// `queries`. Nothing is cached: every call fits a fresh curve.
///
/// # Errors
///
/// See [`ZeroCurve::from_tenors`] and [`ZeroCurve::evaluate`].
///
/// # Example
///
/// ```
/// use curve_core::curves::build_and_evaluate_curve;
/// use curve_core::math::grid::linspace;
/// use curve_core::types::Date;
///
/// let reference = Date::from_ymd(2025, 2, 25).unwrap();
/// let rows = [("1M", 4.496), ("1Y", 4.087), ("10Y", 4.778), ("30Y", 4.589)];
///
/// let curve = build_and_evaluate_curve(&rows, &linspace(0.0, 30.0, 1001), reference).unwrap();
/// assert_eq!(curve.len(), 1001);
/// assert!(curve.iter().all(|p| p.rate.is_finite()));
/// ```
pub fn build_and_evaluate_curve<S: AsRef<str>>(
    rows: &[(S, f64)],
    queries: &[f64],
    reference: Date,
) -> Result<Vec<CurvePoint>, CurveError> {
    ZeroCurve::from_tenors(rows, reference, SplineBoundary::default())?.evaluate(queries)
}
