//! Cubic spline interpolation with natural or not-a-knot end conditions.

use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// End condition used to close the spline system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SplineBoundary {
    /// Third derivative continuous across the second and penultimate knots.
    ///
    /// With three knots the spline is the parabola through them; with four
    /// it is the single cubic through them.
    #[default]
    NotAKnot,

    /// Zero second derivative at both end knots.
    Natural,
}

impl SplineBoundary {
    /// Returns the boundary name used in configuration and output.
    pub fn name(&self) -> &'static str {
        match self {
            SplineBoundary::NotAKnot => "not-a-knot",
            SplineBoundary::Natural => "natural",
        }
    }
}

impl std::fmt::Display for SplineBoundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for SplineBoundary {
    type Err = InterpolationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "not-a-knot" | "notaknot" | "not_a_knot" => Ok(SplineBoundary::NotAKnot),
            "natural" => Ok(SplineBoundary::Natural),
            _ => Err(InterpolationError::InvalidInput(format!(
                "unknown spline boundary: {}",
                s
            ))),
        }
    }
}

/// Polynomial coefficients for a cubic spline segment.
///
/// Represents a cubic polynomial: `y = a + b*(x-xi) + c*(x-xi)² + d*(x-xi)³`
#[derive(Debug, Clone, Copy)]
struct SplineCoeffs<T: Float> {
    a: T,
    b: T,
    c: T,
    d: T,
}

/// Cubic spline interpolator with C² continuity.
///
/// Passes exactly through every knot. No shape constraints are applied, so
/// the spline may overshoot between knots.
///
/// # Construction
///
/// Data points are sorted by x-coordinate during construction; repeated
/// x-coordinates are rejected. At least 2 data points are required. With
/// exactly 2 the spline is the straight line through them.
///
/// # Example
///
/// ```
/// use curve_core::math::interpolators::{CubicSplineInterpolator, Interpolator};
///
/// let xs: [f64; 4] = [0.0, 1.0, 2.0, 3.0];
/// let ys = [0.0, 1.0, 8.0, 27.0];
///
/// // Not-a-knot through four points of y = x³ recovers the cubic.
/// let interp = CubicSplineInterpolator::new(&xs, &ys).unwrap();
/// assert!((interp.interpolate(1.5).unwrap() - 3.375).abs() < 1e-12);
///
/// // Outside the domain the end segments are extended.
/// assert!((interp.extrapolate(4.0) - 64.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSplineInterpolator<T: Float> {
    /// Sorted x-coordinates
    xs: Vec<T>,
    /// Polynomial coefficients for each segment
    coeffs: Vec<SplineCoeffs<T>>,
    boundary: SplineBoundary,
}

impl<T: Float> CubicSplineInterpolator<T> {
    /// Construct a not-a-knot cubic spline from x and y data points.
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 data points
    /// * `Err(InterpolationError::DuplicateAbscissa)` - Repeated x-coordinate
    /// * `Err(InterpolationError::InvalidInput)` - Mismatched lengths or non-finite data
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        Self::with_boundary(xs, ys, SplineBoundary::NotAKnot)
    }

    /// Construct a cubic spline with the given end condition.
    ///
    /// # Example
    ///
    /// ```
    /// use curve_core::math::interpolators::{CubicSplineInterpolator, SplineBoundary};
    ///
    /// let natural = CubicSplineInterpolator::with_boundary(
    ///     &[0.0, 1.0, 2.0],
    ///     &[0.0, 1.0, 4.0],
    ///     SplineBoundary::Natural,
    /// ).unwrap();
    /// assert_eq!(natural.boundary(), SplineBoundary::Natural);
    ///
    /// assert!(CubicSplineInterpolator::with_boundary(&[1.0], &[1.0], SplineBoundary::Natural).is_err());
    /// ```
    pub fn with_boundary(
        xs: &[T],
        ys: &[T],
        boundary: SplineBoundary,
    ) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "xs and ys must have same length: got {} and {}",
                xs.len(),
                ys.len()
            )));
        }

        if xs.len() < 2 {
            return Err(InterpolationError::InsufficientData {
                got: xs.len(),
                need: 2,
            });
        }

        if let Some(i) = xs
            .iter()
            .zip(ys.iter())
            .position(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(InterpolationError::InvalidInput(format!(
                "non-finite data point at index {}",
                i
            )));
        }

        let mut pairs: Vec<(T, T)> = xs.iter().copied().zip(ys.iter().copied()).collect();
        pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        if let Some(w) = pairs.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(InterpolationError::DuplicateAbscissa {
                x: w[0].0.to_f64().unwrap_or(f64::NAN),
            });
        }

        let (sorted_xs, sorted_ys): (Vec<T>, Vec<T>) = pairs.into_iter().unzip();

        let m = Self::second_derivatives(&sorted_xs, &sorted_ys, boundary);
        let coeffs = Self::compute_coefficients(&sorted_xs, &sorted_ys, &m);

        Ok(Self {
            xs: sorted_xs,
            coeffs,
            boundary,
        })
    }

    /// Solve for the second derivative `M[i]` at every knot.
    fn second_derivatives(xs: &[T], ys: &[T], boundary: SplineBoundary) -> Vec<T> {
        let n = xs.len();
        let two = T::from(2.0).unwrap();
        let six = T::from(6.0).unwrap();

        if n == 2 {
            return vec![T::zero(); 2];
        }

        let h: Vec<T> = (0..n - 1).map(|i| xs[i + 1] - xs[i]).collect();
        let slope: Vec<T> = (0..n - 1).map(|i| (ys[i + 1] - ys[i]) / h[i]).collect();

        if n == 3 && boundary == SplineBoundary::NotAKnot {
            // Parabola: constant second derivative
            let m = two * (slope[1] - slope[0]) / (h[0] + h[1]);
            return vec![m; 3];
        }

        // Interior equations for knots 1..n-1:
        // h[k-1]*M[k-1] + 2*(h[k-1]+h[k])*M[k] + h[k]*M[k+1] = 6*(slope[k] - slope[k-1])
        let interior = n - 2;
        let mut sub = Vec::with_capacity(interior);
        let mut diag = Vec::with_capacity(interior);
        let mut sup = Vec::with_capacity(interior);
        let mut rhs = Vec::with_capacity(interior);
        for k in 1..n - 1 {
            sub.push(h[k - 1]);
            diag.push(two * (h[k - 1] + h[k]));
            sup.push(h[k]);
            rhs.push(six * (slope[k] - slope[k - 1]));
        }

        let mut m = vec![T::zero(); n];

        match boundary {
            SplineBoundary::Natural => {
                let inner = solve_tridiagonal(&sub, &diag, &sup, &rhs);
                m[1..n - 1].copy_from_slice(&inner);
            }
            SplineBoundary::NotAKnot => {
                // Eliminate M[0] and M[n-1] using continuity of the third
                // derivative at knots 1 and n-2.
                let (h0, h1) = (h[0], h[1]);
                diag[0] = (h0 + h1) * (h0 + two * h1) / h1;
                sup[0] = (h1 * h1 - h0 * h0) / h1;

                let (a, b) = (h[n - 3], h[n - 2]);
                let last = interior - 1;
                sub[last] = (a * a - b * b) / a;
                diag[last] = (a + b) * (two * a + b) / a;

                let inner = solve_tridiagonal(&sub, &diag, &sup, &rhs);
                m[1..n - 1].copy_from_slice(&inner);

                m[0] = ((h0 + h1) * m[1] - h0 * m[2]) / h1;
                m[n - 1] = ((a + b) * m[n - 2] - b * m[n - 3]) / a;
            }
        }

        m
    }

    /// Compute polynomial coefficients for each segment from the knot
    /// second derivatives.
    fn compute_coefficients(xs: &[T], ys: &[T], m: &[T]) -> Vec<SplineCoeffs<T>> {
        let two = T::from(2.0).unwrap();
        let six = T::from(6.0).unwrap();

        (0..xs.len() - 1)
            .map(|i| {
                let h = xs[i + 1] - xs[i];
                SplineCoeffs {
                    a: ys[i],
                    b: (ys[i + 1] - ys[i]) / h - h * (two * m[i] + m[i + 1]) / six,
                    c: m[i] / two,
                    d: (m[i + 1] - m[i]) / (six * h),
                }
            })
            .collect()
    }

    /// Find the segment index using binary search.
    ///
    /// Returns the index `i` such that `xs[i] <= x < xs[i+1]`,
    /// clamped to valid segment range [0, n-2].
    #[inline]
    fn find_segment(&self, x: T) -> usize {
        let pos = self.xs.partition_point(|&xi| xi <= x);
        if pos == 0 {
            0
        } else if pos >= self.xs.len() {
            self.xs.len() - 2
        } else {
            pos - 1
        }
    }

    /// Evaluate the spline at any `x`.
    ///
    /// Outside the domain the first or last segment polynomial is extended.
    /// The result is unbounded and can diverge quickly away from the knots.
    #[inline]
    pub fn extrapolate(&self, x: T) -> T {
        let i = self.find_segment(x);
        let s = &self.coeffs[i];
        let dx = x - self.xs[i];
        s.a + dx * (s.b + dx * (s.c + dx * s.d))
    }

    /// First derivative at `x` (end segments extended outside the domain).
    pub fn derivative(&self, x: T) -> T {
        let two = T::from(2.0).unwrap();
        let three = T::from(3.0).unwrap();
        let i = self.find_segment(x);
        let s = &self.coeffs[i];
        let dx = x - self.xs[i];
        s.b + dx * (two * s.c + three * s.d * dx)
    }

    /// Second derivative at `x` (end segments extended outside the domain).
    pub fn second_derivative(&self, x: T) -> T {
        let two = T::from(2.0).unwrap();
        let six = T::from(6.0).unwrap();
        let i = self.find_segment(x);
        let s = &self.coeffs[i];
        two * s.c + six * s.d * (x - self.xs[i])
    }

    /// Returns a reference to the sorted x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns the end condition the spline was built with.
    #[inline]
    pub fn boundary(&self) -> SplineBoundary {
        self.boundary
    }

    /// Returns the number of knots.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if the interpolator has no knots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

impl<T: Float> Interpolator<T> for CubicSplineInterpolator<T> {
    /// Interpolate value at point `x` inside the knot range.
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::OutOfBounds)` - If `x` is outside the domain
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        let (x_min, x_max) = self.domain();

        if !(x >= x_min && x <= x_max) {
            return Err(InterpolationError::OutOfBounds {
                x: x.to_f64().unwrap_or(f64::NAN),
                min: x_min.to_f64().unwrap_or(f64::NAN),
                max: x_max.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(self.extrapolate(x))
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}

/// Thomas algorithm for a tridiagonal system.
///
/// `sub[0]` and `sup[n-1]` are ignored. The callers only build diagonally
/// dominant systems, so no pivoting is done.
fn solve_tridiagonal<T: Float>(sub: &[T], diag: &[T], sup: &[T], rhs: &[T]) -> Vec<T> {
    let n = diag.len();
    let mut c_prime = vec![T::zero(); n];
    let mut d_prime = vec![T::zero(); n];

    c_prime[0] = sup[0] / diag[0];
    d_prime[0] = rhs[0] / diag[0];

    for i in 1..n {
        let denom = diag[i] - sub[i] * c_prime[i - 1];
        if i < n - 1 {
            c_prime[i] = sup[i] / denom;
        }
        d_prime[i] = (rhs[i] - sub[i] * d_prime[i - 1]) / denom;
    }

    let mut x = vec![T::zero(); n];
    x[n - 1] = d_prime[n - 1];
    for i in (0..n - 1).rev() {
        x[i] = d_prime[i] - c_prime[i] * x[i + 1];
    }
    x
}
