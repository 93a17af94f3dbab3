//! Uniform evaluation grids.

/// `n` evenly spaced values from `start` to `end`, both included.
///
/// Returns an empty vector for `n == 0` and `[start]` for `n == 1`. The last
/// value is exactly `end`.
///
/// # Examples
///
/// ```
/// use curve_core::math::grid::linspace;
///
/// let grid = linspace(0.0, 30.0, 1001);
/// assert_eq!(grid.len(), 1001);
/// assert_eq!(grid[0], 0.0);
/// assert!((grid[1] - 0.03).abs() < 1e-15);
/// assert_eq!(grid[1000], 30.0);
/// ```
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut grid: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            grid[n - 1] = end;
            grid
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linspace_degenerate_sizes() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
        assert_eq!(linspace(2.0, 5.0, 2), vec![2.0, 5.0]);
    }

    #[test]
    fn test_linspace_uniform_spacing() {
        let grid = linspace(0.0, 30.0, 101);
        for pair in grid.windows(2) {
            assert_relative_eq!(pair[1] - pair[0], 0.3, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_linspace_descending() {
        let grid = linspace(1.0, 0.0, 5);
        assert_eq!(grid, vec![1.0, 0.75, 0.5, 0.25, 0.0]);
    }
}
