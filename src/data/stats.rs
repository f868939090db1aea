//! Summary statistics for the plotted series.

/// A least-squares line fitted through a set of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    /// Slope of the fitted line.
    pub slope: f64,
    /// Y-intercept of the fitted line.
    pub intercept: f64,
}

impl LinearFit {
    /// Evaluate the fitted line at `x`.
    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit a least-squares line through `points`.
///
/// Returns `None` for fewer than two points, or when every x-value
/// coincides and the slope is undefined.
pub fn linear_fit(points: &[(f64, f64)]) -> Option<LinearFit> {
    if points.len() < 2 {
        return None;
    }

    let n = points.len() as f64;
    let x_mean = points.iter().map(|(x, _)| x).sum::<f64>() / n;
    let y_mean = points.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for &(x, y) in points {
        numerator += (x - x_mean) * (y - y_mean);
        denominator += (x - x_mean) * (x - x_mean);
    }

    if denominator == 0.0 {
        return None;
    }

    let slope = numerator / denominator;
    Some(LinearFit {
        slope,
        intercept: y_mean - slope * x_mean,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovers_exact_line() {
        let points = [(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)];

        let fit = linear_fit(&points).unwrap();

        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!((fit.intercept - 1.0).abs() < 1e-12);
        assert!((fit.y_at(3.0) - 7.0).abs() < 1e-12);
    }

    #[test]
    fn horizontal_data_has_zero_slope() {
        let points = [(0.0, 4.0), (1.0, 4.0), (2.0, 4.0)];

        let fit = linear_fit(&points).unwrap();

        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.intercept, 4.0);
    }

    #[test]
    fn too_few_points_yield_no_fit() {
        assert!(linear_fit(&[]).is_none());
        assert!(linear_fit(&[(1.0, 2.0)]).is_none());
    }

    #[test]
    fn vertical_data_yields_no_fit() {
        let points = [(2.0, 1.0), (2.0, 5.0), (2.0, 9.0)];

        assert!(linear_fit(&points).is_none());
    }
}
