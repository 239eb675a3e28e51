//! Cubic spline interpolation for dispersion tables.
//!
//! Tabulated (n, k) data is provided at discrete wavelengths; a natural
//! cubic spline gives a smooth n(λ) and k(λ) between the knots. Dispersion
//! tables can arrive from user-supplied definitions, so construction
//! validates its input and reports failures as values instead of
//! panicking.

use thiserror::Error;

/// Errors from spline construction.
#[derive(Debug, Error)]
pub enum SplineError {
    #[error("knot and value arrays differ in length ({knots} vs {values})")]
    LengthMismatch { knots: usize, values: usize },

    #[error("at least 2 data points are required, got {0}")]
    TooFewPoints(usize),

    #[error("knots must be strictly increasing (violated at index {0})")]
    KnotsNotIncreasing(usize),
}

/// A natural cubic spline interpolator for real-valued data.
///
/// Piecewise cubic polynomials with continuous first and second
/// derivatives through the data points; the second derivative vanishes at
/// both ends. Evaluation outside the knot range extrapolates with the
/// boundary polynomial.
#[derive(Debug, Clone)]
pub struct CubicSpline {
    knots: Vec<f64>,
    values: Vec<f64>,
    /// Second derivatives at each knot, fixed at construction.
    second_derivs: Vec<f64>,
}

impl CubicSpline {
    /// Construct a natural cubic spline from data points.
    ///
    /// # Arguments
    /// * `knots` — Strictly increasing x values.
    /// * `values` — Corresponding y values (same length as `knots`).
    pub fn new(knots: Vec<f64>, values: Vec<f64>) -> Result<Self, SplineError> {
        if knots.len() != values.len() {
            return Err(SplineError::LengthMismatch {
                knots: knots.len(),
                values: values.len(),
            });
        }
        if knots.len() < 2 {
            return Err(SplineError::TooFewPoints(knots.len()));
        }
        for i in 1..knots.len() {
            if knots[i] <= knots[i - 1] {
                return Err(SplineError::KnotsNotIncreasing(i));
            }
        }

        let n = knots.len();
        let mut second_derivs = vec![0.0; n];
        let mut work = vec![0.0; n - 1];

        // Forward sweep of the tridiagonal system; natural boundary
        // conditions leave the end rows at zero.
        for i in 1..n - 1 {
            let sig = (knots[i] - knots[i - 1]) / (knots[i + 1] - knots[i - 1]);
            let p = sig * second_derivs[i - 1] + 2.0;
            second_derivs[i] = (sig - 1.0) / p;
            work[i] = (values[i + 1] - values[i]) / (knots[i + 1] - knots[i])
                - (values[i] - values[i - 1]) / (knots[i] - knots[i - 1]);
            work[i] = (6.0 * work[i] / (knots[i + 1] - knots[i - 1]) - sig * work[i - 1]) / p;
        }

        // Back substitution
        for k in (0..n - 2).rev() {
            second_derivs[k + 1] = second_derivs[k + 1] * second_derivs[k + 2] + work[k + 1];
        }

        Ok(Self {
            knots,
            values,
            second_derivs,
        })
    }

    /// Evaluate the spline at `x`.
    ///
    /// Outside the knot range the boundary polynomial is extended, so an
    /// out-of-range lookup still produces a value (the range check that
    /// precedes it is advisory only).
    pub fn evaluate(&self, x: f64) -> f64 {
        let n = self.knots.len();

        // Binary search for the enclosing interval
        let mut lo = 0;
        let mut hi = n - 1;
        while hi - lo > 1 {
            let mid = (lo + hi) / 2;
            if self.knots[mid] > x {
                hi = mid;
            } else {
                lo = mid;
            }
        }

        let h = self.knots[hi] - self.knots[lo];
        let a = (self.knots[hi] - x) / h;
        let b = (x - self.knots[lo]) / h;

        a * self.values[lo]
            + b * self.values[hi]
            + ((a * a * a - a) * self.second_derivs[lo] + (b * b * b - b) * self.second_derivs[hi])
                * h
                * h
                / 6.0
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spline_passes_through_data_points() {
        let xs = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let ys = vec![2.0, 3.0, 5.0, 4.0, 1.0];
        let spline = CubicSpline::new(xs.clone(), ys.clone()).unwrap();

        for (x, y) in xs.iter().zip(ys.iter()) {
            let result = spline.evaluate(*x);
            assert!(
                (result - y).abs() < 1e-10,
                "Spline({}) = {} but expected {}",
                x,
                result,
                y
            );
        }
    }

    #[test]
    fn test_linear_data_interpolates_linearly() {
        let spline = CubicSpline::new(vec![0.0, 1.0, 2.0], vec![0.0, 2.0, 4.0]).unwrap();
        assert!((spline.evaluate(0.5) - 1.0).abs() < 1e-10);
        assert!((spline.evaluate(1.5) - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_out_of_range_evaluation_extrapolates() {
        let spline = CubicSpline::new(vec![0.0, 1.0, 2.0], vec![0.0, 2.0, 4.0]).unwrap();
        // Linear data extrapolates linearly.
        assert!((spline.evaluate(3.0) - 6.0).abs() < 1e-9);
        assert!((spline.evaluate(-1.0) + 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_construction_rejects_bad_input() {
        assert!(matches!(
            CubicSpline::new(vec![1.0, 2.0], vec![1.0]),
            Err(SplineError::LengthMismatch { .. })
        ));
        assert!(matches!(
            CubicSpline::new(vec![1.0], vec![1.0]),
            Err(SplineError::TooFewPoints(1))
        ));
        assert!(matches!(
            CubicSpline::new(vec![1.0, 1.0, 2.0], vec![0.0, 0.0, 0.0]),
            Err(SplineError::KnotsNotIncreasing(1))
        ));
    }
}
