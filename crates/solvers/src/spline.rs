//! Natural cubic spline interpolation.
//!
//! Between neighbouring knots `x[i] < x[i+1]` the spline is the cubic
//!
//! ```text
//! S(x) = a[i] + b[i]·t + c[i]·t² + d[i]·t³,    t = x - x[i]
//! ```
//!
//! chosen so that `S`, `S'` and `S''` are continuous at every interior knot
//! and `S''` vanishes at both ends (the natural boundary conditions).
//!
//! With `h[i] = x[i+1] - x[i]` the quadratic coefficients solve the
//! tridiagonal system
//!
//! ```text
//! c[0] = 0
//! h[i-1]·c[i-1] + 2·(h[i-1] + h[i])·c[i] + h[i]·c[i+1]
//!     = 3·((y[i+1] - y[i]) / h[i] - (y[i] - y[i-1]) / h[i-1])
//! c[n] = 0
//! ```
//!
//! which is solved with [`linear::thomas`]. The remaining coefficients follow
//! directly:
//!
//! ```text
//! a[i] = y[i]
//! b[i] = (y[i+1] - y[i]) / h[i] - h[i]·(2·c[i] + c[i+1]) / 3
//! d[i] = (c[i+1] - c[i]) / (3·h[i])
//! ```
//!
//! A [`NaturalSpline`] implements [`ScalarFunction`] and [`Differentiable`],
//! so it can be handed straight to the root finders in
//! [`equation`](crate::equation).

mod error;

pub use error::Error;

use nalgebra::DVector;
use solvekit_core::{Differentiable, ScalarFunction};

use crate::linear;

/// The cubic on one interval, in powers of `t = x - x[i]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Segment {
    fn value(&self, t: f64) -> f64 {
        self.a + t * (self.b + t * (self.c + t * self.d))
    }

    fn slope(&self, t: f64) -> f64 {
        self.b + t * (2.0 * self.c + t * 3.0 * self.d)
    }
}

/// A natural cubic spline through a set of knots.
#[derive(Debug, Clone, PartialEq)]
pub struct NaturalSpline {
    knots: Vec<f64>,
    segments: Vec<Segment>,
}

impl NaturalSpline {
    /// Fits the spline through the points `(x[i], y[i])`.
    ///
    /// # Errors
    ///
    /// - [`Error::TooFewPoints`] with fewer than two points.
    /// - [`Error::LengthMismatch`] if `x` and `y` differ in length.
    /// - [`Error::NonFinite`] if any coordinate is NaN or infinite.
    /// - [`Error::NotIncreasing`] unless `x` is strictly increasing.
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self, Error> {
        if x.len() != y.len() {
            return Err(Error::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        if x.len() < 2 {
            return Err(Error::TooFewPoints { len: x.len() });
        }
        if let Some(index) = (0..x.len()).find(|&i| !(x[i].is_finite() && y[i].is_finite())) {
            return Err(Error::NonFinite { index });
        }
        if let Some(index) = (1..x.len()).find(|&i| x[i] <= x[i - 1]) {
            return Err(Error::NotIncreasing { index });
        }

        let n = x.len() - 1;
        let h: Vec<f64> = x.windows(2).map(|pair| pair[1] - pair[0]).collect();
        let slope = |i: usize| (y[i + 1] - y[i]) / h[i];

        let mut sub = DVector::zeros(n);
        let mut main = DVector::from_element(n + 1, 1.0);
        let mut sup = DVector::zeros(n);
        let mut rhs = DVector::zeros(n + 1);
        for i in 1..n {
            sub[i - 1] = h[i - 1];
            main[i] = 2.0 * (h[i - 1] + h[i]);
            sup[i] = h[i];
            rhs[i] = 3.0 * (slope(i) - slope(i - 1));
        }

        let system = linear::TridiagonalSystem::new(sub, main, sup, rhs)?;
        let c = linear::thomas::solve(&system)?.x;

        let segments = (0..n)
            .map(|i| Segment {
                a: y[i],
                b: slope(i) - h[i] * (2.0 * c[i] + c[i + 1]) / 3.0,
                c: c[i],
                d: (c[i + 1] - c[i]) / (3.0 * h[i]),
            })
            .collect();

        Ok(Self {
            knots: x.to_vec(),
            segments,
        })
    }

    /// Returns the knot abscissas.
    #[must_use]
    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    /// Returns one segment per interval, in knot order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Evaluates the spline at each of `points`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] for the first point outside the knots.
    pub fn interpolate(&self, points: &[f64]) -> Result<Vec<f64>, Error> {
        points.iter().map(|&x| self.evaluate(x)).collect()
    }

    /// Finds the segment containing `x` and the offset `t` into it.
    ///
    /// A point on an interior knot belongs to the segment that starts there.
    fn locate(&self, x: f64) -> Result<(&Segment, f64), Error> {
        let (first, last) = (self.knots[0], self.knots[self.knots.len() - 1]);
        if !(first..=last).contains(&x) {
            return Err(Error::OutOfBounds { x, first, last });
        }

        let i = (self.knots.partition_point(|&k| k <= x) - 1).min(self.segments.len() - 1);
        Ok((&self.segments[i], x - self.knots[i]))
    }
}

impl ScalarFunction for NaturalSpline {
    type Error = Error;

    fn evaluate(&self, x: f64) -> Result<f64, Self::Error> {
        let (segment, t) = self.locate(x)?;
        Ok(segment.value(t))
    }
}

impl Differentiable for NaturalSpline {
    fn derivative(&self, x: f64) -> Result<f64, Self::Error> {
        let (segment, t) = self.locate(x)?;
        Ok(segment.slope(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    #[test]
    fn three_point_hat() {
        let spline = NaturalSpline::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]).expect("valid data");

        assert_eq!(
            spline.segments(),
            &[
                Segment {
                    a: 0.0,
                    b: 1.5,
                    c: 0.0,
                    d: -0.5
                },
                Segment {
                    a: 1.0,
                    b: 0.0,
                    c: -1.5,
                    d: 0.5
                },
            ]
        );
        assert_relative_eq!(spline.evaluate(0.5).expect("in range"), 0.6875);
        assert_relative_eq!(spline.evaluate(1.5).expect("in range"), 0.6875);
        assert_relative_eq!(spline.derivative(1.0).expect("in range"), 0.0);
    }

    #[test]
    fn passes_through_knots() {
        let x = [0.0, 0.7, 1.1, 2.5, 3.0, 4.2];
        let y = [1.0, -2.0, 0.5, 3.0, 3.5, -1.0];
        let spline = NaturalSpline::new(&x, &y).expect("valid data");

        let values = spline.interpolate(&x).expect("knots are in range");
        for (value, expected) in values.iter().zip(y) {
            assert_relative_eq!(*value, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn natural_end_conditions_and_smooth_joins() {
        let x = [0.0, 0.7, 1.1, 2.5, 3.0, 4.2];
        let y = [1.0, -2.0, 0.5, 3.0, 3.5, -1.0];
        let spline = NaturalSpline::new(&x, &y).expect("valid data");
        let segments = spline.segments();

        // S''(x) = 2c + 6d·t vanishes at both ends.
        let last = segments[segments.len() - 1];
        let width = x[x.len() - 1] - x[x.len() - 2];
        assert_relative_eq!(segments[0].c, 0.0);
        assert_relative_eq!(2.0 * last.c + 6.0 * last.d * width, 0.0, epsilon = 1e-10);

        for i in 0..segments.len() - 1 {
            let (left, right) = (segments[i], segments[i + 1]);
            let t = x[i + 1] - x[i];
            assert_relative_eq!(left.value(t), right.a, epsilon = 1e-10);
            assert_relative_eq!(left.slope(t), right.b, epsilon = 1e-10);
            assert_relative_eq!(left.c + 3.0 * left.d * t, right.c, epsilon = 1e-10);
        }
    }

    #[test]
    fn linear_data_is_reproduced() {
        let spline =
            NaturalSpline::new(&[0.0, 0.5, 2.0, 3.5], &[1.0, 2.0, 5.0, 8.0]).expect("valid data");

        for segment in spline.segments() {
            assert_relative_eq!(segment.b, 2.0, epsilon = 1e-12);
            assert_relative_eq!(segment.c, 0.0, epsilon = 1e-12);
            assert_relative_eq!(segment.d, 0.0, epsilon = 1e-12);
        }
        assert_relative_eq!(spline.evaluate(2.75).expect("in range"), 6.5, epsilon = 1e-12);
    }

    #[test]
    fn approximates_sine() {
        // sin'' vanishes at 0 and π, so the natural conditions are exact.
        let x: Vec<f64> = (0..=10_u32).map(|i| PI * f64::from(i) / 10.0).collect();
        let y: Vec<f64> = x.iter().map(|v| v.sin()).collect();
        let spline = NaturalSpline::new(&x, &y).expect("valid data");

        for k in 0..=100_u32 {
            let t = PI * f64::from(k) / 100.0;
            assert!((spline.evaluate(t).expect("in range") - t.sin()).abs() < 5e-5);
            assert!((spline.derivative(t).expect("in range") - t.cos()).abs() < 5e-4);
        }
    }

    #[test]
    fn two_points_give_a_line() {
        let spline = NaturalSpline::new(&[1.0, 3.0], &[2.0, 6.0]).expect("valid data");
        assert_eq!(spline.segments().len(), 1);
        assert_relative_eq!(spline.evaluate(2.0).expect("in range"), 4.0);
        assert_relative_eq!(spline.derivative(2.0).expect("in range"), 2.0);
    }

    #[test]
    fn rejects_bad_data() {
        assert_eq!(
            NaturalSpline::new(&[0.0], &[1.0]),
            Err(Error::TooFewPoints { len: 1 })
        );
        assert_eq!(
            NaturalSpline::new(&[0.0, 1.0], &[1.0]),
            Err(Error::LengthMismatch { x: 2, y: 1 })
        );
        assert_eq!(
            NaturalSpline::new(&[0.0, 1.0, f64::NAN], &[1.0, 2.0, 3.0]),
            Err(Error::NonFinite { index: 2 })
        );
        assert_eq!(
            NaturalSpline::new(&[0.0, 1.0, 1.0], &[1.0, 2.0, 3.0]),
            Err(Error::NotIncreasing { index: 2 })
        );
    }

    #[test]
    fn rejects_points_outside_the_knots() {
        let spline = NaturalSpline::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]).expect("valid data");
        assert!(matches!(
            spline.evaluate(2.5),
            Err(Error::OutOfBounds { .. })
        ));
        assert!(spline.evaluate(f64::NAN).is_err());
        assert!(spline.interpolate(&[0.5, -1.0]).is_err());
    }
}
