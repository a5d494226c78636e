use std::{convert::Infallible, error::Error as StdError};

use nalgebra::{DMatrix, DVector};

/// A real-valued function of one real variable.
///
/// Solvers only ever call [`evaluate`](Self::evaluate); how the function is
/// produced (a closure, a parsed expression, a lookup table) is up to the
/// provider. Evaluations must be pure: the same `x` gives the same value.
///
/// Plain closures `Fn(f64) -> f64` implement this trait with
/// `Error = Infallible`.
pub trait ScalarFunction {
    type Error: StdError + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Each provider defines its own `Error` type, e.g. for points outside
    /// the function's domain.
    fn evaluate(&self, x: f64) -> Result<f64, Self::Error>;
}

/// A scalar function that can also report its first derivative.
pub trait Differentiable: ScalarFunction {
    /// Evaluates `f'(x)`.
    ///
    /// # Errors
    ///
    /// Returns the provider's error if the derivative cannot be computed.
    fn derivative(&self, x: f64) -> Result<f64, Self::Error>;
}

/// A system of `m` equations in `n` unknowns with its Jacobian.
pub trait VectorFunction {
    type Error: StdError + Send + Sync + 'static;

    /// Evaluates the residual vector `F(x)` of length `m`.
    ///
    /// # Errors
    ///
    /// Returns the provider's error if any equation cannot be evaluated.
    fn evaluate(&self, x: &DVector<f64>) -> Result<DVector<f64>, Self::Error>;

    /// Evaluates the `m × n` Jacobian matrix `J(x)`.
    ///
    /// # Errors
    ///
    /// Returns the provider's error if any partial derivative cannot be
    /// evaluated.
    fn jacobian(&self, x: &DVector<f64>) -> Result<DMatrix<f64>, Self::Error>;
}

impl<F> ScalarFunction for F
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn evaluate(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}

/// Pairs a function with its analytic derivative.
#[derive(Debug, Clone, Copy)]
pub struct WithDerivative<F, D> {
    function: F,
    derivative: D,
}

impl<F, D> WithDerivative<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    /// Creates a differentiable function from `f` and `f'`.
    pub fn new(function: F, derivative: D) -> Self {
        Self {
            function,
            derivative,
        }
    }
}

impl<F, D> ScalarFunction for WithDerivative<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn evaluate(&self, x: f64) -> Result<f64, Self::Error> {
        Ok((self.function)(x))
    }
}

impl<F, D> Differentiable for WithDerivative<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    fn derivative(&self, x: f64) -> Result<f64, Self::Error> {
        Ok((self.derivative)(x))
    }
}

/// Estimates the derivative of any scalar function by central differences.
///
/// `f'(x) ≈ (f(x + h) - f(x - h)) / 2h`, with a default step of `1e-5`.
/// The estimate has `O(h²)` truncation error and loses accuracy when `h` is
/// small relative to `|x|`.
#[derive(Debug, Clone, Copy)]
pub struct CentralDifference<F> {
    function: F,
    step: f64,
}

impl<F: ScalarFunction> CentralDifference<F> {
    /// Default finite-difference step.
    pub const DEFAULT_STEP: f64 = 1e-5;

    /// Wraps `function` using the default step.
    pub fn new(function: F) -> Self {
        Self::with_step(function, Self::DEFAULT_STEP)
    }

    /// Wraps `function` using a custom step `h`.
    pub fn with_step(function: F, step: f64) -> Self {
        Self { function, step }
    }
}

impl<F: ScalarFunction> ScalarFunction for CentralDifference<F> {
    type Error = F::Error;

    fn evaluate(&self, x: f64) -> Result<f64, Self::Error> {
        self.function.evaluate(x)
    }
}

impl<F: ScalarFunction> Differentiable for CentralDifference<F> {
    fn derivative(&self, x: f64) -> Result<f64, Self::Error> {
        let h = self.step;
        let ahead = self.function.evaluate(x + h)?;
        let behind = self.function.evaluate(x - h)?;
        Ok((ahead - behind) / (2.0 * h))
    }
}

/// Pairs residual and Jacobian closures into a [`VectorFunction`].
#[derive(Debug, Clone, Copy)]
pub struct System<F, J> {
    residuals: F,
    jacobian: J,
}

impl<F, J> System<F, J>
where
    F: Fn(&DVector<f64>) -> DVector<f64>,
    J: Fn(&DVector<f64>) -> DMatrix<f64>,
{
    /// Creates a system from `F(x)` and `J(x)`.
    pub fn new(residuals: F, jacobian: J) -> Self {
        Self {
            residuals,
            jacobian,
        }
    }
}

impl<F, J> VectorFunction for System<F, J>
where
    F: Fn(&DVector<f64>) -> DVector<f64>,
    J: Fn(&DVector<f64>) -> DMatrix<f64>,
{
    type Error = Infallible;

    fn evaluate(&self, x: &DVector<f64>) -> Result<DVector<f64>, Self::Error> {
        Ok((self.residuals)(x))
    }

    fn jacobian(&self, x: &DVector<f64>) -> Result<DMatrix<f64>, Self::Error> {
        Ok((self.jacobian)(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn closures_are_scalar_functions() {
        let f = |x: f64| x * x - 2.0;
        assert_relative_eq!(f.evaluate(3.0).unwrap(), 7.0);
    }

    #[test]
    fn with_derivative_uses_both_closures() {
        let f = WithDerivative::new(|x: f64| x * x, |x: f64| 2.0 * x);
        assert_relative_eq!(f.evaluate(3.0).unwrap(), 9.0);
        assert_relative_eq!(f.derivative(3.0).unwrap(), 6.0);
    }

    #[test]
    fn central_difference_matches_analytic_derivative() {
        let f = CentralDifference::new(|x: f64| x.powi(3) + x);
        // d/dx (x³ + x) = 3x² + 1
        assert_relative_eq!(f.derivative(2.0).unwrap(), 13.0, epsilon = 1e-8);
        assert_relative_eq!(f.derivative(-1.0).unwrap(), 4.0, epsilon = 1e-8);
    }

    #[test]
    fn central_difference_on_sine() {
        let f = CentralDifference::new(f64::sin);
        assert_relative_eq!(f.derivative(0.5).unwrap(), 0.5_f64.cos(), epsilon = 1e-9);
    }

    #[test]
    fn system_evaluates_residuals_and_jacobian() {
        let system = System::new(
            |x: &DVector<f64>| DVector::from_vec(vec![x[0] + x[1], x[0] * x[1]]),
            |x: &DVector<f64>| DMatrix::from_row_slice(2, 2, &[1.0, 1.0, x[1], x[0]]),
        );
        let x = DVector::from_vec(vec![2.0, 3.0]);

        let f = system.evaluate(&x).unwrap();
        assert_relative_eq!(f[0], 5.0);
        assert_relative_eq!(f[1], 6.0);

        let j = system.jacobian(&x).unwrap();
        assert_relative_eq!(j[(1, 0)], 3.0);
        assert_relative_eq!(j[(1, 1)], 2.0);
    }
}
