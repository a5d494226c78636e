use solvekit_core::{Differentiable, ScalarFunction};

use super::Error;

/// Evaluates `f(x)`, rejecting provider failures and non-finite values.
pub(crate) fn value<F: ScalarFunction>(f: &F, x: f64) -> Result<f64, Error> {
    let value = f.evaluate(x).map_err(Error::function)?;
    finite(x, value)
}

/// Evaluates `f'(x)`, rejecting provider failures and non-finite values.
pub(crate) fn slope<F: Differentiable>(f: &F, x: f64) -> Result<f64, Error> {
    let slope = f.derivative(x).map_err(Error::function)?;
    finite(x, slope)
}

fn finite(x: f64, value: f64) -> Result<f64, Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteValue { x, value })
    }
}
