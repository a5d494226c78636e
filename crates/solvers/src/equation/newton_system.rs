//! Newton-Raphson for systems of nonlinear equations.
//!
//! # Algorithm
//!
//! Each iteration evaluates the residual `F(x)` and Jacobian `J(x)`, solves
//!
//! ```text
//! J(x)·δ = -F(x)
//! ```
//!
//! with [`linear::gaussian`], and steps to `x + δ`.
//!
//! # Termination
//!
//! The error metric is `‖F(x)‖∞` at the point the step starts from. When it
//! is strictly below the tolerance the solver still takes that step and
//! returns the updated point. Convergence is therefore detected one
//! iteration after the iterate first satisfies the tolerance, and the
//! reported error belongs to the point before the final step.
//!
//! A singular Jacobian ends the solve with [`Error::SingularJacobian`]; no
//! partial solution is returned.

use nalgebra::DVector;
use solvekit_core::{Config, IterationRecord, Observer, Solution, Status, VectorFunction};

use crate::{finish::finish, linear};

use super::{Action, Error};

const METHOD: &str = "newton system";

/// Solves `F(x) = 0` starting from `x0`.
///
/// `F` must return as many equations as `x0` has unknowns and a square
/// Jacobian. The observer receives one [`IterationRecord`] per iteration with
/// the stepped-to point and the residual norm at the point it stepped from,
/// including the converging iteration. Convergence takes precedence over a
/// stop request on the same iteration.
///
/// # Errors
///
/// - [`Error::SingularJacobian`] if `J(x)` cannot be factored.
/// - [`Error::DimensionMismatch`] if `F(x)` or `J(x)` has the wrong shape.
/// - [`Error::NonFiniteSystem`] if `F(x)` or `J(x)` contains NaN or infinity.
/// - [`Error::Linear`] if `x0` is empty.
/// - [`Error::Function`] if the provider fails.
pub fn solve<F, Obs>(
    f: &F,
    x0: &DVector<f64>,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<DVector<f64>>, Error>
where
    F: VectorFunction,
    Obs: Observer<IterationRecord<DVector<f64>>, Action>,
{
    let n = x0.len();
    if n == 0 {
        return Err(linear::Error::Empty.into());
    }

    let mut x = x0.clone();
    let mut error = f64::INFINITY;

    for iter in 1..=config.max_iters() {
        let residual = f.evaluate(&x).map_err(Error::function)?;
        check_dim(n, residual.len())?;

        let jacobian = f.jacobian(&x).map_err(Error::function)?;
        let (rows, cols) = jacobian.shape();
        check_dim(n, rows)?;
        check_dim(n, cols)?;

        if !residual.iter().chain(jacobian.iter()).all(|v| v.is_finite()) {
            return Err(Error::NonFiniteSystem { iter });
        }

        error = residual.amax();

        let system = linear::LinearSystem::new(jacobian, -residual)?;
        let delta = match linear::gaussian::solve(&system) {
            Ok(step) => step.x,
            Err(linear::Error::Singular { .. }) => return Err(Error::SingularJacobian { iter }),
            Err(other) => return Err(other.into()),
        };
        x += delta;

        let record = IterationRecord::new(iter, x.clone(), error);
        let action = observer.observe(&record);

        if error < config.tolerance() {
            return Ok(finish(METHOD, solution(Status::Converged, x, error, iter)));
        }
        if let Some(Action::StopEarly) = action {
            return Ok(finish(METHOD, solution(Status::StoppedByObserver, x, error, iter)));
        }
    }

    Ok(finish(
        METHOD,
        solution(Status::MaxIters, x, error, config.max_iters()),
    ))
}

/// Solves `F(x) = 0` by Newton-Raphson without observer support.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F: VectorFunction>(
    f: &F,
    x0: &DVector<f64>,
    config: &Config,
) -> Result<Solution<DVector<f64>>, Error> {
    solve(f, x0, config, ())
}

fn check_dim(expected: usize, actual: usize) -> Result<(), Error> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::DimensionMismatch { expected, actual })
    }
}

fn solution(status: Status, x: DVector<f64>, error: f64, iters: usize) -> Solution<DVector<f64>> {
    Solution {
        status,
        x,
        error,
        iters,
    }
}
