//! Newton-Raphson for scalar root finding.
//!
//! Each iteration takes the tangent step
//!
//! ```text
//! x1 = x0 - f(x0) / f'(x0)
//! ```
//!
//! and stops once the step length `|x1 - x0|` is strictly below the
//! tolerance. The derivative comes from the [`Differentiable`] provider; wrap
//! a plain closure in [`CentralDifference`] when no analytic derivative is
//! available.
//!
//! A zero derivative fails with [`Error::DegenerateStep`]. When no starting
//! point is known, [`guess::newton_start`](super::guess::newton_start) offers
//! a heuristic one.
//!
//! [`CentralDifference`]: solvekit_core::CentralDifference

use solvekit_core::{Config, Differentiable, IterationRecord, Observer, Solution, Status};

use crate::finish::finish;

use super::{Action, Error, evaluate};

const METHOD: &str = "newton";

/// Finds a root of `f` starting from `x0`.
///
/// `iters` in the returned solution counts Newton steps taken. With
/// `max_iters == 0` the starting point is returned with an infinite error.
///
/// # Errors
///
/// Returns [`Error::DegenerateStep`] if `f'(x) == 0` at an iterate. Returns
/// [`Error::Function`] or [`Error::NonFiniteValue`] if an evaluation fails.
pub fn solve<F, Obs>(
    f: &F,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<f64>, Error>
where
    F: Differentiable,
    Obs: Observer<IterationRecord<f64>, Action>,
{
    let mut x = x0;
    let mut error = f64::INFINITY;

    for iter in 1..=config.max_iters() {
        let fx = evaluate::value(f, x)?;
        let slope = evaluate::slope(f, x)?;

        if slope == 0.0 {
            return Err(Error::DegenerateStep {
                best: x,
                iters: iter - 1,
            });
        }

        let next = x - fx / slope;
        error = (next - x).abs();
        x = next;

        if let Some(Action::StopEarly) = observer.observe(&IterationRecord::new(iter, x, error)) {
            return Ok(finish(METHOD, solution(Status::StoppedByObserver, x, error, iter)));
        }

        if error < config.tolerance() {
            return Ok(finish(METHOD, solution(Status::Converged, x, error, iter)));
        }
    }

    Ok(finish(
        METHOD,
        solution(Status::MaxIters, x, error, config.max_iters()),
    ))
}

/// Finds a root of `f` by Newton-Raphson without observer support.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F: Differentiable>(
    f: &F,
    x0: f64,
    config: &Config,
) -> Result<Solution<f64>, Error> {
    solve(f, x0, config, ())
}

fn solution(status: Status, x: f64, error: f64, iters: usize) -> Solution<f64> {
    Solution {
        status,
        x,
        error,
        iters,
    }
}
