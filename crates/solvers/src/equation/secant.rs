//! Secant method for scalar root finding.
//!
//! Starts from two points `x0, x1` with no sign-change requirement and
//! replaces the derivative in Newton's update with the slope of the chord:
//!
//! ```text
//! x_new = x1 - f(x1)·(x1 - x0) / (f(x1) - f(x0))
//! ```
//!
//! The error metric is the step length `|x1 - x0|`. The solver stops once it
//! is within the tolerance, or after `max_iters` iterations.
//!
//! Equal function values at the two current points make the chord flat; the
//! solve then fails with [`Error::DegenerateStep`] carrying the latest point.

use solvekit_core::{Config, IterationRecord, Observer, ScalarFunction, Solution, Status};

use crate::finish::finish;

use super::{Action, Error, evaluate};

const METHOD: &str = "secant";

/// Finds a root of `f` starting from the pair `guesses = [x0, x1]`.
///
/// The observer receives one [`IterationRecord`] per step holding the new
/// point and the step length.
///
/// # Errors
///
/// Returns [`Error::DegenerateStep`] if `x0 == x1` or the two current function
/// values become equal. Returns [`Error::Function`] or
/// [`Error::NonFiniteValue`] if an evaluation fails.
#[allow(clippy::float_cmp)]
pub fn solve<F, Obs>(
    f: &F,
    guesses: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<f64>, Error>
where
    F: ScalarFunction,
    Obs: Observer<IterationRecord<f64>, Action>,
{
    let [mut x0, mut x1] = guesses;

    if x0 == x1 {
        return Err(Error::DegenerateStep { best: x1, iters: 0 });
    }

    let mut f0 = evaluate::value(f, x0)?;
    let mut f1 = evaluate::value(f, x1)?;
    let mut error = (x1 - x0).abs();

    for iter in 1..=config.max_iters() {
        if config.is_within(error) {
            return Ok(finish(METHOD, solution(Status::Converged, x1, error, iter - 1)));
        }

        let denom = f1 - f0;
        if denom == 0.0 {
            return Err(Error::DegenerateStep {
                best: x1,
                iters: iter - 1,
            });
        }

        let x_new = x1 - f1 * (x1 - x0) / denom;
        let f_new = evaluate::value(f, x_new)?;

        (x0, f0) = (x1, f1);
        (x1, f1) = (x_new, f_new);
        error = (x1 - x0).abs();

        if let Some(Action::StopEarly) = observer.observe(&IterationRecord::new(iter, x1, error)) {
            return Ok(finish(
                METHOD,
                solution(Status::StoppedByObserver, x1, error, iter),
            ));
        }
    }

    let status = if config.is_within(error) {
        Status::Converged
    } else {
        Status::MaxIters
    };
    Ok(finish(METHOD, solution(status, x1, error, config.max_iters())))
}

/// Finds a root of `f` by the secant method without observer support.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F: ScalarFunction>(
    f: &F,
    guesses: [f64; 2],
    config: &Config,
) -> Result<Solution<f64>, Error> {
    solve(f, guesses, config, ())
}

fn solution(status: Status, x: f64, error: f64, iters: usize) -> Solution<f64> {
    Solution {
        status,
        x,
        error,
        iters,
    }
}
