//! Regula falsi (false position) for scalar root finding.
//!
//! Works like [`bisection`](super::bisection) but splits the bracket where
//! the line through `(a, f(a))` and `(b, f(b))` crosses zero:
//!
//! ```text
//! c = b - f(b)·(b - a) / (f(b) - f(a))
//! ```
//!
//! The bracket update and the termination rule are the same as bisection:
//! the error metric is half the remaining bracket width.
//!
//! # Limitations
//!
//! On convex or concave functions one endpoint never moves, so the bracket
//! width stays large even while the split point closes in on the root. The
//! solver then ends with [`Status::MaxIters`] and an accurate `x`. The
//! reported `x` is always the latest split point, not the bracket midpoint.
//!
//! [`Status::MaxIters`]: solvekit_core::Status::MaxIters

use solvekit_core::{Config, IterationRecord, Observer, ScalarFunction, Solution};

use super::{
    Action, Error,
    bracketing::{self, Rule},
};

/// Finds a root of `f` inside `bracket` by regula falsi.
///
/// # Errors
///
/// Returns [`Error::InvalidBracket`] if the endpoints are non-finite, equal,
/// or `f` does not change sign across them. Returns [`Error::Function`] or
/// [`Error::NonFiniteValue`] if an evaluation fails.
pub fn solve<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution<f64>, Error>
where
    F: ScalarFunction,
    Obs: Observer<IterationRecord<f64>, Action>,
{
    bracketing::solve(Rule::FalsePosition, f, bracket, config, observer)
}

/// Finds a root of `f` by regula falsi without observer support.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F: ScalarFunction>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<f64>, Error> {
    solve(f, bracket, config, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use solvekit_core::Status;

    use crate::equation::BracketError;

    #[test]
    fn linear_function_is_solved_in_one_step() {
        let f = |x: f64| 2.0 * x - 1.0;
        let solution = solve_unobserved(&f, [0.0, 2.0], &Config::default()).expect("solves");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 0.5);
        assert_eq!(solution.iters, 1);
    }

    #[test]
    fn one_sided_convergence_reports_max_iters() {
        // Convex on [1, 2]: the right endpoint never moves.
        let f = |x: f64| x.powi(3) - x - 2.0;
        let config = Config::new(20, 1e-7).expect("valid config");
        let solution = solve_unobserved(&f, [1.0, 2.0], &config).expect("solves");

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 20);
        assert!(solution.error > 0.2);
        assert_relative_eq!(solution.x, 1.521_379_706_804_567_6, epsilon = 1e-8);
        assert!(f(solution.x).abs() < 1e-7);
    }

    #[test]
    fn split_points_stay_inside_bracket() {
        let f = |x: f64| x.cos() - x;
        let mut points = Vec::new();
        let observer = |record: &IterationRecord<f64>| {
            points.push(record.x);
            None
        };
        solve(&f, [0.0, 1.0], &Config::new(10, 0.0).expect("valid"), observer).expect("solves");

        assert!(!points.is_empty());
        assert!(points.iter().all(|x| (0.0..=1.0).contains(x)));
    }

    #[test]
    fn same_sign_bracket_is_rejected() {
        let f = |x: f64| x * x + 1.0;
        assert!(matches!(
            solve_unobserved(&f, [-1.0, 1.0], &Config::default()),
            Err(Error::InvalidBracket(BracketError::NoSignChange { .. }))
        ));
    }
}
