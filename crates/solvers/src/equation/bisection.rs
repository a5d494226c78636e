//! Bisection for scalar root finding.
//!
//! # Algorithm
//!
//! Bisection starts from a bracket `[a, b]` with `f(a)·f(b) < 0` and evaluates
//! the midpoint `c` every iteration. If `f(c)` is exactly zero the midpoint is
//! returned with a zero error bound. Otherwise the sign of `f(c)·f(a)` decides
//! which half still holds the sign change: negative keeps `[a, c]`, anything
//! else keeps `[c, b]`.
//!
//! The bracket width halves every iteration, so after `k` iterations it is
//! exactly `(b - a) / 2^k` and convergence is guaranteed for continuous `f`.
//!
//! # Termination
//!
//! The error metric is half the bracket width, which bounds the distance from
//! the reported midpoint to the root. The solver stops once it is within the
//! tolerance, or after `max_iters` iterations with [`Status::MaxIters`].
//!
//! If either endpoint is already an exact root it is returned immediately
//! with zero iterations.
//!
//! [`Status::MaxIters`]: solvekit_core::Status::MaxIters

use solvekit_core::{Config, IterationRecord, Observer, ScalarFunction, Solution};

use super::{
    Action, Error,
    bracketing::{self, Rule},
};

/// Finds a root of `f` inside `bracket` by bisection.
///
/// The endpoints may be given in either order. The observer receives one
/// [`IterationRecord`] per iteration holding the new midpoint and half-width.
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
    bracketing::solve(Rule::Midpoint, f, bracket, config, observer)
}

/// Finds a root of `f` by bisection without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
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
