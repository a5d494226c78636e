#[cfg(feature = "serde")]
use serde::Serialize;
use thiserror::Error;

/// Iteration cap shared by every iterative solver unless overridden.
pub const DEFAULT_MAX_ITERS: usize = 100;

/// Default tolerance for scalar and multivariate root finders.
pub const ROOT_TOLERANCE: f64 = 1e-7;

/// Default tolerance for the Jacobi and Gauss-Seidel solvers.
pub const LINEAR_TOLERANCE: f64 = 1e-6;

/// Convergence contract for an iterative solver.
///
/// A solver keeps iterating while `iter < max_iters` and its error metric is
/// above `tolerance`. Running out of iterations is a normal outcome reported
/// through [`Status::MaxIters`](crate::Status::MaxIters), not an error.
///
/// With the `serde` feature a config can be serialized for reporting, but it
/// does not implement `Deserialize`; build one with [`Config::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Config {
    max_iters: usize,
    tolerance: f64,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and non-negative")]
    Tolerance,
}

impl Default for Config {
    /// Root-finding defaults: `tolerance = 1e-7`, `max_iters = 100`.
    fn default() -> Self {
        Self {
            max_iters: DEFAULT_MAX_ITERS,
            tolerance: ROOT_TOLERANCE,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// A zero tolerance is allowed; the solver then runs until it hits an
    /// exact solution or exhausts `max_iters`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Tolerance`] if the tolerance is negative or
    /// non-finite.
    pub fn new(max_iters: usize, tolerance: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::Tolerance);
        }
        Ok(Self {
            max_iters,
            tolerance,
        })
    }

    /// Linear iterative defaults: `tolerance = 1e-6`, `max_iters = 100`.
    #[must_use]
    pub fn linear() -> Self {
        Self {
            max_iters: DEFAULT_MAX_ITERS,
            tolerance: LINEAR_TOLERANCE,
        }
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns true if `error` no longer exceeds the tolerance.
    #[must_use]
    pub fn is_within(&self, error: f64) -> bool {
        error <= self.tolerance
    }
}
