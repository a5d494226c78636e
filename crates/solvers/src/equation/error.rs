use std::error::Error as StdError;

use thiserror::Error;

use crate::linear;

use super::BracketError;

/// Errors that can occur while finding a root.
///
/// Running out of iterations is not an error; solvers report it as
/// [`Status::MaxIters`](solvekit_core::Status::MaxIters).
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("degenerate step after {iters} iterations: zero denominator (best x = {best})")]
    DegenerateStep { best: f64, iters: usize },

    #[error("singular Jacobian at iteration {iter}")]
    SingularJacobian { iter: usize },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("non-finite value {value} at x = {x}")]
    NonFiniteValue { x: f64, value: f64 },

    #[error("non-finite residual or Jacobian at iteration {iter}")]
    NonFiniteSystem { iter: usize },

    #[error("linear solve failed: {0}")]
    Linear(#[from] linear::Error),

    #[error("function evaluation failed")]
    Function(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn function<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Function(Box::new(err))
    }
}
