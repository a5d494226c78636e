use std::error::Error as StdError;

use thiserror::Error;

use crate::linear;

/// Errors that can occur while solving a boundary value problem.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid interval [{a}, {b}]: endpoints must be finite with a < b")]
    InvalidInterval { a: f64, b: f64 },

    #[error("non-finite boundary values y(a) = {alpha}, y(b) = {beta}")]
    NonFiniteBoundary { alpha: f64, beta: f64 },

    #[error("at least one interior grid point is required")]
    NoInteriorPoints,

    #[error("non-finite source value {value} at x = {x}")]
    NonFiniteValue { x: f64, value: f64 },

    #[error("linear solve failed: {0}")]
    Linear(#[from] linear::Error),

    #[error("source evaluation failed")]
    Function(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn function<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Function(Box::new(err))
    }
}
