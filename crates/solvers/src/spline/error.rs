use thiserror::Error;

use crate::linear;

/// Errors that can occur while fitting or evaluating a spline.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("a spline needs at least two points, got {len}")]
    TooFewPoints { len: usize },

    #[error("x has {x} points but y has {y}")]
    LengthMismatch { x: usize, y: usize },

    #[error("non-finite coordinate at index {index}")]
    NonFinite { index: usize },

    #[error("knots must be strictly increasing (index {index})")]
    NotIncreasing { index: usize },

    #[error("x = {x} is outside the knots [{first}, {last}]")]
    OutOfBounds { x: f64, first: f64, last: f64 },

    #[error("linear solve failed: {0}")]
    Linear(#[from] linear::Error),
}
