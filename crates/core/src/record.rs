#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One step of an iterative solver.
///
/// `x` is the approximation after the step (a scalar or a vector), and
/// `error` is the metric the solver compares against its tolerance: a half
/// bracket width, a step length, or an infinity norm, depending on the method.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IterationRecord<X> {
    /// Iteration counter, 1-based.
    pub iter: usize,

    /// Current approximation.
    pub x: X,

    /// Current error magnitude.
    pub error: f64,
}

impl<X> IterationRecord<X> {
    /// Creates a new record.
    #[must_use]
    pub fn new(iter: usize, x: X, error: f64) -> Self {
        Self { iter, x, error }
    }
}
