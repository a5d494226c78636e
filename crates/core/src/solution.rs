#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Indicates how a solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a solver call.
///
/// `x` is a scalar for the root finders and a vector for the system and
/// linear solvers. Direct solvers always report [`Status::Converged`] and
/// count elimination or substitution steps in `iters`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solution<X> {
    /// Final solver status.
    pub status: Status,

    /// Best approximation when the solver finished.
    pub x: X,

    /// Error metric at the reported approximation.
    pub error: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,
}

impl<X> Solution<X> {
    /// Returns true if the solver met its tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
