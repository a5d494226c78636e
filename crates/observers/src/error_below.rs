use solvekit_core::Observer;

use crate::traits::{CanStopEarly, HasError};

/// Stops a solver once its error drops below `threshold`.
///
/// Useful to end a solve early with a looser tolerance than the solver's
/// config, for example while scouting a good starting point. The check is
/// skipped until the event's iteration reaches `min_iters`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorBelow {
    threshold: f64,
    min_iters: usize,
}

impl ErrorBelow {
    /// Creates an observer that stops once `error < threshold`.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            min_iters: 0,
        }
    }

    /// Requires at least `min_iters` iterations before stopping.
    #[must_use]
    pub fn min_iters(mut self, min_iters: usize) -> Self {
        self.min_iters = min_iters;
        self
    }
}

impl<E: HasError, A: CanStopEarly> Observer<E, A> for ErrorBelow {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.iter() >= self.min_iters && event.error() < self.threshold).then(A::stop_early)
    }
}
