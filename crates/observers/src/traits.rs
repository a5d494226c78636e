//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer written once works with the root finders and the iterative
//! linear solvers alike.
//!
//! # Example
//!
//! ```rust
//! use solvekit_core::Observer;
//! use solvekit_observers::traits::{CanStopEarly, HasError};
//!
//! struct Stagnation {
//!     last: f64,
//! }
//!
//! impl<E: HasError, A: CanStopEarly> Observer<E, A> for Stagnation {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         let stalled = event.error() >= self.last;
//!         self.last = event.error();
//!         stalled.then(A::stop_early)
//!     }
//! }
//! ```

use solvekit_core::IterationRecord;
use solvekit_solvers::{equation, linear};

/// An event that carries an iteration index and an error magnitude.
pub trait HasError {
    /// Returns the 1-based iteration index.
    fn iter(&self) -> usize;

    /// Returns the error metric the solver compares against its tolerance.
    fn error(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl<X> HasError for IterationRecord<X> {
    fn iter(&self) -> usize {
        self.iter
    }

    fn error(&self) -> f64 {
        self.error
    }
}

impl CanStopEarly for equation::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for linear::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
