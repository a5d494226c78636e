//! Solvers for equation problems — finding roots of `f(x) = 0` and `F(x) = 0`.
//!
//! Each solver consumes a function provider from [`solvekit_core`] and drives
//! its value toward zero under a [`Config`](solvekit_core::Config).
//!
//! # Solvers
//!
//! Bracketing (require a sign change on `[a, b]`):
//! - [`bisection`] — halves the bracket every iteration; guaranteed linear
//!   convergence
//! - [`regula_falsi`] — false position; splits the bracket at the secant point
//!
//! Open (start from one or two guesses, no sign change required):
//! - [`secant`] — two starting points, no derivative
//! - [`newton`] — one starting point plus the derivative
//! - [`newton_system`] — Newton-Raphson for systems using the Jacobian
//!
//! [`guess`] has heuristics for finding a bracket or a starting point when the
//! caller has none.
//!
//! # Observers
//!
//! Iterative solvers emit one [`IterationRecord`](solvekit_core::IterationRecord)
//! per step. Returning [`Action::StopEarly`] ends the solve with
//! [`Status::StoppedByObserver`](solvekit_core::Status::StoppedByObserver).

mod action;
mod bracket;
mod bracketing;
mod error;
mod evaluate;

pub use action::Action;
pub use bracket::BracketError;
pub use error::Error;

pub mod bisection;
pub mod guess;
pub mod newton;
pub mod newton_system;
pub mod regula_falsi;
pub mod secant;
