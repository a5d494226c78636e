//! Core traits and types for the Solvekit solvers.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`ScalarFunction`], [`Differentiable`], [`VectorFunction`]: the function
//!   provider capability that every solver consumes
//! - [`Config`]: the `(tolerance, max_iters)` convergence contract
//! - [`Observer`]: receives one [`IterationRecord`] per solver step and
//!   optionally returns a control action
//! - [`Solution`] and [`Status`]: what every solver call returns

mod config;
mod function;
mod observer;
mod record;
mod solution;

pub use config::{Config, ConfigError, DEFAULT_MAX_ITERS, LINEAR_TOLERANCE, ROOT_TOLERANCE};
pub use function::{
    CentralDifference, Differentiable, ScalarFunction, System, VectorFunction, WithDerivative,
};
pub use observer::Observer;
pub use record::IterationRecord;
pub use solution::{Solution, Status};
