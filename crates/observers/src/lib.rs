//! Reusable observers for the Solvekit solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across every iterative solver in Solvekit.
//!
//! # Observers
//!
//! - [`Recorder`] — collects every [`IterationRecord`] for later tabulation
//! - [`LogObserver`] — forwards each record to the `log` facade at trace level
//! - [`ErrorBelow`] — stops a solver once its error falls below a threshold
//!
//! # Modules
//!
//! - [`traits`] — capability traits for cross-solver observers
//!   ([`HasError`], [`CanStopEarly`])
//!
//! [`Observer`]: solvekit_core::Observer
//! [`IterationRecord`]: solvekit_core::IterationRecord
//! [`HasError`]: traits::HasError
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod error_below;
mod log_observer;
mod recorder;

pub use error_below::ErrorBelow;
pub use log_observer::LogObserver;
pub use recorder::Recorder;
