//! Numerical solvers for the Solvekit framework.
//!
//! - [`equation`] — root finders for scalar equations and nonlinear systems
//! - [`linear`] — direct and iterative solvers for linear systems
//! - [`bvp`] — finite-difference solver for two-point boundary value problems
//! - [`spline`] — natural cubic spline interpolation
//!
//! Every solver is a synchronous function call that takes the problem data
//! and a [`Config`](solvekit_core::Config) and returns a
//! [`Solution`](solvekit_core::Solution). Iterative solvers also accept an
//! [`Observer`](solvekit_core::Observer) that sees one
//! [`IterationRecord`](solvekit_core::IterationRecord) per step.

pub mod bvp;
pub mod equation;
pub mod linear;
pub mod spline;

mod finish;
