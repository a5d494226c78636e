//! Solvers for linear systems `A·x = b`.
//!
//! # Solvers
//!
//! Direct:
//! - [`gaussian`] — Gaussian elimination with partial pivoting, any
//!   nonsingular square system
//! - [`thomas`] — the Thomas algorithm for tridiagonal systems in `O(n)`
//!
//! Iterative (converge for strictly diagonally dominant matrices):
//! - [`jacobi`] — each sweep uses only the previous iterate
//! - [`gauss_seidel`] — each sweep reuses entries updated earlier in the
//!   same sweep, usually converging in fewer iterations than Jacobi
//!
//! Direct solvers report [`Status::Converged`] with the infinity norm of the
//! residual `A·x - b` as the error. Iterative solvers use the infinity norm
//! of the change between successive iterates and emit one
//! [`IterationRecord`](solvekit_core::IterationRecord) per sweep.
//!
//! [`Status::Converged`]: solvekit_core::Status::Converged

mod action;
mod error;
mod iterative;
mod system;

pub use action::Action;
pub use error::Error;
pub use system::{LinearSystem, TridiagonalSystem};

pub mod gauss_seidel;
pub mod gaussian;
pub mod jacobi;
pub mod thomas;
