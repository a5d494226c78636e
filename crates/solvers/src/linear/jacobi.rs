//! Jacobi iteration.
//!
//! Splits `A = D + R` into its diagonal and the remainder and computes every
//! entry of the next iterate from the previous one only:
//!
//! ```text
//! x_new[i] = (b[i] - Σ_{j≠i} A[i, j]·x[j]) / A[i, i]
//! ```
//!
//! The error metric is `‖x_new - x‖∞`. Convergence is guaranteed for strictly
//! diagonally dominant matrices (see
//! [`LinearSystem::is_diagonally_dominant`]); other matrices may diverge and
//! end with [`Status::MaxIters`](solvekit_core::Status::MaxIters).

use nalgebra::{DMatrix, DVector};
use solvekit_core::{Config, IterationRecord, Observer, Solution};

use super::{Action, Error, LinearSystem, iterative};

/// Solves `A·x = b` by Jacobi iteration.
///
/// Iteration starts from [`LinearSystem::initial_guess`]; the caller's
/// vectors are never modified. The observer receives one record per sweep.
///
/// # Errors
///
/// Returns [`Error::ZeroPivot`] if any diagonal entry is zero.
pub fn solve<Obs>(
    system: &LinearSystem,
    config: &Config,
    observer: Obs,
) -> Result<Solution<DVector<f64>>, Error>
where
    Obs: Observer<IterationRecord<DVector<f64>>, Action>,
{
    iterative::solve("jacobi", sweep, system, config, observer)
}

/// Solves `A·x = b` by Jacobi iteration without observer support.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved(
    system: &LinearSystem,
    config: &Config,
) -> Result<Solution<DVector<f64>>, Error> {
    solve(system, config, ())
}

fn sweep(matrix: &DMatrix<f64>, rhs: &DVector<f64>, x: &DVector<f64>) -> DVector<f64> {
    DVector::from_fn(x.len(), |i, _| {
        let off_diagonal: f64 = (0..x.len())
            .filter(|&j| j != i)
            .map(|j| matrix[(i, j)] * x[j])
            .sum();
        (rhs[i] - off_diagonal) / matrix[(i, i)]
    })
}
