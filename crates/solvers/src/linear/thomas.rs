//! The Thomas algorithm for tridiagonal systems.
//!
//! A specialization of Gaussian elimination without pivoting that touches
//! only the three bands, so it runs in `O(n)` instead of `O(n³)`.
//!
//! The forward sweep computes modified coefficients
//!
//! ```text
//! c*[0] = c[0] / b[0]        d*[0] = d[0] / b[0]
//! denom = b[i] - a[i-1]·c*[i-1]
//! c*[i] = c[i] / denom       d*[i] = (d[i] - a[i-1]·d*[i-1]) / denom
//! ```
//!
//! and back substitution recovers `x[n-1] = d*[n-1]`,
//! `x[i] = d*[i] - c*[i]·x[i+1]`. A zero `denom` (or `b[0]`) fails with
//! [`Error::ZeroPivot`]. Without pivoting the algorithm is stable for
//! diagonally dominant systems.
//!
//! The returned [`Solution`] counts `2n - 1` steps: `n` forward rows and
//! `n - 1` back substitutions.

use nalgebra::DVector;
use solvekit_core::{Solution, Status};

use crate::finish::finish;

use super::{Error, TridiagonalSystem};

const METHOD: &str = "thomas";

/// Solves a tridiagonal system with the Thomas algorithm.
///
/// # Errors
///
/// Returns [`Error::ZeroPivot`] with the offending row if a forward-sweep
/// pivot is exactly zero.
pub fn solve(system: &TridiagonalSystem) -> Result<Solution<DVector<f64>>, Error> {
    let n = system.size();
    let (a, b, c, d) = (system.sub(), system.main(), system.sup(), system.rhs());

    let mut c_star = vec![0.0; n - 1];
    let mut d_star = vec![0.0; n];

    if b[0] == 0.0 {
        return Err(Error::ZeroPivot { row: 0 });
    }
    if n > 1 {
        c_star[0] = c[0] / b[0];
    }
    d_star[0] = d[0] / b[0];

    for i in 1..n {
        let denom = b[i] - a[i - 1] * c_star[i - 1];
        if denom == 0.0 {
            return Err(Error::ZeroPivot { row: i });
        }
        if i < n - 1 {
            c_star[i] = c[i] / denom;
        }
        d_star[i] = (d[i] - a[i - 1] * d_star[i - 1]) / denom;
    }

    let mut x = DVector::zeros(n);
    x[n - 1] = d_star[n - 1];
    for i in (0..n - 1).rev() {
        x[i] = d_star[i] - c_star[i] * x[i + 1];
    }

    let error = system.residual(&x)?.amax();

    Ok(finish(
        METHOD,
        Solution {
            status: Status::Converged,
            x,
            error,
            iters: 2 * n - 1,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use nalgebra::dvector;

    use crate::linear::gaussian;

    fn poisson(n: usize) -> TridiagonalSystem {
        TridiagonalSystem::new(
            DVector::from_element(n - 1, -1.0),
            DVector::from_element(n, 2.0),
            DVector::from_element(n - 1, -1.0),
            DVector::from_element(n, 1.0),
        )
        .expect("valid system")
    }

    #[test]
    fn solves_discrete_poisson_problem() {
        // -u'' = 1 on five interior points: u_i = i(6 - i)/2.
        let solution = solve(&poisson(5)).expect("nonsingular");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(
            solution.x,
            dvector![2.5, 4.0, 4.5, 4.0, 2.5],
            epsilon = 1e-12
        );
        assert!(solution.error < 1e-12);
    }

    #[test]
    fn matches_dense_elimination() {
        let system = TridiagonalSystem::new(
            dvector![1.0, 3.0, 2.0, 5.0],
            dvector![12.0, 15.0, 11.0, 18.0, 14.0],
            dvector![4.0, 2.0, 6.0, 1.0],
            dvector![20.0, 35.0, 14.0, 42.0, 27.0],
        )
        .expect("valid system");

        let banded = solve(&system).expect("nonsingular");
        let dense = gaussian::solve(&system.to_dense()).expect("nonsingular");

        assert_relative_eq!(banded.x, dense.x, epsilon = 1e-12);
    }

    #[test]
    fn counts_both_sweeps() {
        assert_eq!(solve(&poisson(1)).expect("nonsingular").iters, 1);
        assert_eq!(solve(&poisson(8)).expect("nonsingular").iters, 15);
    }

    #[test]
    fn zero_leading_pivot_is_rejected() {
        let system = TridiagonalSystem::new(
            dvector![1.0],
            dvector![0.0, 1.0],
            dvector![1.0],
            dvector![1.0, 1.0],
        )
        .expect("valid system");
        assert_eq!(solve(&system), Err(Error::ZeroPivot { row: 0 }));
    }

    #[test]
    fn zero_interior_pivot_is_rejected() {
        // denom = 1 - 1·(1/1) = 0 in row 1.
        let system = TridiagonalSystem::new(
            dvector![1.0],
            dvector![1.0, 1.0],
            dvector![1.0],
            dvector![1.0, 2.0],
        )
        .expect("valid system");
        assert_eq!(solve(&system), Err(Error::ZeroPivot { row: 1 }));
    }
}
